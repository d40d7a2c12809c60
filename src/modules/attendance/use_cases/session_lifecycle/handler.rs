// Opens and closes attendance sessions. A closed session's log is gone for good.

use crate::modules::attendance::core::record::AttendanceRecord;
use crate::shared::infrastructure::session_store::{SessionId, SessionStore, SessionStoreError};
use std::sync::Arc;

pub struct SessionLifecycleHandler<TStore>
where
    TStore: SessionStore<AttendanceRecord> + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> SessionLifecycleHandler<TStore>
where
    TStore: SessionStore<AttendanceRecord> + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn open(&self) -> Result<SessionId, SessionStoreError> {
        let session_id = self.store.open().await?;
        tracing::info!(%session_id, "session opened");
        Ok(session_id)
    }

    pub async fn close(&self, session_id: SessionId) -> Result<(), SessionStoreError> {
        self.store.close(session_id).await?;
        tracing::info!(%session_id, "session closed");
        Ok(())
    }
}

#[cfg(test)]
mod session_lifecycle_handler_tests {
    use super::*;
    use crate::shared::infrastructure::session_store::in_memory::InMemorySessionStore;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_issue_distinct_session_ids() {
        let handler = SessionLifecycleHandler::new(Arc::new(
            InMemorySessionStore::<AttendanceRecord>::new(),
        ));
        let first = handler.open().await.unwrap();
        let second = handler.open().await.unwrap();
        assert_ne!(first, second);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_close_an_open_session_once() {
        let store = Arc::new(InMemorySessionStore::<AttendanceRecord>::new());
        let handler = SessionLifecycleHandler::new(store.clone());
        let session_id = handler.open().await.unwrap();
        handler.close(session_id).await.expect("close failed");
        assert_eq!(
            handler.close(session_id).await,
            Err(SessionStoreError::UnknownSession(session_id))
        );
        assert!(store.list_all(session_id).await.is_err());
    }
}
