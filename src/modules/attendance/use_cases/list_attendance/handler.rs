use crate::modules::attendance::core::record::AttendanceRecord;
use crate::modules::attendance::core::view::AttendanceView;
use crate::shared::infrastructure::session_store::{SessionId, SessionStore, SessionStoreError};
use std::sync::Arc;

pub struct ListAttendanceHandler<TStore>
where
    TStore: SessionStore<AttendanceRecord> + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ListAttendanceHandler<TStore>
where
    TStore: SessionStore<AttendanceRecord> + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, session_id: SessionId) -> Result<AttendanceView, SessionStoreError> {
        let records = self.store.list_all(session_id).await?;
        Ok(AttendanceView::render(session_id, records))
    }
}
