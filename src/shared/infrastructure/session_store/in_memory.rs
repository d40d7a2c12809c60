use crate::shared::infrastructure::session_store::{SessionId, SessionStore, SessionStoreError};
use std::collections::HashMap;
use tokio::sync::RwLock;

pub struct InMemorySessionStore<Item: Clone + Send + Sync + 'static> {
    sessions: RwLock<HashMap<SessionId, Vec<Item>>>,
    is_offline: bool,
}

impl<Item: Clone + Send + Sync + 'static> Default for InMemorySessionStore<Item> {
    fn default() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            is_offline: false,
        }
    }
}

impl<Item: Clone + Send + Sync + 'static> InMemorySessionStore<Item> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), SessionStoreError> {
        if self.is_offline {
            return Err(SessionStoreError::Backend("Session store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl<Item> SessionStore<Item> for InMemorySessionStore<Item>
where
    Item: Clone + Send + Sync + 'static,
{
    async fn open(&self) -> Result<SessionId, SessionStoreError> {
        self.ensure_online()?;
        let session_id = SessionId::new();
        self.sessions.write().await.insert(session_id, Vec::new());
        Ok(session_id)
    }

    async fn close(&self, session_id: SessionId) -> Result<(), SessionStoreError> {
        self.ensure_online()?;
        match self.sessions.write().await.remove(&session_id) {
            Some(_) => Ok(()),
            None => Err(SessionStoreError::UnknownSession(session_id)),
        }
    }

    async fn append(
        &self,
        session_id: SessionId,
        item: Item,
    ) -> Result<Vec<Item>, SessionStoreError> {
        self.ensure_online()?;
        let mut guard = self.sessions.write().await;
        let log = guard
            .get_mut(&session_id)
            .ok_or(SessionStoreError::UnknownSession(session_id))?;
        log.push(item);
        Ok(log.clone())
    }

    async fn list_all(&self, session_id: SessionId) -> Result<Vec<Item>, SessionStoreError> {
        self.ensure_online()?;
        self.sessions
            .read()
            .await
            .get(&session_id)
            .cloned()
            .ok_or(SessionStoreError::UnknownSession(session_id))
    }
}
