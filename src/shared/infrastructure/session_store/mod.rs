// Session-scoped storage port.
//
// Purpose
// - Hold one ordered log per interactive session, nothing shared across sessions.
//
// Responsibilities
// - Issue session ids, discard a session's log when it is closed.
// - Append items in arrival order and hand back the full sequence.

pub mod in_memory;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionStoreError {
    #[error("unknown session: {0}")]
    UnknownSession(SessionId),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait SessionStore<Item>: Send + Sync
where
    Item: Clone + Send + Sync + 'static,
{
    async fn open(&self) -> Result<SessionId, SessionStoreError>;

    async fn close(&self, session_id: SessionId) -> Result<(), SessionStoreError>;

    /// Returns the session's log as it stands right after the append, read under the same lock.
    async fn append(&self, session_id: SessionId, item: Item)
    -> Result<Vec<Item>, SessionStoreError>;

    async fn list_all(&self, session_id: SessionId) -> Result<Vec<Item>, SessionStoreError>;
}
