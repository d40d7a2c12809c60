use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::shared::infrastructure::session_store::SessionId;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct SessionMutation;

#[Object]
impl SessionMutation {
    async fn open_session(&self, context: &Context<'_>) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();
        let session_id = state
            .sessions
            .open()
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(ID(session_id.to_string()))
    }

    async fn close_session(&self, context: &Context<'_>, session_id: ID) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        let session_id = session_id
            .parse::<SessionId>()
            .map_err(|_| async_graphql::Error::new("malformed session id"))?;
        state
            .sessions
            .close(session_id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(true)
    }
}
