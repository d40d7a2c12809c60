use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::shared::infrastructure::session_store::SessionId;
use crate::shell::http::session_error_status;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(session_id): Path<SessionId>,
) -> impl IntoResponse {
    match state.list_handler.handle(session_id).await {
        Ok(view) => Json(view).into_response(),
        Err(e) => session_error_status(&e).into_response(),
    }
}
