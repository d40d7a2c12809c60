use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::shared::infrastructure::session_store::SessionId;
use crate::shell::http::session_error_status;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct OpenSessionResponse {
    pub session_id: SessionId,
}

pub async fn handle_open(State(state): State<AppState>) -> impl IntoResponse {
    match state.sessions.open().await {
        Ok(session_id) => (
            StatusCode::CREATED,
            Json(OpenSessionResponse { session_id }),
        )
            .into_response(),
        Err(e) => session_error_status(&e).into_response(),
    }
}

pub async fn handle_close(
    State(state): State<AppState>,
    Path(session_id): Path<SessionId>,
) -> impl IntoResponse {
    match state.sessions.close(session_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => session_error_status(&e).into_response(),
    }
}
