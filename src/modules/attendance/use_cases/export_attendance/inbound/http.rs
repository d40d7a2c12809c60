use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::modules::attendance::core::view::NO_RECORDS_MESSAGE;
use crate::modules::attendance::use_cases::export_attendance::handler::ExportError;
use crate::shared::infrastructure::session_store::SessionId;
use crate::shell::http::session_error_status;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(session_id): Path<SessionId>,
) -> impl IntoResponse {
    match state.export_handler.handle(session_id).await {
        Ok(file) => (
            [
                (header::CONTENT_TYPE, file.mime_type.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", file.file_name),
                ),
            ],
            file.bytes,
        )
            .into_response(),
        Err(ExportError::NoRecords) => (StatusCode::CONFLICT, NO_RECORDS_MESSAGE).into_response(),
        Err(ExportError::Spreadsheet(e)) => {
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
        Err(ExportError::Session(e)) => session_error_status(&e).into_response(),
    }
}
