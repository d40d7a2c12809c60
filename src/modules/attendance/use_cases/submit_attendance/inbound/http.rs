use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::modules::attendance::core::record::AttendanceStatus;
use crate::modules::attendance::core::view::AttendanceView;
use crate::modules::attendance::use_cases::submit_attendance::command::SubmitAttendance;
use crate::modules::attendance::use_cases::submit_attendance::handler::ApplicationError;
use crate::shared::infrastructure::session_store::SessionId;
use crate::shell::http::session_error_status;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SubmitAttendanceBody {
    /// Defaults to today, like the form's date picker.
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub employee_id: String,
    #[serde(default)]
    pub employee_name: String,
    pub status: AttendanceStatus,
}

#[derive(Serialize)]
pub struct SubmitAttendanceResponse {
    pub message: &'static str,
    pub view: AttendanceView,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(session_id): Path<SessionId>,
    body: Result<Json<SubmitAttendanceBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = SubmitAttendance {
        date: body.date.unwrap_or_else(|| Local::now().date_naive()),
        employee_id: body.employee_id,
        employee_name: body.employee_name,
        status: body.status,
    };

    match state.submit_handler.handle(session_id, command).await {
        Ok(outcome) => (
            StatusCode::CREATED,
            Json(SubmitAttendanceResponse {
                message: outcome.message,
                view: outcome.view,
            }),
        )
            .into_response(),
        Err(ApplicationError::Session(e)) => session_error_status(&e).into_response(),
    }
}
