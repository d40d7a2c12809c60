use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::modules::product_showcase::use_cases::styled_view::handler::styled_table;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match styled_table(&state.catalog) {
        Ok(table) => Json(table).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "styled table failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
