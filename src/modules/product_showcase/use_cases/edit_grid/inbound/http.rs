use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};

use crate::modules::product_showcase::use_cases::edit_grid::handler::{
    RowEdit, editor_table, recomputed_table,
};
use crate::shell::state::AppState;

pub async fn handle_editor(State(state): State<AppState>) -> impl IntoResponse {
    match editor_table(&state.catalog) {
        Ok(table) => Json(table).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "editor table failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn handle_edits(
    State(state): State<AppState>,
    body: Result<Json<Vec<RowEdit>>, JsonRejection>,
) -> impl IntoResponse {
    let Json(edits) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match recomputed_table(&state.catalog, &edits) {
        Ok(table) => Json(table).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "recomputed table failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
