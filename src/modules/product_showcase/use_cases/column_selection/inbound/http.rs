use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::product_showcase::use_cases::column_selection::handler::{
    DEFAULT_SELECTION, parse_selection, select_columns,
};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ColumnSelectionParams {
    /// Comma separated column names.
    pub select: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ColumnSelectionParams>,
) -> impl IntoResponse {
    let columns = match params.select.as_deref() {
        None => DEFAULT_SELECTION.to_vec(),
        Some("") => Vec::new(),
        Some(select) => {
            let names: Vec<&str> = select.split(',').collect();
            match parse_selection(&names) {
                Ok(columns) => columns,
                Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
            }
        }
    };
    Json(select_columns(&state.catalog, &columns)).into_response()
}
