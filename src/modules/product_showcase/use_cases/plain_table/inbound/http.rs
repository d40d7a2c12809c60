use axum::{Json, extract::State, response::IntoResponse};

use crate::modules::product_showcase::use_cases::plain_table::handler::{
    interactive_table, static_table,
};
use crate::shell::state::AppState;

pub async fn handle_interactive(State(state): State<AppState>) -> impl IntoResponse {
    Json(interactive_table(&state.catalog))
}

pub async fn handle_static(State(state): State<AppState>) -> impl IntoResponse {
    Json(static_table(&state.catalog))
}
