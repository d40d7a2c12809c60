use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::modules::product_showcase::use_cases::key_metrics::handler::key_metrics;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match key_metrics(&state.catalog) {
        Ok(metrics) => Json(metrics).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "key metrics failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
