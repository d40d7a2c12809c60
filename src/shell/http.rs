use axum::{
    Extension, Router,
    http::StatusCode,
    routing::{delete, get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::attendance::use_cases::export_attendance::inbound::http as export_http;
use crate::modules::attendance::use_cases::list_attendance::inbound::http as list_http;
use crate::modules::attendance::use_cases::session_lifecycle::inbound::http as session_http;
use crate::modules::attendance::use_cases::submit_attendance::inbound::http as submit_http;
use crate::modules::product_showcase::use_cases::category_pivot::inbound::http as pivot_http;
use crate::modules::product_showcase::use_cases::column_selection::inbound::http as columns_http;
use crate::modules::product_showcase::use_cases::edit_grid::inbound::http as editor_http;
use crate::modules::product_showcase::use_cases::formatted_columns::inbound::http as formatted_http;
use crate::modules::product_showcase::use_cases::key_metrics::inbound::http as metrics_http;
use crate::modules::product_showcase::use_cases::plain_table::inbound::http as table_http;
use crate::modules::product_showcase::use_cases::styled_view::inbound::http as styled_http;
use crate::shared::infrastructure::session_store::SessionStoreError;
use crate::shell::graphql::{self, graphiql};
use crate::shell::state::AppState;

pub fn session_error_status(error: &SessionStoreError) -> StatusCode {
    match error {
        SessionStoreError::UnknownSession(_) => StatusCode::NOT_FOUND,
        SessionStoreError::Backend(e) => {
            tracing::error!(error = %e, "session store failure");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

pub fn router(state: AppState) -> Router {
    let schema = graphql::schema(state.clone());

    Router::new()
        .route("/sessions", post(session_http::handle_open))
        .route("/sessions/{session_id}", delete(session_http::handle_close))
        .route(
            "/sessions/{session_id}/attendance",
            get(list_http::handle).post(submit_http::handle),
        )
        .route(
            "/sessions/{session_id}/attendance/export",
            get(export_http::handle),
        )
        .route("/showcase/products", get(table_http::handle_interactive))
        .route("/showcase/static", get(table_http::handle_static))
        .route("/showcase/formatted", get(formatted_http::handle))
        .route("/showcase/metrics", get(metrics_http::handle))
        .route(
            "/showcase/editor",
            get(editor_http::handle_editor).post(editor_http::handle_edits),
        )
        .route("/showcase/styled", get(styled_http::handle))
        .route("/showcase/columns", get(columns_http::handle))
        .route("/showcase/pivot", get(pivot_http::handle))
        .route("/gql", get(graphiql).post(graphql::graphql))
        .with_state(state)
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
