use attendance_desk::modules::product_showcase::core::dataset::ProductCatalog;
use attendance_desk::shared::core::clock::SystemClock;
use attendance_desk::shell::config::Config;
use attendance_desk::shell::http::router;
use attendance_desk::shell::state::{AppState, AttendanceStore};
use chrono::Local;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;

    // In-memory deps; sessions live as long as the process
    let store = Arc::new(AttendanceStore::new());
    let catalog = ProductCatalog::generate(config.showcase_seed, Local::now().date_naive());
    let state = AppState::new(store, Arc::new(SystemClock), catalog);

    let app = router(state);

    tracing::info!("listening on http://{}", config.addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", config.addr);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
