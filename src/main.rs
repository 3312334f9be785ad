use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use gto_coach::{
    config::{get_config, init_config},
    routes,
    storage::FileStore,
    AppState,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    init_config()?;
    let config = get_config()?;

    let store = FileStore::open(&config.storage_path)?;
    info!("Using device store at {}", store.path().display());

    let app_state = AppState::new(config, Arc::new(store))?;
    info!(
        "Loaded {} quiz questions; analysis backend at {}",
        app_state.quiz_service.pool().len(),
        config.api_base_url
    );

    if !app_state.api_service.health_check().await {
        tracing::warn!("Analysis backend is not reachable; quiz and local features still work");
    }

    let app = routes::router(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(1024 * 1024));

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
