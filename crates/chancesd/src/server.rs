//! HTTP server for chancesd.

use crate::config::ServerConfig;
use crate::{docs, routes};
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers. Read-only after startup; the
/// engine itself holds no state at all.
pub struct AppState {
    pub config: ServerConfig,
    pub started: Instant,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            started: Instant::now(),
        }
    }
}

/// Build the full router. Separated from [`run`] so tests can drive it
/// through `tower::ServiceExt` without binding a socket.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::probability_routes())
        .merge(routes::health_routes())
        .merge(docs::docs_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Run the HTTP server until the process is stopped.
pub async fn run(state: AppState) -> Result<()> {
    let addr = format!("127.0.0.1:{}", state.config.port);
    let app = router(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("  Listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
