//! ChancesAre daemon - rare event probability API.
//!
//! Serves the probability endpoints and the documentation page.

use anyhow::Result;
use chancesd::config::ServerConfig;
use chancesd::server::{self, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    info!("🧪 ChancesAre API v{} starting", env!("CARGO_PKG_VERSION"));

    let config = ServerConfig::load();
    server::run(AppState::new(config)).await
}
