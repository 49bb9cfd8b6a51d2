//! Proxy service binary.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use vc_core::config::ProxyConfig;
use vc_server::{router, AppState, CalendarificClient, HolidayStore, MemoryStore, SqliteStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ProxyConfig::from_env();
    tracing::info!(?config, "starting holiday proxy");

    let upstream = Arc::new(CalendarificClient::from_config(&config)?);
    let store: Arc<dyn HolidayStore> = match &config.database_url {
        Some(url) => Arc::new(SqliteStore::connect(url).await?),
        None => Arc::new(MemoryStore::new()),
    };

    let state = AppState {
        upstream,
        store,
        supported_country: config.supported_country.clone(),
    };

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}
