#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::error::ServeError;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "tix-admin failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServeError> {
    let config = AppConfig::from_env()?;
    match &config.api_upstream {
        Some(upstream) => tracing::info!(%upstream, "forwarding /api/v1 to upstream"),
        None => tracing::warn!("TIX_API_UPSTREAM not set; /api/v1 must be served by a reverse proxy"),
    }

    let app = routes::app(&config)?;
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })?;

    tracing::info!(%addr, "tix-admin listening");
    axum::serve(listener, app).await.map_err(ServeError::Serve)
}
