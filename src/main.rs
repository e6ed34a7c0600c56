mod config;
mod error;
mod routes;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::config::HostConfig;
use crate::error::HostError;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("portfolio=info,tower_http=info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "portfolio host stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), HostError> {
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let config = HostConfig::from_env()?;
    let app = routes::app(&config)?;
    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .map_err(HostError::Bind)?;

    tracing::info!(port = config.port, static_dir = %config.static_dir.display(), "portfolio listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}
