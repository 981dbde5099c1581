pub mod api; // HTTP surface
pub mod app_state;
pub mod chat; // Scripted assistant
pub mod config;
pub mod history;
pub mod intake; // Form parsing + upload checks
pub mod intelligence; // Prediction engine + knowledge base
pub mod models;
pub mod report;

use std::sync::Arc;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Knowledge(#[from] intelligence::KnowledgeError),
    #[error(transparent)]
    Server(#[from] api::ServerError),
    #[error("Failed to listen for shutdown signal: {0}")]
    Signal(std::io::Error),
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}

/// Start the HTTP server and run until Ctrl-C.
pub async fn run() -> Result<(), RunError> {
    init_tracing();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let config = config::ServerConfig::from_env()?;
    let addr = config.addr;
    let state = Arc::new(app_state::AppState::new(config)?);

    let mut server = api::start_server(state, addr).await?;

    tokio::signal::ctrl_c().await.map_err(RunError::Signal)?;
    server.shutdown();
    server.wait().await;
    Ok(())
}
