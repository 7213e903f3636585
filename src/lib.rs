pub mod api;
pub mod config;
pub mod export;
pub mod i18n;
pub mod models;
pub mod self_assessment;
pub mod triage;

use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, ServerConfig};

/// Failures that stop the service before or while serving.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to listen for shutdown signal: {0}")]
    Signal(#[source] std::io::Error),
}

/// Load configuration, start the server and serve until Ctrl-C.
pub async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter(&config.log_level))),
        )
        .init();

    tracing::info!(
        addr = %config.bind_addr(),
        environment = %config.environment,
        default_language = %config.default_language,
        "{} starting v{}",
        config::APP_NAME,
        config::APP_VERSION
    );

    let addr = config.bind_addr();
    let mut server = api::start_server(config)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;

    let signal = tokio::signal::ctrl_c().await;
    server.shutdown();
    server.stopped().await;
    signal.map_err(StartupError::Signal)
}
