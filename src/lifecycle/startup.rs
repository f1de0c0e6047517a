//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration
//! - Initialize tracing and the optional metrics exporter
//! - Seed the catalog and bind the listener
//!
//! Any startup error is fatal.

use tokio::net::TcpListener;

use crate::config::loader::CONFIG_PATH_ENV;
use crate::config::{load_from_env, CatalogConfig};
use crate::http::HttpServer;
use crate::lifecycle::Shutdown;
use crate::observability::{logging, metrics};

/// Load configuration, then serve until shutdown.
pub async fn start() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_from_env()?;
    logging::init_tracing(&config.observability.log_level);

    tracing::info!("cheeseria v{} starting", env!("CARGO_PKG_VERSION"));
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        tracing::info!(path = %path, "Loaded configuration file");
    }

    let shutdown = Shutdown::new();
    serve(config, &shutdown).await
}

/// Serve the catalog with an already loaded configuration.
pub async fn serve(
    config: CatalogConfig,
    shutdown: &Shutdown,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(
        bind_address = %config.listener.bind_address(),
        images_dir = %config.assets.images_dir,
        strict_validation = config.security.strict_validation,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(config.listener.bind_address()).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
