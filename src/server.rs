//! HTTP server initialization and runtime setup.
//!
//! Handles domain rules loading, tracing setup, and the Axum server lifecycle.

use crate::config::Config;
use crate::domain::entities::RedirectTable;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// Uses `RUST_LOG` directives when they parse, `info` otherwise, and emits
/// JSON lines when `LOG_FORMAT=json`.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.is_json_logging() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Loads the domain rules file and logs what was loaded.
///
/// # Errors
///
/// Returns an error if the file is missing, malformed, or has no default target.
pub fn load_redirect_table(config: &Config) -> Result<RedirectTable> {
    let path = &config.redirect_config_path;
    let table = RedirectTable::load(path)
        .with_context(|| format!("Failed to load domain rules from {}", path.display()))?;

    tracing::info!(
        "Loaded {} domain rule(s) from {} (mode: {})",
        table.domain_count(),
        path.display(),
        table.mode().as_str()
    );

    for key in table.shadowed_keys() {
        tracing::warn!(
            "Domain key '{}' starts with 'www.' and only matches 'www.{}' requests",
            key,
            key
        );
    }

    Ok(table)
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Domain rules table (fatal on failure, before binding)
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Domain rules can't be loaded
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let table = load_redirect_table(&config)?;

    let state = AppState::new(Arc::new(table));
    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address {}", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server exited with error")?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
