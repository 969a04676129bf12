//! HTTP server initialization and runtime setup.
//!
//! Builds the registry over the configured links file, wires signal handling
//! and runs the Axum server until shutdown.

use crate::application::services::LinkRegistry;
use crate::config::Config;
use crate::infrastructure::persistence::JsonFileStore;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the registry described by `config`. Nothing is read yet.
pub fn build_registry(config: &Config) -> Arc<LinkRegistry> {
    let store = Arc::new(JsonFileStore::new(&config.links_file));
    Arc::new(LinkRegistry::new(store).with_max_attempts(config.code_max_attempts))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Link registry over `LINKS_FILE` (loaded eagerly so a bad path fails startup)
/// - `SIGHUP` handler that reloads the links file (Unix)
/// - Axum HTTP server with graceful shutdown on Ctrl-C / `SIGTERM`
///
/// # Errors
///
/// Returns an error if:
/// - The links file cannot be read or created
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let registry = build_registry(&config);

    let count = registry
        .reload()
        .await
        .with_context(|| format!("Failed to open links file {}", config.links_file.display()))?;
    tracing::info!("Registry ready with {} links", count);

    #[cfg(unix)]
    tokio::spawn(reload_on_hangup(registry.clone()));

    let state = AppState::new(registry, &config.base_url);
    let app = app_router(state, &config.static_dir);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Reloads the registry from disk on every `SIGHUP`, e.g. after a hand edit.
#[cfg(unix)]
async fn reload_on_hangup(registry: Arc<LinkRegistry>) {
    use tokio::signal::unix::{SignalKind, signal};

    let mut hangup = match signal(SignalKind::hangup()) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!("Failed to install SIGHUP handler: {}", e);
            return;
        }
    };

    while hangup.recv().await.is_some() {
        match registry.reload().await {
            Ok(count) => tracing::info!("SIGHUP: reloaded {} links", count),
            Err(e) => tracing::error!("SIGHUP: reload failed: {}", e),
        }
    }
}

/// Resolves on Ctrl-C or, on Unix, `SIGTERM`.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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
