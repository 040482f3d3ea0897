//! Outreach HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::{future::IntoFuture, sync::Arc, time::Duration};

use infrastructure::{AppConfig, LITE_MODE_ENV, init_logging};
use presentation_http::{AppState, create_app};
use tokio::{net::TcpListener, signal, sync::Notify};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logging depends on the configured format, so load configuration first
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => {
            let mut config = AppConfig::default();
            config.apply_lite_mode(std::env::var(LITE_MODE_ENV).ok().as_deref());
            (config, Some(e))
        },
    };

    init_logging(config.server.log_format)?;

    if let Some(e) = load_error {
        warn!("Failed to load config, using defaults: {}", e);
    }

    info!("Outreach server v{} starting...", env!("CARGO_PKG_VERSION"));

    let state = AppState::from_config(&config)
        .map_err(|e| anyhow::anyhow!("Failed to initialize pipeline: {e}"))?;

    info!(
        host = %config.server.host,
        port = %config.server.port,
        mode = ?state.mode(),
        backend = ?config.inference.backend,
        base_url = %config.inference.resolved_base_url(),
        "Configuration loaded"
    );

    let app = create_app(state);

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);

    let shutdown_started = Arc::new(Notify::new());
    let server = axum::serve(listener, app).with_graceful_shutdown({
        let shutdown_started = Arc::clone(&shutdown_started);
        async move {
            shutdown_signal().await;
            shutdown_started.notify_one();
        }
    });

    tokio::select! {
        result = server.into_future() => result?,
        () = async {
            shutdown_started.notified().await;
            info!("Waiting up to {:?} for connections to close...", shutdown_timeout);
            tokio::time::sleep(shutdown_timeout).await;
        } => {
            warn!("Connections still open after {:?}, exiting", shutdown_timeout);
        }
    }

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM) and handle graceful shutdown
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
