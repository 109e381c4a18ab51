//! Mars Photos - A caching gateway for the Mars rover photo API
//!
//! Fronts the rate-limited NASA API with TTL memoization of manifests and
//! photo pages.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mars_photos::api::{create_router, with_static_dir};
use mars_photos::upstream::NasaClient;
use mars_photos::{spawn_sweep_task, AppState, Config};

/// Main entry point for the photo gateway.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the upstream client and the caching service
/// 4. Start the optional expiry sweep task
/// 5. Create Axum router with all endpoints
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mars_photos=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Mars photo gateway");

    let config = Config::from_env();
    info!(
        "Configuration loaded: upstream={}, port={}, manifest_ttl={}ms, photos_ttl={}ms, photo_limit={}",
        config.nasa_api_url,
        config.server_port,
        config.manifest_ttl_ms,
        config.photos_ttl_ms,
        config.photo_limit
    );

    let client = NasaClient::from_config(&config).context("failed to build upstream client")?;
    let state = AppState::from_config(Arc::new(client), &config);
    info!("Caches initialized");

    let sweep_handle = if config.sweep_interval_secs > 0 {
        Some(spawn_sweep_task(
            state.service.clone(),
            config.sweep_interval_secs,
        ))
    } else {
        None
    };

    let mut app = create_router(state);
    if let Some(dir) = &config.static_dir {
        info!("Serving static files from {}", dir.display());
        app = with_static_dir(app, dir);
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(sweep_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the sweep task and allows graceful shutdown.
async fn shutdown_signal(sweep_handle: Option<JoinHandle<()>>) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                warn!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    if let Some(handle) = sweep_handle {
        handle.abort();
        warn!("Sweep task aborted");
    }
}
