//! Shipping zone API server
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: logging filter (default: `shipping_zones=info,tower_http=debug`)
//! - `HOST`: bind address (default: `0.0.0.0`)
//! - `PORT`: bind port (default: `8080`)
//! - `SHIPPING_ZONES_PATH`: JSON or YAML zone file (default: built-in table)

use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shipping_zones::api::{AppState, router};
use shipping_zones::config::AppConfig;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shipping_zones=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(%error, "Configuration error");
            std::process::exit(1);
        }
    };

    let zones = match config.zone_table() {
        Ok(zones) => zones,
        Err(error) => {
            tracing::error!(%error, "Failed to load zone table");
            std::process::exit(1);
        }
    };

    tracing::info!(
        zones = zones.len(),
        active = zones.list_active().len(),
        "zone table ready"
    );

    let app = router(AppState::new(zones));

    let address = config.socket_addr();
    let listener = match TcpListener::bind(address).await {
        Ok(listener) => listener,
        Err(error) => {
            tracing::error!(%error, %address, "Failed to bind");
            std::process::exit(1);
        }
    };

    tracing::info!(%address, "Listening");

    if let Err(error) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(%error, "Server error");
        std::process::exit(1);
    }
}

async fn shutdown_signal() {
    let ctrl_c = wait_for_signal("Ctrl+C", signal::ctrl_c());

    #[cfg(unix)]
    let terminate = wait_for_signal("SIGTERM", async {
        let mut stream = signal::unix::signal(signal::unix::SignalKind::terminate())?;
        stream.recv().await;
        Ok::<(), std::io::Error>(())
    });

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, shutting down");
        }
    }
}

/// Resolves when `received` does; never resolves if the handler failed to install
async fn wait_for_signal<F>(name: &str, received: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(error) = received.await {
        tracing::warn!(%error, signal = name, "Failed to install signal handler");
        std::future::pending::<()>().await;
    }
}
