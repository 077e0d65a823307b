//! Jazzkeys API Server
//!
//! Serves chords, progressions, lessons and favorites over HTTP/JSON.
//!
//! # Configuration
//!
//! Environment variables:
//! - `DATABASE_URL`: SQLite connection URL (default: sqlite:~/.local/share/jazzkeys/jazzkeys.db)
//! - `PORT`: Port to listen on (default: 8000)
//! - `JAZZKEYS_CONFIG`: Path to config file (default: ~/.config/jazzkeys/config.yaml)
//!
//! # Config File Format
//!
//! ```yaml
//! database_url: "sqlite:/var/lib/jazzkeys/jazzkeys.db"
//! port: 8000
//! ```

use jazzkeys::api::{build_app, AppState};
use jazzkeys::config::Config;
use jazzkeys::db::init_db;
use std::net::SocketAddr;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jazzkeys=info,jazzkeys_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load(None)?;

    // Keep serving without a store so /test can report the failure
    let store = match init_db(&config.database_url).await {
        Ok(store) => Some(store),
        Err(e) => {
            tracing::error!("Failed to open database {}: {}", config.database_url, e);
            None
        }
    };

    let state = AppState::new(store.clone(), config.database_url_from_env);
    let app = build_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(store) = store {
        store.close().await;
    }
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
