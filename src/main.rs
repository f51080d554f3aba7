use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use car_rental_api::config::{AppConfig, StorageBackend};
use car_rental_api::{app, AppState};

#[derive(Parser)]
#[command(name = "car-rental-api")]
#[command(about = "Car rental booking backend")]
#[command(version)]
struct Args {
    #[arg(long, help = "Port to listen on (overrides RENTAL_API_PORT)")]
    port: Option<u16>,

    #[arg(long, help = "Storage backend: postgres or memory (overrides STORAGE_BACKEND)")]
    storage: Option<StorageBackend>,

    #[arg(long, help = "JSON fixture used to seed the memory backend")]
    fixture: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let mut config = AppConfig::from_env();
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(storage) = args.storage {
        config.storage.backend = storage;
    }
    if let Some(fixture) = args.fixture {
        config.storage.fixture = Some(fixture);
    }

    info!(
        "Starting Car Rental API in {:?} mode with {:?} storage",
        config.environment, config.storage.backend
    );

    let state = AppState::from_config(&config).await.context("failed to initialize storage")?;
    let router = app(state, &config.security);

    let bind_addr = config.bind_address();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    info!("Listening on http://{}", bind_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
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
}
