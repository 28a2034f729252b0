mod app;
mod config;
mod error;
mod health;
mod predict;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use salai_core::loading::create_road_network;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::state::AppState;

/// Travel-time estimation server over a city road network
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the TOML configuration file
    #[arg(long, default_value = "salai.toml")]
    config: PathBuf,
    /// Override the listen address from the config
    #[arg(long)]
    listen: Option<SocketAddr>,
    /// Override the OSM extract path from the config
    #[arg(long)]
    osm_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut config = match ServerConfig::load(&args.config) {
        Ok(config) => config,
        Err(err) => {
            error!("Failed to load config {}: {err}", args.config.display());
            std::process::exit(1);
        }
    };
    if let Some(listen) = args.listen {
        config.server.listen = listen;
    }
    if let Some(osm_path) = args.osm_path {
        config.network.osm_path = osm_path;
    }

    // The network is built once and shared read-only for the process
    // lifetime; a failed build aborts startup
    let network = match create_road_network(&config.network) {
        Ok(network) => network,
        Err(err) => {
            error!("Failed to build road network: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = std::fs::create_dir_all(&config.render.static_dir) {
        error!(
            "Failed to create static directory {}: {err}",
            config.render.static_dir.display()
        );
        std::process::exit(1);
    }

    let listen = config.server.listen;
    let state = Arc::new(AppState { network, config });
    let router = app::build_router(state);

    let listener = match tokio::net::TcpListener::bind(listen).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind {listen}: {err}");
            std::process::exit(1);
        }
    };

    info!("Listening on {listen}");
    if let Err(err) = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {err}");
        std::process::exit(1);
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        _ = terminate => {}
    }

    info!("Shutdown signal received");
}
