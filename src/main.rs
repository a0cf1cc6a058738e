//! Stockroom catalog service entrypoint.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use stockroom::adapters::sqlite::initialize_database;
use stockroom::api::{self, AppState};
use stockroom::domain::models::LoggingConfig;
use stockroom::ConfigLoader;

#[derive(Debug, Parser)]
#[command(name = "stockroom", about = "Product catalog service with cached reporting")]
struct Args {
    /// Path to a YAML config file (default: stockroom.yaml plus
    /// STOCKROOM_* environment variables)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the listen port
    #[arg(long)]
    port: Option<u16>,
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };
    if let Some(port) = args.port {
        config.server.port = port;
    }

    init_tracing(&config.logging);
    info!("starting stockroom catalog service");

    let pool = initialize_database(&config.database)
        .await
        .context("Failed to initialize database")?;
    info!(path = %config.database.path, "database ready");

    let state = AppState::new(pool, &config);
    let app = api::router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(%addr, "listening");

    axum::serve(listener, app).await?;
    Ok(())
}
