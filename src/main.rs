//! # Taskboard Server
//!
//! Binary entrypoint: resolve configuration, connect the storage
//! engine, and serve the HTTP API.

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use taskboard::config::DatabaseSettings;
use taskboard::web::AppState;
use taskboard::{database, logging, web};

#[derive(Parser)]
#[command(name = "taskboard")]
#[command(about = "Minimal task-tracking REST service")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0")]
    bind: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 5000)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env for local development before anything reads the
    // environment; absence is not an error.
    dotenv::dotenv().ok();
    logging::init();

    let cli = Cli::parse();

    let settings = DatabaseSettings::from_env();
    let url = settings.connection_url();

    let repository = database::connect(&url)
        .await
        .context("failed to connect storage engine")?;

    let app = web::router(AppState::new(repository));

    let listener = TcpListener::bind((cli.bind.as_str(), cli.port))
        .await
        .with_context(|| format!("failed to bind {}:{}", cli.bind, cli.port))?;
    info!(bind = %cli.bind, port = cli.port, "taskboard listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to install ctrl-c handler");
        return;
    }
    info!("shutdown signal received");
}
