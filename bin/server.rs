// Appliance Energy - Web Server
// HTML form + CSV export over an in-memory record store

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use appliance_energy::config::{ServerConfig, DEFAULT_LOG_LEVEL};
use appliance_energy::web::{self, AppState};
use appliance_energy::{logging, RecordStore, CURRENCY, TARIFF_PER_KWH};

#[derive(Parser, Debug)]
#[command(name = "energy-server")]
#[command(about = "Web form for tracking household appliance consumption")]
struct Args {
    /// Address to listen on
    #[arg(long)]
    bind: Option<SocketAddr>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::default().with_log_level(args.log_level);
    if let Some(bind) = args.bind {
        config = config.with_bind_addr(bind);
    }

    logging::init_tracing(&config.log_level);

    println!("🌐 Appliance Energy - Web Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("✓ Tariff: {} {}/kWh", TARIFF_PER_KWH, CURRENCY);

    // The store lives as long as the process; nothing is persisted
    let state = AppState::new(RecordStore::new());
    let app = web::router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;

    println!("\n🚀 Server running on {}", config.public_url());
    println!("   API: {}/api/summary", config.public_url());
    println!("\n   Press Ctrl+C to stop\n");
    info!(addr = %config.bind_addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
    }
}
