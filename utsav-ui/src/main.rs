//! utsav-ui - Festival archive front-end service
//!
//! Public gallery API over the external festival backend plus admin write
//! proxies. Configuration resolves CLI > environment > config file >
//! compiled defaults.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use utsav_common::config::{Config, ConfigOverrides};
use utsav_ui::{build_router, AppState};

#[derive(Parser, Debug)]
#[command(name = "utsav-ui", about = "Festival archive front-end service")]
struct Args {
    /// Base URL of the festival backend
    #[arg(long)]
    backend_url: Option<String>,

    /// Address to listen on
    #[arg(long)]
    bind: Option<String>,

    /// Explicit config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Build identification logged immediately after tracing init
    info!(
        "Starting Utsav Archive UI (utsav-ui) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();
    let config = Config::resolve(&ConfigOverrides {
        backend_url: args.backend_url,
        bind_addr: args.bind,
        config_file: args.config,
    })?;

    info!("Festival backend: {}", config.backend_url);
    if config.admin_enabled() {
        info!("Admin login enabled for user '{}'", config.admin_username);
    } else {
        info!("Admin login disabled (no admin password configured)");
    }

    let bind_addr = config.bind_addr.clone();
    let state = AppState::new(config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("HTTP server listening on {}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
