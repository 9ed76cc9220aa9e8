//! Payroll engine HTTP server.
//!
//! Reads the tax-year configuration directory from `PAYROLL_CONFIG_DIR`
//! (default `./config/mx2024`) and listens on `PAYROLL_BIND_ADDR`
//! (default `127.0.0.1:3000`). Log verbosity follows `RUST_LOG`.

use std::env;

use tracing::info;
use tracing_subscriber::EnvFilter;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/mx2024";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("payroll_engine=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_dir = env::var("PAYROLL_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.into());
    let bind_addr = env::var("PAYROLL_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into());

    let loader = ConfigLoader::load(&config_dir)?;
    let metadata = loader.config().metadata();
    info!(
        config_dir = %config_dir,
        tax_year = metadata.year,
        jurisdiction = %metadata.jurisdiction,
        "Loaded tax-year configuration"
    );

    let router = create_router(AppState::new(loader));
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(bind_addr = %bind_addr, "Payroll engine listening");

    axum::serve(listener, router).await?;
    Ok(())
}
