//! Dropout Advisory Server - Main Entry Point

use api::config::AppConfig;
use api::{init_logging, run_server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    info!("=== Student Risk Pipeline v{} ===", env!("CARGO_PKG_VERSION"));
    info!("Starting dropout advisory service...");

    let config = AppConfig::load()?;
    run_server(config).await?;

    Ok(())
}
