use crate::app_config::AppConfig;
use tracing::{error, info};

mod annotation;
mod app_config;
mod extensions;
mod meraki;
mod migration;
mod report;
mod runner;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration, generating the {:?} report", config.report().kind());

    match runner::run(&config).await {
        Ok(Some(path)) => info!("✅  Spreadsheet '{}' generated", path.display()),
        Ok(None) => info!("🔥 Nothing to export"),
        Err(err) => error!("❌ {}", err),
    }

    Ok(())
}
