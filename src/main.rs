use crate::app_config::AppConfig;
use envoy::Client;
use std::error::Error;
use tracing::{info, warn};

mod app_config;

fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    tracing_subscriber::fmt().with_max_level(config.logging().level()).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    info!("✅  Loaded configuration");

    let client = new_client(&config)?;

    let info = client.info()?;
    info!("✅  Connected to Envoy {} running {}", info.device.sn, info.device.software);

    let production = client.production()?;
    match production.production_meter().or_else(|| production.inverters()) {
        Some(reading) => info!("☀️ Producing {} W", reading.w_now),
        None => warn!("⚠️ Envoy reported no production readings"),
    }
    if let Some(reading) = production.total_consumption() {
        info!("🏠 Consuming {} W", reading.w_now);
    }
    if let Some(reading) = production.net_consumption() {
        info!("🔌 Net consumption {} W", reading.w_now);
    }

    for entry in client.inventory()? {
        info!("📦 {}: {} parts", entry.r#type, entry.device_count());
    }

    Ok(())
}

/// Builds a client whose transport enforces the configured timeout.
fn new_client(config: &AppConfig) -> Result<Client, reqwest::Error> {
    let transport = reqwest::blocking::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .timeout(config.envoy().timeout())
        .build()?;

    Ok(Client::with_transport(config.envoy().address(), transport))
}
