use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};
use serde::{Deserialize, Deserializer};
use std::time::Duration;
use tracing::Level;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    envoy: Envoy,
    logging: Logging,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(
            Config::builder()
                .add_source(config::File::with_name("config").required(true))
                .add_source(config::File::with_name("config_local").required(false)),
        )
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder
            .add_source(config::Environment::default().separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn envoy(&self) -> &Envoy {
        &self.envoy
    }

    pub fn logging(&self) -> &Logging {
        &self.logging
    }
}

#[derive(Debug, Deserialize)]
pub struct Envoy {
    address: String,
    #[serde(with = "humantime_serde")]
    timeout: Duration,
}

impl Envoy {
    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[derive(Debug, Deserialize)]
pub struct Logging {
    #[serde(deserialize_with = "deserialize_level")]
    level: Level,
}

impl Logging {
    pub fn level(&self) -> Level {
        self.level
    }
}

fn deserialize_level<'de, D>(deserializer: D) -> Result<Level, D::Error>
where
    D: Deserializer<'de>,
{
    let level = String::deserialize(deserializer)?;
    level.parse().map_err(serde::de::Error::custom)
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                envoy: Envoy {
                    address: "envoy.local".to_string(),
                    timeout: Duration::from_secs(10),
                },
                logging: Logging { level: Level::INFO },
            },
        }
    }

    pub fn envoy_address(mut self, address: String) -> Self {
        self.config.envoy.address = address;
        self
    }

    pub fn envoy_timeout(mut self, timeout: Duration) -> Self {
        self.config.envoy.timeout = timeout;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
