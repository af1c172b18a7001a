//! Configuration management for the helpdesk bot
//!
//! Layered the usual way: built-in defaults, then an optional TOML file,
//! then `HELPDESK_`-prefixed environment variables (double underscore as the
//! section separator, e.g. `HELPDESK_STORE__ENDPOINT`). The result is a
//! plain value struct; nothing here holds process-global state.

pub mod constants;

use std::path::Path;

use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

/// Top-level service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub prediction: PredictionConfig,
    pub bot: BotSettings,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Keyed ticket-store collaborator.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the keyed store's HTTP API.
    pub endpoint: String,
    /// Table holding ticket records, keyed by incident number.
    pub table: String,
}

/// Hosted prediction collaborator.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionConfig {
    /// Realtime prediction endpoint shared by both models.
    pub endpoint: String,
    pub priority_model_id: String,
    pub solution_model_id: String,
}

/// Bot-level settings.
#[derive(Debug, Clone, Deserialize)]
pub struct BotSettings {
    /// IANA time-zone name the bot reports times in. Threaded as a value;
    /// never applied to the process environment.
    pub timezone: String,
}

impl BotConfig {
    /// Load configuration from defaults, an optional file, and environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("store.endpoint", "http://localhost:8000")?
            .set_default("store.table", constants::defaults::TICKET_TABLE)?
            .set_default("prediction.endpoint", constants::defaults::PREDICTION_ENDPOINT)?
            .set_default(
                "prediction.priority_model_id",
                constants::defaults::PRIORITY_MODEL_ID,
            )?
            .set_default(
                "prediction.solution_model_id",
                constants::defaults::SOLUTION_MODEL_ID,
            )?
            .set_default("bot.timezone", constants::defaults::TIMEZONE)?;

        if let Some(path) = path {
            tracing::info!(path = %path.display(), "loading configuration file");
            builder = builder.add_source(File::from(path));
        }

        let config = builder
            .add_source(Environment::with_prefix("HELPDESK").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_load_without_file() {
        let config = BotConfig::load(None).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.store.table, "incidentDummy_v2");
        assert_eq!(
            config.prediction.endpoint,
            "https://realtime.machinelearning.us-east-1.amazonaws.com"
        );
        assert_eq!(config.prediction.priority_model_id, "ml-cm2S9nNwk3e");
        assert_eq!(config.bot.timezone, "America/New_York");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[server]
port = 9999

[store]
endpoint = "http://tickets.internal:8000"
"#
        )
        .unwrap();

        let config = BotConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.server.port, 9999);
        assert_eq!(config.store.endpoint, "http://tickets.internal:8000");
        // Untouched sections keep their defaults.
        assert_eq!(config.store.table, "incidentDummy_v2");
        assert_eq!(config.bot.timezone, "America/New_York");
    }
}
