//! Application configuration.
//!
//! Type-safe configuration loaded from environment variables via the
//! `config` and `dotenvy` crates. Variables carry the `PARALOG_BOT` prefix
//! with `__` separating nested values, e.g.
//! `PARALOG_BOT__SERVER__PORT=8080` or `PARALOG_BOT__TWILIO__ACCOUNT_SID=AC...`.

mod bot;
mod database;
mod error;
mod server;
mod twilio;

pub use bot::BotConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use twilio::TwilioConfig;

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment).
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection).
    pub database: DatabaseConfig,

    /// Twilio configuration (credentials, WhatsApp sender).
    pub twilio: TwilioConfig,

    /// Bot behavior (join code, collection interval, reprompt polling).
    #[serde(default)]
    pub bot: BotConfig,
}

impl AppConfig {
    /// Loads configuration from the environment, reading a `.env` file
    /// first if one is present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or cannot
    /// be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PARALOG_BOT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Semantic validation of loaded values.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.twilio.validate()?;
        self.bot.validate()?;
        Ok(())
    }
}
