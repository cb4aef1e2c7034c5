//! Configuration error types.

use thiserror::Error;

/// Failure to load or deserialize configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration error: {0}")]
    Load(#[from] config::ConfigError),
}

/// Semantic validation failure after a successful load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("server port must be non-zero")]
    InvalidPort,

    #[error("request timeout must be between 1 and 300 seconds")]
    InvalidTimeout,

    #[error("database url must be a postgres:// or postgresql:// URL")]
    InvalidDatabaseUrl,

    #[error("database pool sizes must satisfy 0 < min <= max")]
    InvalidPoolSize,

    #[error("twilio account sid must start with 'AC'")]
    InvalidAccountSid,

    #[error("twilio whatsapp number must be 'whatsapp:'-qualified")]
    InvalidWhatsappNumber,

    #[error("join code must not be empty")]
    EmptyJoinCode,

    #[error("collection interval must be non-zero")]
    InvalidCollectInterval,
}
