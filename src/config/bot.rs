//! Bot behavior configuration.

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Conversation behavior knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Sandbox join code quoted in the setup instructions.
    #[serde(default = "default_join_code")]
    pub join_code: String,

    /// Seconds between collection cycles (default 24 hours).
    #[serde(default = "default_collect_interval")]
    pub collect_interval_secs: u64,

    /// How often the reprompt worker polls for due prompts, in seconds.
    #[serde(default = "default_reprompt_poll")]
    pub reprompt_poll_secs: u64,
}

impl BotConfig {
    /// Collection interval as a chrono duration for due-time arithmetic.
    pub fn collect_interval(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.collect_interval_secs as i64)
    }

    pub fn reprompt_poll_interval(&self) -> Duration {
        Duration::from_secs(self.reprompt_poll_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.join_code.trim().is_empty() {
            return Err(ValidationError::EmptyJoinCode);
        }
        if self.collect_interval_secs == 0 || self.reprompt_poll_secs == 0 {
            return Err(ValidationError::InvalidCollectInterval);
        }
        Ok(())
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            join_code: default_join_code(),
            collect_interval_secs: default_collect_interval(),
            reprompt_poll_secs: default_reprompt_poll(),
        }
    }
}

fn default_join_code() -> String {
    "join-sandbox".to_string()
}

fn default_collect_interval() -> u64 {
    86_400
}

fn default_reprompt_poll() -> u64 {
    30
}
