//! Twilio configuration.

use secrecy::Secret;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Credentials and sender identity for the Twilio Messages API.
#[derive(Debug, Clone, Deserialize)]
pub struct TwilioConfig {
    /// Account SID (starts with "AC").
    pub account_sid: String,

    /// Auth token; never logged or serialized back out.
    pub auth_token: Secret<String>,

    /// WhatsApp sender, 'whatsapp:'-qualified, e.g. `whatsapp:+14155238886`.
    pub whatsapp_number: String,

    /// API base URL; overridable for tests.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Timeout for one outbound send in seconds.
    #[serde(default = "default_send_timeout")]
    pub send_timeout_secs: u64,
}

impl TwilioConfig {
    pub fn send_timeout(&self) -> Duration {
        Duration::from_secs(self.send_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.account_sid.starts_with("AC") {
            return Err(ValidationError::InvalidAccountSid);
        }
        if !self.whatsapp_number.starts_with("whatsapp:") {
            return Err(ValidationError::InvalidWhatsappNumber);
        }
        Ok(())
    }
}

fn default_base_url() -> String {
    "https://api.twilio.com".to_string()
}

fn default_send_timeout() -> u64 {
    10
}
