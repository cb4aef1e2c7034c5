//! Notifier implementation over the Twilio Messages API.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;
use tracing::debug;

use crate::config::TwilioConfig;
use crate::domain::foundation::{DomainError, SessionKey};
use crate::ports::Notifier;

/// Sends WhatsApp messages through Twilio's REST API.
///
/// Every send is bounded by the configured timeout, so a slow Twilio
/// endpoint cannot pin a request handler indefinitely.
pub struct TwilioNotifier {
    config: TwilioConfig,
    client: Client,
}

impl TwilioNotifier {
    /// Creates a notifier from configuration.
    ///
    /// # Panics
    ///
    /// Panics if the TLS backend cannot be initialized; this runs once at
    /// startup, before any traffic is accepted.
    pub fn new(config: TwilioConfig) -> Self {
        let client = Client::builder()
            .timeout(config.send_timeout())
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.config.base_url, self.config.account_sid
        )
    }
}

#[async_trait]
impl Notifier for TwilioNotifier {
    async fn send(&self, to: &SessionKey, body: &str) -> Result<(), DomainError> {
        let params = [
            ("To", to.as_str()),
            ("From", self.config.whatsapp_number.as_str()),
            ("Body", body),
        ];

        let response = self
            .client
            .post(self.messages_url())
            .basic_auth(
                &self.config.account_sid,
                Some(self.config.auth_token.expose_secret()),
            )
            .form(&params)
            .send()
            .await
            .map_err(|e| DomainError::notification(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(DomainError::notification(format!(
                "Twilio returned {status}: {detail}"
            )));
        }

        debug!(to = %to, "message accepted by Twilio");
        Ok(())
    }
}
