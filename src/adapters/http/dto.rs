//! HTTP DTOs.
//!
//! These shapes are the preserved wire surface of the service; field names
//! and status phrases are load-bearing for existing callers.

use serde::{Deserialize, Serialize};

use crate::application::handlers::EngineStatus;

/// Body of `POST /api/setup_whatsapp`.
#[derive(Debug, Clone, Deserialize)]
pub struct SetupWhatsappRequest {
    pub phone_number: Option<String>,
    pub process_id: Option<String>,
    pub para_id: Option<String>,
    pub data_collection_id: Option<String>,
}

/// Form body of `POST /api/webhooks` as delivered by Twilio.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookForm {
    #[serde(rename = "Body")]
    pub body: Option<String>,
    #[serde(rename = "From")]
    pub from: Option<String>,
}

/// Generic `{status, message}` envelope used by setup and error responses.
#[derive(Debug, Clone, Serialize)]
pub struct ApiStatus {
    pub status: &'static str,
    pub message: String,
}

impl ApiStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success",
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: message.into(),
        }
    }
}

/// Webhook reply carrying the engine's status phrase.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookResponse {
    pub status: EngineStatus,
}
