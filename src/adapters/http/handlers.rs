//! HTTP handlers for the bot endpoints.

use std::sync::Arc;

use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::application::handlers::{
    ProcessMessageHandler, SetupCollectionCommand, SetupCollectionHandler,
};
use crate::domain::foundation::SessionKey;

use super::dto::{ApiStatus, SetupWhatsappRequest, WebhookForm, WebhookResponse};

/// Shared handler state for the router.
#[derive(Clone)]
pub struct AppState {
    pub setup: Arc<SetupCollectionHandler>,
    pub messages: Arc<ProcessMessageHandler>,
}

/// GET / - liveness probe.
pub async fn home() -> &'static str {
    "Welcome to the WhatsApp Bot Service!"
}

/// POST /api/setup_whatsapp - provision a collection for a phone number.
pub async fn setup_whatsapp(
    State(state): State<AppState>,
    Json(req): Json<SetupWhatsappRequest>,
) -> Response {
    let Some(phone_number) = req.phone_number.filter(|p| !p.is_empty()) else {
        error!("phone number not provided");
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiStatus::error("Phone number is required")),
        )
            .into_response();
    };

    let cmd = SetupCollectionCommand {
        phone_number,
        process_id: req.process_id,
        para_id: req.para_id,
        data_collection_id: req.data_collection_id,
    };

    match state.setup.handle(cmd).await {
        Ok(ack) => (StatusCode::OK, Json(ApiStatus::success(ack.message))).into_response(),
        // A failed send is a handled condition, reported in-band like the
        // success acknowledgment rather than as a transport error.
        Err(err) => {
            error!(%err, "error in setup_whatsapp");
            (
                StatusCode::OK,
                Json(ApiStatus::error("Failed to send join instructions.")),
            )
                .into_response()
        }
    }
}

/// POST /api/webhooks - inbound message callback from Twilio.
pub async fn webhooks(
    State(state): State<AppState>,
    Form(form): Form<WebhookForm>,
) -> Response {
    let (Some(raw_body), Some(from)) = (form.body, form.from) else {
        error!("webhook missing Body or From");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiStatus::error(
                "An error occurred while processing the message.",
            )),
        )
            .into_response();
    };

    // Normalize once at the boundary; the validators assume lower-cased
    // trimmed text (the `no evidence` token in particular).
    let message = raw_body.trim().to_lowercase();
    let key = SessionKey::from_qualified(from);

    let status = state.messages.handle(&key, &message).await;
    (StatusCode::OK, Json(WebhookResponse { status })).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::eligibility::StaticEligibility;
    use crate::adapters::memory::{InMemoryPromptQueue, InMemorySessionStore};
    use crate::domain::collection::ParameterLog;
    use crate::domain::foundation::DomainError;
    use crate::ports::{Notifier, RecordSink};
    use async_trait::async_trait;
    use axum::body::to_bytes;
    use chrono::Duration;

    struct NullNotifier;

    #[async_trait]
    impl Notifier for NullNotifier {
        async fn send(&self, _to: &SessionKey, _body: &str) -> Result<(), DomainError> {
            Ok(())
        }
    }

    struct NullSink;

    #[async_trait]
    impl RecordSink for NullSink {
        async fn insert(&self, _record: &ParameterLog) -> Result<(), DomainError> {
            Ok(())
        }
    }

    fn state() -> AppState {
        let store = Arc::new(InMemorySessionStore::new());
        let notifier = Arc::new(NullNotifier);
        let eligibility = Arc::new(StaticEligibility::always_joined());
        AppState {
            setup: Arc::new(SetupCollectionHandler::new(
                store.clone(),
                notifier.clone(),
                eligibility.clone(),
                "join-tiger",
                "+14155238886",
            )),
            messages: Arc::new(ProcessMessageHandler::new(
                store,
                notifier,
                Arc::new(NullSink),
                Arc::new(InMemoryPromptQueue::new()),
                eligibility,
                Duration::hours(24),
            )),
        }
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn setup_without_phone_number_is_rejected_with_400() {
        let response = setup_whatsapp(
            State(state()),
            Json(SetupWhatsappRequest {
                phone_number: None,
                process_id: Some("P1".to_string()),
                para_id: None,
                data_collection_id: None,
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"status": "error", "message": "Phone number is required"})
        );
    }

    #[tokio::test]
    async fn setup_returns_instructions_on_success() {
        let response = setup_whatsapp(
            State(state()),
            Json(SetupWhatsappRequest {
                phone_number: Some("+15551234567".to_string()),
                process_id: Some("P1".to_string()),
                para_id: Some("PA1".to_string()),
                data_collection_id: Some("DC1".to_string()),
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "success");
        assert!(json["message"].as_str().unwrap().contains("'join-tiger'"));
    }

    #[tokio::test]
    async fn webhook_normalizes_text_and_reports_engine_status() {
        let state = state();

        let response = webhooks(
            State(state.clone()),
            Form(WebhookForm {
                body: Some("  Hello  ".to_string()),
                from: Some("whatsapp:+15551234567".to_string()),
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"status": "welcome sent, collecting data"})
        );

        // "No Evidence" later in the flow relies on this lower-casing.
        let response = webhooks(
            State(state),
            Form(WebhookForm {
                body: Some("12.5".to_string()),
                from: Some("whatsapp:+15551234567".to_string()),
            }),
        )
        .await;
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"status": "waiting for correct data"})
        );
    }

    #[tokio::test]
    async fn webhook_without_body_is_a_generic_500() {
        let response = webhooks(
            State(state()),
            Form(WebhookForm {
                body: None,
                from: Some("whatsapp:+15551234567".to_string()),
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await["message"],
            "An error occurred while processing the message."
        );
    }
}
