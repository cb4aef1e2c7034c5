//! ProcessMessageHandler - drives the conversation for one inbound message.
//!
//! This is the impure half of the conversation engine: it locks the
//! session entry for the sender, feeds the message through the pure state
//! machine, and performs the collaborator calls (prompts, persistence,
//! scheduling) the outcome demands. Collaborator failures are caught here
//! and reported as a generic status, never propagated raw.

use std::sync::Arc;

use chrono::{Duration, Utc};
use serde::Serialize;
use tracing::{error, info};

use crate::domain::collection::{
    messages, AnswerOutcome, CollectionSession, SchemaField, SessionStatus,
};
use crate::domain::foundation::SessionKey;
use crate::ports::{EligibilityChecker, Notifier, PromptQueue, RecordSink, SessionStore};

/// Status reported on the webhook response for one processed message.
///
/// The serialized phrases are part of the HTTP surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EngineStatus {
    #[serde(rename = "welcome sent, collecting data")]
    WelcomeSent,

    #[serde(rename = "waiting for join code")]
    WaitingForJoinCode,

    #[serde(rename = "waiting for correct data")]
    WaitingForCorrectData,

    #[serde(rename = "data saved")]
    DataSaved,

    #[serde(rename = "error")]
    Error,
}

/// Handler for inbound WhatsApp messages.
pub struct ProcessMessageHandler {
    store: Arc<dyn SessionStore>,
    notifier: Arc<dyn Notifier>,
    sink: Arc<dyn RecordSink>,
    queue: Arc<dyn PromptQueue>,
    eligibility: Arc<dyn EligibilityChecker>,
    collect_interval: Duration,
}

impl ProcessMessageHandler {
    pub fn new(
        store: Arc<dyn SessionStore>,
        notifier: Arc<dyn Notifier>,
        sink: Arc<dyn RecordSink>,
        queue: Arc<dyn PromptQueue>,
        eligibility: Arc<dyn EligibilityChecker>,
        collect_interval: Duration,
    ) -> Self {
        Self {
            store,
            notifier,
            sink,
            queue,
            eligibility,
            collect_interval,
        }
    }

    /// Processes one inbound message. `message` is already trimmed and
    /// lower-cased by the transport adapter.
    ///
    /// The session entry stays locked for the whole call, so two messages
    /// for the same sender are handled strictly one after the other.
    pub async fn handle(&self, key: &SessionKey, message: &str) -> EngineStatus {
        info!(phone = %key, message, "received message");

        let entry = self.store.entry(key).await;
        let mut session = entry.lock().await;

        if session.status() == SessionStatus::AwaitingJoin {
            return self.handle_awaiting_join(key, &mut session).await;
        }

        match session.apply_answer(message) {
            AnswerOutcome::Rejected(rejection) => {
                self.request_field(key, &rejection.to_string(), session.current_field())
                    .await
            }
            AnswerOutcome::Advanced { next_field } => {
                self.request_field(key, &messages::field_prompt(next_field), next_field)
                    .await
            }
            AnswerOutcome::Complete { record } => {
                if let Err(err) = self.sink.insert(&record).await {
                    error!(phone = %key, %err, "failed to save record");
                    let _ = self.notifier.send(key, messages::SAVE_FAILED).await;
                    return EngineStatus::Error;
                }

                if let Err(err) = self.notifier.send(key, messages::DATA_SAVED).await {
                    // Confirmation failed: leave the session un-reset so the
                    // user can retry by resending the last answer. The
                    // duplicate insert this allows is the accepted trade-off.
                    error!(phone = %key, %err, "failed to send save confirmation");
                    return EngineStatus::Error;
                }
                info!(phone = %key, "data saved");

                session.reset();
                let due_at = Utc::now() + self.collect_interval;
                match self.queue.arm(key, due_at).await {
                    Ok(()) => {
                        info!(phone = %key, %due_at, "scheduled next data request");
                    }
                    Err(err) => {
                        // The record is saved and confirmed; losing only the
                        // reprompt is the lesser failure. Log and move on.
                        error!(phone = %key, %err, "failed to schedule next data request");
                    }
                }
                EngineStatus::DataSaved
            }
        }
    }

    async fn handle_awaiting_join(
        &self,
        key: &SessionKey,
        session: &mut CollectionSession,
    ) -> EngineStatus {
        let joined = match self.eligibility.is_joined(key).await {
            Ok(joined) => joined,
            Err(err) => {
                error!(phone = %key, %err, "eligibility check failed");
                return EngineStatus::Error;
            }
        };

        if joined {
            session.begin_collecting();
            match self.notifier.send(key, messages::WELCOME_FIRST_PROMPT).await {
                Ok(()) => EngineStatus::WelcomeSent,
                Err(err) => {
                    error!(phone = %key, %err, "failed to send welcome");
                    EngineStatus::Error
                }
            }
        } else {
            match self.notifier.send(key, messages::JOIN_NUDGE).await {
                Ok(()) => EngineStatus::WaitingForJoinCode,
                Err(err) => {
                    error!(phone = %key, %err, "failed to send join nudge");
                    EngineStatus::Error
                }
            }
        }
    }

    async fn request_field(
        &self,
        key: &SessionKey,
        message: &str,
        field: SchemaField,
    ) -> EngineStatus {
        match self.notifier.send(key, message).await {
            Ok(()) => {
                info!(phone = %key, field = field.as_str(), "requested field");
                EngineStatus::WaitingForCorrectData
            }
            Err(err) => {
                error!(phone = %key, %err, "failed to request field");
                let _ = self.notifier.send(key, messages::UNEXPECTED_ERROR).await;
                EngineStatus::Error
            }
        }
    }
}
