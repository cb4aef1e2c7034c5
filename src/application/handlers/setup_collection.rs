//! SetupCollectionHandler - provisions a collection for a phone number.
//!
//! Attaches the external identifier triple to that number's session,
//! resets it to the initial state (discarding any in-progress answers),
//! and texts the user a welcome or join instruction. The reset happens
//! before any send and is not rolled back on failure.

use std::sync::Arc;

use tracing::{error, info};

use crate::domain::collection::{messages, CollectionContext, CollectionSession};
use crate::domain::foundation::{DomainError, SessionKey};
use crate::ports::{EligibilityChecker, Notifier, SessionStore};

/// Command to provision a collection.
#[derive(Debug, Clone)]
pub struct SetupCollectionCommand {
    pub phone_number: String,
    pub process_id: Option<String>,
    pub para_id: Option<String>,
    pub data_collection_id: Option<String>,
}

/// Successful setup acknowledgment: the instruction text returned to the
/// provisioning caller.
#[derive(Debug, Clone)]
pub struct SetupAck {
    pub message: String,
}

/// Handler for collection provisioning.
pub struct SetupCollectionHandler {
    store: Arc<dyn SessionStore>,
    notifier: Arc<dyn Notifier>,
    eligibility: Arc<dyn EligibilityChecker>,
    join_code: String,
    sandbox_number: String,
}

impl SetupCollectionHandler {
    pub fn new(
        store: Arc<dyn SessionStore>,
        notifier: Arc<dyn Notifier>,
        eligibility: Arc<dyn EligibilityChecker>,
        join_code: impl Into<String>,
        sandbox_number: impl Into<String>,
    ) -> Self {
        Self {
            store,
            notifier,
            eligibility,
            join_code: join_code.into(),
            sandbox_number: sandbox_number.into(),
        }
    }

    pub async fn handle(&self, cmd: SetupCollectionCommand) -> Result<SetupAck, DomainError> {
        let key = SessionKey::whatsapp(&cmd.phone_number);
        info!(phone = %key, "setting up whatsapp collection");

        let context = CollectionContext::new(
            cmd.process_id.clone(),
            cmd.para_id.clone(),
            cmd.data_collection_id.clone(),
        );

        // Overwrite any prior session for this number: new context, fresh
        // cursor, any in-progress answers discarded.
        let entry = self.store.entry(&key).await;
        {
            let mut session = entry.lock().await;
            *session = CollectionSession::new(context);
        }

        let joined = self.eligibility.is_joined(&key).await.map_err(|err| {
            error!(phone = %key, %err, "eligibility check failed during setup");
            err
        })?;

        let (text, ack) = if joined {
            (
                messages::SETUP_WELCOME.to_string(),
                messages::setup_instructions(&self.join_code, &self.sandbox_number),
            )
        } else {
            (
                messages::join_code_instructions(&self.join_code, &self.sandbox_number),
                messages::join_code_sent_ack(&self.join_code, &self.sandbox_number),
            )
        };

        self.notifier.send(&key, &text).await.map_err(|err| {
            error!(phone = %key, %err, "failed to send setup message");
            err
        })?;

        Ok(SetupAck { message: ack })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemorySessionStore;
    use crate::domain::collection::SessionStatus;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct RecordingNotifier {
        sent: Mutex<Vec<String>>,
        fail: bool,
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn send(&self, _to: &SessionKey, body: &str) -> Result<(), DomainError> {
            if self.fail {
                return Err(DomainError::notification("simulated outage"));
            }
            self.sent.lock().unwrap().push(body.to_string());
            Ok(())
        }
    }

    struct StaticJoined(bool);

    #[async_trait]
    impl EligibilityChecker for StaticJoined {
        async fn is_joined(&self, _key: &SessionKey) -> Result<bool, DomainError> {
            Ok(self.0)
        }
    }

    fn handler(
        store: Arc<InMemorySessionStore>,
        joined: bool,
        fail_send: bool,
    ) -> (SetupCollectionHandler, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier {
            sent: Mutex::new(Vec::new()),
            fail: fail_send,
        });
        let handler = SetupCollectionHandler::new(
            store,
            notifier.clone(),
            Arc::new(StaticJoined(joined)),
            "join-tiger",
            "+14155238886",
        );
        (handler, notifier)
    }

    fn command() -> SetupCollectionCommand {
        SetupCollectionCommand {
            phone_number: "+15551234567".to_string(),
            process_id: Some("P1".to_string()),
            para_id: Some("PA1".to_string()),
            data_collection_id: Some("DC1".to_string()),
        }
    }

    #[tokio::test]
    async fn setup_attaches_context_and_texts_welcome() {
        let store = Arc::new(InMemorySessionStore::new());
        let (handler, notifier) = handler(store.clone(), true, false);

        let ack = handler.handle(command()).await.unwrap();
        assert!(ack.message.contains("'join-tiger'"));
        assert_eq!(
            notifier.sent.lock().unwrap().as_slice(),
            &[messages::SETUP_WELCOME.to_string()]
        );

        let entry = store.entry(&SessionKey::whatsapp("+15551234567")).await;
        let session = entry.lock().await;
        assert_eq!(session.status(), SessionStatus::AwaitingJoin);
        assert_eq!(session.context().process_id.as_deref(), Some("P1"));
    }

    #[tokio::test]
    async fn setup_discards_in_progress_answers() {
        let store = Arc::new(InMemorySessionStore::new());
        let key = SessionKey::whatsapp("+15551234567");

        // Simulate a half-finished cycle under older identifiers.
        {
            let entry = store.entry(&key).await;
            let mut session = entry.lock().await;
            session.begin_collecting();
            session.apply_answer("42");
            session.apply_answer("kg");
        }

        let (handler, _) = handler(store.clone(), true, false);
        handler.handle(command()).await.unwrap();

        let entry = store.entry(&key).await;
        let session = entry.lock().await;
        assert_eq!(session.status(), SessionStatus::AwaitingJoin);
        assert_eq!(session.field_index(), 0);
        assert_eq!(session.context().data_collection_id.as_deref(), Some("DC1"));
    }

    #[tokio::test]
    async fn two_setups_keep_their_own_identifiers() {
        let store = Arc::new(InMemorySessionStore::new());
        let (handler, _) = handler(store.clone(), true, false);

        handler.handle(command()).await.unwrap();
        handler
            .handle(SetupCollectionCommand {
                phone_number: "+15559990000".to_string(),
                process_id: Some("P2".to_string()),
                para_id: None,
                data_collection_id: None,
            })
            .await
            .unwrap();

        let first = store.entry(&SessionKey::whatsapp("+15551234567")).await;
        assert_eq!(
            first.lock().await.context().process_id.as_deref(),
            Some("P1")
        );
        let second = store.entry(&SessionKey::whatsapp("+15559990000")).await;
        assert_eq!(
            second.lock().await.context().process_id.as_deref(),
            Some("P2")
        );
    }

    #[tokio::test]
    async fn not_joined_branch_sends_join_code_instructions() {
        let store = Arc::new(InMemorySessionStore::new());
        let (handler, notifier) = handler(store, false, false);

        let ack = handler.handle(command()).await.unwrap();
        assert!(ack.message.starts_with("Join code sent to"));
        let sent = notifier.sent.lock().unwrap();
        assert!(sent[0].contains("to join the sandbox"));
    }

    #[tokio::test]
    async fn send_failure_reports_error_but_keeps_reset() {
        let store = Arc::new(InMemorySessionStore::new());
        let key = SessionKey::whatsapp("+15551234567");
        {
            let entry = store.entry(&key).await;
            let mut session = entry.lock().await;
            session.begin_collecting();
            session.apply_answer("42");
        }

        let (handler, _) = handler(store.clone(), true, true);
        assert!(handler.handle(command()).await.is_err());

        // The reset happened before the failed send and stays in place.
        let entry = store.entry(&key).await;
        let session = entry.lock().await;
        assert_eq!(session.status(), SessionStatus::AwaitingJoin);
        assert_eq!(session.field_index(), 0);
    }
}
