//! RepromptWorker - background service that reopens collection cycles.
//!
//! Polls the prompt queue for due entries; for each one it resets that
//! key's session (keeping the identifier context) and sends the reminder
//! that opens the next cycle. Firing is at-least-once: a send failure logs
//! and drops the entry, the user simply misses one reminder.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::watch;
use tokio::time;
use tracing::{error, info};

use crate::domain::collection::messages;
use crate::domain::foundation::SessionKey;
use crate::ports::{Notifier, PromptQueue, SessionStore};

/// Configuration for the reprompt worker.
#[derive(Debug, Clone)]
pub struct RepromptWorkerConfig {
    /// How often to check for due prompts.
    pub poll_interval: std::time::Duration,
}

impl Default for RepromptWorkerConfig {
    fn default() -> Self {
        Self {
            poll_interval: std::time::Duration::from_secs(30),
        }
    }
}

/// Background service draining the prompt queue.
pub struct RepromptWorker {
    queue: Arc<dyn PromptQueue>,
    store: Arc<dyn SessionStore>,
    notifier: Arc<dyn Notifier>,
    config: RepromptWorkerConfig,
}

impl RepromptWorker {
    pub fn new(
        queue: Arc<dyn PromptQueue>,
        store: Arc<dyn SessionStore>,
        notifier: Arc<dyn Notifier>,
        config: RepromptWorkerConfig,
    ) -> Self {
        Self {
            queue,
            store,
            notifier,
            config,
        }
    }

    /// Runs the polling loop until the shutdown signal flips to `true`.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        let mut ticker = time::interval(self.config.poll_interval);
        info!(poll_interval = ?self.config.poll_interval, "reprompt worker started");

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.drain_due().await;
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        info!("reprompt worker stopping");
                        return;
                    }
                }
            }
        }
    }

    /// One poll cycle: drain everything currently due and fire each key.
    pub async fn drain_due(&self) {
        let due = match self.queue.take_due(Utc::now()).await {
            Ok(due) => due,
            Err(err) => {
                error!(%err, "failed to poll prompt queue");
                return;
            }
        };

        for key in due {
            self.fire(&key).await;
        }
    }

    /// Resets one session and sends the next-cycle reminder. The session
    /// lock is held across both so an inbound message cannot interleave.
    async fn fire(&self, key: &SessionKey) {
        let entry = self.store.entry(key).await;
        let mut session = entry.lock().await;
        session.reset();
        info!(phone = %key, "session reset for next collection cycle");

        match self.notifier.send(key, messages::REPROMPT).await {
            Ok(()) => info!(phone = %key, "next data request sent"),
            Err(err) => error!(phone = %key, %err, "failed to send next data request"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryPromptQueue, InMemorySessionStore};
    use crate::domain::collection::SessionStatus;
    use crate::domain::foundation::DomainError;
    use crate::ports::Notifier;
    use async_trait::async_trait;
    use chrono::Duration;
    use std::sync::Mutex;

    struct RecordingNotifier {
        sent: Mutex<Vec<(SessionKey, String)>>,
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn send(&self, to: &SessionKey, body: &str) -> Result<(), DomainError> {
            self.sent.lock().unwrap().push((to.clone(), body.to_string()));
            Ok(())
        }
    }

    fn worker() -> (
        RepromptWorker,
        Arc<InMemoryPromptQueue>,
        Arc<InMemorySessionStore>,
        Arc<RecordingNotifier>,
    ) {
        let queue = Arc::new(InMemoryPromptQueue::new());
        let store = Arc::new(InMemorySessionStore::new());
        let notifier = Arc::new(RecordingNotifier {
            sent: Mutex::new(Vec::new()),
        });
        let worker = RepromptWorker::new(
            queue.clone(),
            store.clone(),
            notifier.clone(),
            RepromptWorkerConfig::default(),
        );
        (worker, queue, store, notifier)
    }

    #[tokio::test]
    async fn due_entry_resets_session_and_sends_reminder() {
        let (worker, queue, store, notifier) = worker();
        let key = SessionKey::whatsapp("+1555");

        // A session mid-cycle from the previous collection.
        {
            let entry = store.entry(&key).await;
            let mut session = entry.lock().await;
            session.begin_collecting();
            session.apply_answer("42");
        }
        queue.arm(&key, Utc::now() - Duration::seconds(1)).await.unwrap();

        worker.drain_due().await;

        let entry = store.entry(&key).await;
        let session = entry.lock().await;
        assert_eq!(session.status(), SessionStatus::AwaitingJoin);
        assert_eq!(session.field_index(), 0);

        let sent = notifier.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, key);
        assert_eq!(sent[0].1, messages::REPROMPT);
    }

    #[tokio::test]
    async fn future_entries_do_not_fire() {
        let (worker, queue, _store, notifier) = worker();
        let key = SessionKey::whatsapp("+1555");
        queue.arm(&key, Utc::now() + Duration::hours(24)).await.unwrap();

        worker.drain_due().await;

        assert!(notifier.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn shutdown_signal_stops_the_loop() {
        let (worker, _queue, _store, _notifier) = worker();
        let (tx, rx) = watch::channel(false);

        let handle = tokio::spawn(async move { worker.run(rx).await });
        tx.send(true).unwrap();

        tokio::time::timeout(std::time::Duration::from_secs(1), handle)
            .await
            .expect("worker did not stop on shutdown signal")
            .unwrap();
    }
}
