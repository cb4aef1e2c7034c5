//! In-memory prompt queue.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use crate::domain::foundation::{DomainError, SessionKey};
use crate::ports::PromptQueue;

/// Map-backed queue for tests and single-node development. Arming the same
/// key again replaces the previous due time, matching the durable adapter's
/// upsert semantics.
pub struct InMemoryPromptQueue {
    due: Mutex<HashMap<SessionKey, DateTime<Utc>>>,
}

impl InMemoryPromptQueue {
    pub fn new() -> Self {
        Self {
            due: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryPromptQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PromptQueue for InMemoryPromptQueue {
    async fn arm(&self, key: &SessionKey, due_at: DateTime<Utc>) -> Result<(), DomainError> {
        self.due.lock().await.insert(key.clone(), due_at);
        Ok(())
    }

    async fn take_due(&self, now: DateTime<Utc>) -> Result<Vec<SessionKey>, DomainError> {
        let mut due = self.due.lock().await;
        let ready: Vec<SessionKey> = due
            .iter()
            .filter(|(_, at)| **at <= now)
            .map(|(key, _)| key.clone())
            .collect();
        for key in &ready {
            due.remove(key);
        }
        Ok(ready)
    }
}
