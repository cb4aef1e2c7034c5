//! In-memory session store with per-key locking.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::collection::{CollectionContext, CollectionSession};
use crate::domain::foundation::SessionKey;
use crate::ports::{SessionEntry, SessionStore};

/// Process-local session map.
///
/// The outer lock only guards the map itself and is held just long enough
/// to fetch or insert an entry; callers then lock the per-key entry for the
/// duration of one message's processing. Entries are never removed, a
/// session is "deleted" only by being overwritten with a fresh one.
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<SessionKey, SessionEntry>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn entry(&self, key: &SessionKey) -> SessionEntry {
        let mut sessions = self.sessions.lock().await;
        sessions
            .entry(key.clone())
            .or_insert_with(|| {
                Arc::new(Mutex::new(CollectionSession::new(CollectionContext::default())))
            })
            .clone()
    }
}
