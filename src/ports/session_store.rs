//! Shared session state port.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::collection::CollectionSession;
use crate::domain::foundation::SessionKey;

/// Handle to one key's session, locked for the duration of one message's
/// processing.
///
/// Request handlers and the reprompt worker both mutate sessions; handing
/// out a per-key mutex makes each read-validate-advance-write sequence
/// atomic with respect to other traffic for the same key, without a global
/// lock across keys.
pub type SessionEntry = Arc<Mutex<CollectionSession>>;

/// Keyed store of conversation sessions.
///
/// Sessions have no expiry; they live until overwritten by a reset.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the entry for `key`, creating a fresh `AwaitingJoin` session
    /// with an empty context if none exists.
    async fn entry(&self, key: &SessionKey) -> SessionEntry;
}
