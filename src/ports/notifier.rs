//! Outbound message delivery port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, SessionKey};

/// Delivers one text message to a user.
///
/// Implementations own the sender identity; callers only name the
/// recipient. Sends are bounded by a timeout inside the adapter, and a
/// failed send surfaces as [`DomainError::Notification`].
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, to: &SessionKey, body: &str) -> Result<(), DomainError>;
}
