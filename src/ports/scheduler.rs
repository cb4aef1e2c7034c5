//! Reprompt scheduling port.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::foundation::{DomainError, SessionKey};

/// Durable due-time queue driving the next collection cycle.
///
/// `arm` is an upsert keyed by session key: re-arming before the previous
/// entry fires supersedes it rather than queueing a duplicate. A background
/// worker drains due entries and performs the reset-and-reprompt.
#[async_trait]
pub trait PromptQueue: Send + Sync {
    /// Schedules (or reschedules) a reprompt for `key` at `due_at`.
    async fn arm(&self, key: &SessionKey, due_at: DateTime<Utc>) -> Result<(), DomainError>;

    /// Removes and returns every entry due at or before `now`.
    ///
    /// Removal and return are one atomic step so two workers cannot drain
    /// the same entry twice.
    async fn take_due(&self, now: DateTime<Utc>) -> Result<Vec<SessionKey>, DomainError>;
}
