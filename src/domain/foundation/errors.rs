//! Error types for the domain and its collaborators.
//!
//! Validation failures are NOT errors in this taxonomy; they are a normal
//! outcome of the conversation (see `FieldRejection` in the collection
//! module). `DomainError` covers the fallible collaborators behind ports.

use thiserror::Error;

/// Failures raised by external collaborators behind the ports.
///
/// These are caught at the point of use, logged, and converted into a
/// generic user-facing message. They never reach an HTTP caller raw.
#[derive(Debug, Clone, Error)]
pub enum DomainError {
    /// Outbound message delivery failed (network, auth, Twilio rejection).
    #[error("notification failed: {0}")]
    Notification(String),

    /// Record persistence or queue storage failed.
    #[error("database error: {0}")]
    Database(String),

    /// The eligibility check could not be answered.
    #[error("eligibility check failed: {0}")]
    Eligibility(String),

    /// Arming or draining the reprompt queue failed.
    #[error("scheduler error: {0}")]
    Scheduler(String),
}

impl DomainError {
    pub fn notification(msg: impl Into<String>) -> Self {
        DomainError::Notification(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        DomainError::Database(msg.into())
    }

    pub fn eligibility(msg: impl Into<String>) -> Self {
        DomainError::Eligibility(msg.into())
    }

    pub fn scheduler(msg: impl Into<String>) -> Self {
        DomainError::Scheduler(msg.into())
    }
}
