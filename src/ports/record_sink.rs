//! Completed-record persistence port.

use async_trait::async_trait;

use crate::domain::collection::ParameterLog;
use crate::domain::foundation::DomainError;

/// Persists one completed collection cycle.
#[async_trait]
pub trait RecordSink: Send + Sync {
    /// # Errors
    ///
    /// - `Database` on persistence failure. The caller leaves the session
    ///   un-reset so the user can retry by resending the last answer.
    async fn insert(&self, record: &ParameterLog) -> Result<(), DomainError>;
}
