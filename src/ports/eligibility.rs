//! Eligibility (sandbox join) port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, SessionKey};

/// Answers whether a user has joined the messaging sandbox and may start
/// data collection.
///
/// The production deployment runs a static always-joined implementation;
/// the port exists so the "not yet joined" conversation branch is
/// reachable once a real join signal is wired in.
#[async_trait]
pub trait EligibilityChecker: Send + Sync {
    async fn is_joined(&self, key: &SessionKey) -> Result<bool, DomainError>;
}
