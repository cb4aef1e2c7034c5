//! Static eligibility checker.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, SessionKey};
use crate::ports::EligibilityChecker;

/// Answers the same for every user.
///
/// Stands in until a real join signal (e.g. Twilio sandbox membership)
/// is wired up; the default is "everyone has joined".
pub struct StaticEligibility {
    joined: bool,
}

impl StaticEligibility {
    pub fn new(joined: bool) -> Self {
        Self { joined }
    }

    /// The production default: collection starts immediately.
    pub fn always_joined() -> Self {
        Self::new(true)
    }
}

#[async_trait]
impl EligibilityChecker for StaticEligibility {
    async fn is_joined(&self, _key: &SessionKey) -> Result<bool, DomainError> {
        Ok(self.joined)
    }
}
