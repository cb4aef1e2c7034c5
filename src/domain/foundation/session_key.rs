//! Transport-qualified session key.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Key identifying one conversation: the sender address qualified by its
/// transport scheme, e.g. `whatsapp:+15551234567`.
///
/// Qualifying with the transport keeps the same raw number on two transports
/// from colliding in the session store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionKey(String);

impl SessionKey {
    /// Builds the key for a raw phone number on the WhatsApp transport.
    pub fn whatsapp(phone_number: &str) -> Self {
        SessionKey(format!("whatsapp:{phone_number}"))
    }

    /// Wraps an already-qualified sender address (the webhook `From` field
    /// arrives pre-qualified, e.g. `whatsapp:+15551234567`).
    pub fn from_qualified(address: impl Into<String>) -> Self {
        SessionKey(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
