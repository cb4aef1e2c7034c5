//! Shared domain primitives.

mod errors;
mod session_key;

pub use errors::DomainError;
pub use session_key::SessionKey;
