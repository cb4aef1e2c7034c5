//! Ports - interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between the
//! conversation engine and the outside world. Adapters implement them.
//!
//! - [`Notifier`] - outbound text message delivery (Twilio in production)
//! - [`RecordSink`] - persistence for completed records (PostgreSQL)
//! - [`SessionStore`] - shared per-key conversation state
//! - [`EligibilityChecker`] - has this user joined the sandbox?
//! - [`PromptQueue`] - durable due-time queue driving the 24-hour reprompt

mod eligibility;
mod notifier;
mod record_sink;
mod scheduler;
mod session_store;

pub use eligibility::EligibilityChecker;
pub use notifier::Notifier;
pub use record_sink::RecordSink;
pub use scheduler::PromptQueue;
pub use session_store::{SessionEntry, SessionStore};
