//! Outbound message texts.
//!
//! Users and the dashboards scraping the conversation logs depend on these
//! exact strings; change them in lockstep with the product copy.

use super::fields::SchemaField;

/// Sent to the user when a collection is provisioned for their number.
pub const SETUP_WELCOME: &str =
    "Welcome! Let's start by collecting some information. Please say hello.";

/// First in-conversation message once the user is confirmed eligible.
pub const WELCOME_FIRST_PROMPT: &str =
    "Welcome! Let's start by collecting some information. Please provide the value.";

/// Nudge sent while the user has not yet joined the sandbox.
pub const JOIN_NUDGE: &str = "Please join the sandbox by sending the join code.";

/// Confirmation after a completed record is persisted.
pub const DATA_SAVED: &str = "Data saved successfully! We'll ask for new data in 24 hours.";

/// Sent when persistence fails at the completion step.
pub const SAVE_FAILED: &str = "Error saving data. Please try again later.";

/// Generic fallback when message handling fails unexpectedly.
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred. Please try again later.";

/// Reminder opening the next collection cycle after the 24-hour interval.
pub const REPROMPT: &str = "Let's collect new information. Please provide the value.";

/// Prompt requesting the given field.
pub fn field_prompt(field: SchemaField) -> String {
    format!("Please provide {}.", field.human_name())
}

/// Setup acknowledgment returned to the provisioning caller when the user
/// is already eligible.
pub fn setup_instructions(join_code: &str, sandbox_number: &str) -> String {
    format!(
        "Please send the message '{join_code}' to this WhatsApp number {sandbox_number} \
         to join the sandbox and say Hello!"
    )
}

/// Join-code instruction message texted to a not-yet-joined user.
pub fn join_code_instructions(join_code: &str, sandbox_number: &str) -> String {
    format!("Please send the message '{join_code}' to {sandbox_number} to join the sandbox.")
}

/// Setup acknowledgment for the not-yet-joined branch.
pub fn join_code_sent_ack(join_code: &str, sandbox_number: &str) -> String {
    format!(
        "Join code sent to {sandbox_number} with {join_code}. Please follow the instructions \
         to join WhatsApp bot, and say Hello!."
    )
}
