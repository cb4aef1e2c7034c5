//! Twilio messaging adapter.

mod notifier;

pub use notifier::TwilioNotifier;
