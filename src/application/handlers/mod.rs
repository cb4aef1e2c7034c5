//! Command handlers.
//!
//! One handler per inbound operation: provisioning a collection for a
//! phone number, and processing one inbound WhatsApp message.

mod process_message;
mod setup_collection;

pub use process_message::{EngineStatus, ProcessMessageHandler};
pub use setup_collection::{SetupAck, SetupCollectionCommand, SetupCollectionHandler};
