//! Adapters - implementations of the ports against real infrastructure.

pub mod eligibility;
pub mod http;
pub mod memory;
pub mod postgres;
pub mod scheduler;
pub mod twilio;
