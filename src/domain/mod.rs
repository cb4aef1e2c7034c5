//! Domain layer - the conversation state machine and its value objects.
//!
//! Everything here is pure: no I/O, no clocks, no collaborators. The
//! application layer drives these types and talks to the outside world
//! through ports.

pub mod collection;
pub mod foundation;
