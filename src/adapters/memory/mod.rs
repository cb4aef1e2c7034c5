//! In-memory adapters.
//!
//! The session store is in-memory in production too (sessions are cheap to
//! rebuild and scoped to one process); the prompt queue's in-memory form
//! backs tests and single-node development.

mod prompt_queue;
mod session_store;

pub use prompt_queue::InMemoryPromptQueue;
pub use session_store::InMemorySessionStore;
