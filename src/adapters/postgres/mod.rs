//! PostgreSQL adapters.

mod parameter_log_sink;
mod prompt_queue;

pub use parameter_log_sink::PostgresRecordSink;
pub use prompt_queue::PostgresPromptQueue;
