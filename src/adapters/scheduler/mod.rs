//! Background scheduling services.

mod reprompt_worker;

pub use reprompt_worker::{RepromptWorker, RepromptWorkerConfig};
