//! Collection domain - the five-field dialogue and its state machine.
//!
//! A collection cycle walks one user through the schema fields in order,
//! validating each answer, and ends with a [`ParameterLog`] ready for
//! persistence. [`CollectionSession`] holds one user's position in that
//! walk.

mod fields;
pub mod messages;
mod record;
mod session;
mod validate;

pub use fields::SchemaField;
pub use record::{CollectionContext, ParameterLog};
pub use session::{AnswerOutcome, CollectionSession, SessionStatus};
pub use validate::{validate, FieldRejection, FieldValue};
