//! Per-user conversation session.
//!
//! One `CollectionSession` exists per session key and tracks where that
//! user is in the five-field walk. The session is the pure half of the
//! conversation engine: `apply_answer` decides reject/advance/complete
//! without touching any collaborator.
//!
//! # Invariants
//!
//! - While `Collecting`, `field_index` is a valid cursor into
//!   [`SchemaField::SEQUENCE`]; it is not advanced past the last field.
//! - The answers hold exactly the fields before the cursor (plus the last
//!   field, briefly, between acceptance and the post-persist reset).

use serde::{Deserialize, Serialize};

use super::fields::SchemaField;
use super::record::{CollectionContext, ParameterLog};
use super::validate::{validate, FieldRejection, FieldValue};

/// Lifecycle state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Created; data collection starts once eligibility is confirmed.
    #[default]
    AwaitingJoin,

    /// Walking the field sequence.
    Collecting,
}

/// Answers collected so far in the current cycle.
///
/// `evidence_url` is doubly optional: the outer level is "collected yet?",
/// the inner level is the `no evidence` opt-out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct Answers {
    value: Option<String>,
    log_unit: Option<String>,
    log_date: Option<String>,
    evidence_url: Option<Option<String>>,
    evidence_name: Option<String>,
}

/// Result of feeding one inbound answer to a collecting session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Answer failed validation; the cursor did not move and the same
    /// field will be re-requested.
    Rejected(FieldRejection),

    /// Answer accepted; `next_field` should now be requested.
    Advanced { next_field: SchemaField },

    /// The last answer was accepted and the cycle is complete. The session
    /// is deliberately NOT reset here: the caller resets it only after the
    /// record is persisted, so a failed save can be retried by resending
    /// the last answer.
    Complete { record: ParameterLog },
}

/// One user's conversation state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionSession {
    status: SessionStatus,
    field_index: usize,
    answers: Answers,
    context: CollectionContext,
}

impl CollectionSession {
    /// Creates a fresh session bound to the given identifier context.
    pub fn new(context: CollectionContext) -> Self {
        Self {
            status: SessionStatus::AwaitingJoin,
            field_index: 0,
            answers: Answers::default(),
            context,
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn field_index(&self) -> usize {
        self.field_index
    }

    pub fn context(&self) -> &CollectionContext {
        &self.context
    }

    /// Field currently being requested.
    pub fn current_field(&self) -> SchemaField {
        // The cursor is valid by construction; fall back to the first
        // field rather than panic if state was ever restored corrupt.
        SchemaField::at(self.field_index).unwrap_or(SchemaField::Value)
    }

    /// Transitions from `AwaitingJoin` into active collection.
    pub fn begin_collecting(&mut self) {
        self.status = SessionStatus::Collecting;
    }

    /// Back to the initial state for a new cycle. The identifier context
    /// survives so the next record is saved under the same collection.
    pub fn reset(&mut self) {
        self.status = SessionStatus::AwaitingJoin;
        self.field_index = 0;
        self.answers = Answers::default();
    }

    /// Validates one inbound answer for the current field and advances the
    /// cursor on acceptance. The input is already trimmed and lower-cased
    /// by the transport adapter.
    pub fn apply_answer(&mut self, input: &str) -> AnswerOutcome {
        let field = self.current_field();

        let accepted = match validate(field, input) {
            Ok(value) => value,
            Err(rejection) => return AnswerOutcome::Rejected(rejection),
        };
        self.record(field, accepted);

        if field.is_last() {
            AnswerOutcome::Complete {
                record: self.build_record(),
            }
        } else {
            self.field_index += 1;
            AnswerOutcome::Advanced {
                next_field: self.current_field(),
            }
        }
    }

    fn record(&mut self, field: SchemaField, value: FieldValue) {
        match field {
            SchemaField::Value => self.answers.value = value.into_option(),
            SchemaField::LogUnit => self.answers.log_unit = value.into_option(),
            SchemaField::LogDate => self.answers.log_date = value.into_option(),
            SchemaField::EvidenceUrl => self.answers.evidence_url = Some(value.into_option()),
            SchemaField::EvidenceName => self.answers.evidence_name = value.into_option(),
        }
    }

    /// All five answers are present when this runs: the cursor only
    /// reaches the last field after every prior field was accepted.
    fn build_record(&self) -> ParameterLog {
        ParameterLog {
            log_date: self.answers.log_date.clone().unwrap_or_default(),
            value: self.answers.value.clone().unwrap_or_default(),
            log_unit: self.answers.log_unit.clone().unwrap_or_default(),
            evidence_url: self.answers.evidence_url.clone().flatten(),
            evidence_name: self.answers.evidence_name.clone().unwrap_or_default(),
            process_id: self.context.process_id.clone(),
            para_id: self.context.para_id.clone(),
            data_collection_id: self.context.data_collection_id.clone(),
        }
    }
}
