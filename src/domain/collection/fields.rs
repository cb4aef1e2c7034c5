//! The schema field sequence.
//!
//! Order is semantically significant: each field is requested strictly
//! after the previous one is accepted.

use serde::{Deserialize, Serialize};

/// One of the five pieces of data collected per cycle, in collection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaField {
    Value,
    LogUnit,
    LogDate,
    EvidenceUrl,
    EvidenceName,
}

impl SchemaField {
    /// The fixed collection order.
    pub const SEQUENCE: [SchemaField; 5] = [
        SchemaField::Value,
        SchemaField::LogUnit,
        SchemaField::LogDate,
        SchemaField::EvidenceUrl,
        SchemaField::EvidenceName,
    ];

    /// Field at the given cursor position, if in range.
    pub fn at(index: usize) -> Option<SchemaField> {
        Self::SEQUENCE.get(index).copied()
    }

    /// Snake-case name as stored in the record.
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaField::Value => "value",
            SchemaField::LogUnit => "log_unit",
            SchemaField::LogDate => "log_date",
            SchemaField::EvidenceUrl => "evidence_url",
            SchemaField::EvidenceName => "evidence_name",
        }
    }

    /// Human-readable form used in prompts: underscores become spaces.
    pub fn human_name(&self) -> String {
        self.as_str().replace('_', " ")
    }

    /// True for the last field of the sequence.
    pub fn is_last(&self) -> bool {
        *self == SchemaField::EvidenceName
    }
}
