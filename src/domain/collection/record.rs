//! Completed record and its external identifier context.

use serde::{Deserialize, Serialize};

/// External identifier triple a collection is provisioned under.
///
/// Attached to the session at setup time so two users provisioned in quick
/// succession cannot clobber each other's identifiers. Members are
/// individually optional: the provisioning call only requires the phone
/// number, and a session created by an unsolicited inbound message has an
/// empty context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionContext {
    pub process_id: Option<String>,
    pub para_id: Option<String>,
    pub data_collection_id: Option<String>,
}

impl CollectionContext {
    pub fn new(
        process_id: Option<String>,
        para_id: Option<String>,
        data_collection_id: Option<String>,
    ) -> Self {
        Self {
            process_id,
            para_id,
            data_collection_id,
        }
    }
}

/// One completed collection cycle, ready for the record sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterLog {
    pub log_date: String,
    pub value: String,
    pub log_unit: String,
    pub evidence_url: Option<String>,
    pub evidence_name: String,
    pub process_id: Option<String>,
    pub para_id: Option<String>,
    pub data_collection_id: Option<String>,
}
