//! Per-field answer validation.
//!
//! Pure functions: raw inbound text in, normalized value or rejection out.
//! Callers trim and lower-case the text before it reaches here, so the
//! `no evidence` comparison is already case-folded.

use chrono::NaiveDate;
use thiserror::Error;

use super::fields::SchemaField;

/// Normalized value accepted for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Stored verbatim (or normalized, for dates).
    Text(String),
    /// Explicitly absent; only produced by the `no evidence` opt-out.
    Absent,
}

impl FieldValue {
    pub fn into_option(self) -> Option<String> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Absent => None,
        }
    }
}

/// Why an answer was rejected. The `#[error]` text is the exact message
/// sent back to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldRejection {
    #[error("Invalid value. Please provide a numeric value.")]
    NonNumericValue,

    #[error("Invalid date format. Please provide the log date in YYYY-MM-DD format.")]
    UnparseableDate,

    #[error("Invalid URL. Please provide a valid URL or type \"No evidence\".")]
    InvalidUrl,
}

/// Validates one answer against the rules for `field`.
pub fn validate(field: SchemaField, input: &str) -> Result<FieldValue, FieldRejection> {
    match field {
        SchemaField::Value => validate_value(input),
        SchemaField::LogUnit | SchemaField::EvidenceName => {
            Ok(FieldValue::Text(input.to_string()))
        }
        SchemaField::LogDate => validate_date(input),
        SchemaField::EvidenceUrl => validate_evidence_url(input),
    }
}

/// The value must contain a decimal digit somewhere; it is stored as given,
/// not parsed to a number ("12.5 kg approx" is acceptable).
fn validate_value(input: &str) -> Result<FieldValue, FieldRejection> {
    if input.chars().any(|c| c.is_ascii_digit()) {
        Ok(FieldValue::Text(input.to_string()))
    } else {
        Err(FieldRejection::NonNumericValue)
    }
}

/// The date must be a real calendar date under `%Y-%m-%d`; the accepted
/// value is re-emitted zero-padded.
fn validate_date(input: &str) -> Result<FieldValue, FieldRejection> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map(|d| FieldValue::Text(d.format("%Y-%m-%d").to_string()))
        .map_err(|_| FieldRejection::UnparseableDate)
}

/// Either the exact opt-out token, or anything starting with `http`.
///
/// The prefix check is deliberately loose (it also admits `httpfoo`); that
/// matches the service's established behavior and callers rely on it.
fn validate_evidence_url(input: &str) -> Result<FieldValue, FieldRejection> {
    if input == "no evidence" {
        Ok(FieldValue::Absent)
    } else if input.starts_with("http") {
        Ok(FieldValue::Text(input.to_string()))
    } else {
        Err(FieldRejection::InvalidUrl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    mod value {
        use super::*;

        #[test]
        fn accepts_plain_number_verbatim() {
            assert_eq!(
                validate(SchemaField::Value, "12.5"),
                Ok(FieldValue::Text("12.5".to_string()))
            );
        }

        #[test]
        fn accepts_number_embedded_in_text() {
            assert_eq!(
                validate(SchemaField::Value, "about 70 kg"),
                Ok(FieldValue::Text("about 70 kg".to_string()))
            );
        }

        #[test]
        fn rejects_text_without_digits() {
            assert_eq!(
                validate(SchemaField::Value, "a lot"),
                Err(FieldRejection::NonNumericValue)
            );
        }

        proptest! {
            #[test]
            fn accepted_iff_a_digit_is_present(input in ".{0,40}") {
                let has_digit = input.chars().any(|c| c.is_ascii_digit());
                prop_assert_eq!(validate(SchemaField::Value, &input).is_ok(), has_digit);
            }
        }
    }

    mod log_date {
        use super::*;

        #[test]
        fn accepts_valid_date() {
            assert_eq!(
                validate(SchemaField::LogDate, "2024-05-01"),
                Ok(FieldValue::Text("2024-05-01".to_string()))
            );
        }

        #[test]
        fn accepts_leap_day() {
            assert_eq!(
                validate(SchemaField::LogDate, "2024-02-29"),
                Ok(FieldValue::Text("2024-02-29".to_string()))
            );
        }

        #[test]
        fn rejects_nonexistent_calendar_day() {
            assert_eq!(
                validate(SchemaField::LogDate, "2024-02-30"),
                Err(FieldRejection::UnparseableDate)
            );
        }

        #[test]
        fn rejects_non_leap_february_29() {
            assert_eq!(
                validate(SchemaField::LogDate, "2023-02-29"),
                Err(FieldRejection::UnparseableDate)
            );
        }

        #[test]
        fn rejects_wrong_field_order() {
            assert_eq!(
                validate(SchemaField::LogDate, "02-29-2024"),
                Err(FieldRejection::UnparseableDate)
            );
        }

        #[test]
        fn rejects_free_text() {
            assert_eq!(
                validate(SchemaField::LogDate, "yesterday"),
                Err(FieldRejection::UnparseableDate)
            );
        }
    }

    mod evidence_url {
        use super::*;

        #[test]
        fn opt_out_token_yields_absent() {
            assert_eq!(
                validate(SchemaField::EvidenceUrl, "no evidence"),
                Ok(FieldValue::Absent)
            );
        }

        #[test]
        fn https_url_stored_verbatim() {
            assert_eq!(
                validate(SchemaField::EvidenceUrl, "https://x.co/e.jpg"),
                Ok(FieldValue::Text("https://x.co/e.jpg".to_string()))
            );
        }

        #[test]
        fn bare_http_prefix_is_accepted() {
            // Documented looseness: any leading "http" passes.
            assert_eq!(
                validate(SchemaField::EvidenceUrl, "httpfoo"),
                Ok(FieldValue::Text("httpfoo".to_string()))
            );
        }

        #[test]
        fn other_schemes_rejected() {
            assert_eq!(
                validate(SchemaField::EvidenceUrl, "ftp://x"),
                Err(FieldRejection::InvalidUrl)
            );
        }
    }

    mod free_text_fields {
        use super::*;

        #[test]
        fn log_unit_always_accepted() {
            assert_eq!(
                validate(SchemaField::LogUnit, "kg"),
                Ok(FieldValue::Text("kg".to_string()))
            );
            assert_eq!(
                validate(SchemaField::LogUnit, ""),
                Ok(FieldValue::Text(String::new()))
            );
        }

        #[test]
        fn evidence_name_always_accepted() {
            assert_eq!(
                validate(SchemaField::EvidenceName, "scale photo"),
                Ok(FieldValue::Text("scale photo".to_string()))
            );
        }
    }
}
