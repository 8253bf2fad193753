use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::components::notification::Notice;
use crate::forms::validation::{is_valid_email, is_valid_phone};

pub const REQUIRED_FIELDS: [&str; 3] = ["name", "email", "phone"];
pub const CONFIRMATION: &str = "Thank you for your appointment request! We will contact you soon.";

/// Field values from one submit attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormRecord {
    fields: BTreeMap<String, String>,
}

impl FormRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    fn is_blank(&self, name: &str) -> bool {
        self.get(name).map_or(true, |v| v.trim().is_empty())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = FormRecord::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("Please fill in all required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
}

/// Missing fields first (all reported together), then email format, then phone format.
pub fn validate(record: &FormRecord) -> Result<(), SubmissionError> {
    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|field| record.is_blank(field))
        .map(|field| field.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(SubmissionError::MissingFields(missing));
    }

    if !is_valid_email(record.get("email").unwrap_or_default()) {
        return Err(SubmissionError::InvalidEmail);
    }
    if !is_valid_phone(record.get("phone").unwrap_or_default()) {
        return Err(SubmissionError::InvalidPhone);
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub notice: Notice,
    pub reset_form: bool,
}

/// Nothing is sent anywhere; a valid record only earns a confirmation.
pub fn submit(record: &FormRecord) -> SubmissionOutcome {
    match validate(record) {
        Ok(()) => SubmissionOutcome { notice: Notice::success(CONFIRMATION), reset_form: true },
        Err(e) => SubmissionOutcome { notice: Notice::error(e.to_string()), reset_form: false },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::notification::Severity;

    fn record(name: &str, email: &str, phone: &str) -> FormRecord {
        [("name", name), ("email", email), ("phone", phone), ("message", "Knee pain")]
            .into_iter()
            .collect()
    }

    #[test]
    fn blank_email_is_reported_and_form_kept() {
        let outcome = submit(&record("Asha", "", "+1 (555) 123-4567"));
        assert_eq!(outcome.notice.severity, Severity::Error);
        assert!(outcome.notice.message.contains("email"));
        assert!(!outcome.notice.message.contains("name"));
        assert!(!outcome.reset_form);
    }

    #[test]
    fn all_missing_fields_listed_in_order() {
        let mut rec = FormRecord::new();
        rec.insert("email", "   ");
        assert_eq!(
            validate(&rec),
            Err(SubmissionError::MissingFields(vec![
                "name".to_string(),
                "email".to_string(),
                "phone".to_string(),
            ]))
        );
        assert_eq!(
            SubmissionError::MissingFields(vec!["name".into(), "phone".into()]).to_string(),
            "Please fill in all required fields: name, phone"
        );
    }

    #[test]
    fn missing_fields_win_over_format_errors() {
        let err = validate(&record("", "not-an-email", "12")).unwrap_err();
        assert_eq!(err, SubmissionError::MissingFields(vec!["name".to_string()]));
    }

    #[test]
    fn email_checked_before_phone() {
        assert_eq!(validate(&record("Asha", "asha@", "12")), Err(SubmissionError::InvalidEmail));
        assert_eq!(
            validate(&record("Asha", "asha@example.com", "12")),
            Err(SubmissionError::InvalidPhone)
        );
    }

    #[test]
    fn valid_submission_confirms_and_resets() {
        let outcome = submit(&record("Asha", "asha@example.com", "5551234567"));
        assert_eq!(outcome.notice, Notice::success(CONFIRMATION));
        assert!(outcome.reset_form);
    }

    #[test]
    fn record_serializes_as_flat_object() {
        let json = serde_json::to_string(&record("Asha", "a@b.co", "5551234567")).unwrap();
        assert_eq!(
            json,
            r#"{"email":"a@b.co","message":"Knee pain","name":"Asha","phone":"5551234567"}"#
        );
    }
}
