//! Field-level validation errors shared by forms and API serializers.
//!
//! Both input paths (urlencoded page forms and JSON payloads) reduce their
//! failures to the same flat list of `{ field, message }` pairs so the page
//! templates and the API envelope can render them identically.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::Date;

/// Message for a missing or blank required field.
pub const REQUIRED: &str = "This field is required.";

/// Message for a short-text field over its length limit.
pub const TOO_LONG: &str = "Ensure this field has no more than 100 characters.";

/// Message for a date that is not `YYYY-MM-DD`.
pub const INVALID_DATE: &str = "Enter a valid date.";

/// Wire format for `DATE` fields.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single validation failure attached to a named field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// An ordered collection of field errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// A one-entry error set.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(field, message);
        errors
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// First message recorded for `field`, if any.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Append every error from `other`, then re-sort by field name.
    pub fn merge(&mut self, other: FieldErrors) {
        self.0.extend(other.0);
        self.sort();
    }

    /// `Ok(value)` when no errors were collected, otherwise `Err(self)`.
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }

    fn sort(&mut self) {
        // Stable sort keeps per-field message order.
        self.0.sort_by(|a, b| a.field.cmp(&b.field));
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl From<validator::ValidationErrors> for FieldErrors {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut out = FieldErrors::new();
        for (field, field_errors) in errors.field_errors() {
            for err in field_errors {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                out.push(field.to_string(), message);
            }
        }
        out.sort();
        out
    }
}

/// Serde helper: trims strings and maps blank values to `None`.
///
/// Browsers submit every form input, so an untouched optional field arrives
/// as `""`. JSON payloads go through the same rule so `"name": ""` and a
/// missing `name` behave alike.
pub fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }))
}

/// Parse an optional `YYYY-MM-DD` value, recording a field error on failure.
pub fn clean_date(field: &str, value: Option<&str>, errors: &mut FieldErrors) -> Option<Date> {
    let raw = value?;
    match Date::parse_from_str(raw, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push(field, INVALID_DATE);
            None
        }
    }
}

/// Message for a value outside an enumerated set of choices.
pub fn invalid_choice(value: &str) -> String {
    format!("Select a valid choice. {value} is not one of the available choices.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(required(message = "This field is required."))]
        name: Option<String>,
        #[validate(length(max = 3, message = "too long"))]
        code: Option<String>,
    }

    #[derive(Deserialize)]
    struct Blankable {
        #[serde(default, deserialize_with = "empty_string_as_none")]
        value: Option<String>,
    }

    #[test]
    fn validator_errors_convert_sorted_by_field() {
        let sample = Sample {
            name: None,
            code: Some("abcd".into()),
        };
        let errors: FieldErrors = sample.validate().unwrap_err().into();

        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["code", "name"]);
        assert_eq!(errors.message_for("name"), Some(REQUIRED));
        assert_eq!(errors.message_for("code"), Some("too long"));
    }

    #[test]
    fn blank_strings_become_none() {
        let parsed: Blankable = serde_json::from_str(r#"{"value": "   "}"#).unwrap();
        assert_eq!(parsed.value, None);

        let parsed: Blankable = serde_json::from_str(r#"{"value": " hi "}"#).unwrap();
        assert_eq!(parsed.value.as_deref(), Some("hi"));

        let parsed: Blankable = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.value, None);
    }

    #[test]
    fn clean_date_accepts_iso_dates() {
        let mut errors = FieldErrors::new();
        let date = clean_date("start_date", Some("2024-02-29"), &mut errors);
        assert_eq!(date, Date::from_ymd_opt(2024, 2, 29));
        assert!(errors.is_empty());
    }

    #[test]
    fn clean_date_records_error_for_garbage() {
        let mut errors = FieldErrors::new();
        assert_eq!(clean_date("end_date", Some("29/02/2024"), &mut errors), None);
        assert_eq!(errors.message_for("end_date"), Some(INVALID_DATE));
    }

    #[test]
    fn clean_date_skips_missing_values() {
        let mut errors = FieldErrors::new();
        assert_eq!(clean_date("end_date", None, &mut errors), None);
        assert!(errors.is_empty());
    }

    #[test]
    fn into_result_reflects_emptiness() {
        assert_eq!(FieldErrors::new().into_result(5), Ok(5));
        let errors = FieldErrors::single("name", REQUIRED);
        assert_eq!(errors.clone().into_result(5), Err(errors));
    }

    #[test]
    fn display_joins_fields() {
        let mut errors = FieldErrors::single("name", REQUIRED);
        errors.push("client", REQUIRED);
        assert_eq!(
            errors.to_string(),
            "name: This field is required.; client: This field is required."
        );
    }
}
