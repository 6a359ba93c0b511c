//! Contact and reservation forms: field rules, localized error messages and
//! the local submission stub.
//!
//! Field-level rules are declared with `validator`; cross-field rules (stay
//! dates, guest limits from [`crate::config::FormSettings`]) are checked by
//! hand afterwards. Both end up in one [`FormErrors`] map keyed by field name
//! so components can render messages inline.

use std::collections::BTreeMap;

use validator::ValidationErrors;

use crate::t;

mod contact;
mod reservation;
mod submit;

pub use contact::{validate_contact, ContactRequest};
pub use reservation::{
    nightly_rate, quote_for, validate_reservation, Quote, ReservationRequest, Stay,
};
pub use submit::{submit, Acknowledgement, InquiryKind, SubmitError};

/// Why a single field was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldIssue {
    Required,
    Email,
    Phone,
    Length { min: Option<u64>, max: Option<u64> },
    Range { min: Option<i64>, max: Option<i64> },
    Date,
    DateInPast,
    StayOrder,
    StayTooLong { max_nights: u32 },
    Invalid,
}

impl FieldIssue {
    fn from_validator(error: &validator::ValidationError) -> Self {
        let param_u64 = |name: &str| error.params.get(name).and_then(|v| v.as_u64());
        let param_i64 = |name: &str| {
            error
                .params
                .get(name)
                .and_then(|v| v.as_f64())
                .map(|v| v as i64)
        };
        match error.code.as_ref() {
            "email" => Self::Email,
            "length" => Self::Length {
                min: param_u64("min"),
                max: param_u64("max"),
            },
            "range" => Self::Range {
                min: param_i64("min"),
                max: param_i64("max"),
            },
            _ => Self::Invalid,
        }
    }

    /// Localized inline message.
    pub fn message(&self) -> String {
        match *self {
            Self::Required => t!("form-error-required"),
            Self::Email => t!("form-error-email"),
            Self::Phone => t!("form-error-phone"),
            Self::Length {
                min: Some(min),
                max: Some(max),
            } => t!("form-error-length", min = (min as i64), max = (max as i64)),
            Self::Length {
                min: Some(min),
                max: None,
            } => t!("form-error-min-length", min = (min as i64)),
            Self::Length {
                min: None,
                max: Some(max),
            } => t!("form-error-max-length", max = (max as i64)),
            Self::Range {
                min: Some(min),
                max: Some(max),
            } => t!("form-error-range", min = min, max = max),
            Self::Range {
                min: Some(min),
                max: None,
            } => t!("form-error-min-value", min = min),
            Self::Date => t!("form-error-date"),
            Self::DateInPast => t!("form-error-date-past"),
            Self::StayOrder => t!("form-error-stay-order"),
            Self::StayTooLong { max_nights } => {
                t!("form-error-stay-too-long", max = (max_nights as i64))
            }
            Self::Length { .. } | Self::Range { .. } | Self::Invalid => {
                t!("form-error-invalid")
            }
        }
    }
}

/// Field name → first issue found for it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors(BTreeMap<String, FieldIssue>);

impl FormErrors {
    pub fn from_validation(result: Result<(), ValidationErrors>) -> Self {
        let mut errors = Self::default();
        if let Err(failed) = result {
            for (field, issues) in failed.field_errors() {
                if let Some(first) = issues.first() {
                    errors.insert(&field.to_string(), FieldIssue::from_validator(first));
                }
            }
        }
        errors
    }

    /// Record `issue` unless the field already has one.
    pub fn insert(&mut self, field: &str, issue: FieldIssue) {
        self.0.entry(field.to_string()).or_insert(issue);
    }

    /// Mark an empty required field; overrides any length issue for it.
    pub fn require(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.0.insert(field.to_string(), FieldIssue::Required);
        }
    }

    pub fn get(&self, field: &str) -> Option<&FieldIssue> {
        self.0.get(field)
    }

    /// Localized message for `field`, if it failed.
    pub fn message(&self, field: &str) -> Option<String> {
        self.get(field).map(FieldIssue::message)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Lifecycle of a form on screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FormStatus {
    #[default]
    Editing,
    Submitting,
    Sent(Acknowledgement),
    Failed(String),
}

impl FormStatus {
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}

/// Loose phone check: 7–20 characters of digits, spaces and `+-()`, with
/// at least 7 digits.
pub(crate) fn is_phone(raw: &str) -> bool {
    let trimmed = raw.trim();
    let allowed = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')'));
    let digits = trimmed.chars().filter(char::is_ascii_digit).count();
    allowed && (7..=20).contains(&trimmed.len()) && digits >= 7
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_check_accepts_common_formats() {
        assert!(is_phone("+1 (305) 555-0142"));
        assert!(is_phone("0034 600 123 456"));
        assert!(!is_phone("555-01"));
        assert!(!is_phone("call me maybe"));
        assert!(!is_phone("+1 305 555 0142 ext 9"));
    }

    #[test]
    fn first_issue_wins_but_required_overrides() {
        let mut errors = FormErrors::default();
        errors.insert("name", FieldIssue::Length { min: Some(2), max: None });
        errors.insert("name", FieldIssue::Invalid);
        assert_eq!(
            errors.get("name"),
            Some(&FieldIssue::Length { min: Some(2), max: None })
        );
        errors.require("name", "  ");
        assert_eq!(errors.get("name"), Some(&FieldIssue::Required));
        errors.require("email", "guest@example.com");
        assert!(errors.get("email").is_none());
    }

    #[test]
    fn messages_are_localized_strings() {
        crate::i18n::init();
        assert!(!FieldIssue::Required.message().is_empty());
        assert!(!FieldIssue::StayTooLong { max_nights: 30 }.message().is_empty());
    }

    #[test]
    fn empty_errors_convert_to_ok() {
        assert!(FormErrors::default().into_result().is_ok());
    }
}
