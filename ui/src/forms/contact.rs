use serde::Serialize;
use validator::Validate;

use super::{is_phone, FieldIssue, FormErrors};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Validate)]
pub struct ContactRequest {
    #[validate(length(min = 2, max = 80))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    /// Optional.
    pub phone: String,
    #[validate(length(min = 3, max = 120))]
    pub subject: String,
    #[validate(length(min = 10, max = 2000))]
    pub message: String,
}

pub fn validate_contact(request: &ContactRequest) -> Result<(), FormErrors> {
    let mut errors = FormErrors::from_validation(request.validate());
    errors.require("name", &request.name);
    errors.require("email", &request.email);
    errors.require("subject", &request.subject);
    errors.require("message", &request.message);
    if !request.phone.trim().is_empty() && !is_phone(&request.phone) {
        errors.insert("phone", FieldIssue::Phone);
    }
    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactRequest {
        ContactRequest {
            name: "Ana Ruiz".into(),
            email: "ana@example.com".into(),
            phone: String::new(),
            subject: "Airport transfer".into(),
            message: "Can you arrange a pickup on the 14th?".into(),
        }
    }

    #[test]
    fn complete_request_passes() {
        assert!(validate_contact(&filled()).is_ok());
    }

    #[test]
    fn empty_request_flags_every_required_field() {
        let errors = validate_contact(&ContactRequest::default()).unwrap_err();
        for field in ["name", "email", "subject", "message"] {
            assert_eq!(errors.get(field), Some(&FieldIssue::Required), "{field}");
        }
        assert!(errors.get("phone").is_none());
    }

    #[test]
    fn bad_email_and_short_message_are_reported() {
        let request = ContactRequest {
            email: "not-an-address".into(),
            message: "hi".into(),
            ..filled()
        };
        let errors = validate_contact(&request).unwrap_err();
        assert_eq!(errors.get("email"), Some(&FieldIssue::Email));
        assert!(matches!(
            errors.get("message"),
            Some(FieldIssue::Length { min: Some(10), .. })
        ));
    }

    #[test]
    fn optional_phone_is_checked_when_present() {
        let request = ContactRequest {
            phone: "12ab".into(),
            ..filled()
        };
        let errors = validate_contact(&request).unwrap_err();
        assert_eq!(errors.get("phone"), Some(&FieldIssue::Phone));
        assert_eq!(errors.len(), 1);
    }
}
