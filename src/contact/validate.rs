use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Blur-time hint for the email input: flag only non-empty, invalid values.
pub fn email_needs_attention(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && !is_valid_email(value)
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Name must be at least 2 characters long")]
    NameTooShort,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Subject must be at least 3 characters long")]
    SubjectTooShort,
    #[error("Message must be at least 10 characters long")]
    MessageTooShort,
}

/// Every failed rule of one submission, in field order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Please fix the following:{}", bullet_list(.0))]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn bullet_list(errors: &[FieldError]) -> String {
    errors.iter().map(|e| format!("\n• {e}")).collect()
}

/// Raw values of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Fields that passed validation. Only these reach the relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage(ContactFields);

impl ContactMessage {
    pub fn fields(&self) -> &ContactFields {
        &self.0
    }
}

fn min_len(value: &str, len: usize) -> bool {
    value.trim().chars().count() >= len
}

impl ContactFields {
    pub fn validate(self) -> Result<ContactMessage, ValidationErrors> {
        let mut errors = Vec::new();
        if !min_len(&self.name, 2) {
            errors.push(FieldError::NameTooShort);
        }
        if !is_valid_email(&self.email) {
            errors.push(FieldError::InvalidEmail);
        }
        if !min_len(&self.subject, 3) {
            errors.push(FieldError::SubjectTooShort);
        }
        if !min_len(&self.message, 10) {
            errors.push(FieldError::MessageTooShort);
        }

        if errors.is_empty() {
            Ok(ContactMessage(self))
        } else {
            Err(ValidationErrors(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, email: &str, subject: &str, message: &str) -> ContactFields {
        ContactFields {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    #[test]
    fn every_bad_field_is_reported() {
        let errors = fields("A", "bad", "Hi", "short").validate().unwrap_err();
        assert_eq!(
            errors.errors(),
            &[
                FieldError::NameTooShort,
                FieldError::InvalidEmail,
                FieldError::SubjectTooShort,
                FieldError::MessageTooShort,
            ]
        );
    }

    #[test]
    fn good_fields_pass() {
        let input = fields(
            "Jane Doe",
            "jane@example.com",
            "Hello there",
            "This is a sufficiently long message.",
        );
        let message = input.clone().validate().expect("valid form");
        assert_eq!(message.fields(), &input);
    }

    #[test]
    fn empty_form_fails_every_rule() {
        let errors = ContactFields::default().validate().unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn lengths_are_measured_after_trimming() {
        let errors = fields("  J  ", "j@x.io", "  ab ", "   123456789   ")
            .validate()
            .unwrap_err();
        assert_eq!(
            errors.errors(),
            &[
                FieldError::NameTooShort,
                FieldError::SubjectTooShort,
                FieldError::MessageTooShort
            ]
        );
        assert!(fields("Jo", "j@x.io", "abc", "1234567890").validate().is_ok());
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email("a.b+c@sub.domain.org"));
        assert!(!is_valid_email("jane@example"));
        assert!(!is_valid_email("jane example@x.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("jane@@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn blur_hint_ignores_empty_input() {
        assert!(!email_needs_attention(""));
        assert!(!email_needs_attention("   "));
        assert!(!email_needs_attention(" jane@example.com "));
        assert!(email_needs_attention("jane@"));
    }

    #[test]
    fn aggregated_message_lists_each_error() {
        let errors = fields("A", "bad", "Subject", "A long enough message")
            .validate()
            .unwrap_err();
        assert_eq!(
            errors.to_string(),
            "Please fix the following:\n• Name must be at least 2 characters long\n• Please enter a valid email address"
        );
    }
}
