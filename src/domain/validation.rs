//! Validation - Client-Side Field Checks
//!
//! The address check is a loose `local@domain.tld` shape test, not RFC 5322.
//! Borderline inputs such as `a@b.c.d` must keep passing.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::draft::{Draft, Field};

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email shape pattern compiles")
});

/// Why a field failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    EmailRequired,
    EmailInvalid,
    SubjectRequired,
    BodyRequired,
}

impl FieldError {
    /// English message shown next to the field
    pub fn message(self) -> &'static str {
        match self {
            FieldError::EmailRequired => "Email address is required",
            FieldError::EmailInvalid => "Please enter a valid email address",
            FieldError::SubjectRequired => "Subject is required",
            FieldError::BodyRequired => "Message body is required",
        }
    }

    /// Translation key for [`FieldError::message`]
    pub fn i18n_key(self) -> &'static str {
        match self {
            FieldError::EmailRequired => "validation.email_required",
            FieldError::EmailInvalid => "validation.email_invalid",
            FieldError::SubjectRequired => "validation.subject_required",
            FieldError::BodyRequired => "validation.body_required",
        }
    }
}

/// Currently active per-field errors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationState {
    errors: BTreeMap<Field, FieldError>,
}

impl ValidationState {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    /// Drop the error for `field`; returns whether one was present
    pub fn clear_field(&mut self, field: Field) -> bool {
        self.errors.remove(&field).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.errors.iter().map(|(field, error)| (*field, *error))
    }

    fn insert(&mut self, field: Field, error: FieldError) {
        self.errors.insert(field, error);
    }
}

/// Loose `local@domain.tld` shape check, applied to the raw (untrimmed) value
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}

/// Check every field of the draft; the result holds only the failing fields.
pub fn validate(draft: &Draft) -> ValidationState {
    let mut state = ValidationState::default();

    if draft.recipient_email.trim().is_empty() {
        state.insert(Field::RecipientEmail, FieldError::EmailRequired);
    } else if !is_valid_email(&draft.recipient_email) {
        state.insert(Field::RecipientEmail, FieldError::EmailInvalid);
    }

    if draft.subject.trim().is_empty() {
        state.insert(Field::Subject, FieldError::SubjectRequired);
    }

    if draft.body_text.trim().is_empty() {
        state.insert(Field::BodyText, FieldError::BodyRequired);
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> Draft {
        Draft::new("user@example.com", "Hi", "Hello")
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        assert!(validate(&valid_draft()).is_empty());
    }

    #[test]
    fn test_each_blank_field_fails_alone() {
        for field in Field::ALL {
            for blank in ["", "   ", "\t\n"] {
                let mut draft = valid_draft();
                draft.set(field, blank);
                let errors = validate(&draft);
                assert_eq!(errors.len(), 1, "field {field:?} blank {blank:?}");
                assert!(errors.contains(field));
            }
        }
    }

    #[test]
    fn test_required_messages() {
        let errors = validate(&Draft::default());
        assert_eq!(errors.len(), 3);
        assert_eq!(
            errors.get(Field::RecipientEmail).map(FieldError::message),
            Some("Email address is required")
        );
        assert_eq!(
            errors.get(Field::Subject).map(FieldError::message),
            Some("Subject is required")
        );
        assert_eq!(
            errors.get(Field::BodyText).map(FieldError::message),
            Some("Message body is required")
        );
    }

    #[test]
    fn test_malformed_address() {
        let mut draft = valid_draft();
        draft.recipient_email = "not-an-email".to_string();
        let errors = validate(&draft);
        assert_eq!(
            errors.get(Field::RecipientEmail).map(FieldError::message),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn test_loose_email_shape() {
        for ok in ["user@example.com", "a@b.c", "a@b.c.d", "first.last+tag@sub.domain.io"] {
            assert!(is_valid_email(ok), "{ok} should pass");
        }
        for bad in ["a@b", "a@@b.c", "@b.c", "a@.c", "a@b.", " a@b.c", "a b@c.d", "a@b.c "] {
            assert!(!is_valid_email(bad), "{bad:?} should fail");
        }
    }

    #[test]
    fn test_validate_is_pure() {
        let draft = Draft::new("nope", "", "body");
        let snapshot = draft.clone();
        let first = validate(&draft);
        let second = validate(&draft);
        assert_eq!(first, second);
        assert_eq!(draft, snapshot);
    }

    #[test]
    fn test_clear_field() {
        let mut errors = validate(&Draft::default());
        assert!(errors.clear_field(Field::Subject));
        assert!(!errors.clear_field(Field::Subject));
        assert_eq!(errors.len(), 2);
    }
}
