pub mod contact;
pub mod waitlist;

use serde::{Deserialize, Serialize};

pub const NAME_TRIMMED_MIN_LEN: usize = 2;
pub const NAME_TRIMMED_MAX_LEN: usize = 100;
pub const EMAIL_TRIMMED_MAX_LEN: usize = 254;
pub const MESSAGE_TRIMMED_MIN_LEN: usize = 10;
pub const MESSAGE_TRIMMED_MAX_LEN: usize = 5000;

/// Why a single form field failed validation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum FieldError {
    Required,
    MinLength(usize, usize),
    MaxLength(usize, usize),
    InvalidEmail,
    NotAString,
}

impl FieldError {
    /// The user-facing message for this error on the field named `label`.
    #[must_use]
    pub fn message(&self, label: &str) -> String {
        match self {
            Self::Required => format!("{label} is required"),
            Self::MinLength(_, min) => format!("{label} must be at least {min} characters"),
            Self::MaxLength(_, max) => format!("{label} must be less than {max} characters"),
            Self::InvalidEmail => "Please enter a valid email address".to_owned(),
            Self::NotAString => format!("{label} must be a string"),
        }
    }
}

/// One entry of the `details` list in a `Validation failed` response.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field: &str, message: String) -> Self {
        Self {
            field: field.to_owned(),
            message,
        }
    }
}

/// Accepts `local@domain` where local is non-empty and free of whitespace
/// and `@`, and domain additionally contains a dot that is neither its
/// first nor its last character.
fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }

    if domain.chars().any(|c| c.is_whitespace() || c == '@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Empty after trim -> required, bad format -> invalid, then the length cap.
pub(crate) fn check_email(value: &str) -> Option<FieldError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Some(FieldError::Required);
    }

    if !is_valid_email(trimmed) {
        return Some(FieldError::InvalidEmail);
    }

    let len = trimmed.chars().count();
    if len > EMAIL_TRIMMED_MAX_LEN {
        return Some(FieldError::MaxLength(len, EMAIL_TRIMMED_MAX_LEN));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_requires_local_part_and_dotted_domain() {
        assert!(is_valid_email("john@example.com"));
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.example.org"));

        assert!(!is_valid_email("invalid"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("john@example"));
        assert!(!is_valid_email("john@.com"));
        assert!(!is_valid_email("john@com."));
        assert!(!is_valid_email("jo hn@example.com"));
        assert!(!is_valid_email("john@exa mple.com"));
        assert!(!is_valid_email("john@@example.com"));
    }

    #[test]
    fn email_check_rule_order() {
        assert_eq!(check_email(""), Some(FieldError::Required));
        assert_eq!(check_email("   "), Some(FieldError::Required));
        assert_eq!(check_email("nope"), Some(FieldError::InvalidEmail));

        // an over-length address still has to look like an address first
        let local = "a".repeat(260);
        assert_eq!(check_email(&local), Some(FieldError::InvalidEmail));

        let long = format!("{}@example.com", "a".repeat(250));
        assert_eq!(
            check_email(&long),
            Some(FieldError::MaxLength(262, EMAIL_TRIMMED_MAX_LEN))
        );
    }

    #[test]
    fn email_length_boundary_is_exclusive() {
        // 254 characters total passes, 255 fails
        let at_cap = format!("{}@example.com", "a".repeat(254 - 12));
        assert_eq!(at_cap.chars().count(), 254);
        assert_eq!(check_email(&at_cap), None);

        let over_cap = format!("{}@example.com", "a".repeat(255 - 12));
        assert_eq!(
            check_email(&over_cap),
            Some(FieldError::MaxLength(255, EMAIL_TRIMMED_MAX_LEN))
        );
    }

    #[test]
    fn messages_render_with_field_label() {
        assert_eq!(FieldError::Required.message("Name"), "Name is required");
        assert_eq!(
            FieldError::MinLength(1, 2).message("Name"),
            "Name must be at least 2 characters"
        );
        assert_eq!(
            FieldError::MaxLength(101, 100).message("Name"),
            "Name must be less than 100 characters"
        );
        assert_eq!(
            FieldError::InvalidEmail.message("Email"),
            "Please enter a valid email address"
        );
        assert_eq!(
            FieldError::NotAString.message("Name"),
            "Name must be a string"
        );
    }
}
