use serde_json::Value;

use super::{check_email, FieldError, ValidationError, NAME_TRIMMED_MAX_LEN};

/// Waitlist form fields, in declaration order. Name is optional.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum WaitlistField {
    Email,
    Name,
}

impl WaitlistField {
    pub const ALL: [Self; 2] = [Self::Email, Self::Name];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Name => "name",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Name => "Name",
        }
    }
}

/// Checks a single field against the raw input. An empty name is fine.
#[must_use]
pub fn validate_field(field: WaitlistField, value: &str) -> Option<FieldError> {
    match field {
        WaitlistField::Email => check_email(value),
        WaitlistField::Name => check_name(value),
    }
}

fn check_name(value: &str) -> Option<FieldError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return None;
    }

    let len = trimmed.chars().count();
    if len > NAME_TRIMMED_MAX_LEN {
        Some(FieldError::MaxLength(len, NAME_TRIMMED_MAX_LEN))
    } else {
        None
    }
}

/// Server-side validation of a decoded JSON body. Email is required; a
/// missing or null name never errors, a non-string one does.
#[must_use]
pub fn validate_body(body: &Value) -> Vec<ValidationError> {
    let Some(map) = body.as_object() else {
        return vec![ValidationError::new(
            "body",
            "Invalid request body".to_owned(),
        )];
    };

    let mut errors = Vec::new();

    let email_err = match map.get(WaitlistField::Email.key()) {
        Some(Value::String(value)) => validate_field(WaitlistField::Email, value),
        _ => Some(FieldError::Required),
    };
    if let Some(err) = email_err {
        errors.push(ValidationError::new(
            WaitlistField::Email.key(),
            err.message(WaitlistField::Email.label()),
        ));
    }

    let name_err = match map.get(WaitlistField::Name.key()) {
        None | Some(Value::Null) => None,
        Some(Value::String(value)) => validate_field(WaitlistField::Name, value),
        Some(_) => Some(FieldError::NotAString),
    };
    if let Some(err) = name_err {
        errors.push(ValidationError::new(
            WaitlistField::Name.key(),
            err.message(WaitlistField::Name.label()),
        ));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_name_is_valid() {
        assert_eq!(validate_field(WaitlistField::Name, ""), None);
        assert_eq!(validate_field(WaitlistField::Name, "   "), None);
    }

    #[test]
    fn long_name_is_rejected() {
        assert_eq!(validate_field(WaitlistField::Name, &"a".repeat(100)), None);
        assert_eq!(
            validate_field(WaitlistField::Name, &"a".repeat(101)),
            Some(FieldError::MaxLength(101, 100))
        );
    }

    #[test]
    fn body_validation_requires_email() {
        let errors = validate_body(&json!({}));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "email");
        assert_eq!(errors[0].message, "Email is required");
    }

    #[test]
    fn body_validation_accepts_missing_and_null_name() {
        assert!(validate_body(&json!({ "email": "a@b.co" })).is_empty());
        assert!(validate_body(&json!({ "email": "a@b.co", "name": null })).is_empty());
        assert!(validate_body(&json!({ "email": "a@b.co", "name": "" })).is_empty());
    }

    #[test]
    fn body_validation_rejects_non_string_name() {
        let errors = validate_body(&json!({ "email": "a@b.co", "name": 3 }));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
        assert_eq!(errors[0].message, "Name must be a string");
    }

    #[test]
    fn body_validation_reports_email_first() {
        let errors = validate_body(&json!({ "email": "bad", "name": 3 }));

        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "email");
        assert_eq!(errors[0].message, "Please enter a valid email address");
        assert_eq!(errors[1].field, "name");
    }
}
