use serde_json::Value;

use super::{
    check_email, FieldError, ValidationError, MESSAGE_TRIMMED_MAX_LEN, MESSAGE_TRIMMED_MIN_LEN,
    NAME_TRIMMED_MAX_LEN, NAME_TRIMMED_MIN_LEN,
};

/// Contact form fields, in declaration order.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }
}

/// Checks a single field against the raw input. First failing rule wins.
#[must_use]
pub fn validate_field(field: ContactField, value: &str) -> Option<FieldError> {
    match field {
        ContactField::Name => check_name(value),
        ContactField::Email => check_email(value),
        ContactField::Message => check_message(value),
    }
}

fn check_name(value: &str) -> Option<FieldError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Some(FieldError::Required);
    }

    let len = trimmed.chars().count();
    if len < NAME_TRIMMED_MIN_LEN {
        Some(FieldError::MinLength(len, NAME_TRIMMED_MIN_LEN))
    } else if len > NAME_TRIMMED_MAX_LEN {
        Some(FieldError::MaxLength(len, NAME_TRIMMED_MAX_LEN))
    } else {
        None
    }
}

fn check_message(value: &str) -> Option<FieldError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Some(FieldError::Required);
    }

    let len = trimmed.chars().count();
    if len < MESSAGE_TRIMMED_MIN_LEN {
        Some(FieldError::MinLength(len, MESSAGE_TRIMMED_MIN_LEN))
    } else if len > MESSAGE_TRIMMED_MAX_LEN {
        Some(FieldError::MaxLength(len, MESSAGE_TRIMMED_MAX_LEN))
    } else {
        None
    }
}

/// Server-side validation of a decoded JSON body. Every field is required
/// here; missing, null or wrong-typed values report the field as missing.
/// Errors come back in field declaration order.
#[must_use]
pub fn validate_body(body: &Value) -> Vec<ValidationError> {
    let Some(map) = body.as_object() else {
        return vec![ValidationError::new(
            "body",
            "Invalid request body".to_owned(),
        )];
    };

    let mut errors = Vec::new();

    for field in ContactField::ALL {
        let err = match map.get(field.key()) {
            Some(Value::String(value)) => validate_field(field, value),
            _ => Some(FieldError::Required),
        };

        if let Some(err) = err {
            errors.push(ValidationError::new(
                field.key(),
                err.message(field.label()),
            ));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn name_rule_order_and_boundaries() {
        assert_eq!(
            validate_field(ContactField::Name, ""),
            Some(FieldError::Required)
        );
        assert_eq!(
            validate_field(ContactField::Name, "  "),
            Some(FieldError::Required)
        );
        assert_eq!(
            validate_field(ContactField::Name, "J"),
            Some(FieldError::MinLength(1, 2))
        );
        assert_eq!(validate_field(ContactField::Name, "Jo"), None);
        assert_eq!(validate_field(ContactField::Name, &"a".repeat(100)), None);
        assert_eq!(
            validate_field(ContactField::Name, &"a".repeat(101)),
            Some(FieldError::MaxLength(101, 100))
        );
    }

    #[test]
    fn message_boundaries_are_exact() {
        assert_eq!(
            validate_field(ContactField::Message, &"m".repeat(9)),
            Some(FieldError::MinLength(9, 10))
        );
        assert_eq!(validate_field(ContactField::Message, &"m".repeat(10)), None);
        assert_eq!(
            validate_field(ContactField::Message, &"m".repeat(5000)),
            None
        );
        assert_eq!(
            validate_field(ContactField::Message, &"m".repeat(5001)),
            Some(FieldError::MaxLength(5001, 5000))
        );
    }

    #[test]
    fn validation_is_trim_idempotent() {
        for field in ContactField::ALL {
            for raw in ["", "  J  ", " john@example.com ", "  a valid message  "] {
                assert_eq!(
                    validate_field(field, raw),
                    validate_field(field, raw.trim()),
                    "field {field:?} diverges on {raw:?}"
                );
            }
        }
    }

    #[test]
    fn body_validation_reports_all_empty_fields() {
        let errors = validate_body(&json!({ "name": "", "email": "", "message": "" }));

        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0].message, "Name is required");
        assert_eq!(errors[1].message, "Email is required");
        assert_eq!(errors[2].message, "Message is required");
    }

    #[test]
    fn body_validation_passes_on_valid_input() {
        let errors = validate_body(&json!({
            "name": "John Doe",
            "email": "john@example.com",
            "message": "This is a test message",
        }));

        assert!(errors.is_empty());
    }

    #[test]
    fn body_validation_keeps_declaration_order() {
        let errors = validate_body(&json!({
            "name": "A",
            "email": "invalid",
            "message": "short",
        }));

        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0].field, "name");
        assert_eq!(errors[0].message, "Name must be at least 2 characters");
        assert_eq!(errors[1].field, "email");
        assert_eq!(errors[1].message, "Please enter a valid email address");
        assert_eq!(errors[2].field, "message");
        assert_eq!(errors[2].message, "Message must be at least 10 characters");
    }

    #[test]
    fn body_validation_rejects_non_objects() {
        for body in [json!(null), json!("text"), json!(42), json!([1, 2])] {
            let errors = validate_body(&body);
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, "body");
            assert_eq!(errors[0].message, "Invalid request body");
        }
    }

    #[test]
    fn wrong_typed_fields_report_as_missing() {
        let errors = validate_body(&json!({
            "name": 7,
            "email": "john@example.com",
            "message": "long enough message",
        }));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
        assert_eq!(errors[0].message, "Name is required");
    }
}
