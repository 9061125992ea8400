//! Validation utilities.

use crate::{FieldError, RollcallError};
use validator::{Validate, ValidationErrors};

/// Extension trait turning `validator` failures into [`RollcallError`].
///
/// Implementors list their fields in `FIELD_ORDER` so the headline message
/// always names the first failing field in declaration order.
pub trait ValidateExt: Validate {
    /// Field names in the order their errors are reported.
    const FIELD_ORDER: &'static [&'static str] = &[];

    /// Validates the struct and returns a `RollcallError` on failure.
    fn validate_request(&self) -> Result<(), RollcallError> {
        self.validate()
            .map_err(|e| validation_errors_to_rollcall_error(&e, Self::FIELD_ORDER))
    }
}

/// Converts `validator::ValidationErrors` to `RollcallError`.
///
/// The error message is the first field error after ordering by
/// `field_order`; every field error is kept in `details`.
#[must_use]
pub fn validation_errors_to_rollcall_error(
    errors: &ValidationErrors,
    field_order: &[&str],
) -> RollcallError {
    let mut field_errors: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: field.to_string(),
                message: error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), |m| m.to_string()),
                code: error.code.to_string(),
            })
        })
        .collect();

    let rank = |field: &str| {
        field_order
            .iter()
            .position(|f| *f == field)
            .unwrap_or(field_order.len())
    };
    field_errors.sort_by(|a, b| {
        rank(&a.field)
            .cmp(&rank(&b.field))
            .then_with(|| a.field.cmp(&b.field))
    });

    let message = field_errors
        .first()
        .map_or_else(|| "Validation failed".to_string(), |e| e.message.clone());

    RollcallError::Validation {
        message,
        details: field_errors,
    }
}

/// Common validation functions.
pub mod rules {
    use validator::ValidationError;

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("not_blank"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::rules::*;
    use super::*;
    use validator::Validate;

    #[derive(Debug, Validate)]
    struct Contact {
        #[validate(required(message = "Name cannot be blank"))]
        name: Option<String>,
        #[validate(required(message = "Email cannot be blank"))]
        email: Option<String>,
    }

    impl ValidateExt for Contact {
        const FIELD_ORDER: &'static [&'static str] = &["name", "email"];
    }

    #[test]
    fn test_not_blank() {
        assert!(not_blank("hello").is_ok());
        assert!(not_blank("   ").is_err());
        assert!(not_blank("").is_err());
    }

    #[test]
    fn test_first_field_in_order_wins_message() {
        let contact = Contact { name: None, email: None };
        let err = contact.validate_request().unwrap_err();

        match err {
            RollcallError::Validation { message, details } => {
                assert_eq!(message, "Name cannot be blank");
                assert_eq!(details.len(), 2);
                assert_eq!(details[0].field, "name");
                assert_eq!(details[1].field, "email");
                assert_eq!(details[1].code, "required");
            }
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_single_missing_field() {
        let contact = Contact {
            name: Some("Alice".to_string()),
            email: None,
        };
        let err = contact.validate_request().unwrap_err();
        assert_eq!(err.to_string(), "Email cannot be blank");
    }

    #[test]
    fn test_valid_contact_passes() {
        let contact = Contact {
            name: Some("Alice".to_string()),
            email: Some("alice@x.com".to_string()),
        };
        assert!(contact.validate_request().is_ok());
    }
}
