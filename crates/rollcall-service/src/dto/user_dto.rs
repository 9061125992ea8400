//! User-related DTOs.

use rollcall_core::{
    NewUser, RollcallError, RollcallResult, User, UserId, ValidateExt, MAX_EMAIL_LENGTH,
    MAX_NAME_LENGTH,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request carrying a user's name and email.
///
/// Used by create, update and delete. Both fields are optional at the type
/// level so a missing field surfaces as a validation message instead of a
/// deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct UserRequest {
    #[validate(
        required(message = "Name cannot be blank"),
        custom(function = "rollcall_core::rules::not_blank", message = "Name cannot be blank"),
        length(max = MAX_NAME_LENGTH, message = "Name must be at most 80 characters")
    )]
    #[schema(example = "Alice", max_length = 80)]
    #[serde(default)]
    pub name: Option<String>,

    #[validate(
        required(message = "Email cannot be blank"),
        custom(function = "rollcall_core::rules::not_blank", message = "Email cannot be blank"),
        length(max = MAX_EMAIL_LENGTH, message = "Email must be at most 80 characters")
    )]
    #[schema(example = "alice@x.com", max_length = 80)]
    #[serde(default)]
    pub email: Option<String>,
}

impl ValidateExt for UserRequest {
    const FIELD_ORDER: &'static [&'static str] = &["name", "email"];
}

impl UserRequest {
    /// Creates a request with both fields present.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }

    /// Validates the request and returns the unsaved user it describes.
    pub fn into_new_user(self) -> RollcallResult<NewUser> {
        self.validate_request()?;
        match (self.name, self.email) {
            (Some(name), Some(email)) => Ok(NewUser::new(name, email)),
            (None, _) => Err(RollcallError::validation("Name cannot be blank")),
            (_, None) => Err(RollcallError::validation("Email cannot be blank")),
        }
    }
}

/// User response DTO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[schema(value_type = i64, example = 1)]
    pub id: UserId,
    #[schema(example = "Alice")]
    pub name: String,
    #[schema(example = "alice@x.com")]
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_of(request: UserRequest) -> String {
        request.into_new_user().unwrap_err().to_string()
    }

    #[test]
    fn test_valid_request_becomes_new_user() {
        let user = UserRequest::new("Alice", "alice@x.com").into_new_user().unwrap();
        assert_eq!(user, NewUser::new("Alice", "alice@x.com"));
    }

    #[test]
    fn test_missing_name() {
        let request = UserRequest {
            name: None,
            email: Some("alice@x.com".to_string()),
        };
        assert_eq!(message_of(request), "Name cannot be blank");
    }

    #[test]
    fn test_missing_email() {
        let request = UserRequest {
            name: Some("Alice".to_string()),
            email: None,
        };
        assert_eq!(message_of(request), "Email cannot be blank");
    }

    #[test]
    fn test_both_missing_reports_name_first() {
        let err = UserRequest::default().into_new_user().unwrap_err();
        match err {
            RollcallError::Validation { message, details } => {
                assert_eq!(message, "Name cannot be blank");
                let fields: Vec<&str> = details.iter().map(|d| d.field.as_str()).collect();
                assert_eq!(fields, vec!["name", "email"]);
            }
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_whitespace_only_is_blank() {
        assert_eq!(message_of(UserRequest::new("   ", "alice@x.com")), "Name cannot be blank");
        assert_eq!(message_of(UserRequest::new("Alice", "\t")), "Email cannot be blank");
    }

    #[test]
    fn test_empty_string_is_blank() {
        assert_eq!(message_of(UserRequest::new("", "alice@x.com")), "Name cannot be blank");
    }

    #[test]
    fn test_length_limit() {
        let at_limit = "a".repeat(80);
        assert!(UserRequest::new(at_limit.clone(), "alice@x.com").into_new_user().is_ok());

        let too_long = "a".repeat(81);
        assert_eq!(
            message_of(UserRequest::new(too_long.clone(), "alice@x.com")),
            "Name must be at most 80 characters"
        );
        assert_eq!(
            message_of(UserRequest::new("Alice", too_long)),
            "Email must be at most 80 characters"
        );
    }

    #[test]
    fn test_deserialize_missing_fields() {
        let request: UserRequest = serde_json::from_str(r#"{"name": "Alice"}"#).unwrap();
        assert_eq!(request.name.as_deref(), Some("Alice"));
        assert!(request.email.is_none());
    }

    #[test]
    fn test_response_from_user() {
        let response = UserResponse::from(User::new(UserId::new(1), "Alice", "alice@x.com"));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "Alice", "email": "alice@x.com"})
        );
    }
}
