//! User entity.

use crate::UserId;
use serde::{Deserialize, Serialize};

/// Maximum length of a user's name, in characters.
pub const MAX_NAME_LENGTH: u64 = 80;

/// Maximum length of a user's email, in characters.
pub const MAX_EMAIL_LENGTH: u64 = 80;

/// A user that has not been persisted yet.
///
/// Storage assigns the identifier on insert, so a `NewUser` carries only
/// the caller-supplied fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    /// Unique display name.
    pub name: String,

    /// Unique email address.
    pub email: String,
}

impl NewUser {
    /// Creates a new, unsaved user.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Persisted user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Storage-assigned identifier.
    pub id: UserId,

    /// Unique display name.
    pub name: String,

    /// Unique email address.
    pub email: String,
}

impl User {
    /// Rebuilds a user from stored values.
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Overwrites both name and email. The identifier is never touched.
    pub fn replace_details(&mut self, name: impl Into<String>, email: impl Into<String>) {
        self.name = name.into();
        self.email = email.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_details_keeps_id() {
        let mut user = User::new(UserId::new(3), "Alice", "alice@x.com");
        user.replace_details("Alicia", "alicia@x.com");

        assert_eq!(user.id, UserId::new(3));
        assert_eq!(user.name, "Alicia");
        assert_eq!(user.email, "alicia@x.com");
    }

    #[test]
    fn test_new_user_fields() {
        let user = NewUser::new("Bob", "bob@x.com");
        assert_eq!(user.name, "Bob");
        assert_eq!(user.email, "bob@x.com");
    }
}
