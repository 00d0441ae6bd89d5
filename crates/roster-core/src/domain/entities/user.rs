//! User entity.

use crate::UserId;
use serde::{Deserialize, Serialize};

/// A person record held by the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, assigned by the directory and never changed.
    pub id: UserId,

    /// Display name.
    pub name: String,

    /// Contact email. Only presence is checked, never format.
    pub email: String,

    /// Age in years.
    pub age: i64,
}

/// The mutable part of a user record.
///
/// Creates and updates both carry a full profile; an update replaces
/// every field wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub age: i64,
}

impl UserProfile {
    /// Creates a new profile.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age,
        }
    }
}

impl User {
    /// Creates a user record from an assigned id and a profile.
    #[must_use]
    pub fn new(id: UserId, profile: UserProfile) -> Self {
        Self {
            id,
            name: profile.name,
            email: profile.email,
            age: profile.age,
        }
    }

    /// Replaces name, email and age in place. The id is left untouched.
    pub fn apply(&mut self, profile: UserProfile) {
        self.name = profile.name;
        self.email = profile.email;
        self.age = profile.age;
    }

    /// Case-insensitive substring match against the user's name.
    ///
    /// `needle` must already be lowercased.
    #[must_use]
    pub fn name_contains(&self, needle: &str) -> bool {
        !self.name.is_empty() && self.name.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john() -> User {
        User::new(UserId(1), UserProfile::new("John Doe", "john@example.com", 30))
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut user = john();
        user.apply(UserProfile::new("Johnny", "johnny@example.com", 31));

        assert_eq!(user.id, UserId(1));
        assert_eq!(user.name, "Johnny");
        assert_eq!(user.email, "johnny@example.com");
        assert_eq!(user.age, 31);
    }

    #[test]
    fn test_name_contains_is_case_insensitive() {
        let user = john();
        assert!(user.name_contains("john"));
        assert!(user.name_contains("o"));
        assert!(user.name_contains("n d"));
        assert!(!user.name_contains("jane"));
    }

    #[test]
    fn test_user_json_shape() {
        let json = serde_json::to_value(john()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "John Doe",
                "email": "john@example.com",
                "age": 30
            })
        );
    }
}
