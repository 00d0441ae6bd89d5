//! User-related DTOs.

use roster_core::UserProfile;
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// Body of a create or update request.
///
/// Missing or `null` fields decode to their zero value so that presence
/// is reported by validation, not by the JSON decoder. An `id` in the body
/// is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UserRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub age: i64,
}

impl UserRequest {
    /// Creates a new request.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age,
        }
    }
}

impl From<UserRequest> for UserProfile {
    fn from(request: UserRequest) -> Self {
        Self::new(request.name, request.email, request.age)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
