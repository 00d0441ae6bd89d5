//! User service trait definition.

use crate::dto::UserRequest;
use async_trait::async_trait;
use roster_core::{Interface, RosterResult, User, UserId};

/// User service trait.
#[async_trait]
pub trait UserService: Interface + Send + Sync {
    /// Lists every user in the directory.
    async fn list_users(&self) -> RosterResult<Vec<User>>;

    /// Gets a user by ID.
    async fn get_user(&self, id: UserId) -> RosterResult<User>;

    /// Creates a new user and returns it with its assigned id.
    async fn create_user(&self, request: UserRequest) -> RosterResult<User>;

    /// Replaces a user's name, email and age.
    async fn update_user(&self, id: UserId, request: UserRequest) -> RosterResult<User>;

    /// Deletes a user.
    async fn delete_user(&self, id: UserId) -> RosterResult<()>;

    /// Finds users whose name contains `name`, ignoring case.
    async fn search_users(&self, name: &str) -> RosterResult<Vec<User>>;
}
