//! Repository trait definitions.

use async_trait::async_trait;
use roster_core::{Interface, RosterResult, User, UserId, UserProfile};

/// User repository trait.
///
/// Implementations keep records in insertion order and hand out ids from
/// a counter that never goes backwards.
#[async_trait]
pub trait UserRepository: Interface + Send + Sync {
    /// Returns every user, in insertion order.
    async fn find_all(&self) -> RosterResult<Vec<User>>;

    /// Finds a user by ID.
    async fn find_by_id(&self, id: UserId) -> RosterResult<Option<User>>;

    /// Finds users whose name contains `query`, ignoring case.
    async fn search_by_name(&self, query: &str) -> RosterResult<Vec<User>>;

    /// Stores a new user under the next free id and returns the stored record.
    async fn save(&self, profile: UserProfile) -> RosterResult<User>;

    /// Replaces the profile of an existing user.
    ///
    /// Returns `None` when no user has this id.
    async fn update(&self, id: UserId, profile: UserProfile) -> RosterResult<Option<User>>;

    /// Deletes a user by ID. Returns whether a record was removed.
    async fn delete(&self, id: UserId) -> RosterResult<bool>;
}
