//! Lock-guarded user repository.

use super::UserStore;
use crate::traits::UserRepository;
use async_trait::async_trait;
use parking_lot::RwLock;
use roster_core::{RosterResult, User, UserId, UserProfile};
use shaku::Component;
use tracing::debug;

/// In-memory user repository.
///
/// Every operation takes the lock once and never holds it across an await.
#[derive(Component)]
#[shaku(interface = UserRepository)]
pub struct InMemoryUserRepository {
    store: RwLock<UserStore>,
}

impl InMemoryUserRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::from_store(UserStore::new())
    }

    /// Creates a repository holding the sample users.
    #[must_use]
    pub fn seeded() -> Self {
        Self::from_store(UserStore::seeded())
    }

    /// Creates a repository around an existing store.
    #[must_use]
    pub fn from_store(store: UserStore) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }

    /// Shaku parameters that install `store` as the initial collection.
    #[must_use]
    pub fn parameters(store: UserStore) -> InMemoryUserRepositoryParameters {
        InMemoryUserRepositoryParameters {
            store: RwLock::new(store),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> RosterResult<Vec<User>> {
        Ok(self.store.read().users().to_vec())
    }

    async fn find_by_id(&self, id: UserId) -> RosterResult<Option<User>> {
        debug!("Repository: find_by_id {}", id);
        Ok(self.store.read().get(id).cloned())
    }

    async fn search_by_name(&self, query: &str) -> RosterResult<Vec<User>> {
        debug!("Repository: search_by_name {:?}", query);
        Ok(self.store.read().search_by_name(query))
    }

    async fn save(&self, profile: UserProfile) -> RosterResult<User> {
        Ok(self.store.write().insert(profile))
    }

    async fn update(&self, id: UserId, profile: UserProfile) -> RosterResult<Option<User>> {
        debug!("Repository: update {}", id);
        Ok(self.store.write().update(id, profile).cloned())
    }

    async fn delete(&self, id: UserId) -> RosterResult<bool> {
        debug!("Repository: delete {}", id);
        Ok(self.store.write().remove(id).is_some())
    }
}
