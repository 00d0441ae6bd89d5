//! The ordered user collection and its id counter.

use roster_core::{User, UserId, UserProfile};

/// Ordered collection of users plus the next id to hand out.
///
/// Not synchronized on its own; [`InMemoryUserRepository`] wraps it in a lock.
///
/// [`InMemoryUserRepository`]: super::InMemoryUserRepository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStore {
    users: Vec<User>,
    next_id: UserId,
}

impl Default for UserStore {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            next_id: UserId::FIRST,
        }
    }
}

impl UserStore {
    /// Creates an empty store whose first id is 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the three sample users; the next id is 4.
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_users(vec![
            User::new(UserId(1), UserProfile::new("John Doe", "john@example.com", 30)),
            User::new(UserId(2), UserProfile::new("Jane Smith", "jane@example.com", 25)),
            User::new(UserId(3), UserProfile::new("Bob Wilson", "bob@example.com", 35)),
        ])
    }

    /// Creates a store from existing records, continuing after the highest id.
    #[must_use]
    pub fn with_users(users: Vec<User>) -> Self {
        let next_id = users
            .iter()
            .map(|u| u.id)
            .max()
            .map_or(UserId::FIRST, UserId::next);
        Self { users, next_id }
    }

    /// All users in insertion order.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// The id the next insert will receive.
    #[must_use]
    pub const fn next_id(&self) -> UserId {
        self.next_id
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Finds a user by id.
    #[must_use]
    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Users whose name contains `query`, ignoring case, in collection order.
    #[must_use]
    pub fn search_by_name(&self, query: &str) -> Vec<User> {
        let needle = query.to_lowercase();
        self.users
            .iter()
            .filter(|u| u.name_contains(&needle))
            .cloned()
            .collect()
    }

    /// Appends a user under the next id and advances the counter.
    pub fn insert(&mut self, profile: UserProfile) -> User {
        let user = User::new(self.next_id, profile);
        self.next_id = self.next_id.next();
        self.users.push(user.clone());
        user
    }

    /// Replaces the profile of the stored record with this id.
    pub fn update(&mut self, id: UserId, profile: UserProfile) -> Option<&User> {
        let user = self.users.iter_mut().find(|u| u.id == id)?;
        user.apply(profile);
        Some(&*user)
    }

    /// Removes the record with this id, keeping the order of the rest.
    pub fn remove(&mut self, id: UserId) -> Option<User> {
        let index = self.users.iter().position(|u| u.id == id)?;
        Some(self.users.remove(index))
    }
}
