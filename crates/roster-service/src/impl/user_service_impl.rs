//! User service implementation.

use crate::dto::UserRequest;
use crate::user_service::UserService;
use async_trait::async_trait;
use roster_core::{RosterError, RosterResult, User, UserId, ValidateExt};
use roster_repository::UserRepository;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};

/// User service component for Shaku DI.
#[derive(Component)]
#[shaku(interface = UserService)]
pub struct UserServiceComponent {
    #[shaku(inject)]
    user_repository: Arc<dyn UserRepository>,
}

impl UserServiceComponent {
    /// Creates a new user service over the given repository.
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl UserService for UserServiceComponent {
    async fn list_users(&self) -> RosterResult<Vec<User>> {
        debug!("Listing users");
        self.user_repository.find_all().await
    }

    async fn get_user(&self, id: UserId) -> RosterResult<User> {
        debug!("Getting user: {}", id);

        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or(RosterError::LookupMiss(id))
    }

    async fn create_user(&self, request: UserRequest) -> RosterResult<User> {
        debug!("Creating user: {}", request.name);

        request.validate_request()?;

        let saved_user = self.user_repository.save(request.into()).await?;

        info!("User created: {}", saved_user.id);
        Ok(saved_user)
    }

    async fn update_user(&self, id: UserId, request: UserRequest) -> RosterResult<User> {
        debug!("Updating user: {}", id);

        request.validate_request()?;

        let updated_user = self
            .user_repository
            .update(id, request.into())
            .await?
            .ok_or(RosterError::NotFound(id))?;

        info!("User updated: {}", id);
        Ok(updated_user)
    }

    async fn delete_user(&self, id: UserId) -> RosterResult<()> {
        debug!("Deleting user: {}", id);

        if !self.user_repository.delete(id).await? {
            return Err(RosterError::NotFound(id));
        }

        info!("User deleted: {}", id);
        Ok(())
    }

    async fn search_users(&self, name: &str) -> RosterResult<Vec<User>> {
        debug!("Searching users by name: {:?}", name);

        if name.is_empty() {
            return Err(RosterError::MissingParameter { name: "name" });
        }

        self.user_repository.search_by_name(name).await
    }
}
