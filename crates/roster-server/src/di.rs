//! Dependency injection module using Shaku.
//!
//! `DirectoryModule` wires the in-memory repository into the user service.
//! The repository's initial collection is passed in as component parameters
//! so the module decides at build time whether the sample users are present.

use roster_config::DirectoryConfig;
use roster_core::module;
use roster_repository::{InMemoryUserRepository, UserStore};
use roster_service::UserServiceComponent;
use std::sync::Arc;
use tracing::info;

module! {
    pub DirectoryModule {
        components = [
            InMemoryUserRepository,
            UserServiceComponent,
        ],
        providers = [],
    }
}

/// Builds the directory module from configuration.
#[must_use]
pub fn build_directory_module(config: &DirectoryConfig) -> Arc<DirectoryModule> {
    let store = if config.seed_sample_users {
        UserStore::seeded()
    } else {
        UserStore::new()
    };
    info!(users = store.len(), "Initializing user directory");

    build_module_with_store(store)
}

/// Builds the directory module around an explicit initial collection.
#[must_use]
pub fn build_module_with_store(store: UserStore) -> Arc<DirectoryModule> {
    let module = DirectoryModule::builder()
        .with_component_parameters::<InMemoryUserRepository>(InMemoryUserRepository::parameters(
            store,
        ))
        .build();

    Arc::new(module)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::{HasComponent, RosterError, UserId};
    use roster_repository::UserRepository;
    use roster_service::{UserRequest, UserService};

    fn user_service(module: &DirectoryModule) -> Arc<dyn UserService> {
        module.resolve()
    }

    #[test]
    fn test_has_component_trait_bounds() {
        fn assert_has_user_service<T: HasComponent<dyn UserService>>() {}
        fn assert_has_user_repository<T: HasComponent<dyn UserRepository>>() {}

        assert_has_user_service::<DirectoryModule>();
        assert_has_user_repository::<DirectoryModule>();
    }

    #[tokio::test]
    async fn test_seeded_module() {
        let module = build_directory_module(&DirectoryConfig::default());

        let users = user_service(&module).list_users().await.unwrap();
        let names: Vec<_> = users.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["John Doe", "Jane Smith", "Bob Wilson"]);
    }

    #[tokio::test]
    async fn test_unseeded_module() {
        let module = build_directory_module(&DirectoryConfig {
            seed_sample_users: false,
        });

        assert!(user_service(&module).list_users().await.unwrap().is_empty());

        let user = user_service(&module)
            .create_user(UserRequest::new("Ann", "a@x.com", 22))
            .await
            .unwrap();
        assert_eq!(user.id, UserId(1));
    }

    #[tokio::test]
    async fn test_service_and_repository_share_state() {
        let module = build_directory_module(&DirectoryConfig::default());

        user_service(&module).delete_user(UserId(2)).await.unwrap();
        let repository: Arc<dyn UserRepository> = module.resolve();
        assert_eq!(repository.find_all().await.unwrap().len(), 2);

        let err = user_service(&module).get_user(UserId(2)).await.unwrap_err();
        assert!(matches!(err, RosterError::LookupMiss(_)));
    }
}
