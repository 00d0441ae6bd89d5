//! User directory controller.

use crate::{
    extractors::{JsonBody, SearchQuery, UserIdPath},
    responses::{acknowledged, created, ok, ApiResult},
    state::AppState,
};
use axum::{
    extract::State,
    routing::get,
    Router,
};
use roster_core::User;
use roster_service::UserRequest;
use tracing::debug;

/// Creates the user router.
///
/// `/search` is a static segment and wins over the `/:id` capture.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/search", get(search_users))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// List all users.
async fn list_users(State(state): State<AppState>) -> ApiResult<Vec<User>> {
    debug!("List users request");

    let users = state.user_service.list_users().await?;
    ok(users, "users retrieved successfully")
}

/// Get a user by ID.
async fn get_user(
    State(state): State<AppState>,
    UserIdPath(id): UserIdPath,
) -> ApiResult<User> {
    debug!("Get user request: {}", id);

    let user = state.user_service.get_user(id).await?;
    ok(user, "user retrieved successfully")
}

/// Create a new user.
async fn create_user(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<UserRequest>,
) -> ApiResult<User> {
    debug!("Create user request: {}", request.name);

    let user = state.user_service.create_user(request).await?;
    created(user, "user created successfully")
}

/// Replace a user's name, email and age.
async fn update_user(
    State(state): State<AppState>,
    UserIdPath(id): UserIdPath,
    JsonBody(request): JsonBody<UserRequest>,
) -> ApiResult<User> {
    debug!("Update user request: {}", id);

    let user = state.user_service.update_user(id, request).await?;
    ok(user, "user updated successfully")
}

/// Delete a user.
async fn delete_user(
    State(state): State<AppState>,
    UserIdPath(id): UserIdPath,
) -> ApiResult<()> {
    debug!("Delete user request: {}", id);

    state.user_service.delete_user(id).await?;
    acknowledged("user deleted successfully")
}

/// Search users by name substring.
async fn search_users(
    State(state): State<AppState>,
    query: SearchQuery,
) -> ApiResult<Vec<User>> {
    debug!("Search users request: {:?}", query.name);

    let users = state.user_service.search_users(query.name()).await?;
    ok(users, "users found")
}
