//! Common test infrastructure for router tests.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use roster_config::ServerConfig;
use roster_repository::{InMemoryUserRepository, UserStore};
use roster_rest::{create_router, AppState};
use roster_service::UserServiceComponent;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Router over an in-memory directory.
///
/// The router is cloned per request; all clones share the same directory.
pub struct TestApp {
    router: Router,
}

impl TestApp {
    /// App seeded with John Doe (1), Jane Smith (2) and Bob Wilson (3).
    pub fn seeded() -> Self {
        Self::with_store(UserStore::seeded())
    }

    /// App over an empty directory.
    pub fn empty() -> Self {
        Self::with_store(UserStore::new())
    }

    fn with_store(store: UserStore) -> Self {
        let repository = Arc::new(InMemoryUserRepository::from_store(store));
        let service = Arc::new(UserServiceComponent::new(repository));
        let router = create_router(AppState::new(service), &ServerConfig::default());
        Self { router }
    }

    /// Sends a request and returns the status and the decoded JSON body.
    pub async fn send(&self, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
            .expect("valid request");

        self.send_request(request).await
    }

    /// Sends a prepared request.
    pub async fn send_request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("readable body")
            .to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: &str) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: &str) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }
}

/// Asserts a failure envelope with the given status and error text.
pub fn assert_failure(status: StatusCode, body: &Value, expected: StatusCode, error: &str) {
    assert_eq!(status, expected, "body: {body}");
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], error);
    assert_eq!(body["code"], expected.as_u16());
    assert!(body.get("message").is_none());
    assert!(body.get("data").is_none());
}

/// Names of the users in an envelope's `data` array.
pub fn names(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .expect("data array")
        .iter()
        .map(|u| u["name"].as_str().unwrap_or_default().to_string())
        .collect()
}
