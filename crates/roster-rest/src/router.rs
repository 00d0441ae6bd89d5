//! Main application router.

use crate::{
    controllers::{health_controller, user_controller},
    middleware::logging_middleware,
    state::AppState,
};
use axum::{http::HeaderValue, middleware, Router};
use roster_config::ServerConfig;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};

/// Creates the main application router.
pub fn create_router(state: AppState, server_config: &ServerConfig) -> Router {
    let routes = Router::new()
        // Liveness and health (no state)
        .merge(health_controller::router())
        .nest("/users", user_controller::router().with_state(state));

    info!("Router created with /users and /pong endpoints");
    with_layers(routes, server_config)
}

/// Wraps routes in the timeout, CORS, trace and logging layers.
fn with_layers(routes: Router, server_config: &ServerConfig) -> Router {
    routes
        .layer(TimeoutLayer::new(server_config.request_timeout()))
        .layer(create_cors_layer(server_config))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(logging_middleware))
}

/// Creates a CORS layer based on server configuration.
fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if !server_config.cors_enabled {
        return CorsLayer::new();
    }

    if server_config.cors_origins.iter().any(|o| o == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = server_config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
        routing::get,
    };
    use std::time::Duration;
    use tower::ServiceExt;

    fn pong_router(config: &ServerConfig) -> Router {
        with_layers(health_controller::router(), config)
    }

    async fn get_with_origin(router: Router, origin: &str) -> Response {
        router
            .oneshot(
                Request::builder()
                    .uri("/pong")
                    .header(header::ORIGIN, origin)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    fn allow_origin(response: &Response) -> Option<&str> {
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok())
    }

    #[tokio::test]
    async fn test_wildcard_cors_allows_any_origin() {
        let response = get_with_origin(pong_router(&ServerConfig::default()), "http://a.example").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(allow_origin(&response), Some("*"));
    }

    #[tokio::test]
    async fn test_listed_cors_origins() {
        let config = ServerConfig {
            cors_origins: vec!["http://a.example".to_string(), "bad\norigin".to_string()],
            ..ServerConfig::default()
        };

        let response = get_with_origin(pong_router(&config), "http://a.example").await;
        assert_eq!(allow_origin(&response), Some("http://a.example"));

        let response = get_with_origin(pong_router(&config), "http://b.example").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(allow_origin(&response), None);
    }

    #[tokio::test]
    async fn test_disabled_cors_adds_no_headers() {
        let config = ServerConfig {
            cors_enabled: false,
            ..ServerConfig::default()
        };

        let response = get_with_origin(pong_router(&config), "http://a.example").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(allow_origin(&response), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_request_times_out() {
        let config = ServerConfig {
            request_timeout_secs: 1,
            ..ServerConfig::default()
        };
        let slow = Router::new().route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(60)).await;
                "late"
            }),
        );

        let response = with_layers(slow, &config)
            .oneshot(Request::builder().uri("/slow").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
    }
}
