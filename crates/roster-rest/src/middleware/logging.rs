//! Per-request outcome logging.
//!
//! `TraceLayer` covers transport-level spans; this middleware records what
//! the directory did with the request: the route template it matched and,
//! for rejected requests, the error code the envelope carried.

use crate::responses::ErrorCode;
use axum::{
    body::Body,
    extract::MatchedPath,
    http::Request,
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, warn};

/// Logs the matched route, status and latency of every routed request.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| request.uri().path().to_owned(), |p| p.as_str().to_owned());
    let start = Instant::now();

    let response = next.run(request).await;

    let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
    let status = response.status().as_u16();

    match response.extensions().get::<ErrorCode>() {
        Some(ErrorCode(code)) if status >= 500 => {
            warn!(target: "roster::http", %method, %route, status, code, elapsed_ms, "Request failed");
        }
        Some(ErrorCode(code)) => {
            info!(target: "roster::http", %method, %route, status, code, elapsed_ms, "Request rejected");
        }
        None => {
            info!(target: "roster::http", %method, %route, status, elapsed_ms, "Request handled");
        }
    }

    response
}
