//! # Roster REST
//!
//! REST API layer using Axum for Roster.
//! Provides the `/users` endpoints, the liveness probe, and the uniform
//! JSON response envelope.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
