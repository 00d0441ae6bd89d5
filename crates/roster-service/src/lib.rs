//! # Roster Service
//!
//! Business logic for the user directory: request validation, id lookup
//! semantics, and search rules on top of the repository.

pub mod dto;
pub mod r#impl;
pub mod user_service;

pub use dto::*;
pub use r#impl::UserServiceComponent;
pub use user_service::*;
