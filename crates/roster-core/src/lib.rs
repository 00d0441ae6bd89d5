//! # Roster Core
//!
//! Core types, traits, and error definitions for Roster.
//! This crate provides the user entity, its identifier, and the error
//! taxonomy shared by the repository, service, and REST layers.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use validation::*;

// Re-export shaku for dependency injection
pub use shaku::{module, HasComponent, Interface};
