//! In-memory repository implementation.

mod store;
mod user_repository;

pub use store::*;
pub use user_repository::*;
