//! Domain entities for Roster.

pub mod entities;

pub use entities::*;
