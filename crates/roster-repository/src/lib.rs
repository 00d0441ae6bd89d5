//! # Roster Repository
//!
//! Data access for the user directory.
//!
//! ```text
//! Service
//!   ↓  Arc<dyn UserRepository>  (domain interface)
//! InMemoryUserRepository        (ordered Vec<User> + id counter behind one lock)
//! ```

pub mod memory;
pub mod traits;

pub use memory::*;
pub use traits::*;
