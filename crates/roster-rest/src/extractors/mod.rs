//! Custom Axum extractors.
//!
//! Each extractor rejects with an [`AppError`](crate::responses::AppError) so
//! that extraction failures are rendered as the standard error envelope.

mod body;
mod search;
mod user_id;

pub use body::*;
pub use search::*;
pub use user_id::*;
