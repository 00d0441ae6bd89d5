//! User id path extractor.

use crate::responses::AppError;
use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use roster_core::{RosterError, UserId};

/// The `:id` path segment parsed as a [`UserId`].
///
/// Runs before any body extractor, so a bad id is reported even when the
/// body is also malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserIdPath(pub UserId);

#[async_trait]
impl<S> FromRequestParts<S> for UserIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError(RosterError::invalid_identifier(rejection.body_text())))?;

        UserId::parse(&raw)
            .map(Self)
            .map_err(|_| AppError(RosterError::invalid_identifier(raw)))
    }
}
