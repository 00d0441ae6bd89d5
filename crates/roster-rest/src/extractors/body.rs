//! JSON body extractor.
//!
//! Unlike `axum::Json`, this extractor decodes the body whatever the
//! `Content-Type` header says, and every failure (unreadable body, syntax
//! error, wrong field type) becomes [`RosterError::MalformedInput`].

use crate::responses::AppError;
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use roster_core::RosterError;
use serde::de::DeserializeOwned;

/// JSON body decoded into `T`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError(RosterError::malformed_input(rejection.body_text())))?;

        decode(&bytes).map(JsonBody).map_err(AppError)
    }
}

/// Decodes a JSON payload.
///
/// Strict: the whole body must be one JSON value of `T`'s shape, so `null`
/// and trailing bytes after the value are both rejected.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, RosterError> {
    Ok(serde_json::from_slice(bytes)?)
}
