//! API response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roster_core::RosterError;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// Standard API response envelope.
///
/// Successful responses carry `message` (and usually `data`); failures carry
/// `error`. `code` always mirrors the HTTP status the envelope is sent with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub code: u16,
}

impl<T> ApiResponse<T> {
    /// Creates a successful response carrying data.
    pub fn success(status: StatusCode, data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
            error: None,
            code: status.as_u16(),
        }
    }

    /// Returns the HTTP status this envelope is sent with.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl ApiResponse<()> {
    /// Creates a successful response with a message and no data.
    pub fn acknowledged(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            error: None,
            code: status.as_u16(),
        }
    }

    /// Creates an error response.
    #[must_use]
    pub fn error(err: &RosterError) -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            error: Some(err.to_string()),
            code: err.status_code(),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

/// Machine-readable code of a failed request, attached to the response
/// extensions so middleware can report it without parsing the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorCode(pub &'static str);

/// Application error type for Axum.
#[derive(Debug)]
pub struct AppError(pub RosterError);

impl From<RosterError> for AppError {
    fn from(err: RosterError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let err = self.0;
        if err.status_code() >= 500 {
            error!(code = err.error_code(), "Request failed: {}", err);
        } else {
            debug!(
                code = err.error_code(),
                detail = ?err.detail(),
                "Request rejected: {}",
                err
            );
        }

        let mut response = ApiResponse::error(&err).into_response();
        response
            .extensions_mut()
            .insert(ErrorCode(err.error_code()));
        response
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;

/// Helper to create a 200 response with data.
pub fn ok<T: Serialize>(data: T, message: impl Into<String>) -> ApiResult<T> {
    Ok(ApiResponse::success(StatusCode::OK, data, message))
}

/// Helper to create a created (201) response.
pub fn created<T: Serialize>(data: T, message: impl Into<String>) -> ApiResult<T> {
    Ok(ApiResponse::success(StatusCode::CREATED, data, message))
}

/// Helper to create a 200 response that carries only a message.
pub fn acknowledged(message: impl Into<String>) -> ApiResult<()> {
    Ok(ApiResponse::acknowledged(StatusCode::OK, message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::UserId;
    use serde_json::json;

    #[test]
    fn test_success_envelope_shape() {
        let response = ApiResponse::success(StatusCode::CREATED, json!({"id": 4}), "user created successfully");
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "success": true,
                "data": {"id": 4},
                "message": "user created successfully",
                "code": 201
            })
        );
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[test]
    fn test_acknowledged_omits_data() {
        let response = ApiResponse::acknowledged(StatusCode::OK, "user deleted successfully");
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "success": true,
                "message": "user deleted successfully",
                "code": 200
            })
        );
    }

    #[test]
    fn test_error_envelope_shape() {
        let response = ApiResponse::error(&RosterError::NotFound(UserId(8)));
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "success": false,
                "error": "user not found",
                "code": 404
            })
        );
    }

    #[test]
    fn test_app_error_status() {
        let response = AppError(RosterError::invalid_identifier("abc")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = AppError(RosterError::internal("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_app_error_tags_response_with_code() {
        let response = AppError(RosterError::LookupMiss(UserId(3))).into_response();
        assert_eq!(
            response.extensions().get::<ErrorCode>(),
            Some(&ErrorCode("NOT_FOUND"))
        );

        let response = ApiResponse::acknowledged(StatusCode::OK, "done").into_response();
        assert!(response.extensions().get::<ErrorCode>().is_none());
    }
}
