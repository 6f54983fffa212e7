//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use super::types::{AppError, ErrorBody};
use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            Self::NotFound
            | Self::OrderNotFound
            | Self::ProductNotFound
            | Self::CategoryNotFound
            | Self::CartItemNotFound
            | Self::UserNotFound => StatusCode::NOT_FOUND,

            Self::AlreadyExists | Self::EmailExists => StatusCode::CONFLICT,

            Self::NotAuthenticated | Self::InvalidCredentials | Self::TokenInvalid => {
                StatusCode::UNAUTHORIZED
            }

            Self::PermissionDenied => StatusCode::FORBIDDEN,

            Self::ValidationFailed
            | Self::InvalidRequest
            | Self::InvalidFormat
            | Self::RequiredField
            | Self::InvalidStatusAction
            | Self::InvalidRating
            | Self::InvalidAmount
            | Self::InvalidQuantity => StatusCode::BAD_REQUEST,

            Self::Unknown | Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.http_status();
        if status.is_server_error() {
            tracing::error!(code = %self.code, message = %self.message, "request failed");
        } else {
            tracing::debug!(code = %self.code, message = %self.message, "request rejected");
        }
        (status, Json(ErrorBody::from(&self))).into_response()
    }
}
