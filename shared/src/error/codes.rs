//! Error codes shared by the client and the backend
//!
//! Codes are grouped by range:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 4xxx: Order errors
//! - 6xxx: Product and category errors
//! - 7xxx: Cart errors
//! - 8xxx: User errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Serialized as a bare `u16` so any JSON consumer can match on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,
    /// Authenticated but not allowed
    PermissionDenied = 1003,
    /// Token is invalid
    TokenInvalid = 1004,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Unknown order status action
    InvalidStatusAction = 4002,
    /// Rating out of range
    InvalidRating = 4003,
    /// Order total does not parse
    InvalidAmount = 4004,

    // ==================== 6xxx: Product ====================
    /// Product not found
    ProductNotFound = 6001,
    /// Category not found
    CategoryNotFound = 6101,

    // ==================== 7xxx: Cart ====================
    /// Cart item not found
    CartItemNotFound = 7001,
    /// Quantity is not a positive integer
    InvalidQuantity = 7002,

    // ==================== 8xxx: User ====================
    /// User not found
    UserNotFound = 8001,
    /// Email already registered
    EmailExists = 8002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
}

impl ErrorCode {
    /// Numeric value of the code
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Default human-readable message
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",
            Self::InvalidFormat => "Invalid format",
            Self::RequiredField => "Required field missing",
            Self::NotAuthenticated => "Authentication required",
            Self::InvalidCredentials => "Invalid email or password",
            Self::PermissionDenied => "Permission denied",
            Self::TokenInvalid => "Invalid token",
            Self::OrderNotFound => "Order not found",
            Self::InvalidStatusAction => "Unknown order status action",
            Self::InvalidRating => "Rating must be between 1 and 5",
            Self::InvalidAmount => "Invalid amount",
            Self::ProductNotFound => "Product not found",
            Self::CategoryNotFound => "Category not found",
            Self::CartItemNotFound => "Cart item not found",
            Self::InvalidQuantity => "Quantity must be a positive integer",
            Self::UserNotFound => "User not found",
            Self::EmailExists => "Email already registered",
            Self::InternalError => "Internal server error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Returned when a `u16` does not map to a known [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => Self::Success,
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            4 => Self::AlreadyExists,
            5 => Self::InvalidRequest,
            6 => Self::InvalidFormat,
            7 => Self::RequiredField,
            1001 => Self::NotAuthenticated,
            1002 => Self::InvalidCredentials,
            1003 => Self::PermissionDenied,
            1004 => Self::TokenInvalid,
            4001 => Self::OrderNotFound,
            4002 => Self::InvalidStatusAction,
            4003 => Self::InvalidRating,
            4004 => Self::InvalidAmount,
            6001 => Self::ProductNotFound,
            6101 => Self::CategoryNotFound,
            7001 => Self::CartItemNotFound,
            7002 => Self::InvalidQuantity,
            8001 => Self::UserNotFound,
            8002 => Self::EmailExists,
            9001 => Self::InternalError,
            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrips_through_u16() {
        for code in [
            ErrorCode::NotFound,
            ErrorCode::InvalidCredentials,
            ErrorCode::PermissionDenied,
            ErrorCode::OrderNotFound,
            ErrorCode::CartItemNotFound,
            ErrorCode::EmailExists,
        ] {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        assert_eq!(ErrorCode::try_from(4242), Err(InvalidErrorCode(4242)));
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&ErrorCode::ProductNotFound).unwrap();
        assert_eq!(json, "6001");
    }
}
