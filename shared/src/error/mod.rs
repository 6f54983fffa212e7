//! Unified error system for the food-ordering workspace
//!
//! - [`ErrorCode`]: standardized error codes for all error types
//! - [`AppError`]: error with code, message and optional details
//! - [`ErrorBody`]: the JSON body a backend answers with on failure
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 4xxx: Order errors
//! - 6xxx: Product and category errors
//! - 7xxx: Cart errors
//! - 8xxx: User errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::not_found("category 9");
//! assert_eq!(err.code, ErrorCode::NotFound);
//!
//! let err = AppError::validation("Name and description are required fields.")
//!     .with_detail("field", "desc");
//! assert_eq!(err.http_status(), http::StatusCode::BAD_REQUEST);
//! ```

mod codes;
mod http;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorBody};
