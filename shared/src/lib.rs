//! Shared types for the food-ordering workspace
//!
//! Wire models mirrored from the REST backend, money and quantity helpers,
//! input validation, and the error codes used by both the client and the
//! mock backend.

pub mod client;
pub mod error;
pub mod models;
pub mod money;
pub mod quantity;
pub mod validation;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use money::Money;
pub use quantity::Quantity;
