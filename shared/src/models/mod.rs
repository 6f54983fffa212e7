//! Data models
//!
//! Mirrors of the backend's JSON records. Field names follow the wire format
//! (camelCase, `<entity>Id` keys); ids are `i64` and never checked for
//! referential integrity on the client.

pub mod cart;
pub mod category;
pub mod order;
pub mod order_detail;
pub mod product;
pub mod user;

// Re-exports
pub use cart::*;
pub use category::*;
pub use order::*;
pub use order_detail::*;
pub use product::*;
pub use user::*;
