//! food-mock: in-memory food-ordering backend
//!
//! Serves the REST API the client expects, backed by vectors behind a
//! lock. Used for local development and by the client's integration tests
//! through an in-process router.

pub mod api;
pub mod auth;
pub mod seed;
pub mod state;

pub use api::router;
pub use state::{MockState, Store};
