//! Food-ordering client
//!
//! Typed REST access to the food-ordering backend and the headless screens
//! built on it: login and registration, the customer catalog, cart and
//! order history, and the admin back-office.

pub mod aggregate;
pub mod api;
pub mod config;
pub mod context;
pub mod error;
pub mod http;
pub mod nav;
pub mod notice;
pub mod screens;

pub use api::Api;
pub use config::{AuthMode, ClientConfig, Endpoints};
pub use context::{AppContext, SharedContext};
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use http::OneshotHttpClient;
pub use nav::{CustomerTab, Navigator, Route};
pub use notice::{Notice, NoticeKind, NoticeStyle};

// Re-export shared types for convenience
pub use shared::client::SessionUser;
pub use shared::{Money, Quantity};
