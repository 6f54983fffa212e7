//! State shared by every screen

use crate::api::Api;
use crate::http::HttpClient;
use crate::{AuthMode, ClientConfig, ClientResult, NetworkHttpClient};
use std::sync::Arc;

/// Handle screens keep to reach the backend
pub type SharedContext<C> = Arc<AppContext<C>>;

/// The API plus the login policy
#[derive(Debug)]
pub struct AppContext<C> {
    pub api: Api<C>,
    pub auth_mode: AuthMode,
}

impl<C: HttpClient> AppContext<C> {
    pub fn new(http: C, config: &ClientConfig) -> Self {
        Self {
            api: Api::new(http, config.endpoints.clone()),
            auth_mode: config.auth_mode,
        }
    }

    pub fn shared(self) -> SharedContext<C> {
        Arc::new(self)
    }
}

impl AppContext<NetworkHttpClient> {
    /// Context talking to a real backend
    pub fn connect(config: &ClientConfig) -> ClientResult<SharedContext<NetworkHttpClient>> {
        let http = config.build_http_client()?;
        Ok(Self::new(http, config).shared())
    }
}
