//! Client configuration
//!
//! One base URL per REST resource, injected into [`crate::Api`] instead of
//! being hard-coded where the resource is used.

use crate::error::{ClientError, ClientResult};
use crate::http::NetworkHttpClient;
use std::str::FromStr;

/// API root used when nothing is configured (the mock backend's default port)
pub const DEFAULT_API_ROOT: &str = "http://localhost:8080/api";

/// Base URL of every resource the client talks to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub user: String,
    pub product: String,
    pub category: String,
    pub order: String,
    pub order_details: String,
    pub cart: String,
    /// Session endpoint root (`{auth}/login`)
    pub auth: String,
}

impl Endpoints {
    /// Derive every resource URL from a shared API root
    /// (e.g. `http://host/api` -> `http://host/api/user`)
    pub fn from_api_root(root: &str) -> Self {
        let root = root.trim_end_matches('/');
        Self {
            user: format!("{root}/user"),
            product: format!("{root}/product"),
            category: format!("{root}/category"),
            order: format!("{root}/order"),
            order_details: format!("{root}/orderdetails"),
            cart: format!("{root}/cart"),
            auth: format!("{root}/auth"),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::from_api_root(DEFAULT_API_ROOT)
    }
}

/// How the login screen authenticates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    /// `POST {auth}/login`, the server checks the password and returns a token
    #[default]
    Session,
    /// Download the whole user collection and look for a matching pair.
    /// Only for backends without a session endpoint.
    CollectionScan,
}

impl FromStr for AuthMode {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "session" => Ok(Self::Session),
            "scan" | "collection-scan" | "legacy" => Ok(Self::CollectionScan),
            other => Err(ClientError::Config(format!("unknown auth mode: {other}"))),
        }
    }
}

/// Client configuration for connecting to the food-ordering backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoints: Endpoints,

    /// Request timeout in seconds, 0 disables it
    pub timeout: u64,

    pub auth_mode: AuthMode,

    /// Session token, if one was obtained earlier
    pub token: Option<String>,
}

impl ClientConfig {
    /// Create a configuration with every resource under `api_root`
    pub fn new(api_root: &str) -> Self {
        Self {
            endpoints: Endpoints::from_api_root(api_root),
            timeout: 30,
            auth_mode: AuthMode::default(),
            token: None,
        }
    }

    /// Load configuration from environment variables
    ///
    /// - `FOOD_API_BASE_URL`: API root (default [`DEFAULT_API_ROOT`])
    /// - `FOOD_API_{USER,PRODUCT,CATEGORY,ORDER,ORDERDETAILS,CART,AUTH}_URL`:
    ///   per-resource overrides
    /// - `FOOD_API_TIMEOUT_SECS`: request timeout
    /// - `FOOD_AUTH_MODE`: `session` or `scan`
    /// - `FOOD_API_TOKEN`: session token from an earlier login
    pub fn from_env() -> ClientResult<Self> {
        let root = std::env::var("FOOD_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_ROOT.into());
        let mut config = Self::new(&root);

        let overrides: [(&str, &mut String); 7] = [
            ("FOOD_API_USER_URL", &mut config.endpoints.user),
            ("FOOD_API_PRODUCT_URL", &mut config.endpoints.product),
            ("FOOD_API_CATEGORY_URL", &mut config.endpoints.category),
            ("FOOD_API_ORDER_URL", &mut config.endpoints.order),
            ("FOOD_API_ORDERDETAILS_URL", &mut config.endpoints.order_details),
            ("FOOD_API_CART_URL", &mut config.endpoints.cart),
            ("FOOD_API_AUTH_URL", &mut config.endpoints.auth),
        ];
        for (name, slot) in overrides {
            if let Ok(url) = std::env::var(name)
                && !url.is_empty()
            {
                *slot = url.trim_end_matches('/').to_string();
            }
        }

        if let Ok(raw) = std::env::var("FOOD_API_TIMEOUT_SECS") {
            config.timeout = raw
                .parse()
                .map_err(|_| ClientError::Config(format!("FOOD_API_TIMEOUT_SECS: {raw:?}")))?;
        }
        if let Ok(raw) = std::env::var("FOOD_AUTH_MODE") {
            config.auth_mode = raw.parse()?;
        }
        if let Ok(token) = std::env::var("FOOD_API_TOKEN")
            && !token.is_empty()
        {
            config.token = Some(token);
        }
        Ok(config)
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    pub fn with_auth_mode(mut self, mode: AuthMode) -> Self {
        self.auth_mode = mode;
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Create a network HTTP client from this configuration
    pub fn build_http_client(&self) -> ClientResult<NetworkHttpClient> {
        NetworkHttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_ROOT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_from_root() {
        let endpoints = Endpoints::from_api_root("http://example.com/api/");
        assert_eq!(endpoints.user, "http://example.com/api/user");
        assert_eq!(endpoints.order_details, "http://example.com/api/orderdetails");
        assert_eq!(endpoints.auth, "http://example.com/api/auth");
    }

    #[test]
    fn test_auth_mode_parse() {
        assert_eq!("Session".parse::<AuthMode>().unwrap(), AuthMode::Session);
        assert_eq!("scan".parse::<AuthMode>().unwrap(), AuthMode::CollectionScan);
        assert!("oauth".parse::<AuthMode>().is_err());
    }

    #[test]
    fn test_builder() {
        let config = ClientConfig::new("http://h/api")
            .with_timeout(5)
            .with_auth_mode(AuthMode::CollectionScan)
            .with_token("t");
        assert_eq!(config.timeout, 5);
        assert_eq!(config.auth_mode, AuthMode::CollectionScan);
        assert_eq!(config.token.as_deref(), Some("t"));
        assert_eq!(config.endpoints.cart, "http://h/api/cart");
    }
}
