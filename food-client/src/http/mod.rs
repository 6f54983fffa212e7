//! HTTP transport
//!
//! Every request path handed to an [`HttpClient`] is the full resource URL
//! built from [`crate::Endpoints`]. The in-process client routes on the path
//! component only, so the same URLs work for both transports.

mod network;
#[cfg(feature = "in-process")]
mod oneshot;

pub use network::NetworkHttpClient;
#[cfg(feature = "in-process")]
pub use oneshot::OneshotHttpClient;

use crate::{ClientError, ClientResult};
use async_trait::async_trait;
use http::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// HTTP client trait
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, url: &str) -> ClientResult<T>;

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        url: &str,
        body: &B,
    ) -> ClientResult<T>;

    /// POST without a request body
    async fn post_empty<T: DeserializeOwned>(&self, url: &str) -> ClientResult<T>;

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        url: &str,
        body: &B,
    ) -> ClientResult<T>;

    async fn delete<T: DeserializeOwned>(&self, url: &str) -> ClientResult<T>;

    /// Replace the bearer token sent with every request
    async fn set_token(&self, token: Option<String>);

    async fn token(&self) -> Option<String>;
}

/// Turn a raw response into a typed value or a [`ClientError`]
///
/// An empty success body decodes as JSON `null`, so callers that expect
/// nothing can ask for `()` or `Option<_>`.
pub(crate) fn decode_response<T: DeserializeOwned>(
    status: StatusCode,
    body: &[u8],
) -> ClientResult<T> {
    if !status.is_success() {
        return Err(ClientError::from_status(status, body));
    }
    let body = if body.iter().all(u8::is_ascii_whitespace) {
        b"null".as_slice()
    } else {
        body
    };
    serde_json::from_slice(body)
        .map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Category;

    #[test]
    fn test_empty_body_decodes_as_unit() {
        let value: () = decode_response(StatusCode::OK, b"").unwrap();
        assert_eq!(value, ());
        let value: Option<Category> = decode_response(StatusCode::NO_CONTENT, b"").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_failure_status_maps_to_error() {
        let err = decode_response::<Category>(StatusCode::NOT_FOUND, b"").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_malformed_body() {
        let err = decode_response::<Category>(StatusCode::OK, b"{not json").unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse(_)));
    }
}
