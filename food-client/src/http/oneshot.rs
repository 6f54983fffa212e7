// food-client/src/http/oneshot.rs
// Oneshot HTTP client - in-memory calls against an axum Router
//
// Requires the "in-process" feature

use super::{HttpClient, decode_response};
use crate::{ClientError, ClientResult};
use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Method, Request, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower::ServiceExt;

/// Oneshot HTTP client
///
/// Drives a [`Router`] through `tower::ServiceExt::oneshot` so the client
/// and a backend can share one process without a socket.
///
/// # Example
///
/// ```ignore
/// let client = OneshotHttpClient::new(food_mock::router(state));
/// let users: Vec<User> = client.get("http://localhost/api/user").await?;
/// ```
#[derive(Debug, Clone)]
pub struct OneshotHttpClient {
    router: Router,
    token: Arc<RwLock<Option<String>>>,
}

impl OneshotHttpClient {
    /// `router` must already have its state attached
    pub fn new(router: Router) -> Self {
        Self {
            router,
            token: Arc::new(RwLock::new(None)),
        }
    }

    async fn build_request(
        &self,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> ClientResult<Request<Body>> {
        let mut builder = Request::builder().method(method).uri(url);
        if let Some(token) = self.token.read().await.as_deref() {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let body = match body {
            Some(bytes) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(bytes)
            }
            None => Body::empty(),
        };
        builder
            .body(body)
            .map_err(|e| ClientError::Internal(format!("Failed to build request: {e}")))
    }

    async fn execute<T: DeserializeOwned>(&self, request: Request<Body>) -> ClientResult<T> {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Internal(format!("Oneshot call failed: {e}")))?;

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Internal(format!("Failed to read body: {e}")))?;
        decode_response(status, &body)
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> ClientResult<T> {
        let request = self.build_request(method, url, body).await?;
        self.execute(request).await
    }
}

#[async_trait]
impl HttpClient for OneshotHttpClient {
    async fn get<T: DeserializeOwned>(&self, url: &str) -> ClientResult<T> {
        self.call(Method::GET, url, None).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        url: &str,
        body: &B,
    ) -> ClientResult<T> {
        let bytes = serde_json::to_vec(body)?;
        self.call(Method::POST, url, Some(bytes)).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, url: &str) -> ClientResult<T> {
        self.call(Method::POST, url, None).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        url: &str,
        body: &B,
    ) -> ClientResult<T> {
        let bytes = serde_json::to_vec(body)?;
        self.call(Method::PUT, url, Some(bytes)).await
    }

    async fn delete<T: DeserializeOwned>(&self, url: &str) -> ClientResult<T> {
        self.call(Method::DELETE, url, None).await
    }

    async fn set_token(&self, token: Option<String>) {
        *self.token.write().await = token;
    }

    async fn token(&self) -> Option<String> {
        self.token.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;

    #[tokio::test]
    async fn test_absolute_url_routes_on_path() {
        let router = Router::new().route("/api/ping", get(|| async { "\"pong\"" }));
        let client = OneshotHttpClient::new(router);
        let reply: String = client.get("http://localhost:8080/api/ping").await.unwrap();
        assert_eq!(reply, "pong");
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let client = OneshotHttpClient::new(Router::new());
        let err = client
            .get::<String>("http://localhost/api/missing")
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_token_round_trip() {
        let client = OneshotHttpClient::new(Router::new());
        assert_eq!(client.token().await, None);
        client.set_token(Some("abc".into())).await;
        assert_eq!(client.token().await.as_deref(), Some("abc"));
    }
}
