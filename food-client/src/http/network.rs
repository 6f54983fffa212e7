// food-client/src/http/network.rs
// Network HTTP client over reqwest

use super::{HttpClient, decode_response};
use crate::{ClientConfig, ClientResult};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// Network HTTP client
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    token: Arc<RwLock<Option<String>>>,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let mut builder = Client::builder();
        if config.timeout > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout));
        }
        Ok(Self {
            client: builder.build()?,
            token: Arc::new(RwLock::new(config.token.clone())),
        })
    }

    async fn send<T: DeserializeOwned>(&self, mut req: RequestBuilder) -> ClientResult<T> {
        if let Some(token) = self.token.read().await.as_deref() {
            req = req.bearer_auth(token);
        }
        let response = req.send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        if !status.is_success() {
            tracing::debug!(status = %status, "request failed");
        }
        decode_response(status, &body)
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, url: &str) -> ClientResult<T> {
        tracing::trace!(url, "GET");
        self.send(self.client.get(url)).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        url: &str,
        body: &B,
    ) -> ClientResult<T> {
        tracing::trace!(url, "POST");
        self.send(self.client.post(url).json(body)).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, url: &str) -> ClientResult<T> {
        tracing::trace!(url, "POST");
        self.send(self.client.post(url)).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        url: &str,
        body: &B,
    ) -> ClientResult<T> {
        tracing::trace!(url, "PUT");
        self.send(self.client.put(url).json(body)).await
    }

    async fn delete<T: DeserializeOwned>(&self, url: &str) -> ClientResult<T> {
        tracing::trace!(url, "DELETE");
        self.send(self.client.delete(url)).await
    }

    async fn set_token(&self, token: Option<String>) {
        *self.token.write().await = token;
    }

    async fn token(&self) -> Option<String> {
        self.token.read().await.clone()
    }
}
