#![allow(dead_code)]

use async_trait::async_trait;
use food_client::http::HttpClient;
use food_client::{AppContext, AuthMode, ClientConfig, ClientError, ClientResult, OneshotHttpClient, SharedContext};
use food_mock::MockState;
use food_mock::seed::{ADMIN_EMAIL, ADMIN_PASSWORD, CUSTOMER_EMAIL, CUSTOMER_PASSWORD};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const API_ROOT: &str = "http://food.test/api";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("food_client=debug")
        .with_test_writer()
        .try_init();
}

/// Context talking to `state` in-process
pub fn context(state: &MockState) -> SharedContext<OneshotHttpClient> {
    context_with_mode(state, AuthMode::Session)
}

pub fn context_with_mode(state: &MockState, mode: AuthMode) -> SharedContext<OneshotHttpClient> {
    init_tracing();
    let http = OneshotHttpClient::new(food_mock::router(state.clone()));
    let config = ClientConfig::new(API_ROOT).with_auth_mode(mode);
    AppContext::new(http, &config).shared()
}

/// Open a session on `ctx`
pub async fn sign_in<C: HttpClient>(ctx: &SharedContext<C>, email: &str, password: &str) {
    ctx.api
        .auth()
        .login(email, password)
        .await
        .expect("seeded account logs in");
}

/// In-process context signed in as the seeded admin
pub async fn admin_context(state: &MockState) -> SharedContext<OneshotHttpClient> {
    let ctx = context(state);
    sign_in(&ctx, ADMIN_EMAIL, ADMIN_PASSWORD).await;
    ctx
}

/// In-process context signed in as the seeded customer
pub async fn customer_context(state: &MockState) -> SharedContext<OneshotHttpClient> {
    let ctx = context(state);
    sign_in(&ctx, CUSTOMER_EMAIL, CUSTOMER_PASSWORD).await;
    ctx
}

/// Wraps the in-process client, failing every request whose URL ends with
/// one of `fail_suffixes`, counting all requests and keeping the bodies
/// that were sent
#[derive(Clone)]
pub struct FlakyClient {
    inner: OneshotHttpClient,
    fail_suffixes: Vec<String>,
    calls: Arc<AtomicUsize>,
    sent: Arc<Mutex<Vec<(String, Value)>>>,
}

impl FlakyClient {
    pub fn new(state: &MockState, fail_suffixes: &[&str]) -> Self {
        Self {
            inner: OneshotHttpClient::new(food_mock::router(state.clone())),
            fail_suffixes: fail_suffixes.iter().map(|s| s.to_string()).collect(),
            calls: Arc::new(AtomicUsize::new(0)),
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// `(url, body)` of every POST and PUT so far
    pub fn sent(&self) -> Arc<Mutex<Vec<(String, Value)>>> {
        self.sent.clone()
    }

    fn record<B: Serialize>(&self, url: &str, body: &B) {
        let value = serde_json::to_value(body).unwrap_or(Value::Null);
        self.sent.lock().unwrap().push((url.to_string(), value));
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn counter(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }

    fn check(&self, url: &str) -> ClientResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_suffixes.iter().any(|s| url.ends_with(s.as_str())) {
            return Err(ClientError::Api {
                status: 500,
                code: None,
                message: format!("injected failure for {url}"),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl HttpClient for FlakyClient {
    async fn get<T: DeserializeOwned>(&self, url: &str) -> ClientResult<T> {
        self.check(url)?;
        self.inner.get(url).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        url: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.check(url)?;
        self.record(url, body);
        self.inner.post(url, body).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, url: &str) -> ClientResult<T> {
        self.check(url)?;
        self.inner.post_empty(url).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        url: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.check(url)?;
        self.record(url, body);
        self.inner.put(url, body).await
    }

    async fn delete<T: DeserializeOwned>(&self, url: &str) -> ClientResult<T> {
        self.check(url)?;
        self.inner.delete(url).await
    }

    async fn set_token(&self, token: Option<String>) {
        self.inner.set_token(token).await
    }

    async fn token(&self) -> Option<String> {
        self.inner.token().await
    }
}

pub fn flaky_context(client: FlakyClient) -> SharedContext<FlakyClient> {
    init_tracing();
    AppContext::new(client, &ClientConfig::new(API_ROOT)).shared()
}
