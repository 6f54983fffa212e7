//! Typed REST API over an [`HttpClient`]
//!
//! [`Api`] owns the transport and the resource [`Endpoints`]. Each accessor
//! hands out a borrowed view for one resource collection.

mod auth;
mod cart;
mod orders;

pub use auth::AuthApi;
pub use cart::CartApi;
pub use orders::{OrderDetailsApi, OrdersApi};

use crate::http::HttpClient;
use crate::{ClientResult, Endpoints};
use serde::Serialize;
use serde::de::{DeserializeOwned, IgnoredAny};
use shared::models::{Category, Product, User};
use std::marker::PhantomData;

/// Typed API for every resource the client uses
#[derive(Debug, Clone)]
pub struct Api<C> {
    http: C,
    endpoints: Endpoints,
}

impl<C: HttpClient> Api<C> {
    pub fn new(http: C, endpoints: Endpoints) -> Self {
        Self { http, endpoints }
    }

    pub fn http(&self) -> &C {
        &self.http
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn users(&self) -> Collection<'_, C, User> {
        Collection::new(&self.http, &self.endpoints.user)
    }

    pub fn products(&self) -> Collection<'_, C, Product> {
        Collection::new(&self.http, &self.endpoints.product)
    }

    pub fn categories(&self) -> Collection<'_, C, Category> {
        Collection::new(&self.http, &self.endpoints.category)
    }

    pub fn orders(&self) -> OrdersApi<'_, C> {
        OrdersApi::new(&self.http, &self.endpoints.order)
    }

    pub fn order_details(&self) -> OrderDetailsApi<'_, C> {
        OrderDetailsApi::new(&self.http, &self.endpoints.order_details)
    }

    pub fn cart(&self) -> CartApi<'_, C> {
        CartApi::new(&self.http, &self.endpoints.cart)
    }

    pub fn auth(&self) -> AuthApi<'_, C> {
        AuthApi::new(&self.http, &self.endpoints.auth)
    }
}

/// CRUD calls of one resource collection rooted at `base`
///
/// | op     | request              |
/// |--------|----------------------|
/// | list   | `GET {base}`         |
/// | get    | `GET {base}/{id}`    |
/// | create | `POST {base}`        |
/// | update | `PUT {base}/{id}`    |
/// | delete | `DELETE {base}/{id}` |
pub struct Collection<'a, C, T> {
    http: &'a C,
    base: &'a str,
    _record: PhantomData<fn() -> T>,
}

impl<'a, C, T> Collection<'a, C, T>
where
    C: HttpClient,
    T: DeserializeOwned,
{
    pub(crate) fn new(http: &'a C, base: &'a str) -> Self {
        Self {
            http,
            base,
            _record: PhantomData,
        }
    }

    pub fn base(&self) -> &str {
        self.base
    }

    pub fn url(&self, id: i64) -> String {
        format!("{}/{}", self.base, id)
    }

    /// Fetch the whole collection
    pub async fn list(&self) -> ClientResult<Vec<T>> {
        self.http.get(self.base).await
    }

    pub async fn get(&self, id: i64) -> ClientResult<T> {
        self.http.get(&self.url(id)).await
    }

    /// Create a record, returning it as stored by the backend
    pub async fn create<B: Serialize + Sync>(&self, body: &B) -> ClientResult<T> {
        self.http.post(self.base, body).await
    }

    pub async fn update<B: Serialize + Sync>(&self, id: i64, body: &B) -> ClientResult<T> {
        self.http.put(&self.url(id), body).await
    }

    /// Whatever the backend answers on success is discarded
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        let _: IgnoredAny = self.http.delete(&self.url(id)).await?;
        Ok(())
    }
}
