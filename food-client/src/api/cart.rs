//! Cart resource

use super::Collection;
use crate::ClientResult;
use crate::http::HttpClient;
use shared::models::{CartItem, CartItemCreate};
use std::ops::Deref;

pub struct CartApi<'a, C> {
    inner: Collection<'a, C, CartItem>,
}

impl<'a, C: HttpClient> CartApi<'a, C> {
    pub(crate) fn new(http: &'a C, base: &'a str) -> Self {
        Self {
            inner: Collection::new(http, base),
        }
    }

    /// Cart rows belonging to `user_id`
    ///
    /// The backend has no per-user listing, so the full collection is
    /// fetched and filtered here.
    pub async fn for_user(&self, user_id: i64) -> ClientResult<Vec<CartItem>> {
        let mut items = self.inner.list().await?;
        items.retain(|item| item.user_id == user_id);
        Ok(items)
    }

    /// `POST {cart}/{productId}/{userId}`
    pub async fn add(&self, item: &CartItemCreate) -> ClientResult<Option<CartItem>> {
        let url = format!("{}/{}/{}", self.inner.base(), item.product_id, item.user_id);
        self.inner.http.post(&url, item).await
    }
}

impl<'a, C> Deref for CartApi<'a, C> {
    type Target = Collection<'a, C, CartItem>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
