//! Orders and order details

use super::Collection;
use crate::ClientResult;
use crate::http::HttpClient;
use shared::Money;
use shared::models::{Order, OrderCreate, OrderDetail, StatusAction};
use std::ops::Deref;

/// Order resource: plain CRUD plus checkout and the admin status actions
pub struct OrdersApi<'a, C> {
    inner: Collection<'a, C, Order>,
}

impl<'a, C: HttpClient> OrdersApi<'a, C> {
    pub(crate) fn new(http: &'a C, base: &'a str) -> Self {
        Self {
            inner: Collection::new(http, base),
        }
    }

    /// `POST {order}/{userId}/{total}`
    ///
    /// The total in the path and in the body are both rounded to 2 dp. A
    /// backend that answers with an empty body yields `None`.
    pub async fn checkout(&self, user_id: i64, total: Money) -> ClientResult<Option<Order>> {
        let total = total.rounded();
        let url = format!("{}/{}/{}", self.inner.base(), user_id, total);
        let body = OrderCreate::checkout(user_id, total);
        self.inner.http.post(&url, &body).await
    }

    /// `PUT {order}/{action}/{orderId}` with the full record
    pub async fn update_status(&self, action: StatusAction, order: &Order) -> ClientResult<Order> {
        let url = format!("{}/{}/{}", self.inner.base(), action, order.id);
        self.inner.http.put(&url, order).await
    }
}

impl<'a, C> Deref for OrdersApi<'a, C> {
    type Target = Collection<'a, C, Order>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

/// Order detail resource
pub struct OrderDetailsApi<'a, C> {
    inner: Collection<'a, C, OrderDetail>,
}

impl<'a, C: HttpClient> OrderDetailsApi<'a, C> {
    pub(crate) fn new(http: &'a C, base: &'a str) -> Self {
        Self {
            inner: Collection::new(http, base),
        }
    }

    /// Detail rows of one order: `GET {orderdetails}/user/{orderId}`
    ///
    /// The path segment says `user` but the id is the order's.
    pub async fn for_order(&self, order_id: i64) -> ClientResult<Vec<OrderDetail>> {
        let url = format!("{}/user/{}", self.inner.base(), order_id);
        self.inner.http.get(&url).await
    }
}

impl<'a, C> Deref for OrderDetailsApi<'a, C> {
    type Target = Collection<'a, C, OrderDetail>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
