//! Cart tab: aggregation, removal and checkout

use crate::aggregate::{CartLine, cart_total, fetch_products, join_cart};
use crate::http::HttpClient;
use crate::{ClientError, ClientResult, Notice, SharedContext};
use shared::Money;
use shared::models::Order;

/// What the cart tab renders
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartView {
    pub lines: Vec<CartLine>,
    /// Rows left out because their product could not be fetched
    pub unresolved: usize,
    /// Sum of the rendered line totals
    pub total: Money,
}

impl CartView {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn recompute_total(&mut self) {
        self.total = cart_total(&self.lines);
    }
}

pub struct CartScreen<C> {
    ctx: SharedContext<C>,
    user_id: i64,
    view: CartView,
    notice: Option<Notice>,
}

impl<C: HttpClient> CartScreen<C> {
    pub fn new(ctx: SharedContext<C>, user_id: i64) -> Self {
        Self {
            ctx,
            user_id,
            view: CartView::default(),
            notice: None,
        }
    }

    /// Fetch the user's cart rows, then their products concurrently
    pub async fn load(&mut self) -> ClientResult<&CartView> {
        let items = match self.ctx.api.cart().for_user(self.user_id).await {
            Ok(items) => items,
            Err(e) => {
                tracing::error!(user_id = self.user_id, error = %e, "error fetching cart details");
                return Err(e);
            }
        };

        let products = fetch_products(&self.ctx.api, items.iter().map(|i| i.product_id)).await;
        let (lines, unresolved) = join_cart(&items, &products);
        if unresolved > 0 {
            tracing::warn!(unresolved, "cart rows without product details");
        }

        self.view = CartView {
            lines,
            unresolved,
            total: Money::ZERO,
        };
        self.view.recompute_total();
        Ok(&self.view)
    }

    /// Delete one cart row; the total follows the remaining rows
    pub async fn remove(&mut self, cart_id: i64) -> ClientResult<()> {
        if !self.view.lines.iter().any(|l| l.item.id == cart_id) {
            return Err(ClientError::NotInLocalState(format!("cart item {cart_id}")));
        }
        if let Err(e) = self.ctx.api.cart().delete(cart_id).await {
            tracing::error!(cart_id, error = %e, "failed to delete item");
            return Err(e);
        }
        self.view.lines.retain(|l| l.item.id != cart_id);
        self.view.recompute_total();
        Ok(())
    }

    /// Place an order for the current total
    ///
    /// On success the local cart is cleared; the backend's cart rows are
    /// left alone.
    pub async fn checkout(&mut self) -> ClientResult<Option<Order>> {
        if self.view.is_empty() {
            self.notice = Some(Notice::error("Your cart is empty"));
            return Err(ClientError::InvalidState("cart is empty".into()));
        }

        let total = self.view.total;
        match self.ctx.api.orders().checkout(self.user_id, total).await {
            Ok(order) => {
                tracing::info!(user_id = self.user_id, %total, "checkout successful");
                self.view = CartView::default();
                self.notice = Some(Notice::success("Checkout successful"));
                Ok(order)
            }
            Err(e) => {
                tracing::error!(user_id = self.user_id, error = %e, "error during checkout");
                self.notice = Some(Notice::error("Failed to checkout"));
                Err(e)
            }
        }
    }

    pub fn view(&self) -> &CartView {
        &self.view
    }

    pub fn total(&self) -> Money {
        self.view.total
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }
}
