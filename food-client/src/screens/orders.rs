//! Order history tab

use crate::aggregate::{OrderBlock, fetch_order_blocks};
use crate::http::HttpClient;
use crate::{ClientError, ClientResult, Notice, SharedContext};
use shared::validation::validate_rating;

pub struct OrderHistoryScreen<C> {
    ctx: SharedContext<C>,
    user_id: i64,
    blocks: Vec<OrderBlock>,
    loading: bool,
    notice: Option<Notice>,
}

impl<C: HttpClient> OrderHistoryScreen<C> {
    pub fn new(ctx: SharedContext<C>, user_id: i64) -> Self {
        Self {
            ctx,
            user_id,
            blocks: Vec::new(),
            loading: false,
            notice: None,
        }
    }

    /// Rebuild the history from scratch
    ///
    /// Orders are kept in the order the backend lists them. An order whose
    /// details cannot be fetched is left out.
    pub async fn load(&mut self) -> ClientResult<()> {
        self.loading = true;
        self.blocks.clear();
        let result = self.fetch().await;
        self.loading = false;
        result
    }

    async fn fetch(&mut self) -> ClientResult<()> {
        let orders = match self.ctx.api.orders().list().await {
            Ok(orders) => orders,
            Err(e) => {
                tracing::error!(error = %e, "failed to fetch order ids");
                return Err(e);
            }
        };
        let order_ids: Vec<i64> = orders
            .iter()
            .filter(|o| o.user_id == self.user_id)
            .map(|o| o.id)
            .collect();

        self.blocks = fetch_order_blocks(&self.ctx.api, &order_ids).await;
        tracing::debug!(
            user_id = self.user_id,
            orders = order_ids.len(),
            shown = self.blocks.len(),
            "order history loaded"
        );
        Ok(())
    }

    pub fn blocks(&self) -> &[OrderBlock] {
        &self.blocks
    }

    pub fn block(&self, order_id: i64) -> Option<&OrderBlock> {
        self.blocks.iter().find(|b| b.order_id() == order_id)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Expand or collapse an order; returns the new state
    pub fn toggle(&mut self, order_id: i64) -> Option<bool> {
        let block = self.blocks.iter_mut().find(|b| b.order_id() == order_id)?;
        block.expanded = !block.expanded;
        Some(block.expanded)
    }

    /// Rate a completed, delivered and unrated order
    ///
    /// The order is read back first so the PUT carries the server's current
    /// record with only `ratings` replaced.
    pub async fn rate(&mut self, order_id: i64, rating: u8) -> ClientResult<()> {
        let rating = validate_rating(rating)?;
        let block = self
            .blocks
            .iter()
            .find(|b| b.order_id() == order_id)
            .ok_or_else(|| ClientError::NotInLocalState(format!("order {order_id}")))?;
        if !block.awaits_rating() {
            return Err(ClientError::InvalidState(format!(
                "order {order_id} cannot be rated"
            )));
        }

        self.loading = true;
        let result = self.submit_rating(order_id, rating).await;
        self.loading = false;

        match result {
            Ok(order) => {
                tracing::info!(order_id, rating, "rating updated");
                if let Some(block) = self.blocks.iter_mut().find(|b| b.order_id() == order_id) {
                    block.apply_order(order);
                }
                self.notice = Some(Notice::success("Rating updated successfully!"));
                Ok(())
            }
            Err(e) => {
                tracing::error!(order_id, error = %e, "failed to update rating");
                self.notice = Some(Notice::error("Failed to update rating. Please try again."));
                Err(e)
            }
        }
    }

    async fn submit_rating(&self, order_id: i64, rating: u8) -> ClientResult<shared::models::Order> {
        let orders = self.ctx.api.orders();
        let mut order = orders.get(order_id).await?;
        order.ratings = rating.to_string();
        orders.update(order_id, &order).await
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }
}
