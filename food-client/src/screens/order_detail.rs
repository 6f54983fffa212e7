//! Detail rows of one order (admin view)

use crate::http::HttpClient;
use crate::{ClientResult, Notice, SharedContext};
use shared::Money;
use shared::models::OrderDetail;

pub struct OrderDetailScreen<C> {
    ctx: SharedContext<C>,
    order_id: i64,
    /// Order total handed over by the previous screen
    total_amount: Option<Money>,
    details: Vec<OrderDetail>,
    notice: Option<Notice>,
}

impl<C: HttpClient> OrderDetailScreen<C> {
    pub fn new(ctx: SharedContext<C>, order_id: i64, total_amount: Option<Money>) -> Self {
        Self {
            ctx,
            order_id,
            total_amount,
            details: Vec::new(),
            notice: None,
        }
    }

    pub async fn load(&mut self) -> ClientResult<()> {
        match self.ctx.api.order_details().for_order(self.order_id).await {
            Ok(details) => {
                self.details = details;
                Ok(())
            }
            Err(e) => {
                tracing::error!(order_id = self.order_id, error = %e, "error fetching order details");
                self.notice = Some(Notice::error("Failed to load order details"));
                Err(e)
            }
        }
    }

    pub fn order_id(&self) -> i64 {
        self.order_id
    }

    pub fn details(&self) -> &[OrderDetail] {
        &self.details
    }

    pub fn total_amount(&self) -> Option<Money> {
        self.total_amount
    }

    /// Sum of the line totals, 2 dp
    pub fn grand_total(&self) -> Money {
        self.details
            .iter()
            .map(|d| d.total_amount)
            .sum::<Money>()
            .rounded()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }
}
