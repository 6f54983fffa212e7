//! Manage orders

use crate::http::HttpClient;
use crate::{ClientError, ClientResult, Notice, Route, SharedContext};
use shared::models::{Order, StatusAction};

/// Admin order list with complete/cancel actions
pub struct OrderBoardScreen<C> {
    ctx: SharedContext<C>,
    orders: Vec<Order>,
    /// Order whose status dialog is open
    selected: Option<i64>,
    notice: Option<Notice>,
}

impl<C: HttpClient> OrderBoardScreen<C> {
    pub fn new(ctx: SharedContext<C>) -> Self {
        Self {
            ctx,
            orders: Vec::new(),
            selected: None,
            notice: None,
        }
    }

    pub async fn load(&mut self) -> ClientResult<()> {
        match self.ctx.api.orders().list().await {
            Ok(orders) => {
                self.orders = orders;
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "error fetching orders");
                Err(e)
            }
        }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn order(&self, order_id: i64) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == order_id)
    }

    /// Open the status dialog for an order
    pub fn select(&mut self, order_id: i64) -> ClientResult<()> {
        if self.order(order_id).is_none() {
            return Err(ClientError::NotInLocalState(format!("order {order_id}")));
        }
        self.selected = Some(order_id);
        Ok(())
    }

    pub fn selected(&self) -> Option<i64> {
        self.selected
    }

    pub fn dismiss(&mut self) {
        self.selected = None;
    }

    /// `PUT /order/{action}/{orderId}` with the local record
    ///
    /// The body's `orderStatus` carries the action name (`complete` or
    /// `cancel`); the row is replaced by whatever the backend answers.
    pub async fn update_status(&mut self, order_id: i64, action: StatusAction) -> ClientResult<()> {
        let index = self
            .orders
            .iter()
            .position(|o| o.id == order_id)
            .ok_or_else(|| ClientError::NotInLocalState(format!("order {order_id}")))?;

        let mut body = self.orders[index].clone();
        body.order_status = action.as_str().to_string();

        let result = self.ctx.api.orders().update_status(action, &body).await;
        self.selected = None;
        match result {
            Ok(updated) => {
                tracing::info!(order_id, %action, status = %updated.order_status, "order status updated");
                self.orders[index] = updated;
                self.notice = Some(Notice::success("Order status updated successfully!"));
                Ok(())
            }
            Err(e) => {
                tracing::error!(order_id, %action, error = %e, "error updating order status");
                self.notice = Some(Notice::error(
                    "Failed to update order status. Please try again.",
                ));
                Err(e)
            }
        }
    }

    /// Route to the detail rows of an order, carrying its total
    pub fn view_details(&self, order_id: i64) -> ClientResult<Route> {
        let order = self
            .order(order_id)
            .ok_or_else(|| ClientError::NotInLocalState(format!("order {order_id}")))?;
        Ok(Route::ViewOrderDetail {
            order_id,
            total_amount: Some(order.total_amount),
        })
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }
}
