//! Order Detail Model

use crate::{Money, Quantity};
use serde::{Deserialize, Serialize};

/// One line of an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetail {
    #[serde(rename = "orderDetailsId")]
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: Quantity,
    pub price: Money,
    pub total_amount: Money,
    #[serde(default)]
    pub dt_added: String,
}
