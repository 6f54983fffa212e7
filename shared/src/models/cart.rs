//! Cart Model

use crate::{Money, Quantity};
use serde::{Deserialize, Serialize};

/// One row of a user's cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(rename = "cartId")]
    pub id: i64,
    pub product_id: i64,
    pub user_id: i64,
    /// Unit price at the time the row was added
    pub price: Money,
    pub quantity: Quantity,
    /// Line total computed by the backend
    pub total_amount: Money,
    #[serde(default)]
    pub dt_added: String,
}

/// Body of `POST /cart/{productId}/{userId}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemCreate {
    pub product_id: i64,
    pub user_id: i64,
    pub price: Money,
    pub quantity: Quantity,
}
