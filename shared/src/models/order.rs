//! Order Model

use crate::Money;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// `orderStatus` of an order the kitchen has finished
pub const ORDER_COMPLETED: &str = "Completed";
/// `orderStatus` of an order an admin cancelled
pub const ORDER_CANCELLED: &str = "Cancelled";
/// `orderStatus` of a freshly placed order
pub const ORDER_PENDING: &str = "Pending";
/// `deliveryStatus` once the order reached the customer
pub const DELIVERY_DELIVERED: &str = "Delivered";
/// `ratings` value of an order the customer has not rated yet
pub const RATING_NOT_GIVEN: &str = "Not given yet";

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "orderId")]
    pub id: i64,
    pub user_id: i64,
    pub total_amount: Money,
    #[serde(default)]
    pub order_status: String,
    #[serde(default)]
    pub delivery_status: String,
    #[serde(default)]
    pub ratings: String,
    #[serde(default)]
    pub dt_added: String,
}

impl Order {
    /// Completed, delivered and not rated yet
    pub fn awaits_rating(&self) -> bool {
        self.status().awaits_rating()
    }

    pub fn status(&self) -> OrderStatus {
        OrderStatus {
            order_status: self.order_status.clone(),
            delivery_status: self.delivery_status.clone(),
            ratings: self.ratings.clone(),
        }
    }
}

/// The status fields of an order, copied onto each of its detail rows
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatus {
    pub order_status: String,
    pub delivery_status: String,
    pub ratings: String,
}

impl OrderStatus {
    pub fn awaits_rating(&self) -> bool {
        self.order_status == ORDER_COMPLETED
            && self.delivery_status == DELIVERY_DELIVERED
            && self.ratings == RATING_NOT_GIVEN
    }
}

/// Body of the checkout call `POST /order/{userId}/{total}`
///
/// Status fields are sent empty; the backend fills them in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    /// Sent as a string
    pub user_id: String,
    pub total_amount: Money,
    pub order_status: String,
    pub delivery_status: String,
    pub ratings: String,
    pub dt_added: String,
}

impl OrderCreate {
    pub fn checkout(user_id: i64, total: Money) -> Self {
        Self {
            user_id: user_id.to_string(),
            total_amount: total.rounded(),
            order_status: String::new(),
            delivery_status: String::new(),
            ratings: String::new(),
            dt_added: String::new(),
        }
    }
}

/// Admin status transition, used as a path segment of
/// `PUT /order/{action}/{orderId}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusAction {
    Complete,
    Cancel,
}

impl StatusAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::Cancel => "cancel",
        }
    }

    /// `orderStatus` an order carries after this action
    pub fn resulting_status(&self) -> &'static str {
        match self {
            Self::Complete => ORDER_COMPLETED,
            Self::Cancel => ORDER_CANCELLED,
        }
    }
}

impl fmt::Display for StatusAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "complete" => Ok(Self::Complete),
            "cancel" => Ok(Self::Cancel),
            other => Err(format!("unknown status action: {other}")),
        }
    }
}
