//! Product Model

use crate::{Money, Quantity};
use serde::{Deserialize, Serialize};

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "productId")]
    pub id: i64,
    pub name: String,
    pub desc: String,
    pub price: Money,
    pub stock: Quantity,
    /// Category reference by *name*, not id
    pub category: String,
    /// Image URL
    pub image: String,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub desc: String,
    pub price: Money,
    pub stock: Quantity,
    pub category: String,
    pub image: String,
}

impl ProductCreate {
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            desc: self.desc,
            price: self.price,
            stock: self.stock,
            category: self.category,
            image: self.image,
        }
    }
}
