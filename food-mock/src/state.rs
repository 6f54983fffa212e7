//! Shared application state for food-mock

use shared::models::{CartItem, Category, Order, OrderDetail, Product, User};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Every collection the backend serves
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub users: Vec<User>,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    pub cart: Vec<CartItem>,
    pub orders: Vec<Order>,
    pub order_details: Vec<OrderDetail>,
    /// Session token -> user id
    pub sessions: HashMap<String, i64>,
}

/// Next id of a collection: one past the largest, starting at 1
pub fn next_id<T>(items: &[T], id: impl Fn(&T) -> i64) -> i64 {
    items.iter().map(id).max().unwrap_or(0) + 1
}

/// Timestamp stored in `dtAdded`
pub fn timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Handle to the store, cloned into every handler
#[derive(Debug, Clone, Default)]
pub struct MockState {
    store: Arc<RwLock<Store>>,
}

impl MockState {
    /// Empty backend
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(store: Store) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Backend pre-filled with [`crate::seed::demo_store`]
    pub fn seeded() -> Self {
        Self::with_store(crate::seed::demo_store())
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Store> {
        self.store.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Store> {
        self.store.write().await
    }

    /// Copy of the current store, for assertions
    pub async fn snapshot(&self) -> Store {
        self.store.read().await.clone()
    }
}
