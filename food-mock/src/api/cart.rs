//! `/api/cart`

use super::ApiResult;
use crate::state::{MockState, next_id, timestamp};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use shared::error::{AppError, ErrorCode};
use shared::models::{CartItem, CartItemCreate};

fn cart_item_not_found(id: i64) -> AppError {
    AppError::with_message(ErrorCode::CartItemNotFound, format!("cart item {id} not found"))
}

pub async fn list(State(state): State<MockState>) -> ApiResult<Vec<CartItem>> {
    Ok(Json(state.read().await.cart.clone()))
}

pub async fn get(State(state): State<MockState>, Path(id): Path<i64>) -> ApiResult<CartItem> {
    let store = state.read().await;
    store
        .cart
        .iter()
        .find(|c| c.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| cart_item_not_found(id))
}

/// `POST /api/cart/{productId}/{userId}`; the line total is computed here
pub async fn add(
    State(state): State<MockState>,
    Path((product_id, user_id)): Path<(i64, i64)>,
    Json(data): Json<CartItemCreate>,
) -> Result<(StatusCode, Json<CartItem>), AppError> {
    if data.quantity.get() == 0 {
        return Err(AppError::new(ErrorCode::InvalidQuantity));
    }
    let mut store = state.write().await;
    let product = store
        .products
        .iter()
        .find(|p| p.id == product_id)
        .ok_or_else(|| {
            AppError::with_message(
                ErrorCode::ProductNotFound,
                format!("product {product_id} not found"),
            )
        })?;
    let price = if data.price.is_zero() { product.price } else { data.price };

    let item = CartItem {
        id: next_id(&store.cart, |c| c.id),
        product_id,
        user_id,
        price,
        quantity: data.quantity,
        total_amount: price.times(data.quantity.get()),
        dt_added: timestamp(),
    };
    store.cart.push(item.clone());
    tracing::info!(cart_id = item.id, product_id, user_id, "cart item added");
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn update(
    State(state): State<MockState>,
    Path(id): Path<i64>,
    Json(data): Json<CartItem>,
) -> ApiResult<CartItem> {
    let mut store = state.write().await;
    let item = store
        .cart
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or_else(|| cart_item_not_found(id))?;
    *item = CartItem {
        id,
        total_amount: data.price.times(data.quantity.get()),
        ..data
    };
    Ok(Json(item.clone()))
}

pub async fn delete(State(state): State<MockState>, Path(id): Path<i64>) -> Result<StatusCode, AppError> {
    let mut store = state.write().await;
    let before = store.cart.len();
    store.cart.retain(|c| c.id != id);
    if store.cart.len() == before {
        return Err(cart_item_not_found(id));
    }
    Ok(StatusCode::NO_CONTENT)
}
