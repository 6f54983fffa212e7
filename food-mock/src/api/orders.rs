//! `/api/order` and `/api/orderdetails`

use super::ApiResult;
use crate::state::{MockState, next_id, timestamp};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use shared::Money;
use shared::error::{AppError, ErrorCode};
use shared::models::{
    DELIVERY_DELIVERED, ORDER_PENDING, Order, OrderCreate, OrderDetail, RATING_NOT_GIVEN,
    StatusAction,
};
use shared::validation::validate_rating;

fn order_not_found(id: i64) -> AppError {
    AppError::with_message(ErrorCode::OrderNotFound, format!("order {id} not found"))
}

/// `ratings` is either the not-rated marker or a number from 1 to 5
fn check_ratings(ratings: &str) -> Result<(), AppError> {
    if ratings.is_empty() || ratings == RATING_NOT_GIVEN {
        return Ok(());
    }
    ratings
        .parse::<u8>()
        .ok()
        .and_then(|r| validate_rating(r).ok())
        .map(|_| ())
        .ok_or_else(|| AppError::new(ErrorCode::InvalidRating).with_detail("ratings", ratings))
}

pub async fn list(State(state): State<MockState>) -> ApiResult<Vec<Order>> {
    Ok(Json(state.read().await.orders.clone()))
}

pub async fn get(State(state): State<MockState>, Path(id): Path<i64>) -> ApiResult<Order> {
    let store = state.read().await;
    store
        .orders
        .iter()
        .find(|o| o.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| order_not_found(id))
}

/// Full replacement of an order record (used for ratings)
pub async fn update(
    State(state): State<MockState>,
    Path(id): Path<i64>,
    Json(data): Json<Order>,
) -> ApiResult<Order> {
    check_ratings(&data.ratings)?;
    let mut store = state.write().await;
    let order = store
        .orders
        .iter_mut()
        .find(|o| o.id == id)
        .ok_or_else(|| order_not_found(id))?;
    *order = Order { id, ..data };
    tracing::info!(order_id = id, ratings = %order.ratings, "order updated");
    Ok(Json(order.clone()))
}

pub async fn delete(State(state): State<MockState>, Path(id): Path<i64>) -> Result<StatusCode, AppError> {
    let mut store = state.write().await;
    let before = store.orders.len();
    store.orders.retain(|o| o.id != id);
    if store.orders.len() == before {
        return Err(order_not_found(id));
    }
    store.order_details.retain(|d| d.order_id != id);
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /api/order/{userId}/{total}`
///
/// Copies the user's cart rows into order details. The cart itself is
/// left untouched.
pub async fn checkout(
    State(state): State<MockState>,
    Path((user_id, total)): Path<(i64, String)>,
    Json(data): Json<OrderCreate>,
) -> Result<(StatusCode, Json<Order>), AppError> {
    let total = Money::parse(&total)
        .map_err(|e| AppError::with_message(ErrorCode::InvalidAmount, e.to_string()))?;
    if data.user_id != user_id.to_string() {
        return Err(AppError::invalid_request("userId in body and path differ"));
    }

    let mut store = state.write().await;
    let now = timestamp();
    let order = Order {
        id: next_id(&store.orders, |o| o.id),
        user_id,
        total_amount: total.rounded(),
        order_status: ORDER_PENDING.into(),
        delivery_status: ORDER_PENDING.into(),
        ratings: RATING_NOT_GIVEN.into(),
        dt_added: now.clone(),
    };

    let mut next_detail = next_id(&store.order_details, |d| d.id);
    let details: Vec<OrderDetail> = store
        .cart
        .iter()
        .filter(|c| c.user_id == user_id)
        .map(|c| {
            let detail = OrderDetail {
                id: next_detail,
                order_id: order.id,
                product_id: c.product_id,
                quantity: c.quantity,
                price: c.price,
                total_amount: c.total_amount,
                dt_added: now.clone(),
            };
            next_detail += 1;
            detail
        })
        .collect();

    tracing::info!(order_id = order.id, user_id, total = %order.total_amount, lines = details.len(), "order placed");
    store.order_details.extend(details);
    store.orders.push(order.clone());
    Ok((StatusCode::CREATED, Json(order)))
}

/// `PUT /api/order/{action}/{orderId}`
///
/// The stored record is authoritative; the request body is not read.
pub async fn update_status(
    State(state): State<MockState>,
    Path((action, id)): Path<(String, i64)>,
) -> ApiResult<Order> {
    let action: StatusAction = action.parse().map_err(|e: String| {
        AppError::with_message(ErrorCode::InvalidStatusAction, e)
    })?;
    let mut store = state.write().await;
    let order = store
        .orders
        .iter_mut()
        .find(|o| o.id == id)
        .ok_or_else(|| order_not_found(id))?;

    order.order_status = action.resulting_status().into();
    if action == StatusAction::Complete {
        order.delivery_status = DELIVERY_DELIVERED.into();
        if check_ratings(&order.ratings).is_err() || order.ratings.is_empty() {
            order.ratings = RATING_NOT_GIVEN.into();
        }
    }
    tracing::info!(order_id = id, %action, "order status changed");
    Ok(Json(order.clone()))
}

pub async fn list_details(State(state): State<MockState>) -> ApiResult<Vec<OrderDetail>> {
    Ok(Json(state.read().await.order_details.clone()))
}

pub async fn get_detail(State(state): State<MockState>, Path(id): Path<i64>) -> ApiResult<OrderDetail> {
    let store = state.read().await;
    store
        .order_details
        .iter()
        .find(|d| d.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("order detail {id}")))
}

/// `GET /api/orderdetails/user/{orderId}`: rows of one order
///
/// An order without rows yields an empty list; an unknown order is 404.
pub async fn details_of_order(
    State(state): State<MockState>,
    Path(order_id): Path<i64>,
) -> ApiResult<Vec<OrderDetail>> {
    let store = state.read().await;
    if !store.orders.iter().any(|o| o.id == order_id) {
        return Err(order_not_found(order_id));
    }
    Ok(Json(
        store
            .order_details
            .iter()
            .filter(|d| d.order_id == order_id)
            .cloned()
            .collect(),
    ))
}
