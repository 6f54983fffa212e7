//! API routes for food-mock

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod orders;
pub mod users;

use crate::auth::require_auth;
use crate::state::MockState;
use axum::routing::{get, post};
use axum::{Json, Router, middleware};
use shared::error::AppError;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub(crate) type ApiResult<T> = Result<Json<T>, AppError>;

/// Create the router with every endpoint under `/api`
///
/// Writes go through [`require_auth`].
pub fn router(state: MockState) -> Router {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/user", get(users::list).post(users::create))
        .route(
            "/api/user/{id}",
            get(users::get).put(users::update).delete(users::delete),
        )
        .route("/api/category", get(catalog::list_categories).post(catalog::create_category))
        .route(
            "/api/category/{id}",
            get(catalog::get_category)
                .put(catalog::update_category)
                .delete(catalog::delete_category),
        )
        .route("/api/product", get(catalog::list_products).post(catalog::create_product))
        .route(
            "/api/product/{id}",
            get(catalog::get_product)
                .put(catalog::update_product)
                .delete(catalog::delete_product),
        )
        .route("/api/cart", get(cart::list))
        .route(
            "/api/cart/{id}",
            get(cart::get).put(cart::update).delete(cart::delete),
        )
        // {productId}/{userId}
        .route("/api/cart/{id}/{other}", post(cart::add))
        .route("/api/order", get(orders::list))
        .route(
            "/api/order/{id}",
            get(orders::get).put(orders::update).delete(orders::delete),
        )
        // POST {userId}/{total} places an order, PUT {action}/{orderId} moves its status
        .route(
            "/api/order/{id}/{other}",
            post(orders::checkout).put(orders::update_status),
        )
        .route("/api/orderdetails", get(orders::list_details))
        .route("/api/orderdetails/{id}", get(orders::get_detail))
        .route("/api/orderdetails/user/{id}", get(orders::details_of_order))
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
