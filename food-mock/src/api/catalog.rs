//! `/api/category` and `/api/product`

use super::ApiResult;
use crate::state::{MockState, next_id};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use shared::error::{AppError, ErrorCode};
use shared::models::{Category, CategoryCreate, Product, ProductCreate};
use shared::validation::require_all;

fn category_not_found(id: i64) -> AppError {
    AppError::with_message(ErrorCode::CategoryNotFound, format!("category {id} not found"))
}

fn product_not_found(id: i64) -> AppError {
    AppError::with_message(ErrorCode::ProductNotFound, format!("product {id} not found"))
}

fn required(result: Result<(), shared::validation::ValidationError>) -> Result<(), AppError> {
    result.map_err(|e| AppError::with_message(ErrorCode::RequiredField, e.to_string()))
}

// ==================== Categories ====================

pub async fn list_categories(State(state): State<MockState>) -> ApiResult<Vec<Category>> {
    Ok(Json(state.read().await.categories.clone()))
}

pub async fn get_category(State(state): State<MockState>, Path(id): Path<i64>) -> ApiResult<Category> {
    let store = state.read().await;
    store
        .categories
        .iter()
        .find(|c| c.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| category_not_found(id))
}

pub async fn create_category(
    State(state): State<MockState>,
    Json(data): Json<CategoryCreate>,
) -> Result<(StatusCode, Json<Category>), AppError> {
    required(require_all(
        &[data.name.as_str(), data.desc.as_str()],
        "Name and description are required fields.",
    ))?;
    let mut store = state.write().await;
    let category = Category {
        id: next_id(&store.categories, |c| c.id),
        name: data.name,
        desc: data.desc,
    };
    store.categories.push(category.clone());
    Ok((StatusCode::CREATED, Json(category)))
}

pub async fn update_category(
    State(state): State<MockState>,
    Path(id): Path<i64>,
    Json(data): Json<CategoryCreate>,
) -> ApiResult<Category> {
    let mut store = state.write().await;
    let category = store
        .categories
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or_else(|| category_not_found(id))?;
    category.name = data.name;
    category.desc = data.desc;
    Ok(Json(category.clone()))
}

pub async fn delete_category(
    State(state): State<MockState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let mut store = state.write().await;
    let before = store.categories.len();
    store.categories.retain(|c| c.id != id);
    if store.categories.len() == before {
        return Err(category_not_found(id));
    }
    Ok(StatusCode::NO_CONTENT)
}

// ==================== Products ====================

pub async fn list_products(State(state): State<MockState>) -> ApiResult<Vec<Product>> {
    Ok(Json(state.read().await.products.clone()))
}

pub async fn get_product(State(state): State<MockState>, Path(id): Path<i64>) -> ApiResult<Product> {
    let store = state.read().await;
    store
        .products
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| product_not_found(id))
}

fn check_product(data: &ProductCreate) -> Result<(), AppError> {
    required(require_all(
        &[
            data.name.as_str(),
            data.desc.as_str(),
            data.category.as_str(),
            data.image.as_str(),
        ],
        "All fields are required",
    ))
}

pub async fn create_product(
    State(state): State<MockState>,
    Json(data): Json<ProductCreate>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    check_product(&data)?;
    let mut store = state.write().await;
    let product = data.into_product(next_id(&store.products, |p| p.id));
    store.products.push(product.clone());
    tracing::info!(product_id = product.id, "product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// Full replacement; the id in the path wins over the body
pub async fn update_product(
    State(state): State<MockState>,
    Path(id): Path<i64>,
    Json(data): Json<Product>,
) -> ApiResult<Product> {
    let mut store = state.write().await;
    let product = store
        .products
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or_else(|| product_not_found(id))?;
    *product = Product { id, ..data };
    Ok(Json(product.clone()))
}

pub async fn delete_product(
    State(state): State<MockState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let mut store = state.write().await;
    let before = store.products.len();
    store.products.retain(|p| p.id != id);
    if store.products.len() == before {
        return Err(product_not_found(id));
    }
    Ok(StatusCode::NO_CONTENT)
}
