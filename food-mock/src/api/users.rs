//! `/api/user`

use super::ApiResult;
use crate::state::{MockState, next_id, timestamp};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use shared::error::{AppError, ErrorCode};
use shared::models::{User, UserCreate, UserLevel};
use shared::validation::is_valid_email;

fn user_not_found(id: i64) -> AppError {
    AppError::with_message(ErrorCode::UserNotFound, format!("user {id} not found"))
}

pub async fn list(State(state): State<MockState>) -> ApiResult<Vec<User>> {
    Ok(Json(state.read().await.users.clone()))
}

pub async fn get(State(state): State<MockState>, Path(id): Path<i64>) -> ApiResult<User> {
    let store = state.read().await;
    let user = store.users.iter().find(|u| u.id == id).ok_or_else(|| user_not_found(id))?;
    Ok(Json(user.clone()))
}

pub async fn create(
    State(state): State<MockState>,
    Json(data): Json<UserCreate>,
) -> Result<(StatusCode, Json<User>), AppError> {
    if !is_valid_email(&data.email) || data.password.trim().is_empty() {
        return Err(AppError::with_message(
            ErrorCode::RequiredField,
            "Email and Password cannot be empty.",
        ));
    }
    let mut store = state.write().await;
    if store.users.iter().any(|u| u.email == data.email) {
        return Err(AppError::new(ErrorCode::EmailExists).with_detail("email", data.email));
    }
    let user = User {
        id: next_id(&store.users, |u| u.id),
        email: data.email,
        password: Some(data.password),
        user_level: UserLevel::customer(),
        dt_added: timestamp(),
    };
    store.users.push(user.clone());
    tracing::info!(user_id = user.id, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn update(
    State(state): State<MockState>,
    Path(id): Path<i64>,
    Json(data): Json<User>,
) -> ApiResult<User> {
    let mut store = state.write().await;
    let user = store
        .users
        .iter_mut()
        .find(|u| u.id == id)
        .ok_or_else(|| user_not_found(id))?;
    user.email = data.email;
    if data.password.is_some() {
        user.password = data.password;
    }
    user.user_level = data.user_level;
    if !data.dt_added.is_empty() {
        user.dt_added = data.dt_added;
    }
    Ok(Json(user.clone()))
}

pub async fn delete(State(state): State<MockState>, Path(id): Path<i64>) -> Result<StatusCode, AppError> {
    let mut store = state.write().await;
    let before = store.users.len();
    store.users.retain(|u| u.id != id);
    if store.users.len() == before {
        return Err(user_not_found(id));
    }
    store.sessions.retain(|_, user_id| *user_id != id);
    Ok(StatusCode::NO_CONTENT)
}
