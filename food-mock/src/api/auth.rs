//! Session login and logout

use super::ApiResult;
use crate::auth::Session;
use crate::state::MockState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use shared::client::{LoginRequest, LoginResponse, SessionUser};
use shared::error::AppError;

/// `POST /api/auth/login`: check the pair and issue a session token
pub async fn login(
    State(state): State<MockState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<LoginResponse> {
    let mut store = state.write().await;
    let user = store
        .users
        .iter()
        .find(|u| u.email == req.email && u.password.as_deref() == Some(req.password.as_str()))
        .map(SessionUser::from)
        .ok_or_else(AppError::invalid_credentials)?;

    let token = uuid::Uuid::new_v4().to_string();
    store.sessions.insert(token.clone(), user.id);
    tracing::info!(user_id = user.id, "session opened");
    Ok(Json(LoginResponse { token, user }))
}

/// `POST /api/auth/logout`: close the caller's session
pub async fn logout(
    State(state): State<MockState>,
    Extension(session): Extension<Session>,
) -> StatusCode {
    state.write().await.sessions.remove(&session.token);
    tracing::info!(user_id = session.user_id, "session closed");
    StatusCode::NO_CONTENT
}
