//! Session middleware
//!
//! Reads are public so the catalog can be browsed and legacy clients can
//! scan the user table. Writes need a session token issued by
//! `POST /api/auth/login`; back-office writes need an admin session.
//!
//! | request                                       | access  |
//! |-----------------------------------------------|---------|
//! | `GET`, `OPTIONS`                              | public  |
//! | `POST /api/auth/login`, `POST /api/user`      | public  |
//! | `POST /api/auth/logout`                       | session |
//! | cart writes, checkout, `PUT /api/order/{id}`  | session |
//! | everything else                               | admin   |

use crate::state::MockState;
use axum::extract::{Request, State};
use axum::http::{Method, header};
use axum::middleware::Next;
use axum::response::Response;
use shared::error::AppError;

/// Caller of an authenticated request, inserted into request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user_id: i64,
    pub admin: bool,
}

/// What a request needs to get through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Session,
    Admin,
}

/// Access rule for a method and path
pub fn access_for(method: &Method, path: &str) -> Access {
    if *method == Method::GET || *method == Method::OPTIONS {
        return Access::Public;
    }
    let segments: Vec<&str> = path
        .trim_start_matches("/api/")
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();
    match (method.as_str(), segments.as_slice()) {
        ("POST", ["auth", "login"]) | ("POST", ["user"]) => Access::Public,
        ("POST", ["auth", "logout"]) => Access::Session,
        (_, ["cart", ..]) => Access::Session,
        // checkout: {userId}/{total}
        ("POST", ["order", _, _]) => Access::Session,
        // rating
        ("PUT", ["order", _]) => Access::Session,
        _ => Access::Admin,
    }
}

/// Pull the token out of `Authorization: Bearer <token>`
fn bearer_token(value: &str) -> Option<&str> {
    value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Check the bearer token against open sessions
pub async fn require_auth(
    State(state): State<MockState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let access = access_for(req.method(), req.uri().path());
    if access == Access::Public {
        return Ok(next.run(req).await);
    }

    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());
    let token = match auth_header {
        Some(value) => bearer_token(value)
            .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?,
        None => {
            tracing::warn!(uri = %req.uri(), "missing authorization");
            return Err(AppError::unauthorized());
        }
    };

    let session = {
        let store = state.read().await;
        let user_id = store.sessions.get(token).copied().ok_or_else(|| {
            tracing::warn!(uri = %req.uri(), "unknown session token");
            AppError::invalid_token("Invalid token")
        })?;
        let admin = store
            .users
            .iter()
            .find(|u| u.id == user_id)
            .is_some_and(|u| u.is_admin());
        Session {
            token: token.to_string(),
            user_id,
            admin,
        }
    };

    if access == Access::Admin && !session.admin {
        tracing::warn!(user_id = session.user_id, uri = %req.uri(), "admin route refused");
        return Err(AppError::forbidden("Admin access required"));
    }

    req.extensions_mut().insert(session);
    Ok(next.run(req).await)
}
