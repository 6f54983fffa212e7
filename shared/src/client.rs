//! Client-related types shared between backend and client
//!
//! Request/response bodies of the session endpoint (`POST /auth/login`).

use crate::models::{User, UserLevel};
use serde::{Deserialize, Serialize};

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: SessionUser,
}

/// The logged-in user, without credentials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    #[serde(rename = "userId")]
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub user_level: UserLevel,
}

impl SessionUser {
    pub fn is_admin(&self) -> bool {
        self.user_level.is_admin()
    }
}

impl From<&User> for SessionUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            user_level: user.user_level.clone(),
        }
    }
}
