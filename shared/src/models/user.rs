//! User Model

use serde::{Deserialize, Serialize};

/// Access level as stored by the backend (`"1"` is admin)
///
/// Kept as the raw string so a record read and PUT back is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserLevel(pub String);

impl UserLevel {
    pub const ADMIN: &'static str = "1";
    pub const CUSTOMER: &'static str = "0";

    pub fn admin() -> Self {
        Self(Self::ADMIN.to_string())
    }

    pub fn customer() -> Self {
        Self(Self::CUSTOMER.to_string())
    }

    pub fn is_admin(&self) -> bool {
        self.0 == Self::ADMIN
    }
}

/// User entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "userId")]
    pub id: i64,
    pub email: String,
    /// Plaintext; servers with a session endpoint may omit it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default)]
    pub user_level: UserLevel,
    #[serde(default)]
    pub dt_added: String,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.user_level.is_admin()
    }
}

/// Create user payload (registration and admin "add user")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub email: String,
    pub password: String,
}
