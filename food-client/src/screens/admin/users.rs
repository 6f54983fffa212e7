//! Manage users

use super::AdminResource;
use crate::ClientResult;
use crate::api::Api;
use crate::http::HttpClient;
use async_trait::async_trait;
use shared::models::{User, UserCreate};
use shared::validation::{ValidationError, require_all};

const CREDENTIALS_REQUIRED: &str = "Email and Password cannot be empty.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub email: String,
    pub password: String,
}

pub struct UserAdmin;

#[async_trait]
impl AdminResource for UserAdmin {
    type Record = User;
    type Draft = UserDraft;

    const LABEL: &'static str = "User";
    const RELOAD_AFTER_UPDATE: bool = true;

    fn id(record: &User) -> i64 {
        record.id
    }

    fn draft_of(record: &User) -> UserDraft {
        UserDraft {
            email: record.email.clone(),
            password: record.password.clone().unwrap_or_default(),
        }
    }

    fn check(draft: &UserDraft) -> Result<(), ValidationError> {
        require_all(&[draft.email.as_str(), draft.password.as_str()], CREDENTIALS_REQUIRED)
    }

    async fn fetch_all<C: HttpClient>(api: &Api<C>) -> ClientResult<Vec<User>> {
        api.users().list().await
    }

    async fn create<C: HttpClient>(api: &Api<C>, draft: &UserDraft) -> ClientResult<User> {
        let body = UserCreate {
            email: draft.email.clone(),
            password: draft.password.clone(),
        };
        api.users().create(&body).await
    }

    /// Level and creation date come from a fresh read, not the local copy
    async fn update<C: HttpClient>(api: &Api<C>, id: i64, draft: &UserDraft) -> ClientResult<User> {
        let users = api.users();
        let current = users.get(id).await?;
        let body = User {
            id: current.id,
            email: draft.email.clone(),
            password: Some(draft.password.clone()),
            user_level: current.user_level,
            dt_added: current.dt_added,
        };
        users.update(id, &body).await
    }

    async fn delete<C: HttpClient>(api: &Api<C>, id: i64) -> ClientResult<()> {
        api.users().delete(id).await
    }
}
