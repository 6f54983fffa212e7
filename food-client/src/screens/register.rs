//! Registration screen

use crate::http::HttpClient;
use crate::{ClientResult, Notice, NoticeKind, Route, SharedContext};
use shared::models::{User, UserCreate};
use shared::validation::validate_credentials;

pub struct RegisterScreen<C> {
    ctx: SharedContext<C>,
    pub email: String,
    pub password: String,
    notice: Option<Notice>,
}

impl<C: HttpClient> RegisterScreen<C> {
    pub fn new(ctx: SharedContext<C>) -> Self {
        Self {
            ctx,
            email: String::new(),
            password: String::new(),
            notice: None,
        }
    }

    /// Create the account; on success navigation resets to [`Route::Login`]
    pub async fn submit(&mut self) -> ClientResult<(User, Route)> {
        if let Err(e) = validate_credentials(&self.email, &self.password) {
            self.notice = Some(Notice::inline(NoticeKind::Error, e.to_string()));
            return Err(e.into());
        }

        let body = UserCreate {
            email: self.email.clone(),
            password: self.password.clone(),
        };
        match self.ctx.api.users().create(&body).await {
            Ok(user) => {
                tracing::info!(user_id = user.id, "registration successful");
                self.notice = Some(Notice::inline(NoticeKind::Success, "Registration successful!"));
                Ok((user, Route::Login))
            }
            Err(e) => {
                tracing::error!(error = %e, "registration failed");
                self.notice = Some(Notice::inline(NoticeKind::Error, e.to_string()));
                Err(e)
            }
        }
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }
}
