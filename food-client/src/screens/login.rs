//! Login screen

use crate::http::HttpClient;
use crate::{AuthMode, ClientError, ClientResult, Notice, NoticeKind, Route, SessionUser, SharedContext};
use shared::validation::validate_credentials;

const LOGIN_OK: &str = "Login successful!";
const LOGIN_FAILED: &str = "Invalid email or password";

pub struct LoginScreen<C> {
    ctx: SharedContext<C>,
    pub email: String,
    pub password: String,
    session: Option<SessionUser>,
    notice: Option<Notice>,
}

impl<C: HttpClient> LoginScreen<C> {
    pub fn new(ctx: SharedContext<C>) -> Self {
        Self {
            ctx,
            email: String::new(),
            password: String::new(),
            session: None,
            notice: None,
        }
    }

    /// Live check shown under the email field
    pub fn email_is_valid(&self) -> bool {
        shared::validation::is_valid_email(&self.email)
    }

    /// Authenticate and return the route to reset navigation to
    ///
    /// Admins land on the admin menu, everybody else on the customer home.
    /// Nothing is sent while the form is invalid.
    pub async fn submit(&mut self) -> ClientResult<Route> {
        if let Err(e) = validate_credentials(&self.email, &self.password) {
            tracing::debug!(error = %e, "login form rejected");
            self.notice = Some(Notice::inline(NoticeKind::Error, e.to_string()));
            return Err(e.into());
        }

        let auth = self.ctx.api.auth();
        let result = match self.ctx.auth_mode {
            AuthMode::Session => auth.login(&self.email, &self.password).await,
            AuthMode::CollectionScan => {
                auth.scan_login(&self.ctx.api.endpoints().user, &self.email, &self.password)
                    .await
            }
        };

        match result {
            Ok(user) => {
                tracing::info!(user_id = user.id, admin = user.is_admin(), "login successful");
                let route = if user.is_admin() {
                    Route::AdminHome
                } else {
                    Route::customer_home(user.id)
                };
                self.session = Some(user);
                self.notice = Some(Notice::inline(NoticeKind::Success, LOGIN_OK));
                Ok(route)
            }
            Err(ClientError::InvalidCredentials) => {
                tracing::info!("invalid email or password");
                self.session = None;
                self.notice = Some(Notice::inline(NoticeKind::Error, LOGIN_FAILED));
                Err(ClientError::InvalidCredentials)
            }
            Err(e) => {
                tracing::error!(error = %e, "login failed");
                self.session = None;
                self.notice = Some(Notice::inline(NoticeKind::Error, e.to_string()));
                Err(e)
            }
        }
    }

    pub fn session(&self) -> Option<&SessionUser> {
        self.session.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }
}
