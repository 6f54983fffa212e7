//! Login

use crate::http::HttpClient;
use crate::{ClientError, ClientResult};
use serde::de::IgnoredAny;
use shared::client::{LoginRequest, LoginResponse, SessionUser};
use shared::models::User;

pub struct AuthApi<'a, C> {
    http: &'a C,
    base: &'a str,
}

impl<'a, C: HttpClient> AuthApi<'a, C> {
    pub(crate) fn new(http: &'a C, base: &'a str) -> Self {
        Self { http, base }
    }

    /// `POST {auth}/login`; on success the token is installed on the client
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<SessionUser> {
        let url = format!("{}/login", self.base);
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = match self.http.post(&url, &request).await {
            Ok(response) => response,
            Err(ClientError::Unauthorized(_)) => return Err(ClientError::InvalidCredentials),
            Err(e) => return Err(e),
        };
        self.http.set_token(Some(response.token)).await;
        Ok(response.user)
    }

    /// Scan a downloaded user collection for the plaintext pair
    ///
    /// Only for backends without a session endpoint: every user's password
    /// passes through the client.
    pub async fn scan_login(
        &self,
        user_url: &str,
        email: &str,
        password: &str,
    ) -> ClientResult<SessionUser> {
        tracing::warn!("collection-scan login: the full user table is downloaded");
        let users: Vec<User> = self.http.get(user_url).await?;
        users
            .iter()
            .find(|u| u.email == email && u.password.as_deref() == Some(password))
            .map(SessionUser::from)
            .ok_or(ClientError::InvalidCredentials)
    }

    /// `POST {auth}/logout`, then forget the token
    ///
    /// The local token is dropped even when the backend call fails.
    pub async fn logout(&self) -> ClientResult<()> {
        if self.http.token().await.is_none() {
            return Ok(());
        }
        let url = format!("{}/logout", self.base);
        let result = self.http.post_empty::<IgnoredAny>(&url).await;
        self.http.set_token(None).await;
        if let Err(e) = &result {
            tracing::warn!(error = %e, "logout request failed");
        }
        result.map(|_| ())
    }
}
