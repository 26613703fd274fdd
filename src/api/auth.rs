//! Authentication endpoints. The backend issues a session cookie on
//! login/register; everything else rides on it.

use serde::Deserialize;

use crate::api::ApiClient;
use crate::errors::ApiError;
use crate::models::{Credentials, User};

#[derive(Debug, Deserialize)]
struct AuthResponse {
    user: User,
}

/// Shape of `GET /api/auth/me`.
#[derive(Debug, Deserialize)]
struct MeResponse {
    is_logged_in: bool,
    #[serde(default)]
    user: Option<User>,
}

impl ApiClient {
    /// Log in with email and password. On success the session cookie is in
    /// the jar; call [`ApiClient::persist_session`] to keep it.
    pub async fn login(&self, credentials: &Credentials) -> Result<User, ApiError> {
        let endpoint = "/api/auth/login";
        let request = self.http().post(self.url(endpoint)).json(credentials);
        let response = self.execute(request, endpoint).await?;
        let auth: AuthResponse = self.decode(response, endpoint).await?;
        Ok(auth.user)
    }

    /// Register a new account. The backend logs the new user in directly.
    pub async fn register(&self, credentials: &Credentials) -> Result<User, ApiError> {
        let endpoint = "/api/auth/register";
        let request = self.http().post(self.url(endpoint)).json(credentials);
        let response = self.execute(request, endpoint).await?;
        let auth: AuthResponse = self.decode(response, endpoint).await?;
        Ok(auth.user)
    }

    /// End the server-side session.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let endpoint = "/api/auth/logout";
        let request = self
            .http()
            .post(self.url(endpoint))
            .json(&serde_json::json!({}));
        self.execute(request, endpoint).await?;
        Ok(())
    }

    /// Who the current session belongs to, or `None` when logged out.
    pub async fn me(&self) -> Result<Option<User>, ApiError> {
        let endpoint = "/api/auth/me";
        let request = self.http().get(self.url(endpoint));
        let response = self.execute(request, endpoint).await?;
        let me: MeResponse = self.decode(response, endpoint).await?;
        if me.is_logged_in { Ok(me.user) } else { Ok(None) }
    }
}
