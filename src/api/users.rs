//! User directory and service probes.

use serde::Deserialize;

use crate::api::ApiClient;
use crate::errors::ApiError;
use crate::models::{Health, User};

/// Shape of the root banner endpoint.
#[derive(Debug, Deserialize)]
struct WelcomeResponse {
    message: String,
}

impl ApiClient {
    /// All registered users. Requires a session.
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let endpoint = "/api/users";
        let request = self.http().get(self.url(endpoint));
        let response = self.execute(request, endpoint).await?;
        self.decode(response, endpoint).await
    }

    /// The service welcome banner from the root endpoint.
    pub async fn welcome(&self) -> Result<String, ApiError> {
        let endpoint = "/";
        let request = self.http().get(self.url(endpoint));
        let response = self.execute(request, endpoint).await?;
        let banner: WelcomeResponse = self.decode(response, endpoint).await?;
        Ok(banner.message)
    }

    /// Service health probe.
    pub async fn health(&self) -> Result<Health, ApiError> {
        let endpoint = "/api/health";
        let request = self.http().get(self.url(endpoint));
        let response = self.execute(request, endpoint).await?;
        self.decode(response, endpoint).await
    }
}
