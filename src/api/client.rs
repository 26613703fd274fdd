use std::path::PathBuf;
use std::sync::Arc;

use reqwest::cookie::{CookieStore, Jar};
use serde::Deserialize;
use tracing::debug;

use crate::config::Config;
use crate::errors::ApiError;

/// Error body shape the backend uses for rejections.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// HTTP client for the collaboration backend.
///
/// Holds a shared cookie jar so the session cookie set by login rides on
/// every subsequent request. The jar is persisted to a session file between
/// invocations; the browser's cookie store has no CLI equivalent.
pub struct ApiClient {
    http: reqwest::Client,
    jar: Arc<Jar>,
    base_url: String,
    session_file: PathBuf,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let jar = Arc::new(Jar::default());

        // Restore a previously saved session, if any
        if let Ok(saved) = std::fs::read_to_string(&config.session_file) {
            if let Ok(url) = config.base_url.parse() {
                for cookie in saved.split("; ").filter(|c| !c.trim().is_empty()) {
                    jar.add_cookie_str(cookie, &url);
                }
            }
        }

        let http = reqwest::Client::builder()
            .cookie_provider(Arc::clone(&jar))
            .user_agent(concat!("crewboard/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| ApiError::Connection {
                base_url: config.base_url.clone(),
                source,
            })?;

        Ok(Self {
            http,
            jar,
            base_url: config.base_url.clone(),
            session_file: config.session_file.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Send a prepared request and map the response.
    ///
    /// Transport failures become `Connection`; non-2xx responses are decoded
    /// from the backend's `{"error": "..."}` body, falling back to a generic
    /// message when the body carries none. No retries.
    pub(crate) async fn execute(
        &self,
        request: reqwest::RequestBuilder,
        endpoint: &str,
    ) -> Result<reqwest::Response, ApiError> {
        debug!(endpoint, "sending request");
        let response = request
            .send()
            .await
            .map_err(|source| ApiError::Connection {
                base_url: self.base_url.clone(),
                source,
            })?;

        let status = response.status();
        debug!(endpoint, status = status.as_u16(), "response received");
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| ApiError::GENERIC_REJECTION.to_string());
        Err(ApiError::Rejected {
            status: status.as_u16(),
            message,
        })
    }

    /// Decode a successful response body, tagging decode failures with the
    /// endpoint they came from.
    pub(crate) async fn decode<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
        endpoint: &str,
    ) -> Result<T, ApiError> {
        response.json::<T>().await.map_err(|source| ApiError::Decode {
            endpoint: endpoint.to_string(),
            source,
        })
    }

    /// Write the current session cookie(s) to the session file so the next
    /// invocation stays logged in.
    pub fn persist_session(&self) -> Result<(), ApiError> {
        let url = self
            .base_url
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid base URL: {}", self.base_url))?;
        let Some(header) = self.jar.cookies(&url) else {
            return Err(ApiError::NoSession);
        };
        let cookies = header.to_str().unwrap_or_default().to_string();
        if let Some(parent) = self.session_file.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ApiError::SessionStore {
                path: self.session_file.clone(),
                source,
            })?;
        }
        std::fs::write(&self.session_file, cookies).map_err(|source| ApiError::SessionStore {
            path: self.session_file.clone(),
            source,
        })
    }

    /// Drop the persisted session, if any.
    pub fn forget_session(&self) -> Result<(), ApiError> {
        match std::fs::remove_file(&self.session_file) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(ApiError::SessionStore {
                path: self.session_file.clone(),
                source,
            }),
        }
    }

    /// Whether a session file exists from a previous login.
    pub fn has_saved_session(&self) -> bool {
        self.session_file.exists()
    }
}
