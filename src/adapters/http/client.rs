//! Shared reqwest gateway for the CareBridge backend.
//!
//! One `RestGateway` serves every port: it owns the HTTP client, the
//! base URL, and the session whose bearer token authenticates each
//! request. Per-port trait impls live in sibling modules and go through
//! the request helpers here, so status handling and error mapping stay
//! in one place.

use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::AuthSession;
use crate::ports::ApiError;

/// Default per-request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Backend API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the backend, e.g. "https://api.carebridge.health".
    base_url: String,

    /// Per-request timeout.
    timeout: Duration,
}

impl ApiConfig {
    /// Create a configuration with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set a custom per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Join the base URL with an endpoint path.
    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Error payload shape the backend uses for non-success responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Extracts the server's own wording from an error response body.
fn server_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .message
        .or(parsed.error)
        .filter(|message| !message.trim().is_empty())
}

/// The reqwest-backed gateway all HTTP port implementations share.
pub struct RestGateway {
    config: ApiConfig,
    session: AuthSession,
    http: reqwest::Client,
}

impl RestGateway {
    /// Create a gateway speaking for one session.
    pub fn new(config: ApiConfig, session: AuthSession) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            session,
            http,
        }
    }

    /// The session this gateway authenticates as.
    pub fn session(&self) -> &AuthSession {
        &self.session
    }

    /// GET a JSON resource.
    pub(super) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self
            .http
            .get(self.config.endpoint(path))
            .bearer_auth(self.session.bearer_token());
        let response = self.execute(path, request).await?;
        Self::decode(path, response).await
    }

    /// GET a JSON resource, treating 404 as absence.
    pub(super) async fn get_json_optional<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, ApiError> {
        let request = self
            .http
            .get(self.config.endpoint(path))
            .bearer_auth(self.session.bearer_token());

        let response = self
            .http_send(path, request)
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = self.check_status(path, response).await?;
        Self::decode(path, response).await.map(Some)
    }

    /// POST a JSON body, decoding a JSON response.
    pub(super) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .http
            .post(self.config.endpoint(path))
            .bearer_auth(self.session.bearer_token())
            .json(body);
        let response = self.execute(path, request).await?;
        Self::decode(path, response).await
    }

    /// POST a JSON body where only success/failure matters.
    pub(super) async fn post_json_unit<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let request = self
            .http
            .post(self.config.endpoint(path))
            .bearer_auth(self.session.bearer_token())
            .json(body);
        self.execute(path, request).await?;
        Ok(())
    }

    /// PUT a JSON body, decoding a JSON response.
    pub(super) async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .http
            .put(self.config.endpoint(path))
            .bearer_auth(self.session.bearer_token())
            .json(body);
        let response = self.execute(path, request).await?;
        Self::decode(path, response).await
    }

    /// POST a multipart form, decoding a JSON response.
    pub(super) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, ApiError> {
        let request = self
            .http
            .post(self.config.endpoint(path))
            .bearer_auth(self.session.bearer_token())
            .multipart(form);
        let response = self.execute(path, request).await?;
        Self::decode(path, response).await
    }

    async fn execute(
        &self,
        path: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        let response = self.http_send(path, request).await?;
        self.check_status(path, response).await
    }

    async fn http_send(
        &self,
        path: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        request.send().await.map_err(|e| {
            tracing::warn!(path, error = %e, "Request failed before a response arrived");
            ApiError::network(e.to_string())
        })
    }

    async fn check_status(
        &self,
        path: &str,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            tracing::warn!(path, %status, "Session rejected");
            return Err(ApiError::unauthorized());
        }
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::not_found(path));
        }

        let body = response.text().await.unwrap_or_default();
        tracing::error!(path, %status, body = %body, "Backend returned an error");
        let mut err = ApiError::server(status.as_u16());
        if let Some(message) = server_message(&body) {
            err = err.with_server_message(message);
        }
        Err(err)
    }

    async fn decode<T: DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        response.json().await.map_err(|e| {
            tracing::error!(path, error = %e, "Failed to decode response body");
            ApiError::decode(format!("Failed to decode response: {}", e))
        })
    }
}

impl std::fmt::Debug for RestGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestGateway")
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_path() {
        let config = ApiConfig::new("https://api.example.com");
        assert_eq!(
            config.endpoint("/plans"),
            "https://api.example.com/plans"
        );
    }

    #[test]
    fn endpoint_handles_trailing_slash() {
        let config = ApiConfig::new("https://api.example.com/");
        assert_eq!(
            config.endpoint("user/plan-usage"),
            "https://api.example.com/user/plan-usage"
        );
    }

    #[test]
    fn config_default_timeout_is_ten_seconds() {
        let config = ApiConfig::new("https://api.example.com");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn config_with_custom_timeout() {
        let config =
            ApiConfig::new("https://api.example.com").with_timeout(Duration::from_secs(30));
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn server_message_reads_message_field() {
        assert_eq!(
            server_message(r#"{"message":"Plan already active"}"#),
            Some("Plan already active".to_string())
        );
    }

    #[test]
    fn server_message_falls_back_to_error_field() {
        assert_eq!(
            server_message(r#"{"error":"No such plan"}"#),
            Some("No such plan".to_string())
        );
    }

    #[test]
    fn server_message_ignores_blank_and_malformed_bodies() {
        assert_eq!(server_message(r#"{"message":"  "}"#), None);
        assert_eq!(server_message("<html>502</html>"), None);
        assert_eq!(server_message(""), None);
    }

    #[test]
    fn gateway_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RestGateway>();
    }
}
