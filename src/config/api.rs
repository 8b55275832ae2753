//! Backend API configuration section.

use std::time::Duration;

use serde::Deserialize;

use crate::adapters::http::ApiConfig;

use super::error::ValidationError;

fn default_timeout_secs() -> u64 {
    10
}

/// Settings for reaching the backend REST API.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    /// Base URL, e.g. "https://api.carebridge.health".
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ApiSettings {
    /// Validate the section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.base_url.trim().is_empty() {
            return Err(ValidationError::MissingRequired("api.base_url"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }

    /// Build the gateway configuration from this section.
    pub fn to_gateway_config(&self) -> ApiConfig {
        ApiConfig::new(self.base_url.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }
}
