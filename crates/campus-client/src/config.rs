//! Client configuration.

use crate::error::{ClientError, Result};

/// Environment variable holding the API base URL.
pub const ENV_API_URL: &str = "CAMPUS_API_URL";

/// Environment variable holding the bearer token for credentialed calls.
pub const ENV_API_TOKEN: &str = "CAMPUS_API_TOKEN";

/// Connection settings for the discussion API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the API, without a trailing slash.
    pub base_url: String,
    /// Bearer token attached to credentialed operations.
    pub auth_token: Option<String>,
}

impl ApiConfig {
    /// Create a config for the given base URL; a trailing slash is
    /// tolerated and stripped.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            auth_token: None,
        }
    }

    /// Attach a bearer token for credentialed operations.
    #[must_use]
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Read configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Config` when `CAMPUS_API_URL` is unset.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(ENV_API_URL)
            .map_err(|_| ClientError::Config(format!("{} is not set", ENV_API_URL)))?;
        let mut config = Self::new(base_url);
        if let Ok(token) = std::env::var(ENV_API_TOKEN) {
            if !token.is_empty() {
                config.auth_token = Some(token);
            }
        }
        Ok(config)
    }
}
