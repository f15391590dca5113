//! Endpoint and client configuration

use crate::error::{Error, Result};
use std::env;
use std::time::Duration;
use url::Url;

/// Model endpoint used when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "https://internship-backend-ivo5.onrender.com/api/predict/";

/// Environment variable overriding [`DEFAULT_ENDPOINT`]
pub const ENDPOINT_ENV_VAR: &str = "PREDICT_ENDPOINT";

/// Settings for [`HttpPredictionService`](crate::service::HttpPredictionService)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// URL the payload is POSTed to
    pub endpoint: Url,
    /// Per-request timeout (None waits for the service indefinitely)
    pub timeout: Option<Duration>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
            timeout: None,
        }
    }
}

impl ServiceConfig {
    /// Default configuration with `PREDICT_ENDPOINT` applied when set
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Ok(endpoint) = env::var(ENDPOINT_ENV_VAR) {
            if !endpoint.trim().is_empty() {
                config.endpoint = parse_endpoint(&endpoint)?;
            }
        }
        Ok(config)
    }

    /// Replace the endpoint
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Set a per-request timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Parse an endpoint URL, accepting only http and https
pub fn parse_endpoint(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| Error::Config(format!("invalid endpoint {raw:?}: {e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(Error::Config(format!(
            "unsupported endpoint scheme {scheme:?} (expected http or https)"
        ))),
    }
}
