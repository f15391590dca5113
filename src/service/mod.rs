//! Prediction service client
//!
//! The remote model is reached through the [`PredictionService`] trait so
//! the submission workflow can run against the real endpoint or a test
//! double.

mod config;
mod http;

pub use config::{DEFAULT_ENDPOINT, ENDPOINT_ENV_VAR, ServiceConfig, parse_endpoint};
pub use http::{HttpPredictionService, RESULT_FIELD};

use crate::error::Result;
use crate::types::{PredictedValue, RequestPayload};
use async_trait::async_trait;
use url::Url;

/// Remote model that turns a request payload into a prediction
#[async_trait]
pub trait PredictionService: Send + Sync {
    /// Send one prediction request
    ///
    /// A successful response without a result field yields an empty
    /// [`PredictedValue`] rather than an error.
    async fn predict(&self, payload: &RequestPayload) -> Result<PredictedValue>;

    /// Endpoint the requests are sent to
    fn endpoint(&self) -> &Url;
}
