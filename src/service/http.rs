//! HTTP prediction service using reqwest

use crate::error::{Error, Result};
use crate::service::{PredictionService, ServiceConfig};
use crate::types::{PredictedValue, RequestPayload};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

/// Response field holding the prediction
pub const RESULT_FIELD: &str = "Reversible_capacity";

/// Response field holding a service-reported failure
const ERROR_FIELD: &str = "error";

/// Prediction service reached over HTTP
pub struct HttpPredictionService {
    client: Client,
    config: ServiceConfig,
}

impl HttpPredictionService {
    /// Create a new HTTP service
    pub fn new(config: ServiceConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }
}

/// Pull the `error` string out of a failure body, if there is one
fn extract_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get(ERROR_FIELD)? {
        Value::String(message) if !message.is_empty() => Some(message.clone()),
        _ => None,
    }
}

/// Pull the prediction out of a success body
fn extract_prediction(body: &str) -> Result<PredictedValue> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| Error::MalformedResponse(e.to_string()))?;

    Ok(PredictedValue(
        value.get(RESULT_FIELD).cloned().unwrap_or(Value::Null),
    ))
}

#[async_trait]
impl PredictionService for HttpPredictionService {
    async fn predict(&self, payload: &RequestPayload) -> Result<PredictedValue> {
        debug!(endpoint = %self.config.endpoint, ?payload, "sending prediction request");

        let response = self
            .client
            .post(self.config.endpoint.clone())
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = extract_error_message(&body);
            warn!(status = status.as_u16(), ?message, "prediction service returned an error");
            return Err(Error::Service {
                status: status.as_u16(),
                message,
            });
        }

        let prediction = extract_prediction(&body)?;
        if prediction.is_empty() {
            warn!("response has no {RESULT_FIELD} field");
        }
        Ok(prediction)
    }

    fn endpoint(&self) -> &Url {
        &self.config.endpoint
    }
}
