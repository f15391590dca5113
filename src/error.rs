//! Error types for capacity-predict

use thiserror::Error;

/// Message shown when a failure carries no usable `error` field
pub const FALLBACK_MESSAGE: &str = "Something went wrong";

/// Errors that can occur while preparing or running a prediction
#[derive(Debug, Error)]
pub enum Error {
    /// The service could not be reached (connect failure, timeout, dropped body)
    #[error("transport error: {0}")]
    Transport(String),

    /// The service answered with a non-2xx status
    #[error("service returned {status}: {}", .message.as_deref().unwrap_or(FALLBACK_MESSAGE))]
    Service {
        /// HTTP status code
        status: u16,
        /// `error` field of the response body, when present
        message: Option<String>,
    },

    /// A 2xx response whose body was not JSON
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// A submission is already pending on this controller
    #[error("a prediction request is already in flight")]
    SubmissionInFlight,

    /// Required form fields are missing or not numeric
    #[error("form is incomplete: {}", .0.join(", "))]
    IncompleteForm(Vec<String>),

    /// A `key=value` feature argument could not be understood
    #[error("invalid feature argument: {0}")]
    InvalidFeature(String),

    /// Invalid endpoint or client configuration
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Message to show the user for a failed submission
    ///
    /// Service errors surface their `error` field; everything else falls
    /// back to [`FALLBACK_MESSAGE`].
    pub fn display_message(&self) -> String {
        match self {
            Self::Service {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            _ => FALLBACK_MESSAGE.to_string(),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Result type alias for capacity-predict operations
pub type Result<T> = std::result::Result<T, Error>;
