//! Projection of an outcome onto what the user sees

use crate::types::OutcomeState;
use serde::Serialize;
use std::fmt;

/// The single view shown below the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", content = "text", rename_all = "snake_case")]
pub enum View {
    /// Request in flight
    Loading,
    /// Predicted value, verbatim
    Result(String),
    /// Failure message
    Error(String),
}

/// Map an outcome to the view to render; `Idle` renders nothing
pub fn present(state: &OutcomeState) -> Option<View> {
    match state {
        OutcomeState::Idle => None,
        OutcomeState::Loading => Some(View::Loading),
        OutcomeState::Succeeded(value) => Some(View::Result(value.to_string())),
        OutcomeState::Failed(message) => Some(View::Error(message.clone())),
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => f.write_str("Loading..."),
            Self::Result(value) => write!(f, "Predicted Reversible Capacity: {value}"),
            Self::Error(message) => write!(f, "Error: {message}"),
        }
    }
}
