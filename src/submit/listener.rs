//! Listener trait for interface-agnostic outcome updates
//!
//! This trait allows different interfaces (CLI spinner, logs, tests) to
//! follow a submission as it moves between outcome states.

use crate::types::OutcomeState;
use async_trait::async_trait;

/// Outcome listener trait
///
/// Implement this trait to be told about every state transition of a
/// [`SubmissionController`](crate::submit::SubmissionController).
/// Transitions arrive in order: `Loading`, then exactly one of
/// `Succeeded` or `Failed`.
#[async_trait]
pub trait OutcomeListener: Send + Sync {
    /// Called after the controller moved to `state`
    async fn on_transition(&self, state: &OutcomeState);
}

/// No-op listener for testing or when updates aren't needed
pub struct NoopListener;

#[async_trait]
impl OutcomeListener for NoopListener {
    async fn on_transition(&self, _state: &OutcomeState) {}
}
