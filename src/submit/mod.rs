//! Submission workflow
//!
//! Turns a completed form into one prediction request and tracks its
//! outcome:
//! 1. Loading - the previous outcome is discarded and the request is sent
//! 2. Settled - the response becomes `Succeeded` or `Failed`

mod controller;
mod listener;

pub use controller::SubmissionController;
pub use listener::{NoopListener, OutcomeListener};
