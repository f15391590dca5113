//! capacity-predict - reversible capacity predictions for biomass hard carbon
//!
//! Library side of the `predict` binary. Holds the prediction request
//! workflow: the form model, the submission controller and the view
//! projection, plus the HTTP client for the remote model.

pub mod error;
pub mod form;
pub mod present;
pub mod service;
pub mod submit;
pub mod types;
