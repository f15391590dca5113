//! Submit command - one-shot, non-interactive prediction

use crate::cli::progress::CliListener;
use crate::cli::style::Stylize;
use anstream::println;
use capacity_predict::error::{Error, Result};
use capacity_predict::form::FormModel;
use capacity_predict::service::{HttpPredictionService, ServiceConfig};
use capacity_predict::submit::{NoopListener, SubmissionController};
use capacity_predict::types::{BIOMASS_CATALOG, Feature, OutcomeState, RequestPayload};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// JSON document printed by `submit --json`
#[derive(Serialize)]
struct JsonReport<'a> {
    payload: &'a RequestPayload,
    outcome: &'a OutcomeState,
}

/// Split a `KEY=value` argument at the first `=`
///
/// The key is matched with surrounding spaces ignored; the value is kept
/// exactly as given, so ` 12` is stored (and rejected) as typed.
pub fn parse_feature_arg(raw: &str) -> Result<(Feature, String)> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| Error::InvalidFeature(format!("{raw:?} is not of the form KEY=value")))?;

    let feature = Feature::from_key(key.trim())
        .ok_or_else(|| Error::InvalidFeature(format!("unknown feature key {:?}", key.trim())))?;

    Ok((feature, value.to_string()))
}

/// Build a form from command-line arguments and check it can be submitted
pub fn build_form(biomass: &str, features: &[String]) -> Result<FormModel> {
    let mut form = FormModel::new();
    form.set_category(biomass);
    for raw in features {
        let (feature, value) = parse_feature_arg(raw)?;
        form.set(feature, value);
    }

    if form.is_complete() {
        return Ok(form);
    }

    let mut missing = Vec::new();
    if form.category().is_empty() {
        missing.push("Biomass".to_string());
    }
    missing.extend(
        form.missing_fields()
            .into_iter()
            .map(|f| format!("{} ({})", f.label(), f.key())),
    );
    Err(Error::IncompleteForm(missing))
}

/// Run the submit command
///
/// Returns the settled outcome so the caller can pick an exit status.
pub async fn run_submit(
    config: ServiceConfig,
    biomass: &str,
    features: &[String],
    json: bool,
) -> anyhow::Result<OutcomeState> {
    let form = build_form(biomass, features)?;
    if !BIOMASS_CATALOG.iter().any(|b| *b == biomass) {
        anyhow::bail!("unknown biomass {biomass:?}; run `predict options` to list the catalog");
    }

    let service = HttpPredictionService::new(config)?;
    let controller = SubmissionController::new(Arc::new(service));

    debug!(endpoint = %controller.service().endpoint(), "running one-shot prediction");

    if json {
        let outcome = controller.submit(&form, &NoopListener).await?;
        let payload = form.payload();
        let report = JsonReport {
            payload: &payload,
            outcome: &outcome,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(outcome);
    }

    println!("Predicting for {}", biomass.accent());
    let outcome = controller.submit(&form, &CliListener::new()).await?;
    Ok(outcome)
}
