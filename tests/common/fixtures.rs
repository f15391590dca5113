//! Test data factories for capacity-predict types
//!
//! These are test utilities - not every test binary uses all of them.

#![allow(dead_code)]

use async_trait::async_trait;
use capacity_predict::form::FormModel;
use capacity_predict::submit::OutcomeListener;
use capacity_predict::types::{Feature, OutcomeState, PredictedValue};
use std::sync::Mutex;

/// Biomass used throughout the scenarios
pub const BIOMASS: &str = "Rice husk";

/// Form with `biomass` selected and every feature set to `value`
pub fn make_form(biomass: &str, value: &str) -> FormModel {
    let mut form = FormModel::new();
    form.set_category(biomass);
    for feature in Feature::ALL {
        form.set(feature, value);
    }
    form
}

/// The "Rice husk, all ones" form
pub fn complete_form() -> FormModel {
    make_form(BIOMASS, "1")
}

/// `--feature` arguments matching [`complete_form`]
pub fn feature_args(value: &str) -> Vec<String> {
    Feature::ALL
        .into_iter()
        .flat_map(|f| ["--feature".to_string(), format!("{}={value}", f.key())])
        .collect()
}

/// Expected JSON body for [`complete_form`]
pub fn complete_payload_json() -> serde_json::Value {
    serde_json::json!({
        "Biomass": "Rice husk",
        "pyrolusis": "1",
        "BET": "1",
        "ICE": "1",
        "Rch": "1",
        "Cycle N": "1",
        "Retention ratio": "1",
        "H charge": "1",
        "H capacity": "1"
    })
}

/// Predicted value wrapping a JSON scalar
pub fn value(json: serde_json::Value) -> PredictedValue {
    PredictedValue(json)
}

/// Listener that records every transition it sees
#[derive(Default)]
pub struct RecordingListener {
    states: Mutex<Vec<OutcomeState>>,
}

impl RecordingListener {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Transitions seen so far, in order
    pub fn states(&self) -> Vec<OutcomeState> {
        self.states.lock().unwrap().clone()
    }

    /// Forget recorded transitions
    pub fn clear(&self) {
        self.states.lock().unwrap().clear();
    }
}

#[async_trait]
impl OutcomeListener for RecordingListener {
    async fn on_transition(&self, state: &OutcomeState) {
        self.states.lock().unwrap().push(state.clone());
    }
}
