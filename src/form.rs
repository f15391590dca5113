//! Form state for a prediction request
//!
//! [`FormModel`] holds the biomass selection and the raw text of every
//! feature. It never rejects input; [`FormModel::is_complete`] reports
//! whether the form may be submitted.

use crate::types::{Feature, RequestPayload};
use regex::Regex;
use std::sync::OnceLock;

/// Decimal literal: optional sign, digits with optional fraction (or a bare
/// fraction), optional exponent.
fn number_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
            .expect("hardcoded number pattern is valid")
    })
}

/// Whether `value` is a decimal literal that parses to a finite number
pub fn is_number_shaped(value: &str) -> bool {
    number_pattern().is_match(value) && value.parse::<f64>().is_ok_and(f64::is_finite)
}

/// Biomass selection plus one raw value per feature
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormModel {
    category: String,
    values: [String; 8],
}

impl FormModel {
    /// Empty form: no biomass selected, all features blank
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the biomass selection
    pub fn set_category(&mut self, value: impl Into<String>) {
        self.category = value.into();
    }

    /// Replace the value of the feature with canonical key `key`
    ///
    /// Unknown keys are ignored.
    pub fn set_feature(&mut self, key: &str, value: impl Into<String>) {
        if let Some(feature) = Feature::from_key(key) {
            self.set(feature, value);
        }
    }

    /// Replace the value of a single feature
    pub fn set(&mut self, feature: Feature, value: impl Into<String>) {
        self.values[feature.index()] = value.into();
    }

    /// Selected biomass ("" when unselected)
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Raw value of a feature
    pub fn value(&self, feature: Feature) -> &str {
        &self.values[feature.index()]
    }

    /// All features with their raw values, in display order
    pub fn values(&self) -> impl Iterator<Item = (Feature, &str)> {
        Feature::ALL
            .into_iter()
            .map(|feature| (feature, self.value(feature)))
    }

    /// Features whose value is empty or not number-shaped
    pub fn missing_fields(&self) -> Vec<Feature> {
        self.values()
            .filter(|(_, value)| !is_number_shaped(value))
            .map(|(feature, _)| feature)
            .collect()
    }

    /// Whether a biomass is selected and every feature holds a number
    pub fn is_complete(&self) -> bool {
        !self.category.is_empty() && self.values.iter().all(|v| is_number_shaped(v))
    }

    /// Build the request body from the current values
    pub fn payload(&self) -> RequestPayload {
        let value = |feature: Feature| self.value(feature).to_string();
        RequestPayload {
            biomass: self.category.clone(),
            pyrolysis_temperature: value(Feature::PyrolysisTemperature),
            bet_surface_area: value(Feature::BetSurfaceArea),
            ice_content: value(Feature::IceContent),
            reversible_charge: value(Feature::ReversibleCharge),
            cycle_number: value(Feature::CycleNumber),
            retention_ratio: value(Feature::RetentionRatio),
            h_charge: value(Feature::HCharge),
            h_capacity: value(Feature::HCapacity),
        }
    }
}
