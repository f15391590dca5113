//! Core types for capacity-predict

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the eight measurements sent to the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    /// Pyrolysis temperature
    PyrolysisTemperature,
    /// BET specific surface area
    BetSurfaceArea,
    /// Initial coulombic efficiency
    IceContent,
    /// Reversible charge capacity
    ReversibleCharge,
    /// Cycle number at which retention is measured
    CycleNumber,
    /// Capacity retention ratio
    RetentionRatio,
    /// Charge in the high-potential region
    HCharge,
    /// Capacity in the high-potential region
    HCapacity,
}

impl Feature {
    /// All features, in display order
    pub const ALL: [Self; 8] = [
        Self::PyrolysisTemperature,
        Self::BetSurfaceArea,
        Self::IceContent,
        Self::ReversibleCharge,
        Self::CycleNumber,
        Self::RetentionRatio,
        Self::HCharge,
        Self::HCapacity,
    ];

    /// Human-readable label shown next to the input
    pub const fn label(self) -> &'static str {
        match self {
            Self::PyrolysisTemperature => "Pyrolysis Temperature (°C)",
            Self::BetSurfaceArea => "BET Surface Area (m²/g)",
            Self::IceContent => "ICE Content (%)",
            Self::ReversibleCharge => "Reversible Charge (mAh/g)",
            Self::CycleNumber => "Cycle Number",
            Self::RetentionRatio => "Retention Ratio (%)",
            Self::HCharge => "H Charge (mAh/g)",
            Self::HCapacity => "H Capacity (mAh/g)",
        }
    }

    /// Canonical key used in the request payload
    ///
    /// `pyrolusis` is misspelled on the service side and must stay that way.
    pub const fn key(self) -> &'static str {
        match self {
            Self::PyrolysisTemperature => "pyrolusis",
            Self::BetSurfaceArea => "BET",
            Self::IceContent => "ICE",
            Self::ReversibleCharge => "Rch",
            Self::CycleNumber => "Cycle N",
            Self::RetentionRatio => "Retention ratio",
            Self::HCharge => "H charge",
            Self::HCapacity => "H capacity",
        }
    }

    /// Look up a feature by its canonical key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    /// Position of this feature in [`Feature::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Label to canonical key table, in display order
pub const FEATURE_MAPPING: [(&str, &str); 8] = [
    (Feature::PyrolysisTemperature.label(), Feature::PyrolysisTemperature.key()),
    (Feature::BetSurfaceArea.label(), Feature::BetSurfaceArea.key()),
    (Feature::IceContent.label(), Feature::IceContent.key()),
    (Feature::ReversibleCharge.label(), Feature::ReversibleCharge.key()),
    (Feature::CycleNumber.label(), Feature::CycleNumber.key()),
    (Feature::RetentionRatio.label(), Feature::RetentionRatio.key()),
    (Feature::HCharge.label(), Feature::HCharge.key()),
    (Feature::HCapacity.label(), Feature::HCapacity.key()),
];

/// Biomass sources the model was trained on
///
/// Duplicates are kept as-is; each entry is a separate (equal) choice.
pub const BIOMASS_CATALOG: &[&str] = &[
    "Macadamia nutshell",
    "Pine pollen",
    "Wheat straw",
    "Pistachio shell",
    "Switchgrass",
    "Walnut shell",
    "Blue-green algae",
    "Cedarwood bark",
    "Chlorella vulgaris",
    "Waste bagasse",
    "Jackfruit rag",
    "Sorghum stalk",
    "Walnut shell",
    "Waste coffee",
    "Spartina alterniflora",
    "Eucalyptus",
    "Wood block",
    "Oatmeal",
    "Date palm seed",
    "Miscanthus",
    "Fir wood",
    "Rice husk",
    "Ash wood",
    "Sugarcane bagasse",
    "Olive stone",
    "Kapok fiber",
    "Apple pomace",
    "Corn cob",
    "Cherry petal",
    "Silver willow blossom",
    "Beech wood",
    "Macadamia shell",
    "Corn straw pith",
    "Almond shell",
    "Coconut endocarp",
    "Corn silk",
    "Cotton",
    "Scrap wood",
    "Sycamore fruit",
    "Pine wood",
    "Tamarind fruits",
    "Lotus seedpod",
    "Poplar wood",
    "Mangosteen shell",
    "Argan shell",
    "Kelp algae",
    "Maple tree",
    "Lotus stem",
    "Walnut shell",
    "Waste cork",
    "Oak leave",
    "Soybean root",
    "Pinecone",
    "Rice husk",
    "Dandelion",
    "Spinifex",
    "Ginkgo leave",
    "Water caltrop",
    "Lyche seed",
    "Buckwheat hulls",
    "Shaddock peel",
];

/// Body of a prediction request
///
/// All values are the raw strings typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestPayload {
    /// Selected biomass category
    #[serde(rename = "Biomass")]
    pub biomass: String,
    /// Pyrolysis temperature
    #[serde(rename = "pyrolusis")]
    pub pyrolysis_temperature: String,
    /// BET surface area
    #[serde(rename = "BET")]
    pub bet_surface_area: String,
    /// ICE content
    #[serde(rename = "ICE")]
    pub ice_content: String,
    /// Reversible charge
    #[serde(rename = "Rch")]
    pub reversible_charge: String,
    /// Cycle number
    #[serde(rename = "Cycle N")]
    pub cycle_number: String,
    /// Retention ratio
    #[serde(rename = "Retention ratio")]
    pub retention_ratio: String,
    /// H charge
    #[serde(rename = "H charge")]
    pub h_charge: String,
    /// H capacity
    #[serde(rename = "H capacity")]
    pub h_capacity: String,
}

/// Scalar returned by the model, kept as raw JSON
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PredictedValue(pub serde_json::Value);

impl PredictedValue {
    /// Whether the service sent no usable value
    pub fn is_empty(&self) -> bool {
        self.0.is_null()
    }
}

impl fmt::Display for PredictedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            serde_json::Value::Null => Ok(()),
            serde_json::Value::String(s) => f.write_str(s),
            other => write!(f, "{other}"),
        }
    }
}

/// Status of the current or most recent submission
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum OutcomeState {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// Request in flight
    Loading,
    /// The service returned a prediction
    Succeeded(PredictedValue),
    /// The request failed; holds the message to display
    Failed(String),
}

impl OutcomeState {
    /// Whether a request is in flight
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Whether this is a terminal outcome of a submission
    pub const fn is_settled(&self) -> bool {
        matches!(self, Self::Succeeded(_) | Self::Failed(_))
    }
}
