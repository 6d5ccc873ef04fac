use crate::measurement::Measurement;
use serde::{Deserialize, Serialize};

/// One row of an emission factor table: a category key and the CO2e it
/// contributes per unit of activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorEntry {
    pub category: String,
    pub factor: Measurement<f64>,
}

/// The emissions attributed to a single category for one profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactEntry {
    pub metric: String,
    pub value: f64,
    pub unit: String,
}
