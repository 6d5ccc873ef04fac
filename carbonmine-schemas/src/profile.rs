use crate::fuel::FuelType;
use serde::{Deserialize, Serialize};

/// Operational data for one coal-mining company, already resolved to typed
/// values. Quantities are annual.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    pub name: String,
    /// tons/year
    pub annual_coal_production: f64,
    pub fuel_type: FuelType,
    /// liters
    pub fuel_consumption: f64,
    pub employee_count: u64,
    /// kWh
    pub electricity_consumption: f64,
    /// liters
    pub water_consumption: f64,
    /// tons
    pub waste_generation: f64,
}

/// A profile as a form or profile file supplies it, before the fuel key and
/// numeric ranges have been checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileSubmission {
    pub name: String,
    pub annual_coal_production: f64,
    pub fuel_type: String,
    pub fuel_consumption: f64,
    pub employee_count: f64,
    pub electricity_consumption: f64,
    pub water_consumption: f64,
    pub waste_generation: f64,
}

impl Default for ProfileSubmission {
    fn default() -> Self {
        Self {
            name: String::new(),
            annual_coal_production: 0.0,
            fuel_type: FuelType::default().key().to_string(),
            fuel_consumption: 0.0,
            employee_count: 0.0,
            electricity_consumption: 0.0,
            water_consumption: 0.0,
            waste_generation: 0.0,
        }
    }
}

impl From<&CompanyProfile> for ProfileSubmission {
    fn from(profile: &CompanyProfile) -> Self {
        Self {
            name: profile.name.clone(),
            annual_coal_production: profile.annual_coal_production,
            fuel_type: profile.fuel_type.key().to_string(),
            fuel_consumption: profile.fuel_consumption,
            employee_count: profile.employee_count as f64,
            electricity_consumption: profile.electricity_consumption,
            water_consumption: profile.water_consumption,
            waste_generation: profile.waste_generation,
        }
    }
}
