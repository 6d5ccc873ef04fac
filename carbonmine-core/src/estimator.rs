use crate::{error::FootprintError, factors::emission_factors};
use carbonmine_schemas::{impact::ImpactEntry, profile::CompanyProfile};
use serde::{Deserialize, Serialize};

/// Estimated annual footprint in tons CO2e.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct FootprintResult {
    pub total_t_co2e: f64,
}

/// Per-category emissions, each term being a profile quantity times its
/// factor.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FootprintBreakdown {
    pub coal_production: f64,
    pub fuel_consumption: f64,
    pub employees: f64,
    pub electricity_consumption: f64,
    pub water_consumption: f64,
    pub waste_generation: f64,
}

impl FootprintBreakdown {
    pub fn total(&self) -> f64 {
        self.coal_production
            + self.fuel_consumption
            + self.employees
            + self.electricity_consumption
            + self.water_consumption
            + self.waste_generation
    }

    pub fn impacts(&self) -> Vec<ImpactEntry> {
        [
            ("coalProduction", self.coal_production),
            ("fuelConsumption", self.fuel_consumption),
            ("employeeCount", self.employees),
            ("electricityConsumption", self.electricity_consumption),
            ("waterConsumption", self.water_consumption),
            ("wasteGeneration", self.waste_generation),
        ]
        .into_iter()
        .map(|(metric, value)| ImpactEntry {
            metric: metric.to_string(),
            value,
            unit: "t CO2e/yr".to_string(),
        })
        .collect()
    }
}

/// Computes the per-category emissions for a profile. No validation is
/// performed; negative quantities produce negative terms.
pub fn breakdown(profile: &CompanyProfile) -> FootprintBreakdown {
    breakdown_with_fuel_factor(profile, emission_factors().fuel_factor(profile.fuel_type))
}

/// Same as [`breakdown`] but with the per-liter fuel factor supplied by the
/// caller, used when the fuel key was resolved at the boundary.
pub(crate) fn breakdown_with_fuel_factor(
    profile: &CompanyProfile,
    fuel_factor: f64,
) -> FootprintBreakdown {
    let factors = emission_factors();
    FootprintBreakdown {
        coal_production: profile.annual_coal_production * factors.coal_production,
        fuel_consumption: profile.fuel_consumption * fuel_factor,
        employees: profile.employee_count as f64 * factors.employee_count,
        electricity_consumption: profile.electricity_consumption
            * factors.electricity_consumption,
        water_consumption: profile.water_consumption * factors.water_consumption,
        waste_generation: profile.waste_generation * factors.waste_generation,
    }
}

/// Weighted sum of the profile against the emission factor table.
pub fn estimate(profile: &CompanyProfile) -> FootprintResult {
    FootprintResult {
        total_t_co2e: breakdown(profile).total(),
    }
}

/// Validates the profile's ranges before estimating.
pub fn estimate_checked(profile: &CompanyProfile) -> Result<FootprintResult, FootprintError> {
    validate(profile)?;
    Ok(estimate(profile))
}

/// Rejects negative or non-finite quantities.
pub fn validate(profile: &CompanyProfile) -> Result<(), FootprintError> {
    for (field, value) in quantities(profile) {
        if !value.is_finite() || value < 0.0 {
            return Err(FootprintError::OutOfRangeInput { field, value });
        }
    }
    Ok(())
}

fn quantities(profile: &CompanyProfile) -> [(&'static str, f64); 5] {
    [
        ("annualCoalProduction", profile.annual_coal_production),
        ("fuelConsumption", profile.fuel_consumption),
        ("electricityConsumption", profile.electricity_consumption),
        ("waterConsumption", profile.water_consumption),
        ("wasteGeneration", profile.waste_generation),
    ]
}
