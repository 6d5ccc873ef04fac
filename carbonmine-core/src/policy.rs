//! Resolution of collaborator-supplied submissions into typed profiles.
//!
//! The estimator itself never fails. Everything that can go wrong with a
//! submission (an unknown fuel key, a negative or non-finite quantity, a
//! fractional head count) is decided here according to an
//! [`EstimationPolicy`].

use crate::{
    error::FootprintError,
    estimator::{breakdown_with_fuel_factor, FootprintBreakdown, FootprintResult},
    factors::emission_factors,
    recommendations::recommendations_for,
};
use carbonmine_schemas::{
    fuel::FuelType,
    profile::{CompanyProfile, ProfileSubmission},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Largest head count an `f64` submission carries without rounding (2^53).
const MAX_EXACT_EMPLOYEE_COUNT: f64 = 9_007_199_254_740_992.0;

/// What to do with a fuel key that names no known fuel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelKeyPolicy {
    /// The fuel term contributes nothing to the total.
    #[default]
    Permissive,
    /// The submission fails with `InvalidCategoryKey`.
    Strict,
}

/// What to do with a negative quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegativeInputPolicy {
    #[default]
    Reject,
    /// Negative quantities are treated as zero.
    Clamp,
    /// Negative quantities are used as given.
    Allow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimationPolicy {
    pub fuel_key: FuelKeyPolicy,
    pub negative_input: NegativeInputPolicy,
}

/// The outcome handed back to the collaborator for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub company_name: String,
    /// `None` when the submitted fuel key was not recognised and the
    /// permissive policy dropped the fuel term.
    pub fuel_type: Option<FuelType>,
    pub breakdown: FootprintBreakdown,
    pub result: FootprintResult,
    pub recommendations: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Estimator {
    policy: EstimationPolicy,
}

impl Estimator {
    pub fn new(policy: EstimationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> EstimationPolicy {
        self.policy
    }

    /// Resolves and estimates a raw submission.
    pub fn assess(&self, submission: &ProfileSubmission) -> Result<Assessment, FootprintError> {
        let fuel_type = self.resolve_fuel(&submission.fuel_type)?;
        let employee_count = self.resolve_employee_count(submission.employee_count)?;

        let profile = CompanyProfile {
            name: submission.name.clone(),
            annual_coal_production: self
                .resolve_quantity("annualCoalProduction", submission.annual_coal_production)?,
            fuel_type: fuel_type.unwrap_or_default(),
            fuel_consumption: self.resolve_quantity("fuelConsumption", submission.fuel_consumption)?,
            employee_count,
            electricity_consumption: self
                .resolve_quantity("electricityConsumption", submission.electricity_consumption)?,
            water_consumption: self
                .resolve_quantity("waterConsumption", submission.water_consumption)?,
            waste_generation: self
                .resolve_quantity("wasteGeneration", submission.waste_generation)?,
        };

        let fuel_factor = fuel_type.map_or(0.0, |fuel| emission_factors().fuel_factor(fuel));
        Ok(self.finish(&profile, fuel_type, fuel_factor))
    }

    /// Applies the negative-input policy to an already typed profile and
    /// estimates it.
    pub fn assess_profile(&self, profile: &CompanyProfile) -> Result<Assessment, FootprintError> {
        let resolved = CompanyProfile {
            name: profile.name.clone(),
            annual_coal_production: self
                .resolve_quantity("annualCoalProduction", profile.annual_coal_production)?,
            fuel_type: profile.fuel_type,
            fuel_consumption: self.resolve_quantity("fuelConsumption", profile.fuel_consumption)?,
            employee_count: profile.employee_count,
            electricity_consumption: self
                .resolve_quantity("electricityConsumption", profile.electricity_consumption)?,
            water_consumption: self.resolve_quantity("waterConsumption", profile.water_consumption)?,
            waste_generation: self.resolve_quantity("wasteGeneration", profile.waste_generation)?,
        };
        let fuel_factor = emission_factors().fuel_factor(resolved.fuel_type);
        Ok(self.finish(&resolved, Some(resolved.fuel_type), fuel_factor))
    }

    fn finish(
        &self,
        profile: &CompanyProfile,
        fuel_type: Option<FuelType>,
        fuel_factor: f64,
    ) -> Assessment {
        let breakdown = breakdown_with_fuel_factor(profile, fuel_factor);
        let total_t_co2e = breakdown.total();
        debug!(company = %profile.name, total_t_co2e, "footprint estimated");

        Assessment {
            company_name: profile.name.clone(),
            fuel_type,
            breakdown,
            result: FootprintResult { total_t_co2e },
            recommendations: recommendations_for(total_t_co2e),
        }
    }

    fn resolve_fuel(&self, key: &str) -> Result<Option<FuelType>, FootprintError> {
        match key.parse::<FuelType>() {
            Ok(fuel) => Ok(Some(fuel)),
            Err(_) => match self.policy.fuel_key {
                FuelKeyPolicy::Strict => Err(FootprintError::InvalidCategoryKey(key.to_string())),
                FuelKeyPolicy::Permissive => {
                    warn!(fuel_type = key, "unknown fuel type, fuel consumption counted as zero");
                    Ok(None)
                }
            },
        }
    }

    fn resolve_quantity(&self, field: &'static str, value: f64) -> Result<f64, FootprintError> {
        if !value.is_finite() {
            return Err(FootprintError::OutOfRangeInput { field, value });
        }
        if value >= 0.0 {
            return Ok(value);
        }
        match self.policy.negative_input {
            NegativeInputPolicy::Reject => Err(FootprintError::OutOfRangeInput { field, value }),
            NegativeInputPolicy::Clamp => {
                warn!(field, value, "negative quantity clamped to zero");
                Ok(0.0)
            }
            NegativeInputPolicy::Allow => Ok(value),
        }
    }

    fn resolve_employee_count(&self, value: f64) -> Result<u64, FootprintError> {
        let value = self.resolve_quantity("employeeCount", value)?;
        if value.fract() != 0.0 {
            return Err(FootprintError::InvalidInput {
                field: "employeeCount",
                reason: format!("{value} is not a whole number of employees"),
            });
        }
        if value < 0.0 {
            // A typed profile cannot carry a negative head count.
            return Err(FootprintError::InvalidInput {
                field: "employeeCount",
                reason: format!("{value} cannot be represented as a head count"),
            });
        }
        if value > MAX_EXACT_EMPLOYEE_COUNT {
            return Err(FootprintError::InvalidInput {
                field: "employeeCount",
                reason: format!("{value} exceeds the largest exact head count ({MAX_EXACT_EMPLOYEE_COUNT})"),
            });
        }
        Ok(value as u64)
    }
}
