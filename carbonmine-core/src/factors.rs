//! The emission factor table used by every estimate.
//!
//! Factors are expressed in tons CO2e per unit of activity. The table is a
//! `static` built at compile time and is never mutated.

use carbonmine_schemas::{fuel::FuelType, impact::FactorEntry, measurement::Measurement};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelFactors {
    pub diesel: f64,
    pub petrol: f64,
    pub gas: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmissionFactorTable {
    /// per ton of coal produced
    pub coal_production: f64,
    /// per liter of fuel burned
    pub fuel_consumption: FuelFactors,
    /// per employee
    pub employee_count: f64,
    /// per kWh
    pub electricity_consumption: f64,
    /// per liter
    pub water_consumption: f64,
    /// per ton
    pub waste_generation: f64,
}

pub static EMISSION_FACTORS: EmissionFactorTable = EmissionFactorTable {
    coal_production: 1.04,
    fuel_consumption: FuelFactors {
        diesel: 2.64,
        petrol: 2.35,
        gas: 1.85,
    },
    employee_count: 0.45,
    electricity_consumption: 0.62,
    water_consumption: 0.02,
    waste_generation: 0.12,
};

/// Shared handle to the process-wide table.
pub fn emission_factors() -> &'static EmissionFactorTable {
    &EMISSION_FACTORS
}

impl EmissionFactorTable {
    pub fn fuel_factor(&self, fuel: FuelType) -> f64 {
        match fuel {
            FuelType::Diesel => self.fuel_consumption.diesel,
            FuelType::Petrol => self.fuel_consumption.petrol,
            FuelType::Gas => self.fuel_consumption.gas,
        }
    }

    /// Factor for a raw fuel key, or `None` when the key names no known fuel.
    pub fn fuel_factor_for_key(&self, key: &str) -> Option<f64> {
        key.parse::<FuelType>().ok().map(|fuel| self.fuel_factor(fuel))
    }

    /// Flattens the table into display rows, in the order the categories are
    /// summed.
    pub fn entries(&self) -> Vec<FactorEntry> {
        let entry = |category: &str, value: f64, unit: &str| FactorEntry {
            category: category.to_string(),
            factor: Measurement::new(value, unit),
        };

        let mut entries = vec![entry(
            "coalProduction",
            self.coal_production,
            "t CO2e per ton",
        )];
        entries.extend(FuelType::ALL.into_iter().map(|fuel| {
            entry(
                &format!("fuelConsumption.{}", fuel.key()),
                self.fuel_factor(fuel),
                "t CO2e per liter",
            )
        }));
        entries.extend([
            entry("employeeCount", self.employee_count, "t CO2e per employee"),
            entry(
                "electricityConsumption",
                self.electricity_consumption,
                "t CO2e per kWh",
            ),
            entry("waterConsumption", self.water_consumption, "t CO2e per liter"),
            entry("wasteGeneration", self.waste_generation, "t CO2e per ton"),
        ]);
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fuel_factors_match_each_fuel() {
        let table = emission_factors();
        assert_eq!(table.fuel_factor(FuelType::Diesel), 2.64);
        assert_eq!(table.fuel_factor(FuelType::Petrol), 2.35);
        assert_eq!(table.fuel_factor(FuelType::Gas), 1.85);
    }

    #[test]
    fn raw_keys_resolve_through_fuel_type() {
        let table = emission_factors();
        assert_eq!(table.fuel_factor_for_key("Petrol"), Some(2.35));
        assert_eq!(table.fuel_factor_for_key(""), None);
        assert_eq!(table.fuel_factor_for_key("coal"), None);
    }

    #[test]
    fn entries_list_all_eight_factors() {
        let entries = emission_factors().entries();
        let categories: Vec<&str> = entries.iter().map(|e| e.category.as_str()).collect();
        assert_eq!(
            categories,
            [
                "coalProduction",
                "fuelConsumption.diesel",
                "fuelConsumption.petrol",
                "fuelConsumption.gas",
                "employeeCount",
                "electricityConsumption",
                "waterConsumption",
                "wasteGeneration",
            ]
        );
        assert_eq!(entries[0].factor.value, 1.04);
        assert_eq!(entries[7].factor.value, 0.12);
        assert!(entries.iter().all(|e| e.factor.unit.starts_with("t CO2e per")));
    }

    #[test]
    fn every_factor_is_positive() {
        assert!(emission_factors().entries().iter().all(|e| e.factor.value > 0.0));
    }
}
