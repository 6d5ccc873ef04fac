use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Fuel burned by the mine's vehicle fleet and on-site equipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    #[default]
    Diesel,
    Petrol,
    Gas,
}

impl FuelType {
    pub const ALL: [FuelType; 3] = [FuelType::Diesel, FuelType::Petrol, FuelType::Gas];

    /// The lowercase key used in submitted forms and profile files.
    pub fn key(self) -> &'static str {
        match self {
            FuelType::Diesel => "diesel",
            FuelType::Petrol => "petrol",
            FuelType::Gas => "gas",
        }
    }

    /// Looks up a fuel by key, ignoring case and surrounding whitespace.
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL
            .into_iter()
            .find(|fuel| fuel.key().eq_ignore_ascii_case(key))
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when a string does not name one of the known fuels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown fuel type '{0}' (expected one of: diesel, petrol, gas)")]
pub struct UnknownFuelType(pub String);

impl FromStr for FuelType {
    type Err = UnknownFuelType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| UnknownFuelType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_parse_back_to_the_same_fuel() {
        for fuel in FuelType::ALL {
            assert_eq!(fuel.key().parse::<FuelType>(), Ok(fuel));
        }
    }

    #[test]
    fn parsing_ignores_case_and_padding() {
        assert_eq!(FuelType::from_key("  Diesel "), Some(FuelType::Diesel));
        assert_eq!(FuelType::from_key("GAS"), Some(FuelType::Gas));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert_eq!(FuelType::from_key(""), None);
        assert_eq!(FuelType::from_key("kerosene"), None);
        let err = "coal".parse::<FuelType>().unwrap_err();
        assert_eq!(err, UnknownFuelType("coal".to_string()));
        assert!(err.to_string().contains("'coal'"));
    }

    #[test]
    fn serializes_as_lowercase_key() {
        assert_eq!(serde_json::to_string(&FuelType::Petrol).unwrap(), "\"petrol\"");
        let fuel: FuelType = serde_json::from_str("\"gas\"").unwrap();
        assert_eq!(fuel, FuelType::Gas);
    }
}
