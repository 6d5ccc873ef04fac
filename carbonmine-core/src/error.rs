use thiserror::Error;

#[derive(Debug, Error)]
pub enum FootprintError {
    #[error("Fuel type '{0}' does not match any emission factor (expected diesel, petrol or gas)")]
    InvalidCategoryKey(String),

    #[error("Field '{field}' is out of range: {value} (must be a finite, non-negative number)")]
    OutOfRangeInput { field: &'static str, value: f64 },

    #[error("Field '{field}' is invalid: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Failed to parse YAML from '{0}': {1}")]
    YamlParsing(String, #[source] serde_yaml::Error),

    #[error("Failed to parse JSON from '{0}': {1}")]
    JsonParsing(String, #[source] serde_json::Error),

    #[error("Failed to write CSV report '{0}': {1}")]
    CsvError(String, #[source] csv::Error),
}
