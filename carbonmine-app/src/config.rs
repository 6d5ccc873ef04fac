use anyhow::{Context, Result};
use carbonmine_core::EstimationPolicy;
use serde::Deserialize;
use std::{fs, path::Path, path::PathBuf};
use tracing::info;

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "carbonmine.yaml";

/// Where optional report artifacts are written.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub csv: Option<PathBuf>,
    pub plot_dir: Option<PathBuf>,
}

/// Application settings read from YAML. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub policy: EstimationPolicy,
    pub output: OutputConfig,
}

impl AppConfig {
    /// Loads the given file, or `carbonmine.yaml` from the working directory
    /// when present, or falls back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: AppConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML from {:?}", path))?;
        info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carbonmine_core::{FuelKeyPolicy, NegativeInputPolicy};

    #[test]
    fn full_config_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("carbonmine.yaml");
        fs::write(
            &path,
            "policy:\n  fuel_key: strict\n  negative_input: clamp\noutput:\n  csv: out/report.csv\n  plot_dir: out/plots\n",
        )
        .unwrap();

        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.policy.fuel_key, FuelKeyPolicy::Strict);
        assert_eq!(config.policy.negative_input, NegativeInputPolicy::Clamp);
        assert_eq!(config.output.csv, Some(PathBuf::from("out/report.csv")));
        assert_eq!(config.output.plot_dir, Some(PathBuf::from("out/plots")));
    }

    #[test]
    fn empty_sections_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.yaml");
        fs::write(&path, "output:\n  csv: report.csv\n").unwrap();

        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.policy, EstimationPolicy::default());
        assert_eq!(config.output.plot_dir, None);
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(Some(&dir.path().join("nope.yaml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn unknown_policy_value_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        fs::write(&path, "policy:\n  fuel_key: lenient\n").unwrap();
        assert!(AppConfig::load(Some(&path)).is_err());
    }
}
