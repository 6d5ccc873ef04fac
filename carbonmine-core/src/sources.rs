//! Loading profile submissions from YAML or JSON profile files.

use crate::error::FootprintError;
use carbonmine_schemas::{file_formats::ProfileFile, profile::ProfileSubmission};
use std::{fs, path::Path, path::PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Yaml,
    Json,
}

fn format_of(path: &Path) -> Option<FileFormat> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("yaml") | Some("yml") => Some(FileFormat::Yaml),
        Some("json") => Some(FileFormat::Json),
        _ => None,
    }
}

/// Loads submissions from a single profile file, or from every profile file
/// in a directory (sorted by path, non-recursive).
pub fn load_submissions(path: &Path) -> Result<Vec<ProfileSubmission>, FootprintError> {
    if path.is_dir() {
        let mut submissions = Vec::new();
        for file in profile_files_in(path)? {
            submissions.extend(load_profile_file(&file)?);
        }
        info!(
            dir = %path.display(),
            count = submissions.len(),
            "loaded profile submissions"
        );
        Ok(submissions)
    } else {
        load_profile_file(path)
    }
}

fn profile_files_in(dir: &Path) -> Result<Vec<PathBuf>, FootprintError> {
    let label = dir.display().to_string();
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| FootprintError::FileIO(label.clone(), e))? {
        let path = entry
            .map_err(|e| FootprintError::FileIO(label.clone(), e))?
            .path();
        if path.is_file() && format_of(&path).is_some() {
            files.push(path);
        }
    }
    if files.is_empty() {
        return Err(FootprintError::ConfigError(format!(
            "No .yaml, .yml or .json profile files found in '{label}'"
        )));
    }
    files.sort();
    Ok(files)
}

/// Parses one profile file. The format is chosen by extension.
pub fn load_profile_file(path: &Path) -> Result<Vec<ProfileSubmission>, FootprintError> {
    let label = path.display().to_string();
    let format = format_of(path).ok_or_else(|| {
        FootprintError::ConfigError(format!(
            "Unsupported profile file '{label}' (expected .yaml, .yml or .json)"
        ))
    })?;
    let content = fs::read_to_string(path).map_err(|e| FootprintError::FileIO(label.clone(), e))?;
    let file = parse_profile_file(&label, &content, format)?;
    debug!(
        file = %label,
        schema_version = %file.schema_version,
        count = file.profiles.len(),
        "parsed profile file"
    );
    Ok(file.profiles)
}

fn parse_profile_file(
    label: &str,
    content: &str,
    format: FileFormat,
) -> Result<ProfileFile, FootprintError> {
    match format {
        FileFormat::Yaml => serde_yaml::from_str(content)
            .map_err(|e| FootprintError::YamlParsing(label.to_string(), e)),
        FileFormat::Json => serde_json::from_str(content)
            .map_err(|e| FootprintError::JsonParsing(label.to_string(), e)),
    }
}
