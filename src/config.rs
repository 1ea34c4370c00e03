//! Configuration file support for cves-diff.
//!
//! Provides YAML-based configuration through `cves-diff.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::application::dto::OutputFormat;
use crate::shared::error::DiffError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "cves-diff.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub output: Option<PathBuf>,
    pub fail_on_diff: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Parsed `format`; only meaningful after validation.
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.format.as_deref().and_then(|f| f.parse().ok())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file deserializes as YAML null, which means "no settings".
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        format
            .parse::<OutputFormat>()
            .map_err(|message| DiffError::Validation {
                message: format!(
                    "Invalid config: {}\n\n💡 Hint: Use 'format: markdown' or 'format: json'.",
                    message
                ),
            })?;
    }

    if let Some(ref output) = config.output {
        if output.as_os_str().to_string_lossy().trim().is_empty() {
            return Err(DiffError::Validation {
                message: "Invalid config: output must not be empty.\n\n\
                          💡 Hint: Remove the 'output' field to use the default report name, or use '-' for stdout."
                    .to_string(),
            }
            .into());
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            "config.yml",
            r#"
format: json
output: reports/diff.json
fail_on_diff: true
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.format.as_deref(), Some("json"));
        assert_eq!(config.output_format(), Some(OutputFormat::Json));
        assert_eq!(config.output, Some(PathBuf::from("reports/diff.json")));
        assert_eq!(config.fail_on_diff, Some(true));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_load_partial_config() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "config.yml", "fail_on_diff: false\n");

        let config = load_config_from_path(&config_path).unwrap();
        assert!(config.format.is_none());
        assert!(config.output.is_none());
        assert_eq!(config.fail_on_diff, Some(false));
    }

    #[test]
    fn test_load_empty_config() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "config.yml", "\n");

        let config = load_config_from_path(&config_path).unwrap();
        assert!(config.format.is_none());
        assert!(config.fail_on_diff.is_none());
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, CONFIG_FILENAME, "format: md\n");

        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_some());
        assert_eq!(config.unwrap().output_format(), Some(OutputFormat::Markdown));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "bad.yml", "invalid: yaml: [[[broken");

        let result = load_config_from_path(&config_path);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_wrong_type_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "config.yml", "fail_on_diff: [1, 2]\n");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_format_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "config.yml", "format: html\n");

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DiffError>(),
            Some(DiffError::Validation { .. })
        ));
        assert!(err.to_string().contains("html"));
    }

    #[test]
    fn test_blank_output_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "config.yml", "output: \"  \"\n");

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("output must not be empty"));
    }

    #[test]
    fn test_unknown_fields_captured() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            "config.yml",
            r#"
format: markdown
check_cve: true
labels:
  - a
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("check_cve"));
        assert!(config.unknown_fields.contains_key("labels"));
    }
}
