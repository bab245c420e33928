//! Configuration loader for YAML files
//!
//! This module handles loading and validating configuration from YAML files.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::AppError;

use super::types::AppConfig;

/// Load configuration from a YAML file
///
/// This function:
/// 1. Checks if the file exists
/// 2. Parses the YAML content
/// 3. Validates the configuration rules
///
/// # Arguments
/// * `path` - Path to the configuration YAML file
///
/// # Returns
/// * `Ok(AppConfig)` - Successfully loaded and validated configuration
/// * `Err(AppError)` - File not found, parse error, or validation failure
pub fn load_config(path: &Path) -> Result<AppConfig, AppError> {
    // Check file exists
    if !path.exists() {
        return Err(AppError::Config(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    // Open file
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    // Parse YAML
    let config: AppConfig = serde_yaml::from_reader(reader).map_err(|e| {
        AppError::Config(format!("YAML parse error in '{}': {}", path.display(), e))
    })?;

    // Validate configuration rules
    config.validate()?;

    Ok(config)
}

/// Load configuration from a YAML string (useful for testing)
pub fn load_config_from_str(yaml_content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = serde_yaml::from_str(yaml_content)
        .map_err(|e| AppError::Config(format!("YAML parse error: {}", e)))?;

    config.validate()?;

    Ok(config)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sort::SortKey;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const VALID_CONFIG_YAML: &str = r#"
snapshot:
  path: "data/snapshot.json"
lists:
  page_size: 25
  default_sort: "balance-desc"
refresh:
  watch: true
  interval_secs: 15
"#;

    #[test]
    fn test_load_config_from_str_valid() {
        let config = load_config_from_str(VALID_CONFIG_YAML).unwrap();
        assert_eq!(config.snapshot.path, "data/snapshot.json");
        assert_eq!(config.lists.page_size, 25);
        assert_eq!(config.default_sort_key(), SortKey::BalanceDesc);
        assert!(config.refresh.watch);
        assert_eq!(config.refresh.interval_secs, 15);
    }

    #[test]
    fn test_load_config_from_str_applies_defaults() {
        let config = load_config_from_str("snapshot:\n  path: custom.json\n").unwrap();
        assert_eq!(config.snapshot.path, "custom.json");
        // Unspecified sections fall back to defaults
        assert_eq!(config.lists.page_size, 10);
        assert_eq!(config.refresh.interval_secs, 30);
    }

    #[test]
    fn test_load_config_from_str_invalid_yaml() {
        let result = load_config_from_str("invalid: yaml: content: [");
        assert!(result.is_err());
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("YAML parse error"), "Got: {}", msg);
    }

    #[test]
    fn test_load_config_from_str_validation_failure() {
        let yaml = "lists:\n  page_size: 0\n";
        let result = load_config_from_str(yaml);
        assert!(result.is_err());
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("page_size"), "Got: {}", msg);
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(VALID_CONFIG_YAML.as_bytes()).unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.lists.page_size, 25);
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config(Path::new("/nonexistent/config.yaml"));
        assert!(result.is_err());
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("not found"), "Got: {}", msg);
    }
}
