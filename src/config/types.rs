//! Configuration types for the console report tool
//!
//! This module defines the configuration structs loaded from YAML: where
//! the raw snapshot lives, how lists are presented, and how the watch
//! loop refreshes.

use serde::{Deserialize, Serialize};

use crate::core::sort::SortKey;
use crate::error::AppError;

// ============================================================================
// Configuration Structs
// ============================================================================

/// Where the raw snapshot JSON is read from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotConfig {
    /// Path to the snapshot file produced by the fetch layer
    #[serde(default = "default_snapshot_path")]
    pub path: String,
}

/// How the report renders each list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListConfig {
    /// Rows printed per list
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Sort order applied to every list ("newest", "oldest", "name-asc",
    /// "balance-desc")
    #[serde(default = "default_sort_label")]
    pub default_sort: String,
}

/// Watch-mode refresh cadence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshConfig {
    /// Re-read and re-derive in a loop instead of one shot
    #[serde(default)]
    pub watch: bool,
    /// Seconds between derivation passes in watch mode
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub snapshot: SnapshotConfig,
    #[serde(default)]
    pub lists: ListConfig,
    #[serde(default)]
    pub refresh: RefreshConfig,
}

fn default_snapshot_path() -> String {
    "snapshot.json".to_string()
}

fn default_page_size() -> usize {
    10
}

fn default_sort_label() -> String {
    SortKey::Newest.as_str().to_string()
}

fn default_interval_secs() -> u64 {
    30
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        SnapshotConfig {
            path: default_snapshot_path(),
        }
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        ListConfig {
            page_size: default_page_size(),
            default_sort: default_sort_label(),
        }
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        RefreshConfig {
            watch: false,
            interval_secs: default_interval_secs(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            snapshot: SnapshotConfig::default(),
            lists: ListConfig::default(),
            refresh: RefreshConfig::default(),
        }
    }
}

impl AppConfig {
    /// Validate configuration rules
    pub fn validate(&self) -> Result<(), AppError> {
        // Rule: snapshot path cannot be empty
        if self.snapshot.path.trim().is_empty() {
            return Err(AppError::Config(
                "Snapshot path cannot be empty".to_string(),
            ));
        }

        // Rule: page size must be positive
        if self.lists.page_size == 0 {
            return Err(AppError::Config(
                "lists.page_size must be at least 1".to_string(),
            ));
        }

        // Rule: default sort must be a known order
        if SortKey::from_label(&self.lists.default_sort).is_none() {
            return Err(AppError::Config(format!(
                "Unknown lists.default_sort '{}' (expected one of: newest, oldest, name-asc, balance-desc)",
                self.lists.default_sort
            )));
        }

        // Rule: refresh interval must be within 1s..=3600s
        if self.refresh.interval_secs == 0 || self.refresh.interval_secs > 3600 {
            return Err(AppError::Config(format!(
                "refresh.interval_secs must be between 1 and 3600 (got {})",
                self.refresh.interval_secs
            )));
        }

        Ok(())
    }

    /// The configured sort order as a typed key
    pub fn default_sort_key(&self) -> SortKey {
        SortKey::from_label(&self.lists.default_sort).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.snapshot.path, "snapshot.json");
        assert_eq!(config.lists.page_size, 10);
        assert_eq!(config.default_sort_key(), SortKey::Newest);
        assert!(!config.refresh.watch);
    }

    #[test]
    fn test_empty_snapshot_path_rejected() {
        let mut config = AppConfig::default();
        config.snapshot.path = "   ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Snapshot path"), "Got: {}", err);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let mut config = AppConfig::default();
        config.lists.page_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_sort_label_rejected() {
        let mut config = AppConfig::default();
        config.lists.default_sort = "fastest".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("fastest"), "Got: {}", err);
    }

    #[test]
    fn test_interval_bounds() {
        let mut config = AppConfig::default();
        config.refresh.interval_secs = 0;
        assert!(config.validate().is_err());

        config.refresh.interval_secs = 3601;
        assert!(config.validate().is_err());

        config.refresh.interval_secs = 3600;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sort_key_resolution() {
        let mut config = AppConfig::default();
        config.lists.default_sort = "balance-desc".to_string();
        assert_eq!(config.default_sort_key(), SortKey::BalanceDesc);
    }
}
