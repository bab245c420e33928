//! Shared bootstrap utilities for binary entry points
//!
//! Covers the init sequence shared by the report and seed binaries:
//! `.env` loading, structured logging, and configuration.

use std::path::Path;

use tracing::warn;

use crate::config::{self, AppConfig};

/// Initialize dotenv, logging, and load `config.yaml`.
///
/// A missing or invalid config file falls back to defaults, so the report
/// tool stays usable in a bare checkout; the fallback is logged.
pub fn boot() -> AppConfig {
    dotenvy::dotenv().ok();
    config::init_logging();

    match config::load_config(Path::new("config.yaml")) {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(error = %e, "Could not load config.yaml, using defaults");
            AppConfig::default()
        }
    }
}

/// Initialize dotenv and logging only (no config.yaml needed).
///
/// Use this for binaries that don't read configuration (e.g. `seed`).
pub fn boot_minimal() {
    dotenvy::dotenv().ok();
    config::init_logging();
}
