//! Backoffice — broker console data core
//!
//! Pure transformation pipeline from raw backend payloads to the
//! display-ready state behind a trading-broker admin console:
//! - Raw record mapping with defined defaults (`ingest`)
//! - Status normalization and compliance-tier derivation (`core`)
//! - Generic filter/sort machinery and dashboard aggregates (`core`)
//! - Derived-view assembly per refresh cycle (`core::view`)

pub mod bin_utils;
pub mod config;
pub mod core;
pub mod error;
pub mod ingest;

pub use error::AppError;
