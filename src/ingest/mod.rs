//! Ingest module - raw backend payloads and their record mappers
//!
//! This module provides:
//! - Raw record types mirroring the backend wire shape (`RawClient`,
//!   `RawTransaction`, `RawSpreadProfile`, `RawAdmin`, `RawSnapshot`)
//! - Per-domain mappers to the canonical view models (`map_client`,
//!   `map_deposit`, `map_record`, `map_profile`, `map_admin`)
//! - The structural error taxonomy (`MappingError`)

pub mod admin;
pub mod client;
pub mod errors;
pub mod fields;
pub mod snapshot;
pub mod spread;
pub mod transaction;

// Re-export the error taxonomy
pub use errors::{MappingError, MappingResult};

// Re-export the snapshot envelope
pub use snapshot::RawSnapshot;

// Re-export raw types and mappers per domain
pub use admin::{RawAdmin, map_admin};
pub use client::{RawClient, RawKycDocuments, map_client};
pub use spread::{RawSpreadPair, RawSpreadProfile, map_profile};
pub use transaction::{RawTransaction, map_deposit, map_record};
