//! Raw snapshot envelope
//!
//! Everything one refresh cycle hands the pipeline: the four raw record
//! lists exactly as the fetch layer delivered them. Absent lists default
//! to empty, so a partial snapshot file still parses.

use serde::Deserialize;

use crate::ingest::admin::RawAdmin;
use crate::ingest::client::RawClient;
use crate::ingest::spread::RawSpreadProfile;
use crate::ingest::transaction::RawTransaction;

/// One fetch cycle's worth of raw backend records
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSnapshot {
    #[serde(default)]
    pub clients: Vec<RawClient>,
    #[serde(default)]
    pub transactions: Vec<RawTransaction>,
    #[serde(default)]
    pub spread_profiles: Vec<RawSpreadProfile>,
    #[serde(default)]
    pub admins: Vec<RawAdmin>,
}

impl RawSnapshot {
    /// Parse a snapshot from its JSON text
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    /// Total raw records across all lists
    pub fn record_count(&self) -> usize {
        self.clients.len()
            + self.transactions.len()
            + self.spread_profiles.len()
            + self.admins.len()
    }
}
