//! Spread profile mapping
//!
//! Profiles carry a list of currency pairs with pip values that arrive as
//! strings. Each pip parses independently, so one malformed value zeroes
//! its own pair without invalidating the profile, and the average is
//! derived over whatever the profile ends up holding.

use serde::Deserialize;

use crate::core::status::ProfileStatus;
use crate::core::summary::average_spread;
use crate::core::types::{SpreadPair, SpreadProfile};
use crate::ingest::errors::MappingResult;
use crate::ingest::fields::{self, RawNumber};

/// One raw currency pair inside a profile
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSpreadPair {
    pub currency_pair: Option<String>,
    /// Decimal string (e.g. "1.2")
    pub spread_pips: Option<RawNumber>,
}

/// Raw spread profile payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSpreadProfile {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    pub spread_pairs: Option<Vec<RawSpreadPair>>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Map one raw profile to its canonical record.
///
/// The designated activity date is `updatedAt`, falling back to
/// `createdAt` for profiles that were never touched after creation.
pub fn map_profile(raw: &RawSpreadProfile) -> MappingResult<SpreadProfile> {
    let id = fields::require_text(raw.id.as_deref(), "spread profile", "id")?;

    let pairs: Vec<SpreadPair> = raw
        .spread_pairs
        .iter()
        .flatten()
        .map(|pair| SpreadPair {
            pair: fields::text_or_empty(pair.currency_pair.as_deref()),
            pips: fields::coerce_amount(pair.spread_pips.as_ref()),
        })
        .collect();
    let average = average_spread(&pairs);

    let activity_date = raw.updated_at.as_deref().or(raw.created_at.as_deref());

    Ok(SpreadProfile {
        id,
        name: fields::text_or_empty(raw.name.as_deref()),
        description: fields::text_or_empty(raw.description.as_deref()),
        status: ProfileStatus::from_flag(raw.is_active),
        pairs,
        average_spread: average,
        created_at: fields::date_only(raw.created_at.as_deref()),
        updated_at: fields::date_only(activity_date),
        updated_ts_ms: fields::timestamp_ms(activity_date),
    })
}
