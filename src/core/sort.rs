//! Sort comparator shared by every list screen
//!
//! The screens offer a fixed set of orders. The comparator only decides
//! pairwise `Ordering`; ties come back `Equal` and the standard library's
//! stable `sort_by` keeps input order for them, which is what makes equal
//! names render in a predictable order.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Record-side hooks the comparator reads
pub trait Sortable {
    /// Designated primary timestamp (epoch ms) for Newest / Oldest
    fn sort_timestamp(&self) -> i64;

    /// Display name for the alphabetical order
    fn sort_name(&self) -> &str;

    /// Monetary magnitude for the descending-balance order
    fn sort_magnitude(&self) -> f64;
}

/// Enumerated sort orders the list screens offer
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    NameAsc,
    BalanceDesc,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::NameAsc => "name-asc",
            SortKey::BalanceDesc => "balance-desc",
        }
    }

    /// Parse a configuration label; `None` for anything unknown
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "newest" => Some(SortKey::Newest),
            "oldest" => Some(SortKey::Oldest),
            "name-asc" => Some(SortKey::NameAsc),
            "balance-desc" => Some(SortKey::BalanceDesc),
            _ => None,
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Compare two records under one sort key.
///
/// Name comparison is case-insensitive; magnitudes use `total_cmp`, so the
/// order is deterministic for every pair of floats.
#[must_use]
pub fn compare<R: Sortable>(a: &R, b: &R, key: SortKey) -> Ordering {
    match key {
        SortKey::Newest => b.sort_timestamp().cmp(&a.sort_timestamp()),
        SortKey::Oldest => a.sort_timestamp().cmp(&b.sort_timestamp()),
        SortKey::NameAsc => a
            .sort_name()
            .to_lowercase()
            .cmp(&b.sort_name().to_lowercase()),
        SortKey::BalanceDesc => b.sort_magnitude().total_cmp(&a.sort_magnitude()),
    }
}

/// Stable in-place sort; records comparing equal keep their input order
pub fn sort_records<R: Sortable>(records: &mut [R], key: SortKey) {
    records.sort_by(|a, b| compare(a, b, key));
}
