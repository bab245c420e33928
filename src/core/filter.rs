//! Generic filter predicate engine shared by every list screen
//!
//! One `FilterState` snapshot describes what the list controls currently
//! ask for: a free-text search term, categorical dropdown selections, an
//! optional date range and an optional amount range. Records plug into the
//! engine through the `Filterable` trait; the engine itself knows nothing
//! about domains.
//!
//! Evaluation rules:
//! - all active criteria must hold (AND), so applying criteria one at a
//!   time in any order selects the same records as one combined pass,
//! - the `all` wildcard short-circuits a category check before the field
//!   is even read,
//! - a bounded date or amount range never matches a record that lacks the
//!   field.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Wildcard a category dropdown sends when unconstrained
const CATEGORY_WILDCARD: &str = "all";

/// True for the `all` / `All` dropdown sentinel (any casing)
pub fn is_wildcard(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case(CATEGORY_WILDCARD)
}

/// Calendar date for range filtering, read off an ISO timestamp or a bare
/// `YYYY-MM-DD` string. `None` when nothing parseable is there.
pub fn parse_filter_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.split('T').next().unwrap_or(raw).trim();
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Record-side hooks the predicate engine evaluates against
pub trait Filterable {
    /// Text fields the free-text search scans (fixed per domain)
    fn search_fields(&self) -> Vec<&str>;

    /// Canonical label for a categorical filter key, or `None` when the
    /// domain does not expose that key
    fn category_value(&self, key: &str) -> Option<&str>;

    /// Calendar date the date-range filter reads
    fn filter_date(&self) -> Option<NaiveDate>;

    /// Magnitude the amount-range filter reads
    fn filter_amount(&self) -> Option<f64>;
}

/// One categorical equality constraint (a dropdown selection)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryFilter {
    /// Field key the domain exposes (e.g. "status", "method")
    pub key: String,
    /// Selected canonical label, or the `all` wildcard
    pub selected: String,
}

/// Immutable snapshot of the list-control state for one evaluation pass.
///
/// Transitions go through the `with_*` builders and produce a new state;
/// neither the engine nor the builders mutate an existing snapshot, and
/// records are never mutated by evaluation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FilterState {
    /// Free-text search term; blank matches everything
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub categories: Vec<CategoryFilter>,
    /// Inclusive lower date bound; `None` leaves that side open
    #[serde(default)]
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper date bound; `None` leaves that side open
    #[serde(default)]
    pub date_to: Option<NaiveDate>,
    /// Inclusive lower amount bound
    #[serde(default)]
    pub amount_min: Option<f64>,
    /// Inclusive upper amount bound
    #[serde(default)]
    pub amount_max: Option<f64>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: &str) -> Self {
        self.search = term.to_string();
        self
    }

    pub fn with_category(mut self, key: &str, selected: &str) -> Self {
        self.categories.push(CategoryFilter {
            key: key.to_string(),
            selected: selected.to_string(),
        });
        self
    }

    pub fn with_date_range(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.date_from = from;
        self.date_to = to;
        self
    }

    pub fn with_amount_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.amount_min = min;
        self.amount_max = max;
        self
    }

    /// True when no criterion is active (every record matches)
    pub fn is_unconstrained(&self) -> bool {
        self.search.trim().is_empty()
            && self.categories.iter().all(|c| is_wildcard(&c.selected))
            && self.date_from.is_none()
            && self.date_to.is_none()
            && self.amount_min.is_none()
            && self.amount_max.is_none()
    }

    /// Evaluate every active criterion against one record
    pub fn matches<R: Filterable>(&self, record: &R) -> bool {
        // === SEARCH CHECK ===
        let term = self.search.trim();
        if !term.is_empty() {
            let needle = term.to_lowercase();
            let hit = record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }

        // === CATEGORY CHECKS ===
        for category in &self.categories {
            // Wildcard short-circuits before the field is read
            if is_wildcard(&category.selected) {
                continue;
            }
            match record.category_value(&category.key) {
                Some(value) if value == category.selected => {}
                _ => return false,
            }
        }

        // === DATE RANGE CHECK ===
        if self.date_from.is_some() || self.date_to.is_some() {
            let date = match record.filter_date() {
                Some(date) => date,
                None => return false,
            };
            if let Some(from) = self.date_from {
                if date < from {
                    return false;
                }
            }
            if let Some(to) = self.date_to {
                if date > to {
                    return false;
                }
            }
        }

        // === AMOUNT RANGE CHECK ===
        if self.amount_min.is_some() || self.amount_max.is_some() {
            let amount = match record.filter_amount() {
                Some(amount) => amount,
                None => return false,
            };
            if let Some(min) = self.amount_min {
                if amount < min {
                    return false;
                }
            }
            if let Some(max) = self.amount_max {
                if amount > max {
                    return false;
                }
            }
        }

        true
    }
}

/// Apply a filter snapshot to a whole list, preserving input order
pub fn apply_all<R: Filterable + Clone>(records: &[R], state: &FilterState) -> Vec<R> {
    records
        .iter()
        .filter(|record| state.matches(*record))
        .cloned()
        .collect()
}
