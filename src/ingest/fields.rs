//! Shared field-coercion helpers for the record mappers
//!
//! The backend is loosely typed: numerics arrive as strings or numbers,
//! timestamps may be missing, optional fields come and go. Every mapper
//! resolves those through the named helpers here so the defaults live in
//! exactly one place:
//! - malformed or missing numerics coerce to 0 (finite, clamped where the
//!   field is a magnitude),
//! - missing timestamps yield an empty display date and a 0 sort key,
//! - only a missing identity field is an error (`require_text`).

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;
use tracing::debug;

use crate::core::status::PaymentMethod;
use crate::ingest::errors::{MappingError, MappingResult};

// ============================================================================
// Numeric coercion
// ============================================================================

/// Numeric field exactly as received: sometimes a bare JSON number,
/// sometimes a quoted decimal string.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
}

impl RawNumber {
    /// Resolve to a finite f64; anything unparseable or non-finite is 0.
    pub fn coerce(&self) -> f64 {
        let value = match self {
            RawNumber::Number(n) => *n,
            RawNumber::Text(s) => match s.trim().parse::<f64>() {
                Ok(n) => n,
                Err(_) => {
                    debug!(value = %s, "non-numeric field coerced to 0");
                    0.0
                }
            },
        };
        if value.is_finite() {
            value
        } else {
            0.0
        }
    }
}

/// Finite signed value; absent or malformed input resolves to 0.
pub fn coerce_signed(raw: Option<&RawNumber>) -> f64 {
    raw.map(RawNumber::coerce).unwrap_or(0.0)
}

/// Finite magnitude: like `coerce_signed` but negative values clamp to 0.
pub fn coerce_amount(raw: Option<&RawNumber>) -> f64 {
    coerce_signed(raw).max(0.0)
}

/// Non-negative integer count (fractional input truncates).
pub fn coerce_count(raw: Option<&RawNumber>) -> u32 {
    coerce_signed(raw).max(0.0) as u32
}

// ============================================================================
// Timestamps and dates
// ============================================================================

/// Date portion of an ISO-8601 timestamp: the text before `T`.
/// Missing input yields an empty string, never an error.
pub fn date_only(raw: Option<&str>) -> String {
    match raw {
        Some(ts) => ts.split('T').next().unwrap_or(ts).to_string(),
        None => String::new(),
    }
}

/// Epoch milliseconds for an ISO-8601 timestamp, used as the sort key.
/// Bare dates count as midnight UTC; anything unparseable is 0.
pub fn timestamp_ms(raw: Option<&str>) -> i64 {
    let trimmed = match raw {
        Some(ts) => ts.trim(),
        None => return 0,
    };
    if trimmed.is_empty() {
        return 0;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return dt.timestamp_millis();
    }
    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) => date
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp_millis())
            .unwrap_or(0),
        Err(_) => 0,
    }
}

// ============================================================================
// Text fields
// ============================================================================

/// Optional display text, kept verbatim; absent resolves to "".
pub fn text_or_empty(raw: Option<&str>) -> String {
    raw.map(str::to_string).unwrap_or_default()
}

/// The one structural check: a required identity field must be present
/// and non-blank.
pub fn require_text(
    raw: Option<&str>,
    domain: &'static str,
    field: &'static str,
) -> MappingResult<String> {
    match raw {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(MappingError::MissingField { domain, field }),
    }
}

/// Payment proof reference, resolved by method: UPI reads the UTR number,
/// crypto the wallet address, bank transfer the bank name. Blank proofs
/// resolve to `None`.
pub fn payment_reference(
    method: PaymentMethod,
    utr: Option<&str>,
    crypto_address: Option<&str>,
    bank_name: Option<&str>,
) -> Option<String> {
    let value = match method {
        PaymentMethod::Upi => utr,
        PaymentMethod::Crypto => crypto_address,
        PaymentMethod::BankTransfer => bank_name,
    };
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
