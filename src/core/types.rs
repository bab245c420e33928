//! Canonical view models for the admin console lists
//!
//! These are the display-ready records the mappers produce: every status is
//! one of its fixed vocabulary, every numeric is finite, every date field is
//! populated (possibly with the empty string). Once built they are never
//! mutated; a refresh derives a fresh set from scratch.
//!
//! Each record also wires itself into the generic filter and sort machinery
//! through the `Filterable` and `Sortable` impls at the bottom.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::compliance::{ComplianceTier, KycDocuments};
use crate::core::filter::{parse_filter_date, Filterable};
use crate::core::sort::Sortable;
use crate::core::status::{
    AccountStatus, KycStatus, LedgerStatus, PaymentMethod, ProfileStatus, TransactionKind,
    TransactionStatus,
};

// =============================================================================
// Client
// =============================================================================

/// One trading client as the client list and KYC review screens show it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    /// Trading account identifier (the row key)
    pub account_id: String,
    pub name: String,
    pub email: String,
    /// Overall KYC verification state
    pub kyc_status: KycStatus,
    /// Wallet balance in account currency; 0 when the backend value was
    /// missing or malformed
    pub wallet_balance: f64,
    /// Number of linked trading accounts
    pub linked_accounts: u32,
    /// Registration timestamp as received (ISO-8601, "" when absent)
    pub registration_date: String,
    /// Epoch-millisecond mirror of `registration_date`, 0 when unparseable
    pub registered_ts_ms: i64,
    /// Derived verification tier, never read from the backend
    pub compliance_tier: ComplianceTier,
    /// Normalized per-document statuses when a KYC set was submitted
    pub documents: Option<KycDocuments>,
    pub total_deposits: f64,
    pub total_withdrawals: f64,
    /// Lifetime trading profit; may be negative
    pub profit: f64,
}

// =============================================================================
// Transactions
// =============================================================================

/// One deposit as the deposit-approval screen shows it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deposit {
    pub id: String,
    /// Trading account the money moved into ("" when the backend omitted it)
    pub account_id: String,
    pub method: PaymentMethod,
    /// Amount as a non-negative magnitude
    pub amount: f64,
    pub status: TransactionStatus,
    /// Calendar date (`YYYY-MM-DD`) of creation, "" when absent
    pub date: String,
    /// Epoch-millisecond creation time, 0 when unparseable
    pub created_ts_ms: i64,
    /// Payment proof: UTR number, wallet address or bank name per method
    pub reference: Option<String>,
    pub rejection_reason: Option<String>,
}

/// One money movement as the full-history screen shows it.
///
/// Same underlying data as `Deposit` but labeled with the ledger status
/// vocabulary, where an approved transaction reads `completed`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: String,
    pub account_id: String,
    pub kind: TransactionKind,
    pub method: PaymentMethod,
    pub amount: f64,
    pub status: LedgerStatus,
    pub date: String,
    pub created_ts_ms: i64,
    pub reference: Option<String>,
    pub rejection_reason: Option<String>,
}

// =============================================================================
// Spread profiles
// =============================================================================

/// One currency pair inside a spread profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpreadPair {
    /// Pair label (e.g. "EUR/USD")
    pub pair: String,
    /// Spread in pips; 0 when the backend value did not parse
    pub pips: f64,
}

/// One spread configuration profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpreadProfile {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: ProfileStatus,
    /// Pairs in backend order; a malformed pip only zeroes its own pair
    pub pairs: Vec<SpreadPair>,
    /// Mean pips across `pairs`; `None` when the profile has no pairs
    pub average_spread: Option<f64>,
    /// Creation date (`YYYY-MM-DD`, "" when absent)
    pub created_at: String,
    /// Last-update date; the profile's designated timestamp for filtering
    /// and Newest/Oldest ordering
    pub updated_at: String,
    pub updated_ts_ms: i64,
}

// =============================================================================
// Admins
// =============================================================================

/// One staff account as the admin management screen shows it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Admin {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Role label as received (trimmed), e.g. "SUPER_ADMIN"
    pub role: String,
    pub status: AccountStatus,
}

// =============================================================================
// Filterable impls (searchable fields, category keys, designated dates)
// =============================================================================

impl Filterable for Client {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email, &self.account_id]
    }

    fn category_value(&self, key: &str) -> Option<&str> {
        match key {
            "kyc_status" => Some(self.kyc_status.as_str()),
            "compliance_tier" => Some(self.compliance_tier.as_str()),
            _ => None,
        }
    }

    fn filter_date(&self) -> Option<NaiveDate> {
        parse_filter_date(&self.registration_date)
    }

    fn filter_amount(&self) -> Option<f64> {
        Some(self.wallet_balance)
    }
}

impl Filterable for Deposit {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.id.as_str(), self.account_id.as_str()];
        if let Some(reference) = &self.reference {
            fields.push(reference);
        }
        fields
    }

    fn category_value(&self, key: &str) -> Option<&str> {
        match key {
            "status" => Some(self.status.as_str()),
            "method" => Some(self.method.as_str()),
            _ => None,
        }
    }

    fn filter_date(&self) -> Option<NaiveDate> {
        parse_filter_date(&self.date)
    }

    fn filter_amount(&self) -> Option<f64> {
        Some(self.amount)
    }
}

impl Filterable for TransactionRecord {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.id.as_str(), self.account_id.as_str()];
        if let Some(reference) = &self.reference {
            fields.push(reference);
        }
        fields
    }

    fn category_value(&self, key: &str) -> Option<&str> {
        match key {
            "status" => Some(self.status.as_str()),
            "method" => Some(self.method.as_str()),
            "kind" => Some(self.kind.as_str()),
            _ => None,
        }
    }

    fn filter_date(&self) -> Option<NaiveDate> {
        parse_filter_date(&self.date)
    }

    fn filter_amount(&self) -> Option<f64> {
        Some(self.amount)
    }
}

impl Filterable for SpreadProfile {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.description]
    }

    fn category_value(&self, key: &str) -> Option<&str> {
        match key {
            "status" => Some(self.status.as_str()),
            _ => None,
        }
    }

    fn filter_date(&self) -> Option<NaiveDate> {
        parse_filter_date(&self.updated_at)
    }

    fn filter_amount(&self) -> Option<f64> {
        self.average_spread
    }
}

impl Filterable for Admin {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email]
    }

    fn category_value(&self, key: &str) -> Option<&str> {
        match key {
            "status" => Some(self.status.as_str()),
            "role" => Some(&self.role),
            _ => None,
        }
    }

    // Staff accounts carry no designated date or amount; bounded ranges
    // never match them
    fn filter_date(&self) -> Option<NaiveDate> {
        None
    }

    fn filter_amount(&self) -> Option<f64> {
        None
    }
}

// =============================================================================
// Sortable impls (designated timestamp, display name, magnitude)
// =============================================================================

impl Sortable for Client {
    fn sort_timestamp(&self) -> i64 {
        self.registered_ts_ms
    }

    fn sort_name(&self) -> &str {
        &self.name
    }

    fn sort_magnitude(&self) -> f64 {
        self.wallet_balance
    }
}

impl Sortable for Deposit {
    fn sort_timestamp(&self) -> i64 {
        self.created_ts_ms
    }

    fn sort_name(&self) -> &str {
        &self.account_id
    }

    fn sort_magnitude(&self) -> f64 {
        self.amount
    }
}

impl Sortable for TransactionRecord {
    fn sort_timestamp(&self) -> i64 {
        self.created_ts_ms
    }

    fn sort_name(&self) -> &str {
        &self.account_id
    }

    fn sort_magnitude(&self) -> f64 {
        self.amount
    }
}

impl Sortable for SpreadProfile {
    fn sort_timestamp(&self) -> i64 {
        self.updated_ts_ms
    }

    fn sort_name(&self) -> &str {
        &self.name
    }

    fn sort_magnitude(&self) -> f64 {
        self.average_spread.unwrap_or(0.0)
    }
}

impl Sortable for Admin {
    fn sort_timestamp(&self) -> i64 {
        0
    }

    fn sort_name(&self) -> &str {
        &self.name
    }

    fn sort_magnitude(&self) -> f64 {
        0.0
    }
}
