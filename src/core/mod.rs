//! Core module - status normalization, derivation rules, and the
//! filter/sort/aggregate machinery behind every console list
//!
//! # Module Architecture
//!
//! This module uses **explicit re-exports** instead of glob exports
//! (`pub use module::*`) to provide better API visibility and prevent
//! accidental public API changes.
//!
//! ## Usage
//! Prefer importing from `crate::core`:
//! ```ignore
//! use backoffice::core::{FilterState, SortKey, recompute};
//! ```

pub mod compliance;
pub mod filter;
pub mod sort;
pub mod status;
pub mod summary;
pub mod types;
pub mod view;

// Explicit re-exports for the status vocabularies
pub use status::{
    AccountStatus, KycStatus, LedgerStatus, PaymentMethod, ProfileStatus, TransactionKind,
    TransactionStatus,
};

// Explicit re-exports for compliance derivation
pub use compliance::{ComplianceTier, KycDocuments, REQUIRED_DOCUMENTS};

// Explicit re-exports for the canonical records
pub use types::{Admin, Client, Deposit, SpreadPair, SpreadProfile, TransactionRecord};

// Explicit re-exports for the filter engine
pub use filter::{CategoryFilter, FilterState, Filterable, apply_all, parse_filter_date};

// Explicit re-exports for the sort comparator
pub use sort::{SortKey, Sortable, compare, sort_records};

// Explicit re-exports for aggregation
pub use summary::{
    ComplianceBreakdown, DashboardSummary, FlowTotals, average_spread, compliance_breakdown,
    dashboard_summary, flow_totals,
};

// Explicit re-exports for view assembly
pub use view::{DerivedView, ListQuery, ViewQuery, recompute, select};
