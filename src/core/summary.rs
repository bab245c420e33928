//! Single-pass aggregates behind the dashboard cards
//!
//! Every function here folds once over the records it is given, reads them
//! immutably, and does not care about input order. Totals run over whatever
//! set the caller passes, so a pre-filtered list produces filtered totals.

use serde::{Deserialize, Serialize};

use crate::core::compliance::ComplianceTier;
use crate::core::status::{KycStatus, ProfileStatus, TransactionKind};
use crate::core::types::{Client, SpreadPair, SpreadProfile, TransactionRecord};

// =============================================================================
// Flow totals
// =============================================================================

/// Sum and count of money movements, partitioned by direction
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct FlowTotals {
    pub deposit_total: f64,
    pub deposit_count: usize,
    pub withdrawal_total: f64,
    pub withdrawal_count: usize,
}

impl FlowTotals {
    /// Net flow into client wallets; negative when withdrawals dominate
    pub fn net(&self) -> f64 {
        self.deposit_total - self.withdrawal_total
    }
}

/// One pass over a (possibly pre-filtered) transaction set
pub fn flow_totals(records: &[TransactionRecord]) -> FlowTotals {
    let mut totals = FlowTotals::default();
    for record in records {
        match record.kind {
            TransactionKind::Deposit => {
                totals.deposit_total += record.amount;
                totals.deposit_count += 1;
            }
            TransactionKind::Withdrawal => {
                totals.withdrawal_total += record.amount;
                totals.withdrawal_count += 1;
            }
        }
    }
    totals
}

// =============================================================================
// Compliance breakdown
// =============================================================================

/// Client counts per derived compliance tier
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComplianceBreakdown {
    pub fully_compliant: usize,
    pub partially_compliant: usize,
    pub non_compliant: usize,
    pub incomplete: usize,
}

impl ComplianceBreakdown {
    pub fn count_for(&self, tier: ComplianceTier) -> usize {
        match tier {
            ComplianceTier::FullyCompliant => self.fully_compliant,
            ComplianceTier::PartiallyCompliant => self.partially_compliant,
            ComplianceTier::NonCompliant => self.non_compliant,
            ComplianceTier::Incomplete => self.incomplete,
        }
    }

    pub fn total(&self) -> usize {
        self.fully_compliant + self.partially_compliant + self.non_compliant + self.incomplete
    }
}

pub fn compliance_breakdown(clients: &[Client]) -> ComplianceBreakdown {
    let mut breakdown = ComplianceBreakdown::default();
    for client in clients {
        match client.compliance_tier {
            ComplianceTier::FullyCompliant => breakdown.fully_compliant += 1,
            ComplianceTier::PartiallyCompliant => breakdown.partially_compliant += 1,
            ComplianceTier::NonCompliant => breakdown.non_compliant += 1,
            ComplianceTier::Incomplete => breakdown.incomplete += 1,
        }
    }
    breakdown
}

// =============================================================================
// Spread averages
// =============================================================================

/// Arithmetic mean of pips across a profile's pairs.
///
/// The empty-profile guard is explicit: no pairs means `None`, never a
/// division by zero or a NaN leaking into display code.
pub fn average_spread(pairs: &[SpreadPair]) -> Option<f64> {
    if pairs.is_empty() {
        return None;
    }
    let sum: f64 = pairs.iter().map(|pair| pair.pips).sum();
    Some(sum / pairs.len() as f64)
}

// =============================================================================
// Dashboard summary
// =============================================================================

/// The dashboard card numbers, derived from the full (unfiltered) sets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub client_count: usize,
    /// Clients whose overall KYC is still pending review
    pub pending_kyc: usize,
    pub compliance: ComplianceBreakdown,
    pub flows: FlowTotals,
    pub active_profiles: usize,
    pub total_wallet_balance: f64,
}

pub fn dashboard_summary(
    clients: &[Client],
    transactions: &[TransactionRecord],
    profiles: &[SpreadProfile],
) -> DashboardSummary {
    DashboardSummary {
        client_count: clients.len(),
        pending_kyc: clients
            .iter()
            .filter(|client| client.kyc_status == KycStatus::Pending)
            .count(),
        compliance: compliance_breakdown(clients),
        flows: flow_totals(transactions),
        active_profiles: profiles
            .iter()
            .filter(|profile| profile.status == ProfileStatus::Active)
            .count(),
        total_wallet_balance: clients.iter().map(|client| client.wallet_balance).sum(),
    }
}
