//! Derived view assembly: the refresh boundary
//!
//! The caller owns when a refresh happens (poll timer, reconnect, manual
//! refresh); this module owns what a refresh does: map every raw record,
//! derive the dashboard summary over the full sets, then filter and sort
//! each list per the caller's query. The whole pass is synchronous and
//! pure apart from the stamped refresh id and timestamp.
//!
//! A structural mapping failure propagates untouched, so a caller can keep
//! showing its previous view instead of a half-derived one.

use std::time::Instant;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::core::filter::{FilterState, Filterable, apply_all};
use crate::core::sort::{SortKey, Sortable, sort_records};
use crate::core::status::TransactionKind;
use crate::core::summary::{dashboard_summary, DashboardSummary};
use crate::core::types::{Admin, Client, Deposit, SpreadProfile, TransactionRecord};
use crate::ingest::errors::MappingResult;
use crate::ingest::snapshot::RawSnapshot;
use crate::ingest::{admin, client, spread, transaction};

/// Filter and sort settings for one list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub filters: FilterState,
    #[serde(default)]
    pub sort: SortKey,
}

/// Per-list control state for one derivation pass
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewQuery {
    #[serde(default)]
    pub clients: ListQuery,
    #[serde(default)]
    pub deposits: ListQuery,
    #[serde(default)]
    pub withdrawals: ListQuery,
    #[serde(default)]
    pub transactions: ListQuery,
    #[serde(default)]
    pub spread_profiles: ListQuery,
    #[serde(default)]
    pub admins: ListQuery,
}

/// One fully derived console state
#[derive(Debug, Clone, Serialize)]
pub struct DerivedView {
    /// Correlation id stamped on this refresh cycle's log lines
    pub refresh_id: Uuid,
    pub generated_at_ms: i64,
    pub clients: Vec<Client>,
    /// Deposit-kind transactions in the deposit status vocabulary
    pub deposits: Vec<Deposit>,
    /// Withdrawal-kind transactions in the ledger vocabulary
    pub withdrawals: Vec<TransactionRecord>,
    /// The full movement history in the ledger vocabulary
    pub transactions: Vec<TransactionRecord>,
    pub spread_profiles: Vec<SpreadProfile>,
    pub admins: Vec<Admin>,
    /// Cards derived from the full sets, before any list filters
    pub summary: DashboardSummary,
}

/// Filter then sort one list under its query, leaving the input untouched
pub fn select<R>(records: &[R], query: &ListQuery) -> Vec<R>
where
    R: Filterable + Sortable + Clone,
{
    let mut selected = apply_all(records, &query.filters);
    sort_records(&mut selected, query.sort);
    selected
}

/// Derive a complete console view from one raw snapshot
pub fn recompute(snapshot: &RawSnapshot, query: &ViewQuery) -> MappingResult<DerivedView> {
    let refresh_id = Uuid::new_v4();
    let started = Instant::now();

    // Map everything first; a structural defect aborts the whole pass
    let clients: Vec<Client> = snapshot
        .clients
        .iter()
        .map(client::map_client)
        .collect::<MappingResult<_>>()?;
    let ledger: Vec<TransactionRecord> = snapshot
        .transactions
        .iter()
        .map(transaction::map_record)
        .collect::<MappingResult<_>>()?;
    let deposits: Vec<Deposit> = snapshot
        .transactions
        .iter()
        .filter(|raw| raw.kind() == TransactionKind::Deposit)
        .map(transaction::map_deposit)
        .collect::<MappingResult<_>>()?;
    let profiles: Vec<SpreadProfile> = snapshot
        .spread_profiles
        .iter()
        .map(spread::map_profile)
        .collect::<MappingResult<_>>()?;
    let admins: Vec<Admin> = snapshot
        .admins
        .iter()
        .map(admin::map_admin)
        .collect::<MappingResult<_>>()?;

    let withdrawals: Vec<TransactionRecord> = ledger
        .iter()
        .filter(|record| record.kind == TransactionKind::Withdrawal)
        .cloned()
        .collect();

    // Cards always reflect the unfiltered sets
    let summary = dashboard_summary(&clients, &ledger, &profiles);

    let view = DerivedView {
        refresh_id,
        generated_at_ms: Utc::now().timestamp_millis(),
        clients: select(&clients, &query.clients),
        deposits: select(&deposits, &query.deposits),
        withdrawals: select(&withdrawals, &query.withdrawals),
        transactions: select(&ledger, &query.transactions),
        spread_profiles: select(&profiles, &query.spread_profiles),
        admins: select(&admins, &query.admins),
        summary,
    };

    info!(
        refresh_id = %view.refresh_id,
        raw_records = snapshot.record_count(),
        clients_out = view.clients.len(),
        deposits_out = view.deposits.len(),
        withdrawals_out = view.withdrawals.len(),
        transactions_out = view.transactions.len(),
        profiles_out = view.spread_profiles.len(),
        admins_out = view.admins.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Derived view recomputed"
    );

    Ok(view)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_snapshot() -> RawSnapshot {
        RawSnapshot::from_json(
            r#"{
            "clients": [
                {
                    "accountId": "ACC-1",
                    "name": "Alice Carter",
                    "kycStatus": "APPROVED",
                    "walletBalance": "1000",
                    "registrationDate": "2024-01-15T10:30:00Z"
                },
                {
                    "accountId": "ACC-2",
                    "name": "bob stone",
                    "kycStatus": "PENDING",
                    "walletBalance": "250.5",
                    "registrationDate": "2024-02-01T09:00:00Z"
                }
            ],
            "transactions": [
                {
                    "id": "TXN-1",
                    "accountId": "ACC-1",
                    "transactionType": "DEPOSIT",
                    "transactionStatus": "APPROVED",
                    "mode": "UPI",
                    "amount": "150.5",
                    "createdAt": "2024-02-10T08:00:00Z",
                    "utrNo": "UTR-1"
                },
                {
                    "id": "TXN-2",
                    "accountId": "ACC-2",
                    "transactionType": "DEPOSIT",
                    "transactionStatus": "PENDING",
                    "mode": "BANK",
                    "amount": "75",
                    "createdAt": "2024-02-11T08:00:00Z",
                    "bankName": "HDFC"
                },
                {
                    "id": "TXN-3",
                    "accountId": "ACC-1",
                    "transactionType": "WITHDRAW",
                    "transactionStatus": "APPROVED",
                    "mode": "CRYPTO",
                    "amount": "40",
                    "createdAt": "2024-02-12T08:00:00Z",
                    "cryptoAddress": "0xabc"
                }
            ],
            "spreadProfiles": [
                {
                    "id": "SPR-1",
                    "name": "Standard",
                    "isActive": true,
                    "spreadPairs": [
                        {"currencyPair": "EUR/USD", "spreadPips": "1.2"},
                        {"currencyPair": "GBP/USD", "spreadPips": "1.8"}
                    ],
                    "createdAt": "2024-01-01T00:00:00Z"
                }
            ],
            "admins": [
                {"id": "ADM-1", "name": "Root", "role": "SUPER_ADMIN", "status": "active"}
            ]
        }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_default_query_derives_all_lists() {
        let view = recompute(&sample_snapshot(), &ViewQuery::default()).unwrap();
        assert_eq!(view.clients.len(), 2);
        assert_eq!(view.deposits.len(), 2);
        assert_eq!(view.withdrawals.len(), 1);
        assert_eq!(view.transactions.len(), 3);
        assert_eq!(view.spread_profiles.len(), 1);
        assert_eq!(view.admins.len(), 1);

        // Default sort is newest-first
        assert_eq!(view.transactions[0].id, "TXN-3");
        assert_eq!(view.deposits[0].id, "TXN-2");

        assert_eq!(view.summary.client_count, 2);
        assert_eq!(view.summary.flows.deposit_total, 225.5);
        assert_eq!(view.summary.flows.withdrawal_total, 40.0);
        assert_eq!(view.spread_profiles[0].average_spread, Some(1.5));
    }

    #[test]
    fn test_summary_ignores_list_filters() {
        let mut query = ViewQuery::default();
        query.clients.filters = FilterState::new().with_search("no such client");
        query.transactions.filters =
            FilterState::new().with_category("status", "pending");

        let view = recompute(&sample_snapshot(), &query).unwrap();
        assert!(view.clients.is_empty());
        assert_eq!(view.transactions.len(), 1);
        // Cards still reflect the full sets
        assert_eq!(view.summary.client_count, 2);
        assert_eq!(view.summary.flows.deposit_count, 2);
    }

    #[test]
    fn test_per_list_queries_are_independent() {
        let mut query = ViewQuery::default();
        query.clients.sort = SortKey::NameAsc;
        query.deposits.filters = FilterState::new().with_category("method", "upi");

        let view = recompute(&sample_snapshot(), &query).unwrap();
        // Case-insensitive name order: Alice before bob
        assert_eq!(view.clients[0].account_id, "ACC-1");
        assert_eq!(view.clients[1].account_id, "ACC-2");
        // Deposit filter did not touch the ledger list
        assert_eq!(view.deposits.len(), 1);
        assert_eq!(view.transactions.len(), 3);
    }

    #[test]
    fn test_structural_defect_aborts_the_pass() {
        let snapshot = RawSnapshot::from_json(
            r#"{"transactions": [{"transactionStatus": "PENDING"}]}"#,
        )
        .unwrap();
        assert!(recompute(&snapshot, &ViewQuery::default()).is_err());
    }

    #[test]
    fn test_recompute_is_deterministic_apart_from_stamps() {
        let snapshot = sample_snapshot();
        let query = ViewQuery::default();
        let a = recompute(&snapshot, &query).unwrap();
        let b = recompute(&snapshot, &query).unwrap();

        assert_ne!(a.refresh_id, b.refresh_id);
        assert_eq!(
            serde_json::to_value(&a.clients).unwrap(),
            serde_json::to_value(&b.clients).unwrap()
        );
        assert_eq!(
            serde_json::to_value(&a.transactions).unwrap(),
            serde_json::to_value(&b.transactions).unwrap()
        );
        assert_eq!(
            serde_json::to_value(&a.summary).unwrap(),
            serde_json::to_value(&b.summary).unwrap()
        );
    }
}
