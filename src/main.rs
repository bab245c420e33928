//! Backoffice console report — entry point
//!
//! Orchestrates:
//! 1. Config + logging initialization
//! 2. Raw snapshot loading from disk
//! 3. One full derivation pass per cycle (map, summarize, filter, sort)
//! 4. Plain-text report to stdout, one shot or a watch loop
//!
//! In watch mode a failed cycle keeps the previous output: the error is
//! logged and the loop retries on the next tick. Stop with Ctrl-C.

use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use tracing::{info, warn};

use backoffice::bin_utils::boot;
use backoffice::config::AppConfig;
use backoffice::core::{
    Admin, Client, Deposit, DerivedView, ListQuery, SpreadProfile, TransactionRecord, ViewQuery,
    recompute,
};
use backoffice::error::Result;
use backoffice::ingest::RawSnapshot;

fn main() -> anyhow::Result<()> {
    // =========================================================================
    // 1. Config + logging
    // =========================================================================
    let cfg = boot();

    // Snapshot path: first CLI argument wins over the configured one
    let snapshot_path: PathBuf = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(&cfg.snapshot.path));

    info!(
        path = %snapshot_path.display(),
        watch = cfg.refresh.watch,
        page_size = cfg.lists.page_size,
        sort = %cfg.default_sort_key(),
        "=== Backoffice console report ==="
    );

    let query = build_query(&cfg);

    // =========================================================================
    // 2. Derivation cycles
    // =========================================================================
    if cfg.refresh.watch {
        loop {
            if let Err(e) = run_cycle(&snapshot_path, &query, &cfg) {
                warn!(error = %e, "Derivation failed, keeping previous output");
            }
            thread::sleep(Duration::from_secs(cfg.refresh.interval_secs));
        }
    }

    run_cycle(&snapshot_path, &query, &cfg)?;
    Ok(())
}

/// Same filters (none) and the configured sort for every list
fn build_query(cfg: &AppConfig) -> ViewQuery {
    let list = ListQuery {
        sort: cfg.default_sort_key(),
        ..ListQuery::default()
    };
    ViewQuery {
        clients: list.clone(),
        deposits: list.clone(),
        withdrawals: list.clone(),
        transactions: list.clone(),
        spread_profiles: list.clone(),
        admins: list,
    }
}

/// Read the snapshot file, derive the full view, print the report
fn run_cycle(path: &Path, query: &ViewQuery, cfg: &AppConfig) -> Result<()> {
    let raw = std::fs::read_to_string(path)?;
    let snapshot = RawSnapshot::from_json(&raw)?;
    let view = recompute(&snapshot, query)?;
    print_report(&view, cfg.lists.page_size);
    Ok(())
}

// =============================================================================
// Plain-text rendering
// =============================================================================

fn print_report(view: &DerivedView, page_size: usize) {
    print_summary(view);
    print_clients(&view.clients, page_size);
    print_deposits(&view.deposits, page_size);
    print_transactions("Withdrawals", &view.withdrawals, page_size);
    print_transactions("Transactions", &view.transactions, page_size);
    print_profiles(&view.spread_profiles, page_size);
    print_admins(&view.admins, page_size);
}

fn section(title: &str, shown: usize, total: usize) {
    println!();
    println!("== {} ({} of {}) ==", title, shown, total);
    if total == 0 {
        println!("(none)");
    }
}

fn print_summary(view: &DerivedView) {
    let s = &view.summary;
    println!();
    println!("== Dashboard ==");
    println!(
        "clients: {} (pending KYC: {})   active profiles: {}",
        s.client_count, s.pending_kyc, s.active_profiles
    );
    println!(
        "compliance: fully {} | partially {} | non {} | incomplete {}",
        s.compliance.fully_compliant,
        s.compliance.partially_compliant,
        s.compliance.non_compliant,
        s.compliance.incomplete
    );
    println!(
        "flows: deposits {:.2} ({}) | withdrawals {:.2} ({}) | net {:.2}",
        s.flows.deposit_total,
        s.flows.deposit_count,
        s.flows.withdrawal_total,
        s.flows.withdrawal_count,
        s.flows.net()
    );
    println!("total wallet balance: {:.2}", s.total_wallet_balance);
}

fn print_clients(clients: &[Client], page_size: usize) {
    let shown = clients.len().min(page_size);
    section("Clients", shown, clients.len());
    for client in clients.iter().take(page_size) {
        println!(
            "{:<12} {:<24.24} {:<10} {:<20} {:>12.2}  {}",
            client.account_id,
            client.name,
            client.kyc_status.as_str(),
            client.compliance_tier.as_str(),
            client.wallet_balance,
            client.registration_date
        );
    }
}

fn print_deposits(deposits: &[Deposit], page_size: usize) {
    let shown = deposits.len().min(page_size);
    section("Deposits", shown, deposits.len());
    for deposit in deposits.iter().take(page_size) {
        println!(
            "{:<12} {:<12} {:<14} {:<10} {:>12.2}  {:<12} {}",
            deposit.id,
            deposit.account_id,
            deposit.method.as_str(),
            deposit.status.as_str(),
            deposit.amount,
            deposit.date,
            deposit.reference.as_deref().unwrap_or("-")
        );
    }
}

fn print_transactions(title: &str, records: &[TransactionRecord], page_size: usize) {
    let shown = records.len().min(page_size);
    section(title, shown, records.len());
    for record in records.iter().take(page_size) {
        println!(
            "{:<12} {:<12} {:<11} {:<14} {:<10} {:>12.2}  {}",
            record.id,
            record.account_id,
            record.kind.as_str(),
            record.method.as_str(),
            record.status.as_str(),
            record.amount,
            record.date
        );
    }
}

fn print_profiles(profiles: &[SpreadProfile], page_size: usize) {
    let shown = profiles.len().min(page_size);
    section("Spread profiles", shown, profiles.len());
    for profile in profiles.iter().take(page_size) {
        let average = profile
            .average_spread
            .map(|avg| format!("{:.2}", avg))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<12} {:<20.20} {:<9} pairs: {:<3} avg: {:<8} updated: {}",
            profile.id,
            profile.name,
            profile.status.as_str(),
            profile.pairs.len(),
            average,
            profile.updated_at
        );
    }
}

fn print_admins(admins: &[Admin], page_size: usize) {
    let shown = admins.len().min(page_size);
    section("Admins", shown, admins.len());
    for admin in admins.iter().take(page_size) {
        println!(
            "{:<12} {:<24.24} {:<16} {}",
            admin.id,
            admin.name,
            admin.role,
            admin.status.as_str()
        );
    }
}
