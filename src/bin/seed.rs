//! Snapshot Fixture Generator
//!
//! Writes a randomized raw snapshot JSON file shaped like the upstream
//! feed, including the feed's quirks: numbers arriving as strings, the
//! odd `"N/A"` amount, unknown status labels, and missing optional
//! blocks. Every record keeps its identity field, so the generated file
//! always derives cleanly.
//!
//! Usage:
//! ```bash
//! cargo run --bin seed                          # ./snapshot.json, 25 clients
//! cargo run --bin seed -- fixtures.json 100     # custom path and size
//! ```
//!
//! # Logging
//! - Uses LOG_FORMAT env var: `json` (default) or `pretty`

use chrono::SecondsFormat;
use rand::rngs::ThreadRng;
use rand::Rng;
use serde_json::{json, Value};
use tracing::info;

use backoffice::bin_utils::boot_minimal;

const DEFAULT_OUTPUT: &str = "snapshot.json";
const DEFAULT_CLIENTS: usize = 25;

/// 2024-01-01T00:00:00Z, the start of the generated activity window
const BASE_TS_MS: i64 = 1_704_067_200_000;
const WINDOW_MS: i64 = 365 * 24 * 3600 * 1000;

const FIRST_NAMES: &[&str] = &[
    "Aarav", "Bianca", "Chen", "Diego", "Elena", "Farid", "Grace", "Hiro", "Isla", "Jonas",
    "Kavya", "Liam", "Mei", "Noor", "Omar", "Priya", "Quinn", "Rosa", "Sanjay", "Tara",
];
const LAST_NAMES: &[&str] = &[
    "Almeida", "Brandt", "Costa", "Dubois", "Eriksen", "Fischer", "Gupta", "Haddad", "Ivanov",
    "Joshi", "Khan", "Lindqvist", "Mehta", "Nakamura", "Okafor", "Petrov", "Rao", "Silva",
];
const BANKS: &[&str] = &["HDFC", "ICICI", "SBI", "Axis", "Kotak"];
const CURRENCY_PAIRS: &[&str] = &[
    "EUR/USD", "GBP/USD", "USD/JPY", "AUD/USD", "USD/CAD", "XAU/USD", "BTC/USD",
];
const PROFILE_NAMES: &[&str] = &["Standard", "Premium", "Scalper", "Institutional", "Promo"];
const ADMIN_ROLES: &[&str] = &["SUPER_ADMIN", "SUPPORT", "OPS"];

fn main() -> anyhow::Result<()> {
    boot_minimal();

    let output = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_OUTPUT.to_string());
    let client_count: usize = std::env::args()
        .nth(2)
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(DEFAULT_CLIENTS);
    let transaction_count = client_count * 3;
    let profile_count = (client_count / 8).max(2);

    let mut rng = rand::thread_rng();

    let snapshot = json!({
        "clients": (0..client_count)
            .map(|i| client_record(&mut rng, i))
            .collect::<Vec<_>>(),
        "transactions": (0..transaction_count)
            .map(|i| transaction_record(&mut rng, i, client_count))
            .collect::<Vec<_>>(),
        "spreadProfiles": (0..profile_count)
            .map(|i| profile_record(&mut rng, i))
            .collect::<Vec<_>>(),
        "admins": admin_records(&mut rng),
    });

    std::fs::write(&output, serde_json::to_string_pretty(&snapshot)?)?;

    info!(
        path = %output,
        clients = client_count,
        transactions = transaction_count,
        spread_profiles = profile_count,
        "Snapshot fixture written"
    );
    Ok(())
}

// =============================================================================
// Record builders
// =============================================================================

fn client_record(rng: &mut ThreadRng, index: usize) -> Value {
    let first = pick(rng, FIRST_NAMES);
    let last = pick(rng, LAST_NAMES);
    let kyc_status = if rng.gen_bool(0.08) {
        pick(rng, &["VERIFIED", "IN_REVIEW", ""])
    } else {
        pick(rng, &["APPROVED", "PENDING", "REJECTED"])
    };

    let mut record = json!({
        "accountId": format!("ACC-{:04}", 1000 + index),
        "name": format!("{} {}", first, last),
        "email": format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
        "kycStatus": kyc_status,
        "walletBalance": money(rng, 50_000.0),
        "linkedTradingAccounts": rng.gen_range(0..4),
        "registrationDate": iso_timestamp(rng),
        "totalDeposits": money(rng, 80_000.0),
        "totalWithdrawals": money(rng, 40_000.0),
        "profit": format!("{:.2}", rng.gen_range(-5_000.0..15_000.0)),
    });

    // A quarter of clients never started document upload
    if rng.gen_bool(0.75) {
        record["kycDocuments"] = json!({
            "idFront": document_status(rng),
            "idBack": document_status(rng),
            "selfie": document_status(rng),
            "proofOfAddress": document_status(rng),
        });
    }
    record
}

fn transaction_record(rng: &mut ThreadRng, index: usize, client_count: usize) -> Value {
    let kind = if rng.gen_bool(0.04) {
        "ADJUSTMENT"
    } else if rng.gen_bool(0.6) {
        "DEPOSIT"
    } else {
        pick(rng, &["WITHDRAW", "WITHDRAWAL"])
    };
    let status = if rng.gen_bool(0.06) {
        pick(rng, &["SETTLED", "ON_HOLD"])
    } else {
        pick(rng, &["APPROVED", "PENDING", "REJECTED"])
    };
    let mode = if rng.gen_bool(0.05) {
        "WALLET"
    } else {
        pick(rng, &["UPI", "BANK", "CRYPTO"])
    };

    let mut record = json!({
        "id": format!("TXN-{:04}", 1 + index),
        "accountId": format!("ACC-{:04}", 1000 + rng.gen_range(0..client_count.max(1))),
        "transactionType": kind,
        "transactionStatus": status,
        "mode": mode,
        "amount": money(rng, 10_000.0),
        "createdAt": iso_timestamp(rng),
    });

    match mode {
        "UPI" => record["utrNo"] = json!(format!("UTR{:010}", rng.gen_range(0u64..10_000_000_000))),
        "BANK" => record["bankName"] = json!(pick(rng, BANKS)),
        "CRYPTO" => record["cryptoAddress"] = json!(format!("0x{:040x}", rng.gen::<u128>())),
        _ => {}
    }
    if status == "REJECTED" {
        record["rejectionReason"] =
            json!(pick(rng, &["Document mismatch", "Limit exceeded", "Manual review"]));
    }
    record
}

fn profile_record(rng: &mut ThreadRng, index: usize) -> Value {
    let pair_count = rng.gen_range(1..=4);
    let pairs: Vec<Value> = (0..pair_count)
        .map(|_| {
            let pips: Value = if rng.gen_bool(0.05) {
                json!("wide")
            } else {
                json!(format!("{:.1}", rng.gen_range(0.5..3.0)))
            };
            json!({"currencyPair": pick(rng, CURRENCY_PAIRS), "spreadPips": pips})
        })
        .collect();

    let mut record = json!({
        "id": format!("SPR-{:02}", 1 + index),
        "name": format!("{} {}", pick(rng, PROFILE_NAMES), 1 + index),
        "description": "Auto-generated pricing tier",
        "spreadPairs": pairs,
        "createdAt": iso_timestamp(rng),
    });

    // Some profiles predate the isActive flag; some were never edited
    if rng.gen_bool(0.9) {
        record["isActive"] = json!(rng.gen_bool(0.7));
    }
    if rng.gen_bool(0.6) {
        record["updatedAt"] = json!(iso_timestamp(rng));
    }
    record
}

fn admin_records(rng: &mut ThreadRng) -> Vec<Value> {
    (0..3)
        .map(|i| {
            let name = format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES));
            let status = if i == 0 {
                "active"
            } else {
                pick(rng, &["active", "inactive", "suspended"])
            };
            json!({
                "id": format!("ADM-{:02}", 1 + i),
                "name": name,
                "email": format!("admin{}@example.com", 1 + i),
                "role": ADMIN_ROLES[i % ADMIN_ROLES.len()],
                "status": status,
            })
        })
        .collect()
}

// =============================================================================
// Value helpers
// =============================================================================

fn pick<'a>(rng: &mut ThreadRng, items: &[&'a str]) -> &'a str {
    items[rng.gen_range(0..items.len())]
}

/// Amount the way the feed sends them: usually a string, sometimes a bare
/// number, occasionally junk
fn money(rng: &mut ThreadRng, max: f64) -> Value {
    let amount = rng.gen_range(0.0..max);
    if rng.gen_bool(0.08) {
        json!("N/A")
    } else if rng.gen_bool(0.15) {
        json!((amount * 100.0).round() / 100.0)
    } else {
        json!(format!("{:.2}", amount))
    }
}

fn document_status(rng: &mut ThreadRng) -> &'static str {
    if rng.gen_bool(0.05) {
        "UPLOADED"
    } else {
        pick(rng, &["APPROVED", "APPROVED", "PENDING", "REJECTED"])
    }
}

fn iso_timestamp(rng: &mut ThreadRng) -> String {
    let ts = BASE_TS_MS + rng.gen_range(0..WINDOW_MS);
    chrono::DateTime::from_timestamp_millis(ts)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_else(|| "2024-01-01T00:00:00Z".to_string())
}
