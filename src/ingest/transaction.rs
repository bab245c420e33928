//! Transaction record mapping
//!
//! One raw shape feeds three screens: the deposit-approval list, the
//! withdrawal list and the full history ledger. `map_deposit` labels the
//! record with the deposit status vocabulary; `map_record` produces the
//! ledger view, where an approved transaction reads `completed` and the
//! movement direction is kept as `kind`.

use serde::Deserialize;

use crate::core::status::{LedgerStatus, PaymentMethod, TransactionKind, TransactionStatus};
use crate::core::types::{Deposit, TransactionRecord};
use crate::ingest::errors::MappingResult;
use crate::ingest::fields::{self, RawNumber};

/// Raw transaction payload shared by the deposit, withdrawal and history
/// endpoints
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransaction {
    pub id: Option<String>,
    pub account_id: Option<String>,
    /// "DEPOSIT" or "WITHDRAW"; anything else classifies as a withdrawal
    pub transaction_type: Option<String>,
    pub transaction_status: Option<String>,
    /// Payment rail: "UPI", "CRYPTO", "BANK", ...
    pub mode: Option<String>,
    /// Decimal string (e.g. "150.50")
    pub amount: Option<RawNumber>,
    pub created_at: Option<String>,
    pub utr_no: Option<String>,
    pub bank_name: Option<String>,
    pub crypto_address: Option<String>,
    pub rejection_reason: Option<String>,
}

impl RawTransaction {
    /// Classify the movement direction of this record
    pub fn kind(&self) -> TransactionKind {
        TransactionKind::from_raw(self.transaction_type.as_deref())
    }
}

fn optional_text(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Map one raw transaction for the deposit-approval screen.
///
/// Only a missing `id` fails; method, status, amount and date all resolve
/// through the shared coercion rules.
pub fn map_deposit(raw: &RawTransaction) -> MappingResult<Deposit> {
    let id = fields::require_text(raw.id.as_deref(), "transaction", "id")?;
    let method = PaymentMethod::from_raw(raw.mode.as_deref());

    Ok(Deposit {
        id,
        account_id: fields::text_or_empty(raw.account_id.as_deref()),
        method,
        amount: fields::coerce_amount(raw.amount.as_ref()),
        status: TransactionStatus::from_raw(raw.transaction_status.as_deref()),
        date: fields::date_only(raw.created_at.as_deref()),
        created_ts_ms: fields::timestamp_ms(raw.created_at.as_deref()),
        reference: fields::payment_reference(
            method,
            raw.utr_no.as_deref(),
            raw.crypto_address.as_deref(),
            raw.bank_name.as_deref(),
        ),
        rejection_reason: optional_text(raw.rejection_reason.as_deref()),
    })
}

/// Map one raw transaction for the history ledger
pub fn map_record(raw: &RawTransaction) -> MappingResult<TransactionRecord> {
    let id = fields::require_text(raw.id.as_deref(), "transaction", "id")?;
    let method = PaymentMethod::from_raw(raw.mode.as_deref());

    Ok(TransactionRecord {
        id,
        account_id: fields::text_or_empty(raw.account_id.as_deref()),
        kind: raw.kind(),
        method,
        amount: fields::coerce_amount(raw.amount.as_ref()),
        status: LedgerStatus::from_raw(raw.transaction_status.as_deref()),
        date: fields::date_only(raw.created_at.as_deref()),
        created_ts_ms: fields::timestamp_ms(raw.created_at.as_deref()),
        reference: fields::payment_reference(
            method,
            raw.utr_no.as_deref(),
            raw.crypto_address.as_deref(),
            raw.bank_name.as_deref(),
        ),
        rejection_reason: optional_text(raw.rejection_reason.as_deref()),
    })
}
