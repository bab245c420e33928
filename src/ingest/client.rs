//! Client record mapping
//!
//! Raw shape from the clients endpoint: camelCase keys, numerics that
//! arrive as strings or numbers, and an optional nested KYC document set.
//! Everything except `accountId` is optional; the mapper resolves absent
//! fields to defaults and derives the compliance tier on the way through.

use serde::Deserialize;

use crate::core::compliance::{ComplianceTier, KycDocuments};
use crate::core::status::KycStatus;
use crate::core::types::Client;
use crate::ingest::errors::MappingResult;
use crate::ingest::fields::{self, RawNumber};

/// Raw KYC document set exactly as the backend sends it
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawKycDocuments {
    pub id_front: Option<String>,
    pub id_back: Option<String>,
    pub selfie: Option<String>,
    pub proof_of_address: Option<String>,
}

impl RawKycDocuments {
    /// Normalize the four sub-statuses; absent documents read as pending
    pub fn normalize(&self) -> KycDocuments {
        KycDocuments {
            id_front: KycStatus::from_raw(self.id_front.as_deref()),
            id_back: KycStatus::from_raw(self.id_back.as_deref()),
            selfie: KycStatus::from_raw(self.selfie.as_deref()),
            proof_of_address: KycStatus::from_raw(self.proof_of_address.as_deref()),
        }
    }
}

/// Raw client payload from the clients endpoint
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawClient {
    pub account_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub kyc_status: Option<String>,
    /// Arrives as `"1500.50"` or `1500.5` depending on the backend path
    pub wallet_balance: Option<RawNumber>,
    pub linked_trading_accounts: Option<RawNumber>,
    pub registration_date: Option<String>,
    pub kyc_documents: Option<RawKycDocuments>,
    pub total_deposits: Option<RawNumber>,
    pub total_withdrawals: Option<RawNumber>,
    pub profit: Option<RawNumber>,
}

/// Map one raw client to its canonical record.
///
/// Only a missing `accountId` fails. The compliance tier is derived from
/// the document set here and never trusted from the payload.
pub fn map_client(raw: &RawClient) -> MappingResult<Client> {
    let account_id = fields::require_text(raw.account_id.as_deref(), "client", "accountId")?;
    let documents = raw.kyc_documents.as_ref().map(RawKycDocuments::normalize);
    let compliance_tier = ComplianceTier::evaluate(documents.as_ref());

    Ok(Client {
        account_id,
        name: fields::text_or_empty(raw.name.as_deref()),
        email: fields::text_or_empty(raw.email.as_deref()),
        kyc_status: KycStatus::from_raw(raw.kyc_status.as_deref()),
        wallet_balance: fields::coerce_signed(raw.wallet_balance.as_ref()),
        linked_accounts: fields::coerce_count(raw.linked_trading_accounts.as_ref()),
        registration_date: fields::text_or_empty(raw.registration_date.as_deref()),
        registered_ts_ms: fields::timestamp_ms(raw.registration_date.as_deref()),
        compliance_tier,
        documents,
        total_deposits: fields::coerce_amount(raw.total_deposits.as_ref()),
        total_withdrawals: fields::coerce_amount(raw.total_withdrawals.as_ref()),
        profit: fields::coerce_signed(raw.profit.as_ref()),
    })
}
