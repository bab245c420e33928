//! Canonical status vocabularies and their normalization tables
//!
//! Every status-like field the backend sends is folded into one of the small
//! enums below. Each enum owns:
//! - an explicit mapping table (`from_raw`) that matches known raw values
//!   case-insensitively after trimming,
//! - a named `FALLBACK` constant that unknown, empty or missing input
//!   resolves to. There is no silent catch-all: an unrecognized non-blank
//!   value is logged before falling back.
//!
//! Normalization is total and idempotent: it never fails, and feeding a
//! canonical label back through `from_raw` returns the same variant.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

// ============================================================================
// KYC / document status
// ============================================================================

/// Verification state of a client or a single KYC document
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum KycStatus {
    Pending,
    Approved,
    Rejected,
}

impl KycStatus {
    /// Unknown or missing input stays under review rather than gaining
    /// or losing verification.
    pub const FALLBACK: Self = KycStatus::Pending;

    pub fn from_raw(raw: Option<&str>) -> Self {
        let trimmed = raw.map(str::trim).unwrap_or("");
        if trimmed.is_empty() {
            return Self::FALLBACK;
        }
        match trimmed.to_ascii_uppercase().as_str() {
            "PENDING" => KycStatus::Pending,
            "APPROVED" => KycStatus::Approved,
            "REJECTED" => KycStatus::Rejected,
            _ => {
                debug!(status = trimmed, "unrecognized KYC status, using fallback");
                Self::FALLBACK
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            KycStatus::Pending => "pending",
            KycStatus::Approved => "approved",
            KycStatus::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for KycStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Transaction status (deposit / withdrawal screens)
// ============================================================================

/// Settlement state of a transaction as the deposit screens label it
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Approved,
    Rejected,
}

impl TransactionStatus {
    /// Matches the consuming screens: anything that is not explicitly
    /// pending or approved renders as rejected. Unknown values are logged
    /// at warn level so a backend vocabulary change shows up in logs.
    pub const FALLBACK: Self = TransactionStatus::Rejected;

    pub fn from_raw(raw: Option<&str>) -> Self {
        let trimmed = raw.map(str::trim).unwrap_or("");
        if trimmed.is_empty() {
            return Self::FALLBACK;
        }
        match trimmed.to_ascii_uppercase().as_str() {
            "PENDING" => TransactionStatus::Pending,
            "APPROVED" => TransactionStatus::Approved,
            "REJECTED" => TransactionStatus::Rejected,
            _ => {
                warn!(
                    status = trimmed,
                    "unrecognized transaction status, using fallback"
                );
                Self::FALLBACK
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "pending",
            TransactionStatus::Approved => "approved",
            TransactionStatus::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Ledger status (transaction-history screen)
// ============================================================================

/// Settlement state as the full-history screen labels it: an approved
/// transaction reads `completed` there.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LedgerStatus {
    Pending,
    Completed,
    Rejected,
}

impl LedgerStatus {
    pub const FALLBACK: Self = LedgerStatus::Rejected;

    pub fn from_raw(raw: Option<&str>) -> Self {
        let trimmed = raw.map(str::trim).unwrap_or("");
        if trimmed.is_empty() {
            return Self::FALLBACK;
        }
        match trimmed.to_ascii_uppercase().as_str() {
            "PENDING" => LedgerStatus::Pending,
            "APPROVED" | "COMPLETED" => LedgerStatus::Completed,
            "REJECTED" => LedgerStatus::Rejected,
            _ => {
                warn!(
                    status = trimmed,
                    "unrecognized ledger status, using fallback"
                );
                Self::FALLBACK
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LedgerStatus::Pending => "pending",
            LedgerStatus::Completed => "completed",
            LedgerStatus::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for LedgerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<TransactionStatus> for LedgerStatus {
    fn from(status: TransactionStatus) -> Self {
        match status {
            TransactionStatus::Pending => LedgerStatus::Pending,
            TransactionStatus::Approved => LedgerStatus::Completed,
            TransactionStatus::Rejected => LedgerStatus::Rejected,
        }
    }
}

// ============================================================================
// Payment method
// ============================================================================

/// Payment rail a transaction moved over
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    Upi,
    BankTransfer,
    Crypto,
}

impl PaymentMethod {
    /// Bank transfer is the broadest rail and the named default for
    /// anything the table does not recognize.
    pub const FALLBACK: Self = PaymentMethod::BankTransfer;

    pub fn from_raw(raw: Option<&str>) -> Self {
        let trimmed = raw.map(str::trim).unwrap_or("");
        if trimmed.is_empty() {
            return Self::FALLBACK;
        }
        match trimmed.to_ascii_uppercase().as_str() {
            "UPI" => PaymentMethod::Upi,
            "CRYPTO" => PaymentMethod::Crypto,
            "BANK" | "BANK_TRANSFER" | "BANK-TRANSFER" => PaymentMethod::BankTransfer,
            _ => {
                debug!(mode = trimmed, "unrecognized payment mode, using fallback");
                Self::FALLBACK
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Upi => "upi",
            PaymentMethod::BankTransfer => "bank-transfer",
            PaymentMethod::Crypto => "crypto",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Transaction kind
// ============================================================================

/// Direction of a money movement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    /// The consuming screens branch on "is this a deposit"; everything
    /// else lands on the withdrawal side of that branch.
    pub const FALLBACK: Self = TransactionKind::Withdrawal;

    pub fn from_raw(raw: Option<&str>) -> Self {
        let trimmed = raw.map(str::trim).unwrap_or("");
        if trimmed.is_empty() {
            return Self::FALLBACK;
        }
        match trimmed.to_ascii_uppercase().as_str() {
            "DEPOSIT" => TransactionKind::Deposit,
            "WITHDRAW" | "WITHDRAWAL" => TransactionKind::Withdrawal,
            _ => {
                debug!(
                    kind = trimmed,
                    "unrecognized transaction type, using fallback"
                );
                Self::FALLBACK
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdrawal => "withdrawal",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Account / admin status
// ============================================================================

/// Access state of a staff or trading account
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Disabled,
}

impl AccountStatus {
    /// Least-privileged state: an unrecognized account status must not
    /// silently grant access.
    pub const FALLBACK: Self = AccountStatus::Disabled;

    pub fn from_raw(raw: Option<&str>) -> Self {
        let trimmed = raw.map(str::trim).unwrap_or("");
        if trimmed.is_empty() {
            return Self::FALLBACK;
        }
        match trimmed.to_ascii_uppercase().as_str() {
            "ACTIVE" => AccountStatus::Active,
            "DISABLED" => AccountStatus::Disabled,
            _ => {
                warn!(status = trimmed, "unrecognized account status, using fallback");
                Self::FALLBACK
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "active",
            AccountStatus::Disabled => "disabled",
        }
    }
}

impl std::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Spread profile status
// ============================================================================

/// Display state of a spread profile, derived from the raw `isActive` flag
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ProfileStatus {
    Active,
    Inactive,
}

impl ProfileStatus {
    /// A profile that does not say it is active is treated as inactive.
    pub fn from_flag(flag: Option<bool>) -> Self {
        match flag {
            Some(true) => ProfileStatus::Active,
            _ => ProfileStatus::Inactive,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileStatus::Active => "Active",
            ProfileStatus::Inactive => "Inactive",
        }
    }
}

impl std::fmt::Display for ProfileStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kyc_status_known_values() {
        assert_eq!(KycStatus::from_raw(Some("PENDING")), KycStatus::Pending);
        assert_eq!(KycStatus::from_raw(Some("APPROVED")), KycStatus::Approved);
        assert_eq!(KycStatus::from_raw(Some("REJECTED")), KycStatus::Rejected);
        // Case-insensitive after trim
        assert_eq!(KycStatus::from_raw(Some("  approved ")), KycStatus::Approved);
        assert_eq!(KycStatus::from_raw(Some("Rejected")), KycStatus::Rejected);
    }

    #[test]
    fn test_kyc_status_fallback_is_pending() {
        assert_eq!(KycStatus::from_raw(None), KycStatus::Pending);
        assert_eq!(KycStatus::from_raw(Some("")), KycStatus::Pending);
        assert_eq!(KycStatus::from_raw(Some("   ")), KycStatus::Pending);
        assert_eq!(KycStatus::from_raw(Some("IN_REVIEW")), KycStatus::Pending);
    }

    #[test]
    fn test_transaction_status_known_values() {
        assert_eq!(
            TransactionStatus::from_raw(Some("PENDING")),
            TransactionStatus::Pending
        );
        assert_eq!(
            TransactionStatus::from_raw(Some("APPROVED")),
            TransactionStatus::Approved
        );
        assert_eq!(
            TransactionStatus::from_raw(Some("REJECTED")),
            TransactionStatus::Rejected
        );
    }

    #[test]
    fn test_transaction_status_fallback_is_rejected() {
        assert_eq!(
            TransactionStatus::from_raw(Some("SETTLED")),
            TransactionStatus::Rejected
        );
        assert_eq!(
            TransactionStatus::from_raw(Some("ON_HOLD")),
            TransactionStatus::Rejected
        );
        assert_eq!(TransactionStatus::from_raw(None), TransactionStatus::Rejected);
    }

    #[test]
    fn test_ledger_status_relabels_approved_as_completed() {
        assert_eq!(
            LedgerStatus::from_raw(Some("APPROVED")),
            LedgerStatus::Completed
        );
        assert_eq!(
            LedgerStatus::from(TransactionStatus::Approved),
            LedgerStatus::Completed
        );
        assert_eq!(
            LedgerStatus::from(TransactionStatus::Pending),
            LedgerStatus::Pending
        );
        assert_eq!(
            LedgerStatus::from(TransactionStatus::Rejected),
            LedgerStatus::Rejected
        );
    }

    #[test]
    fn test_payment_method_table() {
        assert_eq!(PaymentMethod::from_raw(Some("UPI")), PaymentMethod::Upi);
        assert_eq!(PaymentMethod::from_raw(Some("CRYPTO")), PaymentMethod::Crypto);
        assert_eq!(
            PaymentMethod::from_raw(Some("BANK")),
            PaymentMethod::BankTransfer
        );
        // Unknown modes resolve to the named bank-transfer fallback
        assert_eq!(
            PaymentMethod::from_raw(Some("SWIFT")),
            PaymentMethod::BankTransfer
        );
        assert_eq!(PaymentMethod::from_raw(None), PaymentMethod::BankTransfer);
    }

    #[test]
    fn test_transaction_kind_table() {
        assert_eq!(
            TransactionKind::from_raw(Some("DEPOSIT")),
            TransactionKind::Deposit
        );
        assert_eq!(
            TransactionKind::from_raw(Some("WITHDRAW")),
            TransactionKind::Withdrawal
        );
        assert_eq!(
            TransactionKind::from_raw(Some("WITHDRAWAL")),
            TransactionKind::Withdrawal
        );
        assert_eq!(
            TransactionKind::from_raw(Some("TRANSFER")),
            TransactionKind::Withdrawal
        );
    }

    #[test]
    fn test_account_status_fallback_is_disabled() {
        assert_eq!(
            AccountStatus::from_raw(Some("active")),
            AccountStatus::Active
        );
        assert_eq!(
            AccountStatus::from_raw(Some("disabled")),
            AccountStatus::Disabled
        );
        // Least-privileged fallback: unknown states never grant access
        assert_eq!(
            AccountStatus::from_raw(Some("suspended")),
            AccountStatus::Disabled
        );
        assert_eq!(AccountStatus::from_raw(None), AccountStatus::Disabled);
    }

    #[test]
    fn test_profile_status_from_flag() {
        assert_eq!(ProfileStatus::from_flag(Some(true)), ProfileStatus::Active);
        assert_eq!(ProfileStatus::from_flag(Some(false)), ProfileStatus::Inactive);
        assert_eq!(ProfileStatus::from_flag(None), ProfileStatus::Inactive);
    }

    #[test]
    fn test_normalization_is_idempotent() {
        for status in [KycStatus::Pending, KycStatus::Approved, KycStatus::Rejected] {
            assert_eq!(KycStatus::from_raw(Some(status.as_str())), status);
        }
        for status in [
            TransactionStatus::Pending,
            TransactionStatus::Approved,
            TransactionStatus::Rejected,
        ] {
            assert_eq!(TransactionStatus::from_raw(Some(status.as_str())), status);
        }
        for status in [
            LedgerStatus::Pending,
            LedgerStatus::Completed,
            LedgerStatus::Rejected,
        ] {
            assert_eq!(LedgerStatus::from_raw(Some(status.as_str())), status);
        }
        for method in [
            PaymentMethod::Upi,
            PaymentMethod::BankTransfer,
            PaymentMethod::Crypto,
        ] {
            assert_eq!(PaymentMethod::from_raw(Some(method.as_str())), method);
        }
        for kind in [TransactionKind::Deposit, TransactionKind::Withdrawal] {
            assert_eq!(TransactionKind::from_raw(Some(kind.as_str())), kind);
        }
        for status in [AccountStatus::Active, AccountStatus::Disabled] {
            assert_eq!(AccountStatus::from_raw(Some(status.as_str())), status);
        }
    }

    #[test]
    fn test_serde_labels_match_display() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::BankTransfer).unwrap(),
            "\"bank-transfer\""
        );
        assert_eq!(
            serde_json::to_string(&LedgerStatus::Completed).unwrap(),
            "\"completed\""
        );
        assert_eq!(
            serde_json::to_string(&ProfileStatus::Active).unwrap(),
            "\"Active\""
        );
        assert_eq!(
            serde_json::to_string(&KycStatus::Pending).unwrap(),
            "\"pending\""
        );
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Normalization is total: arbitrary input never panics and
            /// always lands on a canonical variant.
            #[test]
            fn from_raw_never_panics(raw in ".*") {
                let _ = KycStatus::from_raw(Some(&raw));
                let _ = TransactionStatus::from_raw(Some(&raw));
                let _ = LedgerStatus::from_raw(Some(&raw));
                let _ = PaymentMethod::from_raw(Some(&raw));
                let _ = TransactionKind::from_raw(Some(&raw));
                let _ = AccountStatus::from_raw(Some(&raw));
            }

            /// Re-normalizing whatever `from_raw` produced is a no-op.
            #[test]
            fn from_raw_is_idempotent(raw in ".*") {
                let once = TransactionStatus::from_raw(Some(&raw));
                prop_assert_eq!(TransactionStatus::from_raw(Some(once.as_str())), once);

                let once = PaymentMethod::from_raw(Some(&raw));
                prop_assert_eq!(PaymentMethod::from_raw(Some(once.as_str())), once);

                let once = AccountStatus::from_raw(Some(&raw));
                prop_assert_eq!(AccountStatus::from_raw(Some(once.as_str())), once);
            }
        }
    }
}
