//! Compliance tier derivation from KYC document sets
//!
//! A client submits four documents (ID front, ID back, selfie, proof of
//! address). The tier is a pure function of how many of those are approved:
//!
//! - all 4 approved        -> fully-compliant
//! - 2 or 3 approved       -> partially-compliant
//! - 0 or 1 approved       -> non-compliant
//! - no document set       -> incomplete
//!
//! The tier is recomputed for every document set it is applied to and is
//! never read from the backend.

use serde::{Deserialize, Serialize};

use crate::core::status::KycStatus;

/// Number of KYC documents a complete submission carries
pub const REQUIRED_DOCUMENTS: usize = 4;

/// Normalized per-document verification states for one client
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct KycDocuments {
    pub id_front: KycStatus,
    pub id_back: KycStatus,
    pub selfie: KycStatus,
    pub proof_of_address: KycStatus,
}

impl KycDocuments {
    pub fn statuses(&self) -> [KycStatus; REQUIRED_DOCUMENTS] {
        [self.id_front, self.id_back, self.selfie, self.proof_of_address]
    }

    /// How many of the four documents are approved
    pub fn approved_count(&self) -> usize {
        self.statuses()
            .iter()
            .filter(|status| **status == KycStatus::Approved)
            .count()
    }
}

/// Derived classification of a client's document-verification completeness
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ComplianceTier {
    FullyCompliant,
    PartiallyCompliant,
    NonCompliant,
    Incomplete,
}

impl ComplianceTier {
    pub const ALL: [ComplianceTier; 4] = [
        ComplianceTier::FullyCompliant,
        ComplianceTier::PartiallyCompliant,
        ComplianceTier::NonCompliant,
        ComplianceTier::Incomplete,
    ];

    /// Derive the tier for one document set. The full-approval check runs
    /// before the partial count; the count ranges partition exhaustively,
    /// so no input reaches two tiers.
    pub fn evaluate(documents: Option<&KycDocuments>) -> Self {
        let docs = match documents {
            Some(docs) => docs,
            None => return ComplianceTier::Incomplete,
        };
        match docs.approved_count() {
            REQUIRED_DOCUMENTS => ComplianceTier::FullyCompliant,
            2 | 3 => ComplianceTier::PartiallyCompliant,
            _ => ComplianceTier::NonCompliant,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ComplianceTier::FullyCompliant => "fully-compliant",
            ComplianceTier::PartiallyCompliant => "partially-compliant",
            ComplianceTier::NonCompliant => "non-compliant",
            ComplianceTier::Incomplete => "incomplete",
        }
    }
}

impl std::fmt::Display for ComplianceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(statuses: [KycStatus; 4]) -> KycDocuments {
        KycDocuments {
            id_front: statuses[0],
            id_back: statuses[1],
            selfie: statuses[2],
            proof_of_address: statuses[3],
        }
    }

    #[test]
    fn test_four_approved_is_fully_compliant() {
        let d = docs([KycStatus::Approved; 4]);
        assert_eq!(
            ComplianceTier::evaluate(Some(&d)),
            ComplianceTier::FullyCompliant
        );
    }

    #[test]
    fn test_three_approved_is_partially_compliant() {
        let d = docs([
            KycStatus::Approved,
            KycStatus::Approved,
            KycStatus::Approved,
            KycStatus::Pending,
        ]);
        assert_eq!(
            ComplianceTier::evaluate(Some(&d)),
            ComplianceTier::PartiallyCompliant
        );
    }

    #[test]
    fn test_two_approved_is_partially_compliant() {
        let d = docs([
            KycStatus::Approved,
            KycStatus::Approved,
            KycStatus::Rejected,
            KycStatus::Rejected,
        ]);
        assert_eq!(
            ComplianceTier::evaluate(Some(&d)),
            ComplianceTier::PartiallyCompliant
        );
    }

    #[test]
    fn test_one_approved_is_non_compliant() {
        let d = docs([
            KycStatus::Approved,
            KycStatus::Pending,
            KycStatus::Pending,
            KycStatus::Rejected,
        ]);
        assert_eq!(
            ComplianceTier::evaluate(Some(&d)),
            ComplianceTier::NonCompliant
        );
    }

    #[test]
    fn test_zero_approved_is_non_compliant() {
        let d = docs([KycStatus::Rejected; 4]);
        assert_eq!(
            ComplianceTier::evaluate(Some(&d)),
            ComplianceTier::NonCompliant
        );
    }

    #[test]
    fn test_absent_documents_is_incomplete() {
        assert_eq!(ComplianceTier::evaluate(None), ComplianceTier::Incomplete);
    }

    #[test]
    fn test_tier_is_per_document_set() {
        let full = docs([KycStatus::Approved; 4]);
        let none = docs([KycStatus::Pending; 4]);
        // Same evaluator, different sets: no state leaks between calls
        assert_eq!(
            ComplianceTier::evaluate(Some(&full)),
            ComplianceTier::FullyCompliant
        );
        assert_eq!(
            ComplianceTier::evaluate(Some(&none)),
            ComplianceTier::NonCompliant
        );
        assert_eq!(
            ComplianceTier::evaluate(Some(&full)),
            ComplianceTier::FullyCompliant
        );
    }

    #[test]
    fn test_serde_labels() {
        assert_eq!(
            serde_json::to_string(&ComplianceTier::FullyCompliant).unwrap(),
            "\"fully-compliant\""
        );
        assert_eq!(
            serde_json::to_string(&ComplianceTier::Incomplete).unwrap(),
            "\"incomplete\""
        );
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn any_status() -> impl Strategy<Value = KycStatus> {
            prop_oneof![
                Just(KycStatus::Pending),
                Just(KycStatus::Approved),
                Just(KycStatus::Rejected),
            ]
        }

        proptest! {
            /// The approved count alone decides the tier, and the count
            /// ranges partition exhaustively.
            #[test]
            fn tier_matches_approved_count(
                statuses in prop::array::uniform4(any_status())
            ) {
                let d = docs(statuses);
                let expected = match d.approved_count() {
                    4 => ComplianceTier::FullyCompliant,
                    2 | 3 => ComplianceTier::PartiallyCompliant,
                    _ => ComplianceTier::NonCompliant,
                };
                prop_assert_eq!(ComplianceTier::evaluate(Some(&d)), expected);
            }

            /// Document order within the set never changes the tier.
            #[test]
            fn tier_ignores_document_order(
                statuses in prop::array::uniform4(any_status())
            ) {
                let d = docs(statuses);
                let rotated = docs([statuses[3], statuses[0], statuses[1], statuses[2]]);
                prop_assert_eq!(
                    ComplianceTier::evaluate(Some(&d)),
                    ComplianceTier::evaluate(Some(&rotated))
                );
            }
        }
    }
}
