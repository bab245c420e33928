//! Record mapper error types
//!
//! Mapping is deliberately forgiving: malformed numerics, unknown status
//! values and missing optional fields all resolve to defined defaults and
//! never surface here. The only structural defect a raw record can have is
//! a missing (or blank) identity field, which is what this enum expresses.

use thiserror::Error;

/// Structural failures raised while mapping raw backend records
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// A required identity field was absent or blank
    #[error("{domain} record is missing required field `{field}`")]
    MissingField {
        domain: &'static str,
        field: &'static str,
    },
}

/// Result type alias for mapping operations
pub type MappingResult<T> = std::result::Result<T, MappingError>;
