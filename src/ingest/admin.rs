//! Staff account mapping
//!
//! The admin management screen lists staff accounts with a role label and
//! an access status. The status normalizes through the least-privileged
//! fallback: an unrecognized state reads as disabled.

use serde::Deserialize;

use crate::core::status::AccountStatus;
use crate::core::types::Admin;
use crate::ingest::errors::MappingResult;
use crate::ingest::fields;

/// Raw staff account payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAdmin {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    /// Role label, e.g. "SUPER_ADMIN" or "SUPPORT"
    pub role: Option<String>,
    pub status: Option<String>,
}

/// Map one raw staff account; only a missing `id` fails
pub fn map_admin(raw: &RawAdmin) -> MappingResult<Admin> {
    let id = fields::require_text(raw.id.as_deref(), "admin", "id")?;

    Ok(Admin {
        id,
        name: fields::text_or_empty(raw.name.as_deref()),
        email: fields::text_or_empty(raw.email.as_deref()),
        role: raw.role.as_deref().map(str::trim).unwrap_or("").to_string(),
        status: AccountStatus::from_raw(raw.status.as_deref()),
    })
}
