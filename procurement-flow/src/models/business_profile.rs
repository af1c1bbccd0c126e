//! Business profile (vendor) models.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// GSTIN format: state code, PAN, entity number, "Z", check character.
static GSTIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][1-9A-Z]Z[0-9A-Z]$").unwrap());

/// Reference to an externally-owned vendor entity.
///
/// The workflow only ever holds a reference plus display fields; the
/// vendor record itself is owned by the remote API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProfileSummary {
    pub id: String,
    #[validate(length(min = 1, message = "name required"))]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = *GSTIN_RE, message = "invalid GSTIN"))]
    pub gstin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}
