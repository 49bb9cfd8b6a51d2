//! Normalized holiday record — the proxy's wire format.

use serde::{Deserialize, Serialize};
use vc_time::Date;

/// One holiday as the proxy returns and stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayRecord {
    /// ISO 3166-1 alpha-2 country code.
    pub country: String,
    /// The calendar date.
    pub date: Date,
    /// Localized name (the upstream provider supplies a single name; it is
    /// used for both fields).
    pub local_name: String,
    /// Generic name.
    pub name: String,
    /// Free-text description from the provider.
    pub description: String,
    /// Comma-joined holiday types, e.g. `"National holiday"`.
    #[serde(rename = "type")]
    pub kind: String,
}
