//! `Holiday` record.

use serde::{Deserialize, Serialize};
use vc_time::Date;

/// One public holiday on one date for one country.
///
/// Immutable once fetched; a view's holiday set is replaced wholesale on
/// every successful fetch, never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    /// The calendar date the holiday falls on.
    pub date: Date,
    /// Localized name; falls back to [`name`](Self::name) when the source
    /// has no localization.
    pub local_name: String,
    /// Generic (English) name.
    pub name: String,
}

impl Holiday {
    /// Build a holiday from source fields, falling back to the generic name
    /// when the localized one is absent.
    pub fn normalized(date: Date, local_name: Option<String>, name: String) -> Self {
        let local_name = local_name.unwrap_or_else(|| name.clone());
        Holiday {
            date,
            local_name,
            name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_fallback() {
        let d = Date::from_ymd(2024, 3, 8).unwrap();
        let h = Holiday::normalized(d, None, "Women's Day".to_owned());
        assert_eq!(h.local_name, "Women's Day");

        let h = Holiday::normalized(d, Some("Journée des femmes".to_owned()), "Women's Day".to_owned());
        assert_eq!(h.local_name, "Journée des femmes");
    }

    #[test]
    fn test_wire_shape_is_camel_case() {
        let h = Holiday {
            date: Date::from_ymd(2024, 1, 26).unwrap(),
            local_name: "गणतंत्र दिवस".to_owned(),
            name: "Republic Day".to_owned(),
        };
        let json = serde_json::to_value(&h).unwrap();
        assert_eq!(json["date"], "2024-01-26");
        assert_eq!(json["localName"], "गणतंत्र दिवस");
        assert_eq!(json["name"], "Republic Day");
    }
}
