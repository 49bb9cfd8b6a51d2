//! Nager.Date public-holiday API client.
//!
//! `GET {base}/api/v3/PublicHolidays/{year}/{country}` returns a JSON array
//! of holiday records. Only the date and the two name fields are kept; a
//! missing localized name falls back to the generic name.

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;
use vc_core::Config;
use vc_holidays::Holiday;
use vc_time::Date;

use crate::source::{HolidaySource, SourceError};

/// HTTP client for the Nager.Date API.
#[derive(Debug, Clone)]
pub struct NagerClient {
    client: reqwest::Client,
    base_url: Url,
}

/// The subset of a Nager.Date record the calendar uses.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawHoliday {
    date: String,
    local_name: Option<String>,
    name: String,
}

impl NagerClient {
    /// Build a client against `base_url`.
    pub fn new(base_url: &str) -> Result<Self, SourceError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| SourceError::Transport(format!("bad base url {base_url:?}: {e}")))?;
        Ok(NagerClient {
            client: reqwest::Client::new(),
            base_url,
        })
    }

    /// Build a client from the calendar configuration.
    pub fn from_config(config: &Config) -> Result<Self, SourceError> {
        Self::new(&config.api_base_url)
    }

    fn endpoint(&self, country: &str, year: u16) -> Result<Url, SourceError> {
        self.base_url
            .join(&format!("api/v3/PublicHolidays/{year}/{country}"))
            .map_err(|e| SourceError::Transport(e.to_string()))
    }
}

/// Map raw records to [`Holiday`]s, applying the local-name fallback.
fn normalize(raw: Vec<RawHoliday>) -> Result<Vec<Holiday>, SourceError> {
    raw.into_iter()
        .map(|r| {
            let date = Date::parse_iso(&r.date)
                .map_err(|e| SourceError::Decode(format!("record date: {e}")))?;
            Ok(Holiday::normalized(date, r.local_name, r.name))
        })
        .collect()
}

#[async_trait]
impl HolidaySource for NagerClient {
    async fn fetch(&self, country: &str, year: u16) -> Result<Vec<Holiday>, SourceError> {
        let url = self.endpoint(country, year)?;
        tracing::debug!(%url, "fetching public holidays");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }
        let raw: Vec<RawHoliday> = response
            .json()
            .await
            .map_err(|e| SourceError::Decode(e.to_string()))?;
        normalize(raw)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_path() {
        let client = NagerClient::new("https://date.nager.at").unwrap();
        let url = client.endpoint("IN", 2024).unwrap();
        assert_eq!(
            url.as_str(),
            "https://date.nager.at/api/v3/PublicHolidays/2024/IN"
        );
    }

    #[test]
    fn test_bad_base_url() {
        assert!(matches!(
            NagerClient::new("not a url"),
            Err(SourceError::Transport(_))
        ));
    }

    #[test]
    fn test_normalize_fallback_and_dates() {
        let raw: Vec<RawHoliday> = serde_json::from_str(
            r#"[
                {"date": "2024-01-26", "localName": "गणतंत्र दिवस", "name": "Republic Day"},
                {"date": "2024-08-15", "name": "Independence Day"}
            ]"#,
        )
        .unwrap();
        let holidays = normalize(raw).unwrap();
        assert_eq!(holidays[0].local_name, "गणतंत्र दिवस");
        assert_eq!(holidays[1].local_name, "Independence Day");
        assert_eq!(holidays[1].date, Date::from_ymd(2024, 8, 15).unwrap());
    }

    #[test]
    fn test_normalize_rejects_bad_date() {
        let raw: Vec<RawHoliday> =
            serde_json::from_str(r#"[{"date": "garbage", "name": "X"}]"#).unwrap();
        assert!(matches!(normalize(raw), Err(SourceError::Decode(_))));
    }
}
