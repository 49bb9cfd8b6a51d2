//! Upstream holiday provider client (Calendarific).
//!
//! `GET {base}/api/v2/holidays?api_key=…&country=…&year=…` returns an
//! envelope `{ "response": { "holidays": [ … ] } }`; each entry carries a
//! name, a description, a `date.iso` string, and a list of type labels.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use url::Url;
use vc_core::config::ProxyConfig;
use vc_core::errors::Error as CoreError;

/// Failure modes of an upstream fetch.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),

    /// The provider answered with a non-2xx status.
    #[error("unexpected status {0}")]
    Status(u16),

    /// The response body did not match the expected envelope.
    #[error("malformed response: {0}")]
    Decode(String),
}

/// One raw upstream holiday entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpstreamHoliday {
    /// Holiday name.
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Date container.
    pub date: UpstreamDate,
    /// Type labels, e.g. `["National holiday"]`.
    #[serde(rename = "type", default)]
    pub types: Vec<String>,
}

/// The `date` object of an upstream entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpstreamDate {
    /// ISO 8601 date, possibly with a time suffix.
    pub iso: String,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    response: EnvelopeBody,
}

#[derive(Debug, Deserialize)]
struct EnvelopeBody {
    holidays: Vec<UpstreamHoliday>,
}

/// Fetches raw holiday entries for `(country, year)`.
#[async_trait]
pub trait UpstreamSource: Send + Sync {
    /// Fetch the raw upstream entries.
    async fn holidays(&self, country: &str, year: u16)
        -> Result<Vec<UpstreamHoliday>, UpstreamError>;
}

/// HTTP client for the Calendarific API.
#[derive(Debug, Clone)]
pub struct CalendarificClient {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl CalendarificClient {
    /// Build a client. The API key comes from configuration, never from an
    /// inline constant.
    pub fn new(base_url: &str, api_key: String) -> Result<Self, CoreError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| CoreError::Config(format!("bad upstream url {base_url:?}: {e}")))?;
        Ok(CalendarificClient {
            client: reqwest::Client::new(),
            base_url,
            api_key,
        })
    }

    /// Build a client from the proxy configuration.
    ///
    /// Fails when no API key is configured.
    pub fn from_config(config: &ProxyConfig) -> Result<Self, CoreError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| CoreError::Config("VACAL_API_KEY is not set".to_owned()))?;
        Self::new(&config.upstream_base_url, api_key)
    }

    fn endpoint(&self, country: &str, year: u16) -> Result<Url, UpstreamError> {
        let mut url = self
            .base_url
            .join("api/v2/holidays")
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;
        url.query_pairs_mut()
            .append_pair("api_key", &self.api_key)
            .append_pair("country", country)
            .append_pair("year", &year.to_string());
        Ok(url)
    }
}

#[async_trait]
impl UpstreamSource for CalendarificClient {
    async fn holidays(
        &self,
        country: &str,
        year: u16,
    ) -> Result<Vec<UpstreamHoliday>, UpstreamError> {
        let url = self.endpoint(country, year)?;
        tracing::debug!(country, year, "fetching upstream holidays");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }
        let envelope: Envelope = response
            .json()
            .await
            .map_err(|e| UpstreamError::Decode(e.to_string()))?;
        Ok(envelope.response.holidays)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
