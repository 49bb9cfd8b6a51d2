//! Runtime configuration.
//!
//! [`Config`] carries everything the calendar client needs: the selectable
//! country list, the public-holiday API endpoint, and the loading-indicator
//! debounce. [`ProxyConfig`] carries the proxy-service settings, including
//! the upstream API key (a secret — its `Debug` output is redacted).
//!
//! Both can be built from defaults, a JSON reader, or environment variables;
//! environment values override file values.

use std::io::Read;

use serde::Deserialize;

use crate::errors::{Error, Result};

/// One selectable country: ISO 3166-1 alpha-2 code plus display name.
///
/// The country list is a fixed enumeration — it is the only selectable
/// input for the calendar and is not user-extensible at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code, e.g. `"US"`.
    pub code: String,
    /// Human-readable display name, e.g. `"United States"`.
    pub name: String,
}

/// Calendar-client configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the public-holiday API.
    pub api_base_url: String,
    /// Delay before an in-flight request shows a loading indicator.
    pub debounce_ms: u64,
    /// First day of a display week, as a 1-based ordinal (1 = Monday).
    pub week_start: u8,
    /// The selectable countries.
    pub countries: Vec<Country>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: "https://date.nager.at".to_owned(),
            debounce_ms: 150,
            week_start: 1,
            countries: default_countries(),
        }
    }
}

impl Config {
    /// Read configuration from a JSON reader, falling back to defaults for
    /// absent fields.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader).map_err(|e| Error::Config(e.to_string()))
    }

    /// Apply environment-variable overrides (`VACAL_API_BASE_URL`,
    /// `VACAL_DEBOUNCE_MS`).
    pub fn apply_env(mut self) -> Result<Self> {
        if let Ok(url) = std::env::var("VACAL_API_BASE_URL") {
            self.api_base_url = url;
        }
        if let Ok(ms) = std::env::var("VACAL_DEBOUNCE_MS") {
            self.debounce_ms = ms
                .parse()
                .map_err(|_| Error::Config(format!("VACAL_DEBOUNCE_MS not a number: {ms}")))?;
        }
        Ok(self)
    }

    /// Look up a country's display name by code.
    pub fn country_name(&self, code: &str) -> Option<&str> {
        self.countries
            .iter()
            .find(|c| c.code == code)
            .map(|c| c.name.as_str())
    }
}

/// Proxy-service configuration.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct ProxyConfig {
    /// Base URL of the upstream holiday provider.
    pub upstream_base_url: String,
    /// Upstream API key. Secret; never logged.
    pub api_key: Option<String>,
    /// The single country code the proxy serves.
    pub supported_country: String,
    /// Socket address the service binds to.
    pub bind_addr: String,
    /// SQLite connection string for the holiday cache. `None` keeps the
    /// cache in memory.
    pub database_url: Option<String>,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        ProxyConfig {
            upstream_base_url: "https://calendarific.com".to_owned(),
            api_key: None,
            supported_country: "IN".to_owned(),
            bind_addr: "127.0.0.1:5000".to_owned(),
            database_url: None,
        }
    }
}

impl ProxyConfig {
    /// Build from environment variables (`VACAL_UPSTREAM_BASE_URL`,
    /// `VACAL_API_KEY`, `VACAL_SUPPORTED_COUNTRY`, `VACAL_BIND_ADDR`,
    /// `VACAL_DATABASE_URL`), with defaults for anything unset.
    pub fn from_env() -> Self {
        let mut cfg = ProxyConfig::default();
        if let Ok(url) = std::env::var("VACAL_UPSTREAM_BASE_URL") {
            cfg.upstream_base_url = url;
        }
        if let Ok(key) = std::env::var("VACAL_API_KEY") {
            cfg.api_key = Some(key);
        }
        if let Ok(country) = std::env::var("VACAL_SUPPORTED_COUNTRY") {
            cfg.supported_country = country;
        }
        if let Ok(addr) = std::env::var("VACAL_BIND_ADDR") {
            cfg.bind_addr = addr;
        }
        if let Ok(db) = std::env::var("VACAL_DATABASE_URL") {
            cfg.database_url = Some(db);
        }
        cfg
    }
}

impl std::fmt::Debug for ProxyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProxyConfig")
            .field("upstream_base_url", &self.upstream_base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("supported_country", &self.supported_country)
            .field("bind_addr", &self.bind_addr)
            .field("database_url", &self.database_url)
            .finish()
    }
}

/// The built-in country list.
fn default_countries() -> Vec<Country> {
    const LIST: [(&str, &str); 20] = [
        ("US", "United States"),
        ("GB", "United Kingdom"),
        ("CA", "Canada"),
        ("AU", "Australia"),
        ("DE", "Germany"),
        ("FR", "France"),
        ("IT", "Italy"),
        ("ES", "Spain"),
        ("JP", "Japan"),
        ("KR", "South Korea"),
        ("IN", "India"),
        ("BR", "Brazil"),
        ("MX", "Mexico"),
        ("NL", "Netherlands"),
        ("SE", "Sweden"),
        ("NO", "Norway"),
        ("DK", "Denmark"),
        ("FI", "Finland"),
        ("CH", "Switzerland"),
        ("AT", "Austria"),
    ];
    LIST.iter()
        .map(|(code, name)| Country {
            code: (*code).to_owned(),
            name: (*name).to_owned(),
        })
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_countries() {
        let cfg = Config::default();
        assert_eq!(cfg.countries.len(), 20);
        assert_eq!(cfg.country_name("IN"), Some("India"));
        assert_eq!(cfg.country_name("ZZ"), None);
    }

    #[test]
    fn test_from_reader_partial() {
        let json = r#"{ "debounce_ms": 300 }"#;
        let cfg = Config::from_reader(json.as_bytes()).unwrap();
        assert_eq!(cfg.debounce_ms, 300);
        // Unspecified fields keep their defaults.
        assert_eq!(cfg.week_start, 1);
        assert!(!cfg.countries.is_empty());
    }

    #[test]
    fn test_from_reader_bad_json() {
        let err = Config::from_reader(&b"not json"[..]).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_apply_env_overrides() {
        std::env::set_var("VACAL_API_BASE_URL", "https://holidays.example.com");
        std::env::set_var("VACAL_DEBOUNCE_MS", "250");
        let cfg = Config::default().apply_env().unwrap();
        assert_eq!(cfg.api_base_url, "https://holidays.example.com");
        assert_eq!(cfg.debounce_ms, 250);

        std::env::set_var("VACAL_DEBOUNCE_MS", "soon");
        let err = Config::default().apply_env().unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        std::env::remove_var("VACAL_API_BASE_URL");
        std::env::remove_var("VACAL_DEBOUNCE_MS");
    }

    #[test]
    fn test_proxy_debug_redacts_key() {
        let cfg = ProxyConfig {
            api_key: Some("super-secret".to_owned()),
            ..ProxyConfig::default()
        };
        let debug = format!("{cfg:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
