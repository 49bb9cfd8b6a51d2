//! `HolidaySource` — the async seam in front of the holiday API.
//!
//! The fetch controller and the view models only ever see this trait, so
//! tests drive the lifecycle with a scripted fake instead of a network.

use async_trait::async_trait;
use thiserror::Error;
use vc_holidays::Holiday;

/// Failure modes of a holiday fetch.
///
/// None of these are retried automatically; the controller commits a failed
/// state and waits for the next request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The request never produced a response (DNS, connect, I/O).
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("unexpected status {0}")]
    Status(u16),

    /// The response body could not be decoded into holiday records.
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Fetches one country's public holidays for one year.
#[async_trait]
pub trait HolidaySource: Send + Sync {
    /// Fetch the normalized holiday list for `(country, year)`.
    ///
    /// `country` is an ISO 3166-1 alpha-2 code. The returned list is
    /// unordered and may contain duplicate dates.
    async fn fetch(&self, country: &str, year: u16) -> Result<Vec<Holiday>, SourceError>;
}
