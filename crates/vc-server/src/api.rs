//! Route handler and error-to-status mapping.
//!
//! One read endpoint: `GET /api/holidays?country=XX&year=YYYY`. An
//! unsupported country is a client error (400) and never reaches the
//! upstream; an upstream failure is a server error (500). Cache persistence
//! is best-effort and cannot affect the response.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use thiserror::Error;
use vc_time::Date;

use crate::record::HolidayRecord;
use crate::store::HolidayStore;
use crate::upstream::{UpstreamError, UpstreamHoliday, UpstreamSource};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    /// Upstream holiday provider.
    pub upstream: Arc<dyn UpstreamSource>,
    /// Best-effort cache.
    pub store: Arc<dyn HolidayStore>,
    /// The single country code this proxy serves.
    pub supported_country: String,
}

/// Query parameters of the holidays endpoint.
#[derive(Debug, Deserialize)]
pub struct HolidayQuery {
    /// ISO 3166-1 alpha-2 country code.
    pub country: String,
    /// Calendar year.
    pub year: u16,
}

/// Handler-level errors, mapped onto HTTP statuses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The requested country is not the supported one. Client error; the
    /// upstream is never contacted.
    #[error("only {supported} is supported")]
    UnsupportedCountry {
        /// The code the proxy does serve.
        supported: String,
    },

    /// The upstream provider failed.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::UnsupportedCountry { supported } => (
                StatusCode::BAD_REQUEST,
                format!("Currently, only {supported} is supported."),
            ),
            ApiError::Upstream(err) => {
                tracing::warn!(%err, "upstream holiday fetch failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch holidays".to_owned(),
                )
            }
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

/// Map raw upstream entries to the proxy's wire format.
///
/// A `date.iso` value may carry a time suffix; only the calendar-date prefix
/// is kept. The provider has no separate localized name, so its single name
/// fills both name fields.
fn normalize(country: &str, raw: Vec<UpstreamHoliday>) -> Result<Vec<HolidayRecord>, UpstreamError> {
    raw.into_iter()
        .map(|h| {
            let iso = h.date.iso;
            let date_part = iso.get(..10).unwrap_or(&iso);
            let date = Date::parse_iso(date_part)
                .map_err(|e| UpstreamError::Decode(format!("entry date {iso:?}: {e}")))?;
            Ok(HolidayRecord {
                country: country.to_owned(),
                date,
                local_name: h.name.clone(),
                name: h.name,
                description: h.description,
                kind: h.types.join(", "),
            })
        })
        .collect()
}

/// `GET /api/holidays`.
pub async fn get_holidays(
    State(state): State<AppState>,
    Query(query): Query<HolidayQuery>,
) -> Result<Json<Vec<HolidayRecord>>, ApiError> {
    if query.country != state.supported_country {
        return Err(ApiError::UnsupportedCountry {
            supported: state.supported_country.clone(),
        });
    }

    let raw = state.upstream.holidays(&query.country, query.year).await?;
    let records = normalize(&query.country, raw)?;

    state.store.insert_many(&records).await;

    Ok(Json(records))
}

/// Build the service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/holidays", get(get_holidays))
        .with_state(state)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upstream::UpstreamDate;

    #[test]
    fn test_normalize_strips_time_suffix_and_joins_types() {
        let raw = vec![UpstreamHoliday {
            name: "Diwali".to_owned(),
            description: "Festival of lights".to_owned(),
            date: UpstreamDate {
                iso: "2024-11-01T00:00:00+05:30".to_owned(),
            },
            types: vec!["National holiday".to_owned(), "Hinduism".to_owned()],
        }];
        let records = normalize("IN", raw).unwrap();
        assert_eq!(records[0].date, Date::from_ymd(2024, 11, 1).unwrap());
        assert_eq!(records[0].local_name, "Diwali");
        assert_eq!(records[0].kind, "National holiday, Hinduism");
    }

    #[test]
    fn test_normalize_rejects_garbage_dates() {
        let raw = vec![UpstreamHoliday {
            name: "X".to_owned(),
            description: String::new(),
            date: UpstreamDate {
                iso: "not-a-date".to_owned(),
            },
            types: Vec::new(),
        }];
        assert!(matches!(
            normalize("IN", raw),
            Err(UpstreamError::Decode(_))
        ));
    }
}
