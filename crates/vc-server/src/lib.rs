//! # vc-server
//!
//! The holiday proxy service: one read endpoint that fetches a supported
//! country's holidays from an upstream provider, normalizes them, persists
//! them best-effort, and returns them as JSON.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Route handler and error-to-status mapping.
pub mod api;

/// Normalized holiday record (the proxy's wire format).
pub mod record;

/// Best-effort holiday cache.
pub mod store;

/// Upstream holiday provider client.
pub mod upstream;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use api::{get_holidays, router, ApiError, AppState, HolidayQuery};
pub use record::HolidayRecord;
pub use store::{HolidayStore, MemoryStore, SqliteStore, StoreError};
pub use upstream::{CalendarificClient, UpstreamError, UpstreamHoliday, UpstreamSource};
