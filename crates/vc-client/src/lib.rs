//! # vc-client
//!
//! The calendar client: holiday retrieval and the navigable view models.
//!
//! The interesting part is the [`fetch::FetchController`] — an explicit
//! state machine that guarantees at most one in-flight request's outcome is
//! ever committed, no matter how requests and responses interleave. The view
//! models compose it with the grid builder and week classifier from the
//! sibling crates.
//!
//! Everything here assumes a Tokio runtime; the controller spawns its fetch
//! and debounce tasks on the ambient runtime.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Fetch lifecycle state machine with supersession and debounced loading.
pub mod fetch;

/// Nager.Date public-holiday API client.
pub mod nager;

/// `HolidaySource` — the async seam in front of the holiday API.
pub mod source;

/// Month and quarter view models.
pub mod view;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use fetch::{FetchController, FetchPhase, HolidaySnapshot};
pub use nager::NagerClient;
pub use source::{HolidaySource, SourceError};
pub use view::{DayCell, MonthView, QuarterView, WeekRow};
