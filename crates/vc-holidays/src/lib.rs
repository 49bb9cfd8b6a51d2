//! # vc-holidays
//!
//! Holiday records, the date-keyed holiday index, and the week classifier.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Week classification (none / single / multiple / consecutive).
pub mod classify;

/// `Holiday` record.
pub mod holiday;

/// `HolidayIndex` — fast lookup by calendar date.
pub mod index;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use classify::WeekKind;
pub use holiday::Holiday;
pub use index::HolidayIndex;
