//! # vc-time
//!
//! Naive calendar dates and the month-grid builder.
//!
//! Dates are timezone-free year/month/day values; "now" only enters the
//! picture through [`Date::today`], which callers use for quarter selection
//! and today-highlighting, never for grid construction.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// `WeekSpan` and `MonthGrid` — the calendar-grid builder.
pub mod grid;

/// `Month` — month-of-year enum.
pub mod month;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use grid::{MonthGrid, WeekSpan};
pub use month::Month;
pub use weekday::Weekday;
