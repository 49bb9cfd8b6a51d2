//! `WeekSpan` and `MonthGrid` — the calendar-grid builder.
//!
//! A month grid is the ordered list of 7-day rows that a calendar displays
//! for one month. The first and last rows are padded with days from the
//! neighbouring months so that every row is a full week; callers that dim
//! out-of-month days test each day with [`MonthGrid::contains`] rather than
//! truncating rows.
//!
//! Construction is pure: the same month and week start always produce an
//! identical grid.

use crate::date::Date;
use crate::weekday::Weekday;

/// Seven consecutive days forming one display row.
///
/// Derived, never stored: a span is recomputed whenever the displayed month
/// changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekSpan {
    start: Date,
}

impl WeekSpan {
    /// Build the span starting at `start`.
    pub fn starting(start: Date) -> Self {
        WeekSpan { start }
    }

    /// First day of the span.
    pub fn start(&self) -> Date {
        self.start
    }

    /// Last day of the span (start + 6).
    pub fn end(&self) -> Date {
        self.start + 6
    }

    /// Iterate the seven days in order.
    pub fn days(&self) -> impl Iterator<Item = Date> + '_ {
        (0..7).map(move |i| self.start + i)
    }

    /// Return `true` if `date` falls inside the span.
    pub fn contains(&self, date: Date) -> bool {
        date >= self.start() && date <= self.end()
    }
}

/// Ordered sequence of [`WeekSpan`]s covering one displayed month.
///
/// Invariant: spans are contiguous, non-overlapping, and strictly increasing
/// in start date; their union covers every date of the month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    year: u16,
    month: u8,
    weeks: Vec<WeekSpan>,
}

impl MonthGrid {
    /// Build the grid for the month containing `date`, with rows starting on
    /// `week_start`.
    ///
    /// Any date within the target month gives the same grid.
    pub fn for_month(date: Date, week_start: Weekday) -> Self {
        let first = date.start_of_month();
        let last = date.end_of_month();
        let offset =
            (first.weekday().ordinal() as i32 - week_start.ordinal() as i32).rem_euclid(7);
        let mut cursor = first - offset;
        let mut weeks = Vec::with_capacity(6);
        while cursor <= last {
            weeks.push(WeekSpan::starting(cursor));
            cursor += 7;
        }
        MonthGrid {
            year: first.year(),
            month: first.month(),
            weeks,
        }
    }

    /// The displayed year.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// The displayed month number (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// The week rows, in order.
    pub fn weeks(&self) -> &[WeekSpan] {
        &self.weeks
    }

    /// Return `true` if `date` belongs to the displayed month (as opposed to
    /// the alignment padding from a neighbouring month).
    pub fn contains(&self, date: Date) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_march_2024_monday_weeks() {
        let grid = MonthGrid::for_month(date(2024, 3, 15), Weekday::Monday);
        assert_eq!(grid.weeks().len(), 5);
        assert_eq!(grid.weeks()[0].start(), date(2024, 2, 26));
        assert_eq!(grid.weeks()[4].end(), date(2024, 3, 31));
    }

    #[test]
    fn test_same_grid_for_any_day_of_month() {
        let a = MonthGrid::for_month(date(2024, 3, 1), Weekday::Monday);
        let b = MonthGrid::for_month(date(2024, 3, 31), Weekday::Monday);
        assert_eq!(a, b);
    }

    #[test]
    fn test_week_start_sunday() {
        // March 2024 starts on a Friday; with Sunday rows the grid opens on
        // Sun Feb 25 and closes on Sat Apr 6.
        let grid = MonthGrid::for_month(date(2024, 3, 1), Weekday::Sunday);
        assert_eq!(grid.weeks()[0].start(), date(2024, 2, 25));
        assert_eq!(grid.weeks().last().unwrap().end(), date(2024, 4, 6));
    }

    #[test]
    fn test_month_starting_on_week_start() {
        // April 2024 starts on a Monday: no leading padding.
        let grid = MonthGrid::for_month(date(2024, 4, 10), Weekday::Monday);
        assert_eq!(grid.weeks()[0].start(), date(2024, 4, 1));
    }

    #[test]
    fn test_contains_dims_padding() {
        let grid = MonthGrid::for_month(date(2024, 3, 15), Weekday::Monday);
        assert!(grid.contains(date(2024, 3, 1)));
        assert!(grid.contains(date(2024, 3, 31)));
        assert!(!grid.contains(date(2024, 2, 26)));
        assert!(!grid.contains(date(2024, 4, 1)));
    }

    #[test]
    fn test_alignment_at_range_minimum() {
        // January of the first supported year pads back into the prior week
        // instead of clamping at the range bound: the first row still starts
        // on the requested weekday and is a full week.
        let grid = MonthGrid::for_month(date(1901, 1, 15), Weekday::Sunday);
        let first = grid.weeks()[0];
        assert_eq!(first.start().weekday(), Weekday::Sunday);
        assert_eq!(first.start().to_string(), "1900-12-30");
        assert_eq!(first.end() - first.start(), 6);
    }

    #[test]
    fn test_alignment_at_range_maximum() {
        // December of the last supported year pads forward past the range
        // bound; the final row is still a full week.
        let grid = MonthGrid::for_month(date(2198, 12, 1), Weekday::Monday);
        let last = *grid.weeks().last().unwrap();
        assert_eq!(last.start().weekday(), Weekday::Monday);
        assert_eq!(last.end().to_string(), "2199-01-06");
        assert_eq!(last.end() - last.start(), 6);
    }

    #[test]
    fn test_week_span_days() {
        let span = WeekSpan::starting(date(2024, 2, 26));
        let days: Vec<Date> = span.days().collect();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], date(2024, 2, 26));
        assert_eq!(days[6], date(2024, 3, 3));
        assert!(span.contains(date(2024, 3, 1)));
        assert!(!span.contains(date(2024, 3, 4)));
    }
}
