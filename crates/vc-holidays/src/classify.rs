//! Week classification.
//!
//! Each display row gets one category derived from the holidays falling in
//! (or immediately before) its span. The most specific category wins:
//! `Consecutive` over `Multiple` over `Single` over `None`.

use vc_time::WeekSpan;

use crate::index::HolidayIndex;

/// Category of a week row, for visual/semantic treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekKind {
    /// No holidays in the week.
    None,
    /// Exactly one holiday.
    Single,
    /// More than one holiday, none on adjacent dates.
    Multiple,
    /// At least one pair of holidays on adjacent calendar dates, counting a
    /// pair that spans the boundary from the previous week.
    Consecutive,
}

impl WeekKind {
    /// Classify `week` against `index`.
    ///
    /// Adjacency is tested for every calendar-adjacent pair touching the
    /// span, starting with (day before the week, first day) so that a
    /// holiday pair straddling a week boundary marks the *later* week.
    pub fn classify(week: &WeekSpan, index: &HolidayIndex) -> Self {
        let start = week.start();
        for offset in -1..6 {
            if index.is_holiday(start + offset) && index.is_holiday(start + offset + 1) {
                return WeekKind::Consecutive;
            }
        }
        match week.days().filter(|d| index.is_holiday(*d)).count() {
            0 => WeekKind::None,
            1 => WeekKind::Single,
            _ => WeekKind::Multiple,
        }
    }
}
