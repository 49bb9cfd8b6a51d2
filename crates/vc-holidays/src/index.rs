//! `HolidayIndex` — fast lookup by calendar date.

use std::collections::HashMap;

use vc_time::Date;

use crate::holiday::Holiday;

/// Date-keyed holiday lookup.
///
/// At most one entry is kept per date: when the input contains duplicate
/// dates, the later entry in iteration order wins. This mirrors the source
/// data's behaviour and is a documented non-guarantee, not a uniqueness
/// constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayIndex {
    by_date: HashMap<Date, Holiday>,
}

impl HolidayIndex {
    /// Build an index from any holiday sequence, including an empty one.
    pub fn from_holidays<I>(holidays: I) -> Self
    where
        I: IntoIterator<Item = Holiday>,
    {
        let mut by_date = HashMap::new();
        for h in holidays {
            by_date.insert(h.date, h);
        }
        HolidayIndex { by_date }
    }

    /// Look up the holiday on `date`, if any.
    pub fn lookup(&self, date: Date) -> Option<&Holiday> {
        self.by_date.get(&date)
    }

    /// Return `true` if `date` is a holiday.
    pub fn is_holiday(&self, date: Date) -> bool {
        self.by_date.contains_key(&date)
    }

    /// Number of indexed dates.
    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    /// Return `true` if the index holds no holidays.
    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }

    /// Holidays falling in the given year/month, sorted by date.
    ///
    /// Used for the month legend under the grid.
    pub fn in_month(&self, year: u16, month: u8) -> Vec<&Holiday> {
        let mut list: Vec<&Holiday> = self
            .by_date
            .values()
            .filter(|h| h.date.year() == year && h.date.month() == month)
            .collect();
        list.sort_by_key(|h| h.date);
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holiday(iso: &str, name: &str) -> Holiday {
        Holiday {
            date: Date::parse_iso(iso).unwrap(),
            local_name: name.to_owned(),
            name: name.to_owned(),
        }
    }

    #[test]
    fn test_lookup() {
        let index = HolidayIndex::from_holidays(vec![
            holiday("2024-03-08", "A"),
            holiday("2024-03-25", "B"),
        ]);
        assert_eq!(index.len(), 2);
        assert!(index.is_holiday(Date::parse_iso("2024-03-08").unwrap()));
        assert_eq!(
            index.lookup(Date::parse_iso("2024-03-25").unwrap()).map(|h| h.name.as_str()),
            Some("B")
        );
        assert!(index.lookup(Date::parse_iso("2024-03-09").unwrap()).is_none());
    }

    #[test]
    fn test_empty() {
        let index = HolidayIndex::from_holidays(Vec::new());
        assert!(index.is_empty());
        assert!(!index.is_holiday(Date::parse_iso("2024-01-01").unwrap()));
    }

    #[test]
    fn test_duplicate_dates_last_write_wins() {
        let index = HolidayIndex::from_holidays(vec![
            holiday("2024-03-08", "first"),
            holiday("2024-03-08", "second"),
        ]);
        assert_eq!(index.len(), 1);
        assert_eq!(
            index.lookup(Date::parse_iso("2024-03-08").unwrap()).map(|h| h.name.as_str()),
            Some("second")
        );
    }

    #[test]
    fn test_in_month_sorted() {
        let index = HolidayIndex::from_holidays(vec![
            holiday("2024-03-25", "late"),
            holiday("2024-03-08", "early"),
            holiday("2024-04-01", "other month"),
        ]);
        let march: Vec<&str> = index
            .in_month(2024, 3)
            .iter()
            .map(|h| h.name.as_str())
            .collect();
        assert_eq!(march, vec!["early", "late"]);
    }
}
