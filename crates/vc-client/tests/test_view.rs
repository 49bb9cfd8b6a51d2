//! View-model tests: navigation, country selection, rendered rows, and the
//! quarter composition.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use vc_client::{HolidaySource, MonthView, QuarterView, SourceError};
use vc_core::Config;
use vc_holidays::{Holiday, WeekKind};
use vc_time::Date;

/// Immediate source that records every `(country, year)` request.
struct RecordingSource {
    calls: Mutex<Vec<(String, u16)>>,
    data: HashMap<String, Vec<Holiday>>,
}

impl RecordingSource {
    fn new() -> Self {
        RecordingSource {
            calls: Mutex::new(Vec::new()),
            data: HashMap::new(),
        }
    }

    fn with_data(mut self, country: &str, holidays: Vec<Holiday>) -> Self {
        self.data.insert(country.to_owned(), holidays);
        self
    }

    fn calls(&self) -> Vec<(String, u16)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl HolidaySource for RecordingSource {
    async fn fetch(&self, country: &str, year: u16) -> Result<Vec<Holiday>, SourceError> {
        self.calls.lock().unwrap().push((country.to_owned(), year));
        Ok(self.data.get(country).cloned().unwrap_or_default())
    }
}

fn holiday(iso: &str, name: &str) -> Holiday {
    Holiday {
        date: Date::parse_iso(iso).unwrap(),
        local_name: name.to_owned(),
        name: name.to_owned(),
    }
}

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[tokio::test]
async fn navigation_derives_the_fetch_year_from_the_month() {
    let source = Arc::new(RecordingSource::new());
    let mut view = MonthView::for_month(Config::default(), source.clone(), date(2024, 11, 15));
    view.settled().await;

    view.next_month(); // Dec 2024
    view.settled().await;
    view.next_month(); // Jan 2025: year boundary changes the fetch year
    view.settled().await;
    view.prev_month(); // back to Dec 2024
    view.settled().await;

    assert_eq!(
        source.calls(),
        vec![
            ("US".to_owned(), 2024),
            ("US".to_owned(), 2024),
            ("US".to_owned(), 2025),
            ("US".to_owned(), 2024),
        ]
    );
    assert_eq!(view.title(), "December 2024");
}

#[tokio::test]
async fn country_selection_refetches_only_on_change() {
    let source = Arc::new(RecordingSource::new());
    let mut view = MonthView::for_month(Config::default(), source.clone(), date(2024, 3, 1));
    view.settled().await;
    assert_eq!(view.country(), "US");
    assert_eq!(view.country_name(), Some("United States"));

    view.set_country("US"); // unchanged: no new request
    view.set_country("IN");
    view.settled().await;

    assert_eq!(
        source.calls(),
        vec![("US".to_owned(), 2024), ("IN".to_owned(), 2024)]
    );
    assert_eq!(view.country_name(), Some("India"));
}

#[tokio::test]
async fn rows_combine_grid_index_and_classifier() {
    let source = Arc::new(
        RecordingSource::new().with_data(
            "US",
            vec![
                holiday("2024-03-08", "Fri holiday"),
                holiday("2024-03-09", "Sat holiday"),
                holiday("2024-03-25", "Late holiday"),
                // Padding-day holiday: must never surface in the March view.
                holiday("2024-02-26", "Feb holiday"),
            ],
        ),
    );
    let view = MonthView::for_month(Config::default(), source, date(2024, 3, 1));
    view.settled().await;

    let rows = view.rows();
    assert_eq!(rows.len(), 5);

    // Week of Mar 4–10 holds the adjacent Fri+Sat pair.
    let pair_week = &rows[1];
    assert!(pair_week.span.contains(date(2024, 3, 8)));
    assert_eq!(pair_week.kind, WeekKind::Consecutive);

    // Week of Mar 25–31 holds a lone holiday.
    let lone_week = &rows[4];
    assert_eq!(lone_week.kind, WeekKind::Single);

    // First row is padded with February days: dimmed, badge suppressed.
    let padded = &rows[0].days[0];
    assert_eq!(padded.date, date(2024, 2, 26));
    assert!(!padded.in_month);
    assert!(padded.holiday.is_none());

    let in_month = rows[1]
        .days
        .iter()
        .find(|c| c.date == date(2024, 3, 8))
        .unwrap();
    assert!(in_month.in_month);
    assert_eq!(
        in_month.holiday.as_ref().map(|h| h.local_name.as_str()),
        Some("Fri holiday")
    );
}

#[tokio::test]
async fn month_legend_lists_displayed_month_only() {
    let source = Arc::new(
        RecordingSource::new().with_data(
            "US",
            vec![
                holiday("2024-03-25", "Late"),
                holiday("2024-03-08", "Early"),
                holiday("2024-04-01", "Next month"),
            ],
        ),
    );
    let view = MonthView::for_month(Config::default(), source, date(2024, 3, 1));
    view.settled().await;

    let names: Vec<String> = view
        .holidays_this_month()
        .into_iter()
        .map(|h| h.name)
        .collect();
    assert_eq!(names, vec!["Early".to_owned(), "Late".to_owned()]);
}

#[tokio::test]
async fn quarter_view_spans_the_quarter_of_the_given_date() {
    let source = Arc::new(RecordingSource::new());
    let quarter = QuarterView::for_date(Config::default(), source.clone(), date(2024, 2, 14));
    quarter.settled().await;

    let months: Vec<(u16, u8)> = quarter
        .months()
        .iter()
        .map(|m| (m.month().year(), m.month().month()))
        .collect();
    assert_eq!(months, vec![(2024, 1), (2024, 2), (2024, 3)]);
    assert_eq!(quarter.heading(), "Jan 2024 - Mar 2024");

    // One independent fetch per month view.
    assert_eq!(source.calls().len(), 3);
}

#[tokio::test]
async fn quarter_months_are_independent() {
    let source = Arc::new(RecordingSource::new());
    let mut quarter = QuarterView::for_date(Config::default(), source.clone(), date(2024, 7, 4));
    quarter.settled().await;

    quarter.months_mut()[0].set_country("IN");
    quarter.settled().await;

    assert_eq!(quarter.months()[0].country(), "IN");
    assert_eq!(quarter.months()[1].country(), "US");
    assert_eq!(quarter.months()[2].country(), "US");
}
