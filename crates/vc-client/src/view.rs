//! Month and quarter view models.
//!
//! These are headless: they own navigation and selection state, run the
//! fetch lifecycle, and hand renderers plain row/cell data. Styling is
//! someone else's problem.

use std::sync::Arc;
use std::time::Duration;

use vc_core::Config;
use vc_holidays::{Holiday, WeekKind};
use vc_time::{Date, MonthGrid, Weekday, WeekSpan};

use crate::fetch::{FetchController, HolidaySnapshot};
use crate::source::HolidaySource;

/// One rendered day cell.
#[derive(Debug, Clone)]
pub struct DayCell {
    /// The cell's date.
    pub date: Date,
    /// `false` for alignment padding from a neighbouring month (rendered
    /// dimmed, holiday badge suppressed).
    pub in_month: bool,
    /// `true` if the cell is today's date.
    pub is_today: bool,
    /// The holiday on this date, for in-month days only.
    pub holiday: Option<Holiday>,
}

/// One rendered week row: its span, classification, and day cells.
#[derive(Debug, Clone)]
pub struct WeekRow {
    /// The seven-day span.
    pub span: WeekSpan,
    /// Visual/semantic category of the week.
    pub kind: WeekKind,
    /// The seven day cells, in order.
    pub days: Vec<DayCell>,
}

/// A navigable single-month calendar.
///
/// Owns the displayed month and the selected country; either changing
/// triggers a fresh fetch for `(country, year-of-month)`. Must be created
/// inside a Tokio runtime.
pub struct MonthView {
    month: Date, // first day of the displayed month
    country: String,
    week_start: Weekday,
    config: Config,
    controller: FetchController,
}

impl MonthView {
    /// View for the month containing today, selecting the first configured
    /// country.
    pub fn new(config: Config, source: Arc<dyn HolidaySource>) -> Self {
        Self::for_month(config, source, Date::today())
    }

    /// View for the month containing `month`.
    pub fn for_month(config: Config, source: Arc<dyn HolidaySource>, month: Date) -> Self {
        let week_start = Weekday::from_ordinal(config.week_start).unwrap_or(Weekday::Monday);
        let country = config
            .countries
            .first()
            .map(|c| c.code.clone())
            .unwrap_or_else(|| "US".to_owned());
        let controller = FetchController::new(source, Duration::from_millis(config.debounce_ms));
        let view = MonthView {
            month: month.start_of_month(),
            country,
            week_start,
            config,
            controller,
        };
        view.refetch();
        view
    }

    fn refetch(&self) {
        self.controller.request(&self.country, self.month.year());
    }

    // ── Navigation and selection ─────────────────────────────────────────────

    /// Advance to the next calendar month. Navigation is unbounded within
    /// the representable date range.
    pub fn next_month(&mut self) {
        self.shift_month(1);
    }

    /// Go back one calendar month.
    pub fn prev_month(&mut self) {
        self.shift_month(-1);
    }

    fn shift_month(&mut self, n: i32) {
        if let Ok(month) = self.month.add_months(n) {
            self.month = month.start_of_month();
            // The fetch year is derived from the month, so crossing a year
            // boundary implicitly changes the requested year.
            self.refetch();
        }
    }

    /// Select a country. A changed selection triggers a fresh fetch and
    /// clears any error banner.
    pub fn set_country(&mut self, code: &str) {
        if code == self.country {
            return;
        }
        self.country = code.to_owned();
        self.refetch();
    }

    // ── State access ─────────────────────────────────────────────────────────

    /// First day of the displayed month.
    pub fn month(&self) -> Date {
        self.month
    }

    /// Selected country code.
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Display name of the selected country, when it is a configured one.
    pub fn country_name(&self) -> Option<&str> {
        self.config.country_name(&self.country)
    }

    /// Heading like `"March 2024"`.
    pub fn title(&self) -> String {
        format!("{} {}", self.month.month_of_year(), self.month.year())
    }

    /// The current fetch snapshot (phase, holidays, error).
    pub fn snapshot(&self) -> HolidaySnapshot {
        self.controller.snapshot()
    }

    /// The month grid for the displayed month.
    pub fn grid(&self) -> MonthGrid {
        MonthGrid::for_month(self.month, self.week_start)
    }

    /// Render the grid against the committed holiday state.
    pub fn rows(&self) -> Vec<WeekRow> {
        let snap = self.controller.snapshot();
        let grid = self.grid();
        let today = Date::today();
        grid.weeks()
            .iter()
            .map(|span| WeekRow {
                span: *span,
                kind: WeekKind::classify(span, &snap.index),
                days: span
                    .days()
                    .map(|date| {
                        let in_month = grid.contains(date);
                        DayCell {
                            date,
                            in_month,
                            is_today: date == today,
                            holiday: if in_month {
                                snap.index.lookup(date).cloned()
                            } else {
                                None
                            },
                        }
                    })
                    .collect(),
            })
            .collect()
    }

    /// Committed holidays falling in the displayed month, sorted by date
    /// (the legend under the grid).
    pub fn holidays_this_month(&self) -> Vec<Holiday> {
        self.controller
            .snapshot()
            .index
            .in_month(self.month.year(), self.month.month())
            .into_iter()
            .cloned()
            .collect()
    }

    /// Wait until the view's fetch reaches a terminal phase.
    pub async fn settled(&self) {
        self.controller.settled().await;
    }
}

/// Three independent [`MonthView`]s covering the calendar quarter that
/// contains today.
///
/// There is no quarter navigation; each month keeps its own fetch lifecycle
/// and selection state.
pub struct QuarterView {
    months: Vec<MonthView>,
}

impl QuarterView {
    /// Quarter view for today.
    pub fn new(config: Config, source: Arc<dyn HolidaySource>) -> Self {
        Self::for_date(config, source, Date::today())
    }

    /// Quarter view for the quarter containing `date`.
    pub fn for_date(config: Config, source: Arc<dyn HolidaySource>, date: Date) -> Self {
        let month_start = date.start_of_month();
        let into_quarter = ((date.month() - 1) % 3) as i32;
        let quarter_start = month_start.add_months(-into_quarter).unwrap_or(month_start);
        let months = (0..3)
            .map(|i| {
                let month = quarter_start.add_months(i).unwrap_or(quarter_start);
                MonthView::for_month(config.clone(), Arc::clone(&source), month)
            })
            .collect();
        QuarterView { months }
    }

    /// The three month views, in calendar order.
    pub fn months(&self) -> &[MonthView] {
        &self.months
    }

    /// Mutable access for per-month navigation/selection.
    pub fn months_mut(&mut self) -> &mut [MonthView] {
        &mut self.months
    }

    /// Heading like `"Jan 2024 - Mar 2024"`.
    pub fn heading(&self) -> String {
        let first = self.months.first();
        let last = self.months.last();
        match (first, last) {
            (Some(a), Some(b)) => format!(
                "{} {} - {} {}",
                a.month().month_of_year().short_name(),
                a.month().year(),
                b.month().month_of_year().short_name(),
                b.month().year()
            ),
            _ => String::new(),
        }
    }

    /// Wait until every month's fetch reaches a terminal phase.
    pub async fn settled(&self) {
        for month in &self.months {
            month.settled().await;
        }
    }
}
