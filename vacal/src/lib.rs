//! # vacal
//!
//! A public-holiday calendar: month/quarter view models over a locally
//! computed calendar grid, holiday data fetched from a public API, and an
//! optional caching proxy service.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `vc-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use vacal::time::{Date, MonthGrid, Weekday};
//!
//! let march = Date::from_ymd(2024, 3, 1).unwrap();
//! let grid = MonthGrid::for_month(march, Weekday::Monday);
//! assert_eq!(grid.weeks()[0].start(), Date::from_ymd(2024, 2, 26).unwrap());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Shared error and configuration types.
pub use vc_core as core;

/// Naive dates and the calendar-grid builder.
pub use vc_time as time;

/// Holiday records, index, and week classification.
pub use vc_holidays as holidays;

/// Fetch controller and view models.
pub use vc_client as client;

/// The holiday proxy service.
pub use vc_server as server;
