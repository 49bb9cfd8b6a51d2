//! Error types for vacal.
//!
//! The calendar crates share a single `thiserror`-derived enum; the
//! network-facing crates define their own boundary errors and convert at the
//! edges.

use thiserror::Error;

/// The error type shared by the calendar-side crates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Date-related error (out-of-range component, bad ISO string, overflow).
    #[error("date error: {0}")]
    Date(String),

    /// Configuration could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand `Result` type used throughout vacal.
pub type Result<T, E = Error> = std::result::Result<T, E>;
