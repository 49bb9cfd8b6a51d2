//! # vc-core
//!
//! Shared error and configuration types for the vacal workspace.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error type and the shorthand `Result` alias.
pub mod errors;

/// Runtime configuration: country list, endpoints, API key, debounce.
pub mod config;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use config::{Config, Country, ProxyConfig};
pub use errors::{Error, Result};
