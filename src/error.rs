//! Crate-level errors.
//!
//! Layout itself has no failure mode for well-formed input: bad
//! assignments are collected as [`crate::validation::ValidationError`]s
//! and reported alongside the result. `LayoutError` covers the remaining
//! cases: calendar arithmetic leaving chrono's range, a zero-period
//! window, and the JSON boundary.

use chrono::NaiveDate;

/// Errors returned by window computation, layout, and the JSON service.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// Shifting or extending a date left the representable calendar range.
    #[error("date {date} cannot be shifted by {periods} period(s)")]
    DateOutOfRange {
        /// Date being shifted.
        date: NaiveDate,
        /// Number of periods requested.
        periods: i64,
    },

    /// A window must contain at least one period.
    #[error("period count must be at least 1")]
    InvalidPeriodCount,

    /// The JSON request could not be decoded or the result encoded.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for fallible layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;
