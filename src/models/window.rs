//! Viewing window models.
//!
//! A `WindowRequest` describes what the caller wants to see (granularity,
//! anchor, number of periods, navigation offset). A `TimeWindow` is the
//! resolved calendar span, produced by [`crate::calendar::compute_window`].
//!
//! # Date Model
//! All dates are calendar days (`NaiveDate`, no time zone). Window bounds
//! are inclusive on both ends.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of periods shown when the caller does not say otherwise.
pub const DEFAULT_PERIOD_COUNT: u32 = 3;

/// Size of one window period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// Monday through Sunday.
    Week,
    /// One calendar month.
    Month,
}

/// A request for a viewing window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowRequest {
    /// Period size.
    pub granularity: Granularity,
    /// Date the window is anchored at (before navigation).
    pub anchor_date: NaiveDate,
    /// Number of periods in the window.
    #[serde(default = "default_period_count")]
    pub period_count: u32,
    /// Signed number of periods to shift the anchor by.
    #[serde(default)]
    pub navigation_delta: i32,
}

fn default_period_count() -> u32 {
    DEFAULT_PERIOD_COUNT
}

impl WindowRequest {
    /// Creates a request for the default number of periods, no navigation.
    pub fn new(granularity: Granularity, anchor_date: NaiveDate) -> Self {
        Self {
            granularity,
            anchor_date,
            period_count: DEFAULT_PERIOD_COUNT,
            navigation_delta: 0,
        }
    }

    /// Sets the number of periods.
    pub fn with_period_count(mut self, period_count: u32) -> Self {
        self.period_count = period_count;
        self
    }

    /// Sets the navigation offset.
    pub fn with_navigation(mut self, navigation_delta: i32) -> Self {
        self.navigation_delta = navigation_delta;
        self
    }

    /// Moves the view by `delta` more periods (negative = back in time).
    pub fn navigate(&self, delta: i32) -> Self {
        Self {
            navigation_delta: self.navigation_delta.saturating_add(delta),
            ..self.clone()
        }
    }

    /// Switches granularity, re-anchoring at `today` and dropping navigation.
    pub fn switch_granularity(&self, granularity: Granularity, today: NaiveDate) -> Self {
        Self {
            granularity,
            anchor_date: today,
            period_count: self.period_count,
            navigation_delta: 0,
        }
    }
}

/// Header of one period in a window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodHeader {
    /// Primary label ("W02", "Jan").
    pub label: String,
    /// Secondary label ("Jan 6 - Jan 12", "2025").
    pub sub_label: String,
    /// First day of the period.
    pub start: NaiveDate,
    /// Last day of the period (inclusive).
    pub end: NaiveDate,
    /// Exact number of days in the period.
    pub day_count: i64,
}

/// A resolved viewing window.
///
/// Invariant: `total_days` equals the sum of `headers[i].day_count`
/// and the number of days in `[start, end]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeWindow {
    /// Period size the window was built with.
    pub granularity: Granularity,
    /// First visible day.
    pub start: NaiveDate,
    /// Last visible day (inclusive).
    pub end: NaiveDate,
    /// One header per period, in order.
    pub headers: Vec<PeriodHeader>,
    /// Number of visible days.
    pub total_days: i64,
}

impl TimeWindow {
    /// Whether a day is visible.
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Days from the window start to `date` (negative before the window).
    #[inline]
    pub fn day_offset(&self, date: NaiveDate) -> i64 {
        (date - self.start).num_days()
    }

    /// Index of the period containing `date`, if visible.
    pub fn period_index(&self, date: NaiveDate) -> Option<usize> {
        self.headers
            .iter()
            .position(|h| h.start <= date && date <= h.end)
    }

    /// Number of periods.
    pub fn period_count(&self) -> usize {
        self.headers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_request_defaults() {
        let r = WindowRequest::new(Granularity::Week, d(2025, 1, 8));
        assert_eq!(r.period_count, 3);
        assert_eq!(r.navigation_delta, 0);
    }

    #[test]
    fn test_navigate_accumulates() {
        let r = WindowRequest::new(Granularity::Month, d(2025, 1, 8));
        let r = r.navigate(1).navigate(1).navigate(-3);
        assert_eq!(r.navigation_delta, -1);
        assert_eq!(r.anchor_date, d(2025, 1, 8));
    }

    #[test]
    fn test_switch_granularity_reanchors() {
        let r = WindowRequest::new(Granularity::Month, d(2025, 1, 8))
            .with_period_count(4)
            .with_navigation(5);
        let switched = r.switch_granularity(Granularity::Week, d(2025, 6, 2));

        assert_eq!(switched.granularity, Granularity::Week);
        assert_eq!(switched.anchor_date, d(2025, 6, 2));
        assert_eq!(switched.navigation_delta, 0);
        assert_eq!(switched.period_count, 4);
    }

    #[test]
    fn test_request_deserialize() {
        let json = r#"{"granularity": "week", "anchorDate": "2025-01-08"}"#;
        let r: WindowRequest = serde_json::from_str(json).unwrap();
        assert_eq!(r.granularity, Granularity::Week);
        assert_eq!(r.period_count, DEFAULT_PERIOD_COUNT);
        assert_eq!(r.navigation_delta, 0);
    }
}
