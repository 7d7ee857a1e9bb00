//! Window computation.
//!
//! # Algorithm
//! 1. Snap the anchor to the start of its period.
//! 2. Shift by `navigation_delta` periods.
//! 3. Emit `period_count` consecutive periods with exact day counts.
//!
//! # Complexity
//! O(p) where p = period count.

use chrono::{Datelike, NaiveDate};

use super::period::{period_end, period_start, shift_periods};
use crate::error::{LayoutError, Result};
use crate::models::{Granularity, PeriodHeader, TimeWindow, WindowRequest};

/// Computes a viewing window.
///
/// # Errors
/// - `InvalidPeriodCount` if `period_count` is zero.
/// - `DateOutOfRange` if the window would leave chrono's calendar range.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use u_timeline::calendar::compute_window;
/// use u_timeline::models::Granularity;
///
/// let anchor = NaiveDate::from_ymd_opt(2025, 1, 8).unwrap();
/// let window = compute_window(Granularity::Month, anchor, 3, 0).unwrap();
/// assert_eq!(window.start, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
/// assert_eq!(window.end, NaiveDate::from_ymd_opt(2025, 3, 31).unwrap());
/// assert_eq!(window.total_days, 31 + 28 + 31);
/// ```
pub fn compute_window(
    granularity: Granularity,
    anchor_date: NaiveDate,
    period_count: u32,
    navigation_delta: i32,
) -> Result<TimeWindow> {
    if period_count == 0 {
        return Err(LayoutError::InvalidPeriodCount);
    }

    let anchored = period_start(granularity, anchor_date)?;
    let start = shift_periods(granularity, anchored, i64::from(navigation_delta))?;

    // Range-check the far edge before building headers
    shift_periods(granularity, start, i64::from(period_count))?;

    let mut headers = Vec::with_capacity(period_count.min(64) as usize);
    let mut period = start;
    for i in 0..period_count {
        let end = period_end(granularity, period)?;
        headers.push(header(granularity, period, end));
        if i + 1 < period_count {
            period = shift_periods(granularity, period, 1)?;
        }
    }

    let end = headers.last().map_or(start, |h| h.end);
    let total_days = headers.iter().map(|h| h.day_count).sum();

    Ok(TimeWindow {
        granularity,
        start,
        end,
        headers,
        total_days,
    })
}

impl WindowRequest {
    /// Resolves this request into a window.
    pub fn resolve(&self) -> Result<TimeWindow> {
        compute_window(
            self.granularity,
            self.anchor_date,
            self.period_count,
            self.navigation_delta,
        )
    }
}

fn header(granularity: Granularity, start: NaiveDate, end: NaiveDate) -> PeriodHeader {
    let (label, sub_label) = match granularity {
        Granularity::Week => (
            format!("W{:02}", start.iso_week().week()),
            format!("{} - {}", start.format("%b %-d"), end.format("%b %-d")),
        ),
        Granularity::Month => (start.format("%b").to_string(), start.year().to_string()),
    };

    PeriodHeader {
        label,
        sub_label,
        start,
        end,
        day_count: (end - start).num_days() + 1,
    }
}
