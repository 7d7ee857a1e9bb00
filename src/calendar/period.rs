//! Period arithmetic.
//!
//! A week period runs Monday through Sunday; a month period is one
//! calendar month. Shifting always operates on whole periods, so shifting
//! a period start by `+k` then `-k` returns the same date.

use chrono::{Datelike, Days, Months, NaiveDate, TimeDelta};

use crate::error::{LayoutError, Result};
use crate::models::Granularity;

/// First day of the period containing `date`.
pub fn period_start(granularity: Granularity, date: NaiveDate) -> Result<NaiveDate> {
    let back = match granularity {
        Granularity::Week => date.weekday().num_days_from_monday(),
        Granularity::Month => date.day0(),
    };
    date.checked_sub_days(Days::new(u64::from(back)))
        .ok_or(LayoutError::DateOutOfRange { date, periods: 0 })
}

/// Moves `date` by `delta` whole periods (negative = backwards).
///
/// For months, the day of month is clamped to the target month's length
/// (Jan 31 + 1 month = Feb 28/29). Period starts (the 1st) never clamp.
pub fn shift_periods(granularity: Granularity, date: NaiveDate, delta: i64) -> Result<NaiveDate> {
    let out_of_range = LayoutError::DateOutOfRange {
        date,
        periods: delta,
    };

    let shifted = match granularity {
        Granularity::Week => TimeDelta::try_weeks(delta).and_then(|d| date.checked_add_signed(d)),
        Granularity::Month => {
            let months = u32::try_from(delta.unsigned_abs()).ok().map(Months::new);
            match months {
                Some(m) if delta >= 0 => date.checked_add_months(m),
                Some(m) => date.checked_sub_months(m),
                None => None,
            }
        }
    };

    shifted.ok_or(out_of_range)
}

/// Last day (inclusive) of the period starting at `start`.
pub fn period_end(granularity: Granularity, start: NaiveDate) -> Result<NaiveDate> {
    let next = shift_periods(granularity, start, 1)?;
    next.pred_opt()
        .ok_or(LayoutError::DateOutOfRange { date: start, periods: 1 })
}

/// Number of days in a calendar month.
pub fn days_in_month(year: i32, month: u32) -> Option<i64> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = first.checked_add_months(Months::new(1))?;
    Some((next - first).num_days())
}
