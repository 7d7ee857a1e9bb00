//! Window projection.
//!
//! Maps a laned assignment onto a window as normalized horizontal
//! coordinates. The visible part is the intersection of the assignment's
//! inclusive day range with the window; assignments with no visible day
//! are omitted rather than emitted with zero width.
//!
//! Both fractions are integer day counts divided once by the window's
//! day count, so `left + width <= 1` holds up to one rounding step.

use crate::models::{Assignment, LaidOutBar, TimeWindow};

/// Projects an assignment onto a window.
///
/// Returns `None` when the assignment lies wholly outside the window.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use u_timeline::calendar::compute_window;
/// use u_timeline::models::{Assignment, Granularity};
/// use u_timeline::projection::project_bar;
///
/// let d = |day| NaiveDate::from_ymd_opt(2025, 1, day).unwrap();
/// let window = compute_window(Granularity::Week, d(6), 1, 0).unwrap();
/// let a = Assignment::new("A", "u1", "proj1", d(1), d(10));
///
/// let bar = project_bar(&a, 0, &window).unwrap();
/// assert_eq!(bar.left_fraction, 0.0);
/// assert!((bar.width_fraction - 5.0 / 7.0).abs() < 1e-12);
/// assert!(bar.clipped_left);
/// assert!(!bar.clipped_right);
/// ```
pub fn project_bar(
    assignment: &Assignment,
    lane_index: usize,
    window: &TimeWindow,
) -> Option<LaidOutBar> {
    if window.total_days <= 0 {
        return None;
    }

    let clipped_start = assignment.start_date.max(window.start);
    let clipped_end = assignment.end_date.min(window.end);
    if clipped_end < clipped_start {
        return None;
    }

    let total = window.total_days as f64;
    let offset_days = (clipped_start - window.start).num_days();
    let visible_days = (clipped_end - clipped_start).num_days() + 1;

    Some(LaidOutBar {
        assignment: assignment.clone(),
        lane_index,
        left_fraction: offset_days as f64 / total,
        width_fraction: visible_days as f64 / total,
        clipped_left: assignment.start_date < window.start,
        clipped_right: assignment.end_date > window.end,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::compute_window;
    use crate::models::Granularity;
    use chrono::NaiveDate;

    const EPS: f64 = 1e-12;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    /// One week: 2025-01-06 .. 2025-01-12.
    fn week() -> TimeWindow {
        compute_window(Granularity::Week, d(2025, 1, 6), 1, 0).unwrap()
    }

    fn make(start: NaiveDate, end: NaiveDate) -> Assignment {
        Assignment::new("A", "u1", "p1", start, end)
    }

    #[test]
    fn test_clipped_left() {
        let bar = project_bar(&make(d(2025, 1, 1), d(2025, 1, 10)), 0, &week()).unwrap();
        assert_eq!(bar.left_fraction, 0.0);
        assert!((bar.width_fraction - 5.0 / 7.0).abs() < EPS);
        assert!(bar.clipped_left);
        assert!(!bar.clipped_right);
    }

    #[test]
    fn test_clipped_right() {
        let bar = project_bar(&make(d(2025, 1, 8), d(2025, 1, 15)), 1, &week()).unwrap();
        assert!((bar.left_fraction - 2.0 / 7.0).abs() < EPS);
        assert!((bar.width_fraction - 5.0 / 7.0).abs() < EPS);
        assert!((bar.right_fraction() - 1.0).abs() < EPS);
        assert!(!bar.clipped_left);
        assert!(bar.clipped_right);
        assert_eq!(bar.lane_index, 1);
    }

    #[test]
    fn test_clipped_both_sides_fills_window() {
        let bar = project_bar(&make(d(2024, 12, 1), d(2025, 2, 1)), 0, &week()).unwrap();
        assert_eq!(bar.left_fraction, 0.0);
        assert_eq!(bar.width_fraction, 1.0);
        assert!(bar.clipped_left && bar.clipped_right);
    }

    #[test]
    fn test_single_day_has_width() {
        let bar = project_bar(&make(d(2025, 1, 12), d(2025, 1, 12)), 0, &week()).unwrap();
        assert!((bar.left_fraction - 6.0 / 7.0).abs() < EPS);
        assert!((bar.width_fraction - 1.0 / 7.0).abs() < EPS);
        assert!(bar.right_fraction() <= 1.0 + EPS);
        assert!(!bar.clipped_left && !bar.clipped_right);
    }

    #[test]
    fn test_outside_window_is_omitted() {
        assert!(project_bar(&make(d(2024, 12, 1), d(2025, 1, 5)), 0, &week()).is_none());
        assert!(project_bar(&make(d(2025, 1, 13), d(2025, 1, 20)), 0, &week()).is_none());
    }

    #[test]
    fn test_window_edges_are_inclusive() {
        assert!(project_bar(&make(d(2025, 1, 1), d(2025, 1, 6)), 0, &week()).is_some());
        assert!(project_bar(&make(d(2025, 1, 12), d(2025, 1, 30)), 0, &week()).is_some());
    }

    #[test]
    fn test_month_window_fractions() {
        // Jan + Feb + Mar 2025 = 90 days; Feb 1 is day offset 31
        let w = compute_window(Granularity::Month, d(2025, 1, 1), 3, 0).unwrap();
        let bar = project_bar(&make(d(2025, 2, 1), d(2025, 2, 28)), 0, &w).unwrap();
        assert!((bar.left_fraction - 31.0 / 90.0).abs() < EPS);
        assert!((bar.width_fraction - 28.0 / 90.0).abs() < EPS);
    }
}
