//! Lane assignment by greedy interval partitioning.
//!
//! Places one owner's assignments into the fewest horizontal lanes such
//! that no two assignments in a lane share a day.
//!
//! # Algorithm
//!
//! 1. Sort by (start asc, end asc, subject id asc, id asc).
//! 2. Keep lanes in index order, each with the end date of its last
//!    assignment (its frontier).
//! 3. Place each assignment in the first lane whose frontier is strictly
//!    before its start. A start equal to the frontier is an overlap
//!    (ranges are inclusive).
//! 4. Open a new lane when none qualifies.
//!
//! Processing intervals by start date makes the first-fit choice optimal:
//! the lane count equals the peak number of assignments active on one day
//! (interval graph coloring).
//!
//! # Complexity
//! O(n log n + n·k) where k = lane count.
//!
//! # Reference
//! Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1 (Interval Partitioning)

use chrono::NaiveDate;

use crate::models::Assignment;

/// An assignment and the lane it was placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanePlacement<'a> {
    /// The placed assignment.
    pub assignment: &'a Assignment,
    /// Lane index (0-based).
    pub lane_index: usize,
}

/// Lane placements for one owner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaneAssignment<'a> {
    /// Placements in processing (sorted) order.
    pub placements: Vec<LanePlacement<'a>>,
    /// Number of lanes opened.
    pub max_lanes: usize,
}

impl LaneAssignment<'_> {
    /// Lane of a given assignment.
    pub fn lane_of(&self, assignment_id: &str) -> Option<usize> {
        self.placements
            .iter()
            .find(|p| p.assignment.id == assignment_id)
            .map(|p| p.lane_index)
    }

    /// Assignments placed in a given lane, in processing order.
    pub fn lane(&self, lane_index: usize) -> impl Iterator<Item = &Assignment> + '_ {
        self.placements
            .iter()
            .filter(move |p| p.lane_index == lane_index)
            .map(|p| p.assignment)
    }
}

/// Partitions one owner's assignments into the minimum number of lanes.
///
/// Assignments are expected to be well-formed (`start <= end`); the
/// orchestrator validates before calling.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use u_timeline::lanes::assign_lanes;
/// use u_timeline::models::Assignment;
///
/// let d = |day| NaiveDate::from_ymd_opt(2025, 1, day).unwrap();
/// let a = Assignment::new("A", "u1", "proj1", d(1), d(10));
/// let b = Assignment::new("B", "u1", "proj2", d(5), d(15));
///
/// let lanes = assign_lanes(&[&a, &b]);
/// assert_eq!(lanes.max_lanes, 2);
/// assert_eq!(lanes.lane_of("A"), Some(0));
/// assert_eq!(lanes.lane_of("B"), Some(1));
/// ```
pub fn assign_lanes<'a>(owner_assignments: &[&'a Assignment]) -> LaneAssignment<'a> {
    let mut sorted: Vec<&'a Assignment> = owner_assignments.to_vec();
    sorted.sort_by(|a, b| {
        a.start_date
            .cmp(&b.start_date)
            .then(a.end_date.cmp(&b.end_date))
            .then_with(|| a.subject_id.cmp(&b.subject_id))
            .then_with(|| a.id.cmp(&b.id))
    });

    // Frontier (last occupied day) per lane
    let mut frontiers: Vec<NaiveDate> = Vec::new();
    let mut placements = Vec::with_capacity(sorted.len());

    for assignment in sorted {
        let free = frontiers
            .iter()
            .position(|&frontier| frontier < assignment.start_date);

        let lane_index = match free {
            Some(idx) => {
                frontiers[idx] = assignment.end_date;
                idx
            }
            None => {
                frontiers.push(assignment.end_date);
                frontiers.len() - 1
            }
        };

        placements.push(LanePlacement {
            assignment,
            lane_index,
        });
    }

    LaneAssignment {
        placements,
        max_lanes: frontiers.len(),
    }
}

/// Maximum number of assignments active on any single day.
///
/// Sweeps start/end events; on the same day starts are counted before
/// ends because ranges are inclusive.
pub fn peak_concurrency(assignments: &[&Assignment]) -> usize {
    // (date, 0 = start / 1 = end)
    let mut events: Vec<(NaiveDate, u8)> = Vec::with_capacity(assignments.len() * 2);
    for a in assignments {
        events.push((a.start_date, 0));
        events.push((a.end_date, 1));
    }
    events.sort_unstable();

    let mut active = 0usize;
    let mut peak = 0usize;
    for (_, kind) in events {
        if kind == 0 {
            active += 1;
            peak = peak.max(active);
        } else {
            active = active.saturating_sub(1);
        }
    }
    peak
}
