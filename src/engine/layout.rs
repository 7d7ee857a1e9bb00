//! Layout orchestration.
//!
//! # Pipeline
//!
//! 1. Validate assignments; collect rejections.
//! 2. Apply the filter.
//! 3. Resolve the viewing window.
//! 4. Group surviving assignments by owner.
//! 5. Assign lanes per owner.
//! 6. Project every laned assignment onto the window, dropping invisible ones.
//! 7. Order owner rows by (display name, owner id).
//!
//! The whole pipeline is a pure function of its inputs: no state is
//! kept between calls and identical inputs give identical results.
//!
//! # Complexity
//! O(n log n) in the number of filtered assignments (sorting dominates).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::Result;
use crate::filter::apply_filter;
use crate::lanes::assign_lanes;
use crate::models::{Assignment, FilterSpec, LayoutResult, Owner, OwnerLanes, WindowRequest};
use crate::projection::project_bar;
use crate::validation::partition_valid;

/// Input container for a layout call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutRequest {
    /// Raw assignments.
    pub assignments: Vec<Assignment>,
    /// Known owners (display names). Missing owners use their id.
    #[serde(default)]
    pub owners: Vec<Owner>,
    /// Filter predicates.
    #[serde(default)]
    pub filter: FilterSpec,
    /// Window to project on.
    pub window: WindowRequest,
}

impl LayoutRequest {
    /// Creates a request with no owner names and no filter.
    pub fn new(assignments: Vec<Assignment>, window: WindowRequest) -> Self {
        Self {
            assignments,
            owners: Vec::new(),
            filter: FilterSpec::new(),
            window,
        }
    }

    /// Sets owner records.
    pub fn with_owners(mut self, owners: Vec<Owner>) -> Self {
        self.owners = owners;
        self
    }

    /// Sets the filter.
    pub fn with_filter(mut self, filter: FilterSpec) -> Self {
        self.filter = filter;
        self
    }
}

/// Resource-timeline layout engine.
///
/// Holds only configuration (owner display names); every call recomputes
/// the layout from scratch, so one engine can serve concurrent callers.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use u_timeline::engine::LayoutEngine;
/// use u_timeline::models::{Assignment, FilterSpec, Granularity, Owner, WindowRequest};
///
/// let d = |day| NaiveDate::from_ymd_opt(2025, 1, day).unwrap();
/// let assignments = vec![
///     Assignment::new("A", "u1", "proj1", d(1), d(10)),
///     Assignment::new("B", "u1", "proj2", d(5), d(15)),
/// ];
/// let engine = LayoutEngine::new().with_owners(vec![Owner::new("u1", "Ada")]);
/// let window = WindowRequest::new(Granularity::Week, d(6)).with_period_count(1);
///
/// let result = engine.layout(&assignments, &FilterSpec::new(), &window).unwrap();
/// assert_eq!(result.owners.len(), 1);
/// assert_eq!(result.owners[0].owner.display_name, "Ada");
/// assert_eq!(result.owners[0].max_lanes, 2);
/// assert_eq!(result.bar_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    display_names: BTreeMap<String, String>,
}

impl LayoutEngine {
    /// Creates an engine with no owner names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers owner display names. Later records win on duplicate ids.
    pub fn with_owners<I>(mut self, owners: I) -> Self
    where
        I: IntoIterator<Item = Owner>,
    {
        self.display_names
            .extend(owners.into_iter().map(|o| (o.id, o.display_name)));
        self
    }

    /// Computes the layout.
    ///
    /// # Errors
    /// Only when the window cannot be resolved (zero periods or a date
    /// outside chrono's range). Invalid assignments are reported in
    /// `LayoutResult::rejected` instead.
    pub fn layout(
        &self,
        assignments: &[Assignment],
        filter: &FilterSpec,
        window_request: &WindowRequest,
    ) -> Result<LayoutResult> {
        let (valid, rejected) = partition_valid(assignments);
        let filtered = apply_filter(valid, filter);
        let window = window_request.resolve()?;

        tracing::debug!(
            input = assignments.len(),
            rejected = rejected.len(),
            filtered = filtered.len(),
            window_start = %window.start,
            window_end = %window.end,
            "computing timeline layout"
        );

        let mut groups: BTreeMap<&str, Vec<&Assignment>> = BTreeMap::new();
        for a in filtered {
            groups.entry(a.owner_id.as_str()).or_default().push(a);
        }

        let mut owners: Vec<OwnerLanes> = groups
            .into_iter()
            .map(|(owner_id, group)| {
                let lanes = assign_lanes(&group);
                tracing::trace!(owner_id, lanes = lanes.max_lanes, assignments = group.len());

                let bars = lanes
                    .placements
                    .iter()
                    .filter_map(|p| project_bar(p.assignment, p.lane_index, &window))
                    .collect();

                OwnerLanes {
                    owner: self.owner(owner_id),
                    max_lanes: lanes.max_lanes,
                    bars,
                }
            })
            .collect();

        owners.sort_by(|a, b| {
            a.owner
                .display_name
                .cmp(&b.owner.display_name)
                .then_with(|| a.owner.id.cmp(&b.owner.id))
        });

        let result = LayoutResult {
            owners,
            window,
            rejected,
        };
        tracing::debug!(
            owners = result.owners.len(),
            bars = result.bar_count(),
            "timeline layout complete"
        );
        Ok(result)
    }

    /// Computes the layout for a request.
    ///
    /// Owner records in the request take precedence over the engine's.
    pub fn layout_request(&self, request: &LayoutRequest) -> Result<LayoutResult> {
        let engine = self.clone().with_owners(request.owners.iter().cloned());
        engine.layout(&request.assignments, &request.filter, &request.window)
    }

    fn owner(&self, owner_id: &str) -> Owner {
        match self.display_names.get(owner_id) {
            Some(name) => Owner::new(owner_id, name.as_str()),
            None => Owner::anonymous(owner_id),
        }
    }
}

/// Computes a layout with owner ids as display names.
pub fn compute_layout(
    assignments: &[Assignment],
    filter: &FilterSpec,
    window_request: &WindowRequest,
) -> Result<LayoutResult> {
    LayoutEngine::new().layout(assignments, filter, window_request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LayoutError;
    use crate::models::Granularity;
    use crate::validation::ValidationErrorKind;
    use chrono::NaiveDate;

    const EPS: f64 = 1e-12;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    /// One-week window 2025-01-06 .. 2025-01-12.
    fn one_week() -> WindowRequest {
        WindowRequest::new(Granularity::Week, d(2025, 1, 8)).with_period_count(1)
    }

    fn sample() -> Vec<Assignment> {
        vec![
            Assignment::new("A", "u1", "proj1", d(2025, 1, 1), d(2025, 1, 10)).with_tag("kr1"),
            Assignment::new("B", "u1", "proj2", d(2025, 1, 5), d(2025, 1, 15)).with_tag("kr2"),
            Assignment::new("C", "u2", "proj1", d(2025, 1, 7), d(2025, 1, 8)).with_tag("kr1"),
            Assignment::new("D", "u3", "proj3", d(2025, 3, 1), d(2025, 3, 5)),
        ]
    }

    fn owners() -> Vec<Owner> {
        vec![
            Owner::new("u1", "Zed"),
            Owner::new("u2", "Amy"),
            Owner::new("u3", "Bob"),
        ]
    }

    #[test]
    fn test_overlapping_pair_scenario() {
        let all = sample();
        let result = compute_layout(&all[..2], &FilterSpec::new(), &one_week()).unwrap();

        assert_eq!(result.window.total_days, 7);
        let row = result.owner_row("u1").unwrap();
        assert_eq!(row.max_lanes, 2);

        let a = result.bar_for_assignment("A").unwrap();
        assert_eq!(a.lane_index, 0);
        assert_eq!(a.left_fraction, 0.0);
        assert!((a.width_fraction - 5.0 / 7.0).abs() < EPS);
        assert!(a.clipped_left);
        assert!(!a.clipped_right);

        let b = result.bar_for_assignment("B").unwrap();
        assert_eq!(b.lane_index, 1);
        assert_eq!(b.left_fraction, 0.0);
        assert_eq!(b.width_fraction, 1.0);
        assert!(b.clipped_left);
        assert!(b.clipped_right);
    }

    #[test]
    fn test_owners_sorted_by_display_name() {
        let engine = LayoutEngine::new().with_owners(owners());
        let window = WindowRequest::new(Granularity::Month, d(2025, 1, 1));
        let result = engine.layout(&sample(), &FilterSpec::new(), &window).unwrap();

        let names: Vec<&str> = result
            .owners
            .iter()
            .map(|o| o.owner.display_name.as_str())
            .collect();
        assert_eq!(names, vec!["Amy", "Bob", "Zed"]);
    }

    #[test]
    fn test_display_name_ties_break_on_id() {
        let engine = LayoutEngine::new()
            .with_owners(vec![Owner::new("u2", "Sam"), Owner::new("u1", "Sam")]);
        let window = WindowRequest::new(Granularity::Month, d(2025, 1, 1));
        let all = sample();
        let result = engine.layout(&all[..3], &FilterSpec::new(), &window).unwrap();

        let ids: Vec<&str> = result.owners.iter().map(|o| o.owner.id.as_str()).collect();
        assert_eq!(ids, vec!["u1", "u2"]);
    }

    #[test]
    fn test_display_name_compare_is_case_sensitive() {
        let engine = LayoutEngine::new()
            .with_owners(vec![Owner::new("u1", "alice"), Owner::new("u2", "Bob")]);
        let window = WindowRequest::new(Granularity::Month, d(2025, 1, 1));
        let all = sample();
        let result = engine.layout(&all[..3], &FilterSpec::new(), &window).unwrap();

        // Uppercase sorts before lowercase
        assert_eq!(result.owners[0].owner.display_name, "Bob");
    }

    #[test]
    fn test_unknown_owner_uses_id() {
        let result = compute_layout(&sample(), &FilterSpec::new(), &one_week()).unwrap();
        assert_eq!(result.owner_row("u2").unwrap().owner.display_name, "u2");
    }

    #[test]
    fn test_owner_outside_window_keeps_row() {
        // u3 survives the filter but nothing is visible in January
        let result = compute_layout(&sample(), &FilterSpec::new(), &one_week()).unwrap();
        let row = result.owner_row("u3").unwrap();
        assert_eq!(row.max_lanes, 1);
        assert!(row.bars.is_empty());
    }

    #[test]
    fn test_filtered_out_owner_is_absent() {
        let engine = LayoutEngine::new().with_owners(owners());
        let filter = FilterSpec::new().with_tags(["kr1"]);
        let result = engine.layout(&sample(), &filter, &one_week()).unwrap();

        assert!(result.owner_row("u3").is_none());
        let u1 = result.owner_row("u1").unwrap();
        assert_eq!(u1.max_lanes, 1);
        assert_eq!(u1.bars.len(), 1);
        assert_eq!(u1.bars[0].assignment.id, "A");
    }

    #[test]
    fn test_invalid_assignments_reported_not_fatal() {
        let mut all = sample();
        all.push(Assignment::new("bad", "u1", "proj9", d(2025, 1, 9), d(2025, 1, 2)));

        let result = compute_layout(&all, &FilterSpec::new(), &one_week()).unwrap();
        assert_eq!(result.rejected_ids(), vec!["bad"]);
        assert_eq!(result.rejected[0].kind, ValidationErrorKind::InvertedRange);
        assert!(result.bar_for_assignment("bad").is_none());
        assert_eq!(result.owner_row("u1").unwrap().max_lanes, 2);
    }

    #[test]
    fn test_empty_inputs_give_empty_result() {
        let result = compute_layout(&[], &FilterSpec::new(), &one_week()).unwrap();
        assert!(result.is_empty());
        assert!(result.rejected.is_empty());
        assert_eq!(result.window.total_days, 7);

        let nothing = FilterSpec::new().with_subjects(["none"]);
        let result = compute_layout(&sample(), &nothing, &one_week()).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_window_error_propagates() {
        let window = one_week().with_period_count(0);
        let err = compute_layout(&sample(), &FilterSpec::new(), &window).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidPeriodCount));
    }

    #[test]
    fn test_lanes_count_invisible_assignments() {
        // Lanes are computed on the filtered set, not the visible set
        let all = vec![
            Assignment::new("early", "u1", "p1", d(2024, 12, 1), d(2025, 1, 2)),
            Assignment::new("late", "u1", "p2", d(2024, 12, 20), d(2025, 1, 7)),
        ];
        let result = compute_layout(&all, &FilterSpec::new(), &one_week()).unwrap();
        let row = result.owner_row("u1").unwrap();
        assert_eq!(row.max_lanes, 2);
        assert_eq!(row.bars.len(), 1);
        assert_eq!(row.bars[0].lane_index, 1);
    }

    #[test]
    fn test_idempotent() {
        let engine = LayoutEngine::new().with_owners(owners());
        let window = WindowRequest::new(Granularity::Week, d(2025, 1, 8));
        let first = engine.layout(&sample(), &FilterSpec::new(), &window).unwrap();
        let second = engine.layout(&sample(), &FilterSpec::new(), &window).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_layout_request_owner_precedence() {
        let engine = LayoutEngine::new().with_owners(vec![Owner::new("u1", "Old")]);
        let request = LayoutRequest::new(sample(), one_week())
            .with_owners(vec![Owner::new("u1", "New")])
            .with_filter(FilterSpec::new().with_owners(["u1"]));

        let result = engine.layout_request(&request).unwrap();
        assert_eq!(result.owners.len(), 1);
        assert_eq!(result.owners[0].owner.display_name, "New");
    }
}
