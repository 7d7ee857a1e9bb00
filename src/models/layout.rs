//! Layout result models.
//!
//! The output of the engine: per-owner rows of bars with normalized
//! horizontal coordinates, plus the window they were projected on.
//! Everything here is plain serializable data for a presentation layer.

use serde::{Deserialize, Serialize};

use super::{Assignment, Owner, TimeWindow};
use crate::validation::ValidationError;

/// One assignment placed in a lane and projected onto the window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaidOutBar {
    /// Source assignment.
    pub assignment: Assignment,
    /// Lane within the owner's row (0-based).
    pub lane_index: usize,
    /// Left edge as a fraction of the window width (0.0..1.0).
    pub left_fraction: f64,
    /// Width as a fraction of the window width (0.0..1.0].
    pub width_fraction: f64,
    /// The true start lies before the window.
    pub clipped_left: bool,
    /// The true end lies after the window.
    pub clipped_right: bool,
}

impl LaidOutBar {
    /// Right edge as a fraction of the window width.
    #[inline]
    pub fn right_fraction(&self) -> f64 {
        self.left_fraction + self.width_fraction
    }
}

/// One owner's row: lane count and visible bars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerLanes {
    /// The owner.
    pub owner: Owner,
    /// Number of lanes used by all of the owner's filtered assignments.
    pub max_lanes: usize,
    /// Bars visible in the window.
    pub bars: Vec<LaidOutBar>,
}

/// Complete layout for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResult {
    /// Owner rows ordered by display name, then owner id.
    pub owners: Vec<OwnerLanes>,
    /// The window bars were projected on.
    pub window: TimeWindow,
    /// Assignments rejected at ingestion.
    pub rejected: Vec<ValidationError>,
}

impl LayoutResult {
    /// Whether no owner row was produced.
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    /// Total number of bars across all owners.
    pub fn bar_count(&self) -> usize {
        self.owners.iter().map(|o| o.bars.len()).sum()
    }

    /// Row for a given owner.
    pub fn owner_row(&self, owner_id: &str) -> Option<&OwnerLanes> {
        self.owners.iter().find(|o| o.owner.id == owner_id)
    }

    /// Bar for a given assignment.
    pub fn bar_for_assignment(&self, assignment_id: &str) -> Option<&LaidOutBar> {
        self.owners
            .iter()
            .flat_map(|o| o.bars.iter())
            .find(|b| b.assignment.id == assignment_id)
    }

    /// Ids of rejected assignments.
    pub fn rejected_ids(&self) -> Vec<&str> {
        self.rejected
            .iter()
            .map(|e| e.assignment_id.as_str())
            .collect()
    }
}
