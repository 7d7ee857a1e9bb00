//! Layout summary metrics.
//!
//! Computes simple indicators from a finished layout for dashboards
//! and logging.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Owner Count | Rows in the layout |
//! | Bar Count | Visible bars across all rows |
//! | Clipped Left/Right | Bars whose true span extends past a window edge |
//! | Max Lanes | Widest row |
//! | Occupancy | Window days covered by at least one of an owner's bars / window days |

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{LayoutResult, OwnerLanes, TimeWindow};

/// Summary of a layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineStats {
    /// Number of owner rows.
    pub owner_count: usize,
    /// Number of visible bars.
    pub bar_count: usize,
    /// Bars starting before the window.
    pub clipped_left: usize,
    /// Bars ending after the window.
    pub clipped_right: usize,
    /// Largest lane count of any owner.
    pub max_lanes: usize,
    /// Per-owner occupancy (0.0..1.0), keyed by owner id.
    pub occupancy_by_owner: BTreeMap<String, f64>,
    /// Mean occupancy over owners (0.0 when there are none).
    pub avg_occupancy: f64,
}

impl TimelineStats {
    /// Computes metrics from a layout.
    pub fn calculate(result: &LayoutResult) -> Self {
        let bars = result.owners.iter().flat_map(|o| o.bars.iter());
        let (mut bar_count, mut clipped_left, mut clipped_right) = (0, 0, 0);
        for bar in bars {
            bar_count += 1;
            clipped_left += usize::from(bar.clipped_left);
            clipped_right += usize::from(bar.clipped_right);
        }

        let occupancy_by_owner: BTreeMap<String, f64> = result
            .owners
            .iter()
            .map(|row| (row.owner.id.clone(), occupancy(row, &result.window)))
            .collect();

        let avg_occupancy = if occupancy_by_owner.is_empty() {
            0.0
        } else {
            occupancy_by_owner.values().sum::<f64>() / occupancy_by_owner.len() as f64
        };

        Self {
            owner_count: result.owners.len(),
            bar_count,
            clipped_left,
            clipped_right,
            max_lanes: result.owners.iter().map(|o| o.max_lanes).max().unwrap_or(0),
            occupancy_by_owner,
            avg_occupancy,
        }
    }
}

/// Fraction of window days covered by the union of a row's bars.
fn occupancy(row: &OwnerLanes, window: &TimeWindow) -> f64 {
    if window.total_days <= 0 {
        return 0.0;
    }

    // Visible day spans as inclusive offsets from the window start
    let mut spans: Vec<(i64, i64)> = row
        .bars
        .iter()
        .map(|b| {
            let start = b.assignment.start_date.max(window.start);
            let end = b.assignment.end_date.min(window.end);
            (window.day_offset(start), window.day_offset(end))
        })
        .collect();
    spans.sort_unstable();

    let mut covered = 0i64;
    let mut current: Option<(i64, i64)> = None;
    for (start, end) in spans {
        current = match current {
            Some((s, e)) if start <= e + 1 => Some((s, e.max(end))),
            Some((s, e)) => {
                covered += e - s + 1;
                Some((start, end))
            }
            None => Some((start, end)),
        };
    }
    if let Some((s, e)) = current {
        covered += e - s + 1;
    }

    covered as f64 / window.total_days as f64
}
