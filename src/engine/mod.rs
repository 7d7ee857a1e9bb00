//! Layout engine and summary metrics.
//!
//! Composes validation, filtering, calendar windows, lane assignment, and
//! projection into one pure call producing a [`LayoutResult`].
//!
//! # Metrics
//!
//! `TimelineStats` summarizes a finished layout: bar counts, clipping,
//! widest row, and per-owner window occupancy.
//!
//! [`LayoutResult`]: crate::models::LayoutResult

mod layout;
mod stats;

pub use layout::{compute_layout, LayoutEngine, LayoutRequest};
pub use stats::TimelineStats;
