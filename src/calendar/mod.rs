//! Calendar arithmetic for viewing windows.
//!
//! Pure date functions: snapping dates to week/month period starts,
//! shifting by whole periods, and resolving a [`WindowRequest`] into a
//! [`TimeWindow`] with per-period headers. Stateless; switching
//! granularity is expressed by the caller re-anchoring at the current
//! date (see [`WindowRequest::switch_granularity`]).
//!
//! [`WindowRequest`]: crate::models::WindowRequest
//! [`TimeWindow`]: crate::models::TimeWindow
//! [`WindowRequest::switch_granularity`]: crate::models::WindowRequest::switch_granularity

mod period;
mod window;

pub use period::{days_in_month, period_end, period_start, shift_periods};
pub use window::compute_window;
