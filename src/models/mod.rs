//! Timeline domain models.
//!
//! Provides the data contracts of the layout engine: the externally
//! supplied inputs (assignments, owners, filters, window requests) and
//! the derived outputs (windows, bars, layout results).
//!
//! # Domain Mappings
//!
//! | u-timeline | Project Tracking | Staffing | Facilities |
//! |------------|------------------|----------|------------|
//! | Assignment | Team Role | Placement | Booking |
//! | Owner | Team Member | Consultant | Room |
//! | Subject | Project | Client | Event |
//! | Tag | Key Result | Skill | Department |

mod assignment;
mod filter;
mod layout;
mod window;

pub use assignment::{Assignment, Owner};
pub use filter::FilterSpec;
pub use layout::{LaidOutBar, LayoutResult, OwnerLanes};
pub use window::{Granularity, PeriodHeader, TimeWindow, WindowRequest, DEFAULT_PERIOD_COUNT};
