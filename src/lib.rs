//! Resource-timeline layout engine.
//!
//! Given time-bounded role assignments (a person doing a role on a project
//! for a date range) and a navigable viewing window, computes a
//! non-overlapping lane placement per person and projects each assignment
//! onto the window as a normalized, clipped bar.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Assignment`, `Owner`, `FilterSpec`,
//!   `WindowRequest`, `TimeWindow`, `LaidOutBar`, `LayoutResult`
//! - **`calendar`**: Week/month period arithmetic and window resolution
//! - **`filter`**: Owner/subject/tag predicates and option discovery
//! - **`lanes`**: Minimum-lane interval partitioning per owner
//! - **`projection`**: Clipped fractional bar coordinates
//! - **`engine`**: The layout pipeline and summary metrics
//! - **`validation`**: Ingestion checks (inverted ranges, blank ids)
//! - **`service`**: JSON request/response boundary
//!
//! # Architecture
//!
//! Data flows one way: raw assignments → validated → filtered → grouped by
//! owner → laned → projected → `LayoutResult`. Every call is a pure
//! function of its inputs; nothing is cached or persisted, and rendering
//! (colors, pixels, tooltips) is left to the consumer.
//!
//! # References
//!
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1
//! - Golumbic (2004), "Algorithmic Graph Theory and Perfect Graphs", Ch. 8

pub mod calendar;
pub mod engine;
pub mod error;
pub mod filter;
pub mod lanes;
pub mod models;
pub mod projection;
pub mod service;
pub mod validation;

pub use engine::{compute_layout, LayoutEngine, LayoutRequest};
pub use error::LayoutError;
