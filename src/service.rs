//! JSON request/response boundary.
//!
//! A single operation: decode a [`LayoutRequest`], run the engine, encode
//! the [`LayoutResult`]. Dates travel as ISO `YYYY-MM-DD` strings; a
//! malformed date fails decoding here, before anything reaches the engine.
//!
//! [`LayoutResult`]: crate::models::LayoutResult

use crate::engine::{LayoutEngine, LayoutRequest};
use crate::error::Result;

/// Runs a layout on a JSON request and returns the JSON result.
///
/// # Example
/// ```
/// let request = r#"{
///     "assignments": [
///         {"id": "A", "ownerId": "u1", "subjectId": "p1",
///          "startDate": "2025-01-01", "endDate": "2025-01-10"}
///     ],
///     "owners": [{"id": "u1", "displayName": "Ada"}],
///     "window": {"granularity": "week", "anchorDate": "2025-01-06", "periodCount": 1}
/// }"#;
/// let response = u_timeline::service::layout_json(request).unwrap();
/// assert!(response.contains("\"displayName\":\"Ada\""));
/// ```
pub fn layout_json(request_json: &str) -> Result<String> {
    let request: LayoutRequest = serde_json::from_str(request_json)?;
    let result = LayoutEngine::new().layout_request(&request)?;
    Ok(serde_json::to_string(&result)?)
}
