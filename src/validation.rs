//! Ingestion validation for assignments.
//!
//! Checks each assignment before it enters the layout pipeline. Detects:
//! - Inverted date ranges (`end_date < start_date`)
//! - Blank assignment or owner ids
//!
//! Failures never abort a layout: invalid assignments are excluded and
//! reported next to the result so the rest of the data still lays out.

use serde::{Deserialize, Serialize};

use crate::models::Assignment;

/// Why an assignment was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct ValidationError {
    /// Id of the rejected assignment (may be empty for `BlankId`).
    pub assignment_id: String,
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationErrorKind {
    /// The assignment ends before it starts.
    InvertedRange,
    /// The assignment id or owner id is empty.
    BlankId,
}

impl ValidationError {
    fn new(
        assignment_id: impl Into<String>,
        kind: ValidationErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            assignment_id: assignment_id.into(),
            kind,
            message: message.into(),
        }
    }
}

/// Validates a single assignment.
///
/// Checks:
/// 1. `id` and `owner_id` are not blank
/// 2. `end_date >= start_date`
pub fn validate_assignment(assignment: &Assignment) -> Result<(), ValidationError> {
    if assignment.id.trim().is_empty() {
        return Err(ValidationError::new(
            "",
            ValidationErrorKind::BlankId,
            format!(
                "Assignment for owner '{}' has a blank id",
                assignment.owner_id
            ),
        ));
    }

    if assignment.owner_id.trim().is_empty() {
        return Err(ValidationError::new(
            &assignment.id,
            ValidationErrorKind::BlankId,
            format!("Assignment '{}' has a blank owner id", assignment.id),
        ));
    }

    if !assignment.is_well_formed() {
        return Err(ValidationError::new(
            &assignment.id,
            ValidationErrorKind::InvertedRange,
            format!(
                "Assignment '{}' ends ({}) before it starts ({})",
                assignment.id, assignment.end_date, assignment.start_date
            ),
        ));
    }

    Ok(())
}

/// Splits assignments into accepted ones and rejection reports.
///
/// Accepted assignments keep their input order.
pub fn partition_valid(assignments: &[Assignment]) -> (Vec<&Assignment>, Vec<ValidationError>) {
    let mut accepted = Vec::with_capacity(assignments.len());
    let mut rejected = Vec::new();

    for a in assignments {
        match validate_assignment(a) {
            Ok(()) => accepted.push(a),
            Err(e) => {
                tracing::warn!(
                    assignment_id = %e.assignment_id,
                    kind = ?e.kind,
                    "rejected assignment: {}",
                    e.message
                );
                rejected.push(e);
            }
        }
    }

    (accepted, rejected)
}
