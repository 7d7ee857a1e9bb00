//! Assignment and owner models.
//!
//! An assignment is one person's role on one subject (usually a project)
//! for an inclusive range of calendar days. Assignments are supplied by
//! the surrounding system and are never mutated by the engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A time-bounded role assignment.
///
/// The date range is inclusive on both ends: an assignment with
/// `start_date == end_date` covers exactly one day.
///
/// When decoded without a `colorKey`, the color key falls back to the
/// subject id, as with [`Assignment::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "AssignmentRecord")]
pub struct Assignment {
    /// Unique assignment identifier.
    pub id: String,
    /// The person doing the work.
    pub owner_id: String,
    /// The subject worked on (e.g., a project).
    pub subject_id: String,
    /// Display label of the subject.
    pub subject_label: String,
    /// Display label of the role.
    pub role_label: String,
    /// First day (inclusive).
    pub start_date: NaiveDate,
    /// Last day (inclusive).
    pub end_date: NaiveDate,
    /// Classification ids (e.g., key results).
    pub tag_ids: BTreeSet<String>,
    /// Opaque grouping token for the presentation layer.
    pub color_key: String,
}

/// Wire form of an assignment; optional fields default to empty.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AssignmentRecord {
    id: String,
    owner_id: String,
    subject_id: String,
    #[serde(default)]
    subject_label: String,
    #[serde(default)]
    role_label: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    #[serde(default)]
    tag_ids: BTreeSet<String>,
    #[serde(default)]
    color_key: String,
}

impl From<AssignmentRecord> for Assignment {
    fn from(r: AssignmentRecord) -> Self {
        let color_key = if r.color_key.is_empty() {
            r.subject_id.clone()
        } else {
            r.color_key
        };
        Self {
            id: r.id,
            owner_id: r.owner_id,
            subject_id: r.subject_id,
            subject_label: r.subject_label,
            role_label: r.role_label,
            start_date: r.start_date,
            end_date: r.end_date,
            tag_ids: r.tag_ids,
            color_key,
        }
    }
}

impl Assignment {
    /// Creates an assignment with empty labels and no tags.
    ///
    /// The color key defaults to the subject id.
    pub fn new(
        id: impl Into<String>,
        owner_id: impl Into<String>,
        subject_id: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        let subject_id = subject_id.into();
        Self {
            id: id.into(),
            owner_id: owner_id.into(),
            color_key: subject_id.clone(),
            subject_id,
            subject_label: String::new(),
            role_label: String::new(),
            start_date,
            end_date,
            tag_ids: BTreeSet::new(),
        }
    }

    /// Sets the subject label.
    pub fn with_subject_label(mut self, label: impl Into<String>) -> Self {
        self.subject_label = label.into();
        self
    }

    /// Sets the role label.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role_label = role.into();
        self
    }

    /// Adds a tag id.
    pub fn with_tag(mut self, tag_id: impl Into<String>) -> Self {
        self.tag_ids.insert(tag_id.into());
        self
    }

    /// Overrides the color key.
    pub fn with_color_key(mut self, color_key: impl Into<String>) -> Self {
        self.color_key = color_key.into();
        self
    }

    /// Number of days covered, inclusive. Zero for an inverted range.
    pub fn duration_days(&self) -> i64 {
        ((self.end_date - self.start_date).num_days() + 1).max(0)
    }

    /// Whether the range is well-formed (`end_date >= start_date`).
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.end_date >= self.start_date
    }

    /// Whether the assignment covers the given day.
    #[inline]
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Whether two inclusive ranges share at least one day.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_date <= other.end_date && other.start_date <= self.end_date
    }
}

/// A person who owns assignments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    /// Owner identifier (matches `Assignment::owner_id`).
    pub id: String,
    /// Human-readable name, used for row ordering.
    pub display_name: String,
}

impl Owner {
    /// Creates an owner.
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }

    /// An owner whose display name is its id.
    pub fn anonymous(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            display_name: id.clone(),
            id,
        }
    }
}
