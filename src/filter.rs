//! Assignment filtering and filter option discovery.
//!
//! `apply_filter` selects the working subset for layout; it never mutates
//! input and preserves the relative order of surviving assignments.
//! `FilterOptions` lists the owners, subjects, and tags present in a data
//! set, which is what a filter picker offers.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::models::{Assignment, FilterSpec};

/// Returns the assignments that pass `filter`, in input order.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use u_timeline::filter::apply_filter;
/// use u_timeline::models::{Assignment, FilterSpec};
///
/// let d = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let all = vec![
///     Assignment::new("a1", "u1", "p1", d, d),
///     Assignment::new("a2", "u2", "p1", d, d),
/// ];
/// let kept = apply_filter(&all, &FilterSpec::new().with_owners(["u2"]));
/// assert_eq!(kept.len(), 1);
/// assert_eq!(kept[0].id, "a2");
/// ```
pub fn apply_filter<'a, I>(assignments: I, filter: &FilterSpec) -> Vec<&'a Assignment>
where
    I: IntoIterator<Item = &'a Assignment>,
{
    if filter.is_unconstrained() {
        return assignments.into_iter().collect();
    }
    assignments
        .into_iter()
        .filter(|a| filter.matches(a))
        .collect()
}

/// Distinct filter values present in a set of assignments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    /// Owner ids, sorted.
    pub owner_ids: Vec<String>,
    /// Subject id → label (first non-empty label seen), sorted by id.
    pub subjects: BTreeMap<String, String>,
    /// Tag ids, sorted.
    pub tag_ids: Vec<String>,
}

impl FilterOptions {
    /// Collects options from assignments.
    pub fn from_assignments(assignments: &[Assignment]) -> Self {
        let mut owners = BTreeSet::new();
        let mut subjects: BTreeMap<String, String> = BTreeMap::new();
        let mut tags = BTreeSet::new();

        for a in assignments {
            owners.insert(a.owner_id.clone());
            let label = subjects.entry(a.subject_id.clone()).or_default();
            if label.is_empty() {
                label.clone_from(&a.subject_label);
            }
            tags.extend(a.tag_ids.iter().cloned());
        }

        Self {
            owner_ids: owners.into_iter().collect(),
            subjects,
            tag_ids: tags.into_iter().collect(),
        }
    }
}
