//! Filter specification.
//!
//! Each dimension is a set of accepted ids. An empty set places no
//! constraint on its dimension; it does not mean "match nothing".

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::Assignment;

/// Owner / subject / tag predicates applied before layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSpec {
    /// Accepted owner ids.
    pub owner_ids: BTreeSet<String>,
    /// Accepted subject ids.
    pub subject_ids: BTreeSet<String>,
    /// Accepted tag ids (an assignment needs at least one of them).
    pub tag_ids: BTreeSet<String>,
}

impl FilterSpec {
    /// Creates an unconstrained filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to the given owners.
    pub fn with_owners<I, S>(mut self, owner_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.owner_ids.extend(owner_ids.into_iter().map(Into::into));
        self
    }

    /// Restricts to the given subjects.
    pub fn with_subjects<I, S>(mut self, subject_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subject_ids.extend(subject_ids.into_iter().map(Into::into));
        self
    }

    /// Restricts to assignments carrying any of the given tags.
    pub fn with_tags<I, S>(mut self, tag_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tag_ids.extend(tag_ids.into_iter().map(Into::into));
        self
    }

    /// Whether no dimension is constrained.
    pub fn is_unconstrained(&self) -> bool {
        self.owner_ids.is_empty() && self.subject_ids.is_empty() && self.tag_ids.is_empty()
    }

    /// Whether an assignment passes every constrained dimension.
    pub fn matches(&self, assignment: &Assignment) -> bool {
        let owner_ok = self.owner_ids.is_empty() || self.owner_ids.contains(&assignment.owner_id);
        let subject_ok =
            self.subject_ids.is_empty() || self.subject_ids.contains(&assignment.subject_id);
        let tag_ok = self.tag_ids.is_empty()
            || assignment
                .tag_ids
                .iter()
                .any(|t| self.tag_ids.contains(t));

        owner_ok && subject_ok && tag_ok
    }
}
