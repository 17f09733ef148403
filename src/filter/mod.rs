//! Compound multi-field filtering of the project collection.
//!
//! A [`FilterState`] carries one clause per filterable dimension. Every
//! clause is a no-op while it sits at its unconstrained default (empty set,
//! full progress range, unset date bounds), and all constrained clauses are
//! AND-combined. Applying a filter never mutates the inputs; the result is
//! a stable, order-preserving subset of borrowed projects.
//!
//! The category clause sees one effective set. When the surrounding UI has
//! two independent category selections (sidebar and advanced filter), the
//! caller unions them before constructing the `FilterState`, typically via
//! [`CategoryIndex::expand_selection`](crate::model::CategoryIndex::expand_selection).

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::trace;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::model::{Priority, Project};
use crate::timeline::span::parse_date;


/// The unconstrained progress range.
pub const FULL_PROGRESS_RANGE: (i32, i32) = (0, 100);

fn full_progress_range() -> (i32, i32) {
    FULL_PROGRESS_RANGE
}

/// Optional inclusive date bounds on a project's span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Build a range from raw UI literals.
    ///
    /// Unlike project data, these bounds are typed into controls by the
    /// user; a literal that doesn't parse is reported instead of silently
    /// dropped.
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Result<DateRange> {
        let parse_bound = |raw: Option<&str>| -> Result<Option<NaiveDate>> {
            match raw {
                None => Ok(None),
                Some(s) => parse_date(s)
                    .map(Some)
                    .ok_or_else(|| Error::invalid_date_bound(s)),
            }
        };
        Ok(DateRange {
            start: parse_bound(start)?,
            end: parse_bound(end)?,
        })
    }

    pub fn is_unconstrained(self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

/// All user-selected filter constraints for one evaluation.
///
/// Constructed by the UI layer, passed by value into the engine, and
/// replaced wholesale on every interaction. [`FilterState::default`] is the
/// unconstrained state that passes every project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub status: HashSet<String>,
    #[serde(default)]
    pub priority: HashSet<Priority>,
    #[serde(default)]
    pub tags: HashSet<String>,
    /// Effective category set (already unioned by the caller).
    #[serde(default)]
    pub categories: HashSet<Uuid>,
    #[serde(default)]
    pub owner: HashSet<String>,
    #[serde(default = "full_progress_range")]
    pub progress_range: (i32, i32),
    #[serde(default)]
    pub date_range: DateRange,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            status: HashSet::new(),
            priority: HashSet::new(),
            tags: HashSet::new(),
            categories: HashSet::new(),
            owner: HashSet::new(),
            progress_range: FULL_PROGRESS_RANGE,
            date_range: DateRange::default(),
        }
    }
}

impl FilterState {
    /// Whether any clause is constrained. Drives the "reset filters"
    /// affordance in the UI; filtering itself doesn't consult it.
    pub fn has_active_filters(&self) -> bool {
        !self.status.is_empty()
            || !self.priority.is_empty()
            || !self.tags.is_empty()
            || !self.categories.is_empty()
            || !self.owner.is_empty()
            || self.progress_range != FULL_PROGRESS_RANGE
            || !self.date_range.is_unconstrained()
    }

    /// Evaluate all clauses against one project.
    pub fn matches(&self, project: &Project) -> bool {
        self.matches_status(project)
            && self.matches_priority(project)
            && self.matches_tags(project)
            && self.matches_category(project)
            && self.matches_owner(project)
            && self.matches_progress(project)
            && self.matches_date_range(project)
    }

    fn matches_status(&self, project: &Project) -> bool {
        self.status.is_empty() || self.status.contains(&project.status)
    }

    fn matches_priority(&self, project: &Project) -> bool {
        self.priority.is_empty()
            || (project.priority != Priority::None && self.priority.contains(&project.priority))
    }

    fn matches_tags(&self, project: &Project) -> bool {
        self.tags.is_empty() || project.tags.iter().any(|tag| self.tags.contains(tag))
    }

    fn matches_category(&self, project: &Project) -> bool {
        self.categories.is_empty()
            || project
                .category
                .is_some_and(|id| self.categories.contains(&id))
    }

    fn matches_owner(&self, project: &Project) -> bool {
        self.owner.is_empty() || self.owner.contains(&project.owner)
    }

    fn matches_progress(&self, project: &Project) -> bool {
        if self.progress_range == FULL_PROGRESS_RANGE {
            return true;
        }
        let (min, max) = self.progress_range;
        min <= project.progress && project.progress <= max
    }

    fn matches_date_range(&self, project: &Project) -> bool {
        if self.date_range.is_unconstrained() {
            return true;
        }
        // With either bound set, a project without a valid span can't match.
        let Some(span) = project.span() else {
            trace!(project = %project.id, "invalid span fails constrained date range");
            return false;
        };
        self.date_range.start.is_none_or(|bound| span.start >= bound)
            && self.date_range.end.is_none_or(|bound| span.end <= bound)
    }
}

/// Apply a filter, keeping the input order.
///
/// Accepts anything that yields project references, so a previously
/// filtered result can be fed straight back in.
pub fn filter_projects<'a, I>(projects: I, filters: &FilterState) -> Vec<&'a Project>
where
    I: IntoIterator<Item = &'a Project>,
{
    projects
        .into_iter()
        .filter(|p| filters.matches(p))
        .collect()
}

/// Distinct tags across the collection, sorted. Feeds the tag filter UI.
pub fn available_tags(projects: &[Project]) -> Vec<String> {
    let mut tags: Vec<String> = projects
        .iter()
        .flat_map(|p| p.tags.iter().cloned())
        .collect();
    tags.sort();
    tags.dedup();
    tags
}
