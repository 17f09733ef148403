//! Timeline placement: span validation, year-window selection, and the
//! projection of date spans onto a normalized 0–100% axis.

pub mod projection;
pub mod span;

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Error;
use crate::filter::{filter_projects, FilterState};
use crate::grouping::group_and_sort;
use crate::model::{Category, CategoryIndex, Project};

pub use projection::{project_onto_axis, BarGeometry};
pub use span::{is_active_in_year, parse_date, parse_span, Span};

/// Controls how many sub-year buckets the axis is divided into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Quarters,
    Months,
    Weeks,
}

impl Granularity {
    /// Number of equal buckets the year is divided into.
    pub const fn bucket_count(self) -> u32 {
        match self {
            Granularity::Quarters => 4,
            Granularity::Months => 12,
            Granularity::Weeks => 52,
        }
    }

    /// 1-based bucket index of a date within its year.
    ///
    /// The week index is derived from the day of year and capped at 52, so
    /// the last day or two of a year land in week 52 rather than a 53rd
    /// bucket.
    pub fn bucket_index(self, date: NaiveDate) -> u32 {
        match self {
            Granularity::Quarters => date.month0() / 3 + 1,
            Granularity::Months => date.month(),
            Granularity::Weeks => ((date.ordinal() - 1) / 7 + 1).min(52),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Granularity::Quarters => "quarters",
            Granularity::Months => "months",
            Granularity::Weeks => "weeks",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "quarters" => Ok(Granularity::Quarters),
            "months" => Ok(Granularity::Months),
            "weeks" => Ok(Granularity::Weeks),
            _ => Err(Error::unknown_granularity(s)),
        }
    }
}

/// The view selection for one timeline computation: which calendar year is
/// shown and at what granularity.
///
/// A plain value passed into the engine on every recomputation; the engine
/// keeps no view state of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewConfig {
    pub year: i32,
    pub granularity: Granularity,
}

impl ViewConfig {
    pub fn new(year: i32, granularity: Granularity) -> Self {
        Self { year, granularity }
    }
}

/// One positioned project bar in a rendered timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineBar<'a> {
    pub project: &'a Project,
    pub geometry: BarGeometry,
}

/// One display group: a category (or the unresolved bucket) and its
/// positioned bars, already sorted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineGroup<'a> {
    /// `None` marks the trailing bucket of projects whose category is
    /// missing or unknown.
    pub category: Option<&'a Category>,
    pub bars: Vec<TimelineBar<'a>>,
}

/// Run the full pipeline: narrow to the active year, apply the filter,
/// group and sort, and compute per-bar geometry.
///
/// Bars carry the raw geometry; renderers apply
/// [`BarGeometry::with_min_width`] themselves if they want a legibility
/// floor.
pub fn compute_timeline<'a>(
    projects: &'a [Project],
    categories: &'a CategoryIndex,
    filters: &FilterState,
    view: ViewConfig,
) -> Vec<TimelineGroup<'a>> {
    let active: Vec<&Project> = projects
        .iter()
        .filter(|p| is_active_in_year(p, view.year))
        .collect();
    let filtered = filter_projects(active.iter().copied(), filters);
    debug!(
        total = projects.len(),
        active = active.len(),
        filtered = filtered.len(),
        year = view.year,
        granularity = %view.granularity,
        "computed timeline window"
    );

    group_and_sort(&filtered, categories)
        .into_iter()
        .map(|bucket| TimelineGroup {
            category: bucket.category,
            bars: bucket
                .projects
                .into_iter()
                .map(|project| TimelineBar {
                    project,
                    geometry: project_onto_axis(project.span(), view.year, view.granularity),
                })
                .collect(),
        })
        .collect()
}
