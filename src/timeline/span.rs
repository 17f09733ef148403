use chrono::{Datelike, NaiveDate};
use tracing::trace;

use crate::model::Project;

/// A validated `[start, end]` date interval with `start <= end`.
///
/// Only [`parse_span`] (or [`Project::span`]) produces these from raw input,
/// so downstream code never sees a reversed or half-missing pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Span {
    /// Whether the span overlaps the given calendar year, measured in
    /// whole years. Multi-year spans crossing the year count as active.
    pub fn overlaps_year(self, year: i32) -> bool {
        self.start.year() <= year && self.end.year() >= year
    }
}

/// Try parsing a date string with several common formats.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    for fmt in &[
        "%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y", "%d-%m-%Y", "%d.%m.%Y", "%Y/%m/%d",
    ] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    None
}

/// Validate a pair of raw date fields into a [`Span`].
///
/// Returns `None` when either value is missing or unparsable, or when the
/// end precedes the start. Ordering is never repaired: a reversed span is
/// bad data and stays off the timeline.
pub fn parse_span(start_raw: Option<&str>, end_raw: Option<&str>) -> Option<Span> {
    let start = parse_date(start_raw?)?;
    let end = parse_date(end_raw?)?;
    if end < start {
        trace!(%start, %end, "rejecting reversed date span");
        return None;
    }
    Some(Span { start, end })
}

/// Whether a project's span overlaps the given calendar year.
///
/// Projects without a valid span are never active.
pub fn is_active_in_year(project: &Project, year: i32) -> bool {
    project.span().is_some_and(|span| span.overlaps_year(year))
}
