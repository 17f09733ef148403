use chrono::Datelike;

use super::span::Span;
use super::Granularity;

/// Horizontal placement of a project bar on the year axis, in percent of
/// the full axis width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGeometry {
    pub start_percent: f32,
    pub width_percent: f32,
}

impl BarGeometry {
    /// Zero-width geometry; the renderer draws nothing for it.
    pub const HIDDEN: BarGeometry = BarGeometry {
        start_percent: 0.0,
        width_percent: 0.0,
    };

    pub fn is_visible(self) -> bool {
        self.width_percent > 0.0
    }

    /// Raise the width to a minimum for rendering legibility.
    ///
    /// Purely a presentation adjustment: the renderer applies it to bars it
    /// is about to draw, after the true geometry has been computed (and is
    /// still available from [`project_onto_axis`]).
    pub fn with_min_width(self, min_percent: f32) -> BarGeometry {
        BarGeometry {
            start_percent: self.start_percent,
            width_percent: self.width_percent.max(min_percent),
        }
    }
}

/// Map a span onto the 0–100% axis of the given year.
///
/// Spans that begin before the year clamp to the left edge; spans that end
/// after it clamp to the right edge. Spans that don't touch the year at all
/// (or were invalid upstream) come back as [`BarGeometry::HIDDEN`] rather
/// than an error, so one bad record never takes down the rest of the view.
pub fn project_onto_axis(span: Option<Span>, year: i32, granularity: Granularity) -> BarGeometry {
    let Some(span) = span else {
        return BarGeometry::HIDDEN;
    };

    let start_year = span.start.year();
    let end_year = span.end.year();
    if start_year > year {
        // Starts after this year's window; nothing to draw.
        return BarGeometry::HIDDEN;
    }

    let buckets = granularity.bucket_count() as f32;

    let start_percent = if start_year < year {
        0.0
    } else {
        (granularity.bucket_index(span.start) - 1) as f32 / buckets * 100.0
    };

    let end_percent = if end_year > year {
        100.0
    } else if end_year == year {
        granularity.bucket_index(span.end) as f32 / buckets * 100.0
    } else {
        // Ended before this year; degenerate for an active project.
        0.0
    };

    BarGeometry {
        start_percent,
        width_percent: (end_percent - start_percent).max(0.0),
    }
}
