//! Presentation color hints for timeline renderers.
//!
//! Colors are plain hex strings so any rendering layer (web, TUI, native)
//! can consume them. The engine itself never reads this module; it exists
//! so tag/status colors live in exactly one place instead of being
//! duplicated per view.

use crate::model::{Priority, Status};

// ── Bars ─────────────────────────────────────────────────────────────────────

/// Minimum visual bar width applied by renderers for legibility. Applied
/// after the true geometry is computed, never in place of it.
pub const MIN_BAR_WIDTH_PERCENT: f32 = 5.0;

// ── Tag colors ───────────────────────────────────────────────────────────────

pub const DEFAULT_TAG_COLOR: &str = "#9e9e9e";

const TAG_COLORS: &[(&str, &str)] = &[
    ("RPA", "#4285f4"),
    ("KI", "#ab47bc"),
    ("Automatisierung", "#34a853"),
    ("Cloud", "#03a9f4"),
    ("Security", "#e53935"),
    ("Reporting", "#fb8c00"),
    ("Infrastruktur", "#00bcd4"),
];

/// Display color for a tag chip, with a neutral fallback for tags that have
/// no dedicated entry.
pub fn tag_color(tag: &str) -> &'static str {
    TAG_COLORS
        .iter()
        .find(|(name, _)| *name == tag)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_TAG_COLOR)
}

// ── Status colors ────────────────────────────────────────────────────────────

pub fn status_color(status: Status) -> &'static str {
    match status {
        Status::Planned => "#90a4ae",
        Status::InProgress => "#4285f4",
        Status::Completed => "#34a853",
        Status::Paused => "#ffc107",
        Status::Cancelled => "#e53935",
    }
}

// ── Priority colors ──────────────────────────────────────────────────────────

pub fn priority_color(priority: Priority) -> &'static str {
    match priority {
        Priority::None => "#9e9e9e",
        Priority::Low => "#8bc34a",
        Priority::Medium => "#ffc107",
        Priority::High => "#fb8c00",
        Priority::Critical => "#e53935",
    }
}

// ── Category fallback palette ────────────────────────────────────────────────

/// Cycled through for categories that carry no color hint of their own.
pub const CATEGORY_FALLBACK_COLORS: &[&str] = &[
    "#4285f4", // blue
    "#34a853", // green
    "#ab47bc", // purple
    "#fb8c00", // orange
    "#03a9f4", // light blue
    "#e53935", // red
    "#00bcd4", // cyan
    "#ffc107", // amber
];

pub fn category_fallback_color(index: usize) -> &'static str {
    CATEGORY_FALLBACK_COLORS[index % CATEGORY_FALLBACK_COLORS.len()]
}
