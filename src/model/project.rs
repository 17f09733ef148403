use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::timeline::span::{parse_span, Span};

/// Display classification of a project's lifecycle status.
///
/// The raw status string on [`Project`] is preserved verbatim for filtering;
/// this enum only drives presentation (colors, labels). Unrecognized values
/// read as `Planned`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Planned,
    InProgress,
    Completed,
    Paused,
    Cancelled,
}

impl Status {
    /// Map a raw status string to a display status.
    pub fn classify(raw: &str) -> Status {
        match raw.trim().to_lowercase().as_str() {
            "in-progress" | "in progress" | "active" => Status::InProgress,
            "completed" | "done" | "finished" => Status::Completed,
            "paused" | "on-hold" | "on hold" => Status::Paused,
            "cancelled" | "canceled" => Status::Cancelled,
            _ => Status::Planned,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Planned => "planned",
            Status::InProgress => "in-progress",
            Status::Completed => "completed",
            Status::Paused => "paused",
            Status::Cancelled => "cancelled",
        }
    }
}

/// Project priority.
///
/// Declaration order doubles as the sort rank: `None` < `Low` < `Medium`
/// < `High` < `Critical`, so the derived `Ord` orders buckets the way the
/// timeline displays them (critical first when reversed).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    None,
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    /// Numeric sort rank (0 = no priority, 4 = critical).
    pub fn rank(self) -> u8 {
        self as u8
    }
}

/// A time-boxed work item as delivered by the backend.
///
/// The struct is a read-only input to the engine. Date fields arrive as raw
/// strings and may be absent or unparsable; [`Project::span`] is the only
/// place they are validated. `progress` is expected in 0–100 but is carried
/// through unclamped. The `fortschritt` / `projektleitung` aliases keep
/// compatibility with the legacy wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    /// Referenced category; may be absent or point at an unknown category.
    #[serde(default)]
    pub category: Option<Uuid>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Raw status value, preserved as-is for filtering.
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default, alias = "fortschritt")]
    pub progress: i32,
    #[serde(default, alias = "projektleitung")]
    pub owner: String,
}

impl Project {
    /// Create a project with the given title and everything else defaulted.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            category: None,
            tags: Vec::new(),
            status: String::new(),
            priority: Priority::None,
            start_date: None,
            end_date: None,
            progress: 0,
            owner: String::new(),
        }
    }

    /// Parse and validate the project's date span.
    ///
    /// Returns `None` when either date is missing or unparsable, or when the
    /// end precedes the start.
    pub fn span(&self) -> Option<Span> {
        parse_span(self.start_date.as_deref(), self.end_date.as_deref())
    }

    /// Status classification for display purposes.
    pub fn display_status(&self) -> Status {
        Status::classify(&self.status)
    }
}
