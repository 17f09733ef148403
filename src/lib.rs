//! Timeline projection and filtering engine for project portfolio views.
//!
//! Takes a read-only collection of projects and categories plus the user's
//! view selection (year, granularity, filters) and computes everything a
//! calendar renderer needs: which projects are visible, where each bar sits
//! on a normalized 0–100% axis, and how the bars are grouped and ordered.
//!
//! The engine is deterministic and side-effect free: no I/O, no mutation of
//! inputs, no state between invocations. Malformed records (missing or
//! unparsable dates, unknown category references, out-of-range progress)
//! degrade to well-defined defaults instead of failing the computation.
//!
//! # Example
//!
//! ```
//! use portfolio_timeline::{
//!     compute_timeline, CategoryIndex, FilterState, Granularity, Project, ViewConfig,
//! };
//!
//! let mut project = Project::new("ERP Rollout");
//! project.start_date = Some("2023-02-01".into());
//! project.end_date = Some("2023-08-31".into());
//! let projects = vec![project];
//! let categories = CategoryIndex::new(Vec::new());
//!
//! let view = ViewConfig::new(2023, Granularity::Quarters);
//! let groups = compute_timeline(&projects, &categories, &FilterState::default(), view);
//!
//! assert_eq!(groups.len(), 1);
//! let bar = &groups[0].bars[0];
//! assert_eq!(bar.geometry.start_percent, 0.0);
//! assert_eq!(bar.geometry.width_percent, 75.0);
//! ```

pub mod error;
pub mod filter;
pub mod grouping;
pub mod model;
pub mod theme;
pub mod timeline;

pub use error::{Error, Result};
pub use filter::{available_tags, filter_projects, DateRange, FilterState};
pub use grouping::{group_and_sort, CategoryBucket};
pub use model::{Category, CategoryIndex, Priority, Project, Status};
pub use timeline::{
    compute_timeline, is_active_in_year, parse_date, parse_span, project_onto_axis, BarGeometry,
    Granularity, Span, TimelineBar, TimelineGroup, ViewConfig,
};
