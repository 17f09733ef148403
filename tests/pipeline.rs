//! End-to-end tests for the full timeline pipeline: year narrowing,
//! filtering, grouping, and axis projection composed through
//! `compute_timeline`.

use std::collections::HashSet;

use portfolio_timeline::{
    compute_timeline, Category, CategoryIndex, FilterState, Granularity, Priority, Project,
    ViewConfig,
};
use uuid::Uuid;

fn dated(title: &str, start: &str, end: &str) -> Project {
    let mut p = Project::new(title);
    p.start_date = Some(start.to_string());
    p.end_date = Some(end.to_string());
    p
}

#[test]
fn quarter_axis_orders_by_priority_and_sizes_bars() {
    let digital = Category::new("Digitalisierung");
    let digital_id = digital.id;
    let categories = CategoryIndex::new(vec![digital]);

    let mut short_high = dated("February push", "2023-02-01", "2023-02-20");
    short_high.priority = Priority::High;
    short_high.category = Some(digital_id);
    let mut year_critical = dated("Year-long program", "2023-01-01", "2023-12-31");
    year_critical.priority = Priority::Critical;
    year_critical.category = Some(digital_id);

    let projects = vec![short_high, year_critical];
    let view = ViewConfig::new(2023, Granularity::Quarters);
    let groups = compute_timeline(&projects, &categories, &FilterState::default(), view);

    assert_eq!(groups.len(), 1);
    let bars = &groups[0].bars;
    assert_eq!(bars.len(), 2);

    // Critical outranks high within the bucket.
    assert_eq!(bars[0].project.title, "Year-long program");
    assert_eq!(bars[0].geometry.start_percent, 0.0);
    assert_eq!(bars[0].geometry.width_percent, 100.0);

    // February lies in Q1: the bar covers exactly the first quarter.
    assert_eq!(bars[1].project.title, "February push");
    assert_eq!(bars[1].geometry.start_percent, 0.0);
    assert_eq!(bars[1].geometry.width_percent, 25.0);
}

#[test]
fn year_window_excludes_other_years_and_invalid_spans() {
    let categories = CategoryIndex::new(Vec::new());

    let in_year = dated("this year", "2023-03-01", "2023-05-01");
    let other_year = dated("next year", "2024-01-01", "2024-03-01");
    let spanning = dated("spanning", "2022-10-01", "2024-02-01");
    let broken = dated("broken", "2023-05-01", "2023-01-01"); // reversed
    let projects = vec![in_year, other_year, spanning, broken];

    let view = ViewConfig::new(2023, Granularity::Months);
    let groups = compute_timeline(&projects, &categories, &FilterState::default(), view);

    let titles: Vec<&str> = groups
        .iter()
        .flat_map(|g| g.bars.iter().map(|b| b.project.title.as_str()))
        .collect();
    // Equal priority, so the earlier start date leads.
    assert_eq!(titles, ["spanning", "this year"]);

    // The multi-year project clamps to both edges.
    let spanning_bar = groups[0]
        .bars
        .iter()
        .find(|b| b.project.title == "spanning")
        .unwrap();
    assert_eq!(spanning_bar.geometry.start_percent, 0.0);
    assert_eq!(spanning_bar.geometry.width_percent, 100.0);
}

#[test]
fn tag_filter_narrows_the_rendered_timeline() {
    let categories = CategoryIndex::new(Vec::new());

    let mut rpa = dated("RPA pilot", "2023-02-01", "2023-06-01");
    rpa.tags = vec!["RPA".to_string()];
    let mut cloud = dated("Cloud migration", "2023-03-01", "2023-09-01");
    cloud.tags = vec!["Cloud".to_string()];
    let projects = vec![rpa, cloud];

    let filters = FilterState {
        tags: HashSet::from(["RPA".to_string()]),
        ..FilterState::default()
    };
    let view = ViewConfig::new(2023, Granularity::Weeks);
    let groups = compute_timeline(&projects, &categories, &filters, view);

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].bars.len(), 1);
    assert_eq!(groups[0].bars[0].project.title, "RPA pilot");
}

#[test]
fn sidebar_selection_expands_to_subcategories_before_filtering() {
    let parent = Category::new("Digitalisierung");
    let parent_id = parent.id;
    let mut child = Category::new("RPA");
    child.parent_id = Some(parent_id);
    let child_id = child.id;
    let other = Category::new("Infrastruktur");
    let other_id = other.id;
    let categories = CategoryIndex::new(vec![parent, child, other]);

    let mut in_child = dated("child project", "2023-01-01", "2023-03-01");
    in_child.category = Some(child_id);
    let mut in_other = dated("other project", "2023-01-01", "2023-03-01");
    in_other.category = Some(other_id);
    let projects = vec![in_child, in_other];

    // Selecting the parent in the sidebar pulls in its subcategory.
    let filters = FilterState {
        categories: categories.expand_selection([parent_id]),
        ..FilterState::default()
    };
    let view = ViewConfig::new(2023, Granularity::Quarters);
    let groups = compute_timeline(&projects, &categories, &filters, view);

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].category.unwrap().name, "RPA");
    assert_eq!(groups[0].bars[0].project.title, "child project");
}

#[test]
fn grouping_keeps_every_filtered_project() {
    let known = Category::new("Known");
    let known_id = known.id;
    let categories = CategoryIndex::new(vec![known]);

    let mut projects = Vec::new();
    for i in 0..10 {
        let mut p = dated(&format!("p{i}"), "2023-01-01", "2023-12-31");
        p.category = match i % 3 {
            0 => Some(known_id),
            1 => Some(Uuid::new_v4()), // unknown reference
            _ => None,
        };
        projects.push(p);
    }

    let view = ViewConfig::new(2023, Granularity::Months);
    let groups = compute_timeline(&projects, &categories, &FilterState::default(), view);
    let total: usize = groups.iter().map(|g| g.bars.len()).sum();
    assert_eq!(total, projects.len());

    // Unknown and missing category references share the trailing bucket.
    assert!(groups.last().unwrap().category.is_none());
}

#[test]
fn recomputation_with_identical_inputs_is_identical() {
    let categories = CategoryIndex::new(vec![Category::new("Alpha")]);
    let projects = vec![
        dated("a", "2023-01-01", "2023-06-30"),
        dated("b", "2023-04-01", "2023-10-31"),
    ];
    let filters = FilterState::default();
    let view = ViewConfig::new(2023, Granularity::Months);

    let first = compute_timeline(&projects, &categories, &filters, view);
    let second = compute_timeline(&projects, &categories, &filters, view);
    assert_eq!(first, second);
}

#[test]
fn backend_payload_with_legacy_field_names_flows_through() {
    let digital_id = Uuid::new_v4();
    let payload = format!(
        r#"[
            {{
                "id": "{}",
                "title": "Prozessautomatisierung",
                "category": "{digital_id}",
                "tags": ["RPA", "Automatisierung"],
                "status": "in-progress",
                "priority": "critical",
                "startDate": "2023-01-15",
                "endDate": "2023-11-30",
                "fortschritt": 55,
                "projektleitung": "M. Keller"
            }},
            {{
                "id": "{}",
                "title": "Altes Projekt",
                "status": "completed",
                "startDate": "2021-01-01",
                "endDate": "2021-06-30",
                "fortschritt": 100
            }}
        ]"#,
        Uuid::new_v4(),
        Uuid::new_v4()
    );
    let projects: Vec<Project> = serde_json::from_str(&payload).unwrap();

    let mut digital = Category::new("Digitalisierung");
    digital.id = digital_id;
    let categories = CategoryIndex::new(vec![digital]);

    let view = ViewConfig::new(2023, Granularity::Quarters);
    let groups = compute_timeline(&projects, &categories, &FilterState::default(), view);

    // Only the 2023-active project survives the year window.
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].category.unwrap().name, "Digitalisierung");
    let bar = &groups[0].bars[0];
    assert_eq!(bar.project.owner, "M. Keller");
    assert_eq!(bar.project.progress, 55);
    assert_eq!(bar.geometry.start_percent, 0.0);
    assert_eq!(bar.geometry.width_percent, 100.0);
}
