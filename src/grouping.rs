//! Partitioning of filtered projects into display buckets and the ordering
//! within each bucket.

use std::cmp::Ordering;
use std::collections::HashMap;

use uuid::Uuid;

use crate::model::{Category, CategoryIndex, Project};
use crate::timeline::span::Span;

/// One display partition: a known category, or (with `category: None`) the
/// trailing bucket for projects whose category is missing or unknown.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBucket<'a> {
    pub category: Option<&'a Category>,
    pub projects: Vec<&'a Project>,
}

/// Partition projects by category and order each bucket for display.
///
/// Buckets follow the order categories were supplied in; categories with no
/// matching projects produce no bucket. Projects that don't resolve to a
/// known category land in a single unresolved bucket at the end rather than
/// being dropped.
///
/// Within a bucket: priority rank descending, then start date ascending.
/// Projects without a valid span sort after valid ones in the same priority
/// tier, keeping their relative input order.
pub fn group_and_sort<'a>(
    projects: &[&'a Project],
    categories: &'a CategoryIndex,
) -> Vec<CategoryBucket<'a>> {
    let mut by_category: HashMap<Uuid, Vec<&'a Project>> = HashMap::new();
    let mut unresolved: Vec<&'a Project> = Vec::new();

    for &project in projects {
        match project.category.filter(|&id| categories.contains(id)) {
            Some(id) => by_category.entry(id).or_default().push(project),
            None => unresolved.push(project),
        }
    }

    let mut buckets = Vec::new();
    for category in categories.iter() {
        if let Some(mut members) = by_category.remove(&category.id) {
            sort_bucket(&mut members);
            buckets.push(CategoryBucket {
                category: Some(category),
                projects: members,
            });
        }
    }

    if !unresolved.is_empty() {
        sort_bucket(&mut unresolved);
        buckets.push(CategoryBucket {
            category: None,
            projects: unresolved,
        });
    }

    buckets
}

/// Spans are parsed once up front, not inside the comparator.
fn sort_bucket(projects: &mut Vec<&Project>) {
    let mut decorated: Vec<(Option<Span>, &Project)> =
        projects.iter().map(|&p| (p.span(), p)).collect();

    decorated.sort_by(|(span_a, a), (span_b, b)| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| match (span_a, span_b) {
                (Some(x), Some(y)) => x.start.cmp(&y.start),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
    });

    *projects = decorated.into_iter().map(|(_, p)| p).collect();
}
