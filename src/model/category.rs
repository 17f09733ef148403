use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

/// A project category. Categories may nest one level via `parent_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    /// Display hint (hex color string).
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub parent_id: Option<Uuid>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            color: String::new(),
            parent_id: None,
        }
    }
}

/// Flat arena over a category collection.
///
/// Built once per collection version. Preserves the input order (which is
/// also the display order for grouped timelines) and precomputes the
/// parent → children map so subcategory lookups don't rescan the whole
/// collection.
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    categories: Vec<Category>,
    by_id: HashMap<Uuid, usize>,
    children: HashMap<Uuid, Vec<Uuid>>,
}

impl CategoryIndex {
    pub fn new(categories: Vec<Category>) -> Self {
        let by_id: HashMap<Uuid, usize> = categories
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id, i))
            .collect();

        let mut children: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        for category in &categories {
            if let Some(parent_id) = category.parent_id {
                if by_id.contains_key(&parent_id) {
                    children.entry(parent_id).or_default().push(category.id);
                } else {
                    warn!(
                        category = %category.name,
                        parent = %parent_id,
                        "parent category not found; treating as top-level"
                    );
                }
            }
        }

        Self {
            categories,
            by_id,
            children,
        }
    }

    pub fn get(&self, id: Uuid) -> Option<&Category> {
        self.by_id.get(&id).map(|&i| &self.categories[i])
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Categories in input order.
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Direct subcategories of the given category.
    pub fn children_of(&self, id: Uuid) -> &[Uuid] {
        self.children.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Expand a category selection to include each selected category's
    /// subcategories.
    ///
    /// Callers combine the sidebar selection and the advanced-filter
    /// selection into one effective set with this before building a
    /// `FilterState`; the filter pipeline itself only sees the final set.
    pub fn expand_selection<I>(&self, selection: I) -> HashSet<Uuid>
    where
        I: IntoIterator<Item = Uuid>,
    {
        let mut expanded = HashSet::new();
        for id in selection {
            expanded.insert(id);
            expanded.extend(self.children_of(id).iter().copied());
        }
        expanded
    }
}
