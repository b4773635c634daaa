//! Category tree for catalog navigation.
//!
//! Categories form an immutable recursive tree: roots have no parent, every
//! node owns its subcategories, and ids are unique across the whole tree.
//! The storefront only reads this structure; creation, update, and deletion
//! go through the catalog provider, which returns a rebuilt tree.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A category node in the catalog hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Display label.
    pub label: String,
    /// URL-friendly slug.
    pub slug: String,
    /// Parent category ID (None for root categories).
    pub parent: Option<CategoryId>,
    /// Category description.
    pub description: String,
    /// Category image URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Child categories. An empty list is a leaf; rendering treats a missing
    /// field and `[]` identically.
    #[serde(default)]
    pub subcategories: Vec<Category>,
}

impl Category {
    /// Create a category with no children.
    pub fn new(
        id: CategoryId,
        label: impl Into<String>,
        slug: impl Into<String>,
        parent: Option<CategoryId>,
    ) -> Self {
        Self {
            id,
            label: label.into(),
            slug: slug.into(),
            parent,
            description: String::new(),
            image: None,
            subcategories: Vec::new(),
        }
    }

    /// Check if this is a root category.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Check if this category has no children.
    pub fn is_leaf(&self) -> bool {
        self.subcategories.is_empty()
    }

    /// Lazily traverse this node and its descendants in pre-order.
    pub fn iter(&self) -> CategoryIter<'_> {
        CategoryIter {
            stack: vec![self],
        }
    }

    /// Number of nodes in this subtree, including this node.
    pub fn len(&self) -> usize {
        self.iter().count()
    }
}

/// A forest of root categories, as delivered by the catalog provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct CategoryTree {
    /// Root categories in display order.
    pub roots: Vec<Category>,
}

impl CategoryTree {
    /// Create a tree from root categories.
    pub fn new(roots: Vec<Category>) -> Self {
        Self { roots }
    }

    /// Rebuild the tree from flat rows, the form admin CRUD works on.
    ///
    /// Rows keep their input order among siblings. A row whose parent id is
    /// absent from the set is treated as a root.
    pub fn from_flat(rows: Vec<Category>) -> Self {
        use std::collections::{HashMap, HashSet};

        let ids: HashSet<i64> = rows.iter().map(|c| c.id.value()).collect();
        let mut by_parent: HashMap<Option<i64>, Vec<Category>> = HashMap::new();
        for mut row in rows {
            row.subcategories.clear();
            let key = row.parent.map(|p| p.value()).filter(|p| ids.contains(p));
            by_parent.entry(key).or_default().push(row);
        }

        fn attach(node: &mut Category, by_parent: &mut HashMap<Option<i64>, Vec<Category>>) {
            if let Some(children) = by_parent.remove(&Some(node.id.value())) {
                node.subcategories = children;
                for child in &mut node.subcategories {
                    attach(child, by_parent);
                }
            }
        }

        let mut roots = by_parent.remove(&None).unwrap_or_default();
        for root in &mut roots {
            attach(root, &mut by_parent);
        }
        CategoryTree::new(roots)
    }

    /// Lazily traverse every node in pre-order, depth-first.
    ///
    /// Each call returns a fresh, restartable iterator.
    pub fn iter(&self) -> CategoryIter<'_> {
        // Pre-order pops from the back, so seed the stack in reverse.
        CategoryIter {
            stack: self.roots.iter().rev().collect(),
        }
    }

    /// Flatten the tree into pre-order, every node exactly once.
    ///
    /// Admin list views and id lookups work on this flat form.
    pub fn flatten(&self) -> Vec<&Category> {
        self.iter().collect()
    }

    /// Find a node anywhere in the tree by id.
    pub fn find_by_id(&self, id: CategoryId) -> Option<&Category> {
        self.iter().find(|c| c.id == id)
    }

    /// Find a node anywhere in the tree by slug.
    pub fn find_by_slug(&self, slug: &str) -> Option<&Category> {
        self.iter().find(|c| c.slug == slug)
    }

    /// Total number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Check if the tree has no categories.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

/// Pre-order, depth-first iterator over a category tree.
///
/// Uses an explicit stack rather than recursion so traversal stays lazy and
/// depth-independent.
pub struct CategoryIter<'a> {
    stack: Vec<&'a Category>,
}

impl<'a> Iterator for CategoryIter<'a> {
    type Item = &'a Category;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Children are pushed reversed so the first child is visited next.
        self.stack.extend(node.subcategories.iter().rev());
        Some(node)
    }
}

/// Build a URL-friendly slug from a label, the way the admin console does
/// when creating categories.
pub fn slugify(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
