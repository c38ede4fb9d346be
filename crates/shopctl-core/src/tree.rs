//! Category tree flattening and descendant collection.
//!
//! The API delivers categories as a flat, parent-referencing list. These are
//! pure functions over that list: they take the records and the caller's
//! expand-state explicitly, hold no state of their own, and tolerate the
//! inconsistencies the API is known to produce (orphaned parent references,
//! and, defensively, cycles).

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::catalog::Category;

/// One row of a flattened category tree, ready for an expandable list.
#[derive(Debug, Clone)]
pub struct TreeItem<'a> {
    /// Category id in decimal string form, matching the expand-state keys.
    pub id: String,
    pub label: &'a str,
    /// Number of ancestor links up to a root; roots are depth 0.
    pub depth: usize,
    /// Whether children of this node are present in the input list.
    pub has_children: bool,
    pub category: &'a Category,
}

/// Flattens a parent-referencing category list into an ordered,
/// depth-annotated sequence.
///
/// Roots are the categories whose `parent_id` is `None` or references an id
/// absent from `categories` (orphans are promoted rather than dropped).
/// Siblings are ordered case-insensitively by name; ties keep input order.
/// A node's children are emitted, directly after it, only when its id (as a
/// decimal string) is present in `expanded`.
///
/// The walk never revisits a node, so cyclic input terminates with each
/// category emitted at most once. Output is deterministic for a given input
/// and expand-state.
#[must_use]
pub fn flatten_tree<'a>(
    categories: &'a [Category],
    expanded: &HashSet<String>,
) -> Vec<TreeItem<'a>> {
    let known: HashSet<i64> = categories.iter().map(|c| c.id).collect();

    let mut children: HashMap<Option<i64>, Vec<&Category>> = HashMap::new();
    for category in categories {
        let parent = category
            .parent_id
            .filter(|p| *p != category.id && known.contains(p));
        children.entry(parent).or_default().push(category);
    }
    for siblings in children.values_mut() {
        sort_siblings(siblings);
    }

    let mut out = Vec::with_capacity(categories.len());
    let mut visited: HashSet<i64> = HashSet::new();
    if let Some(roots) = children.get(&None) {
        for &root in roots {
            emit(root, 0, &children, expanded, &mut visited, &mut out);
        }
    }
    out
}

fn emit<'a>(
    node: &'a Category,
    depth: usize,
    children: &HashMap<Option<i64>, Vec<&'a Category>>,
    expanded: &HashSet<String>,
    visited: &mut HashSet<i64>,
    out: &mut Vec<TreeItem<'a>>,
) {
    if !visited.insert(node.id) {
        return;
    }
    let id = node.id.to_string();
    let is_expanded = expanded.contains(&id);
    let node_children = children.get(&Some(node.id));
    out.push(TreeItem {
        id,
        label: &node.name,
        depth,
        has_children: node_children.is_some_and(|c| !c.is_empty()),
        category: node,
    });
    if !is_expanded {
        return;
    }
    if let Some(node_children) = node_children {
        for &child in node_children {
            emit(child, depth + 1, children, expanded, visited, out);
        }
    }
}

fn sort_siblings(siblings: &mut [&Category]) {
    // Stable sort: equal names keep their input order.
    siblings.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
}

/// Collects every transitively reachable child id of `id`, excluding `id`
/// itself. Order is not meaningful; callers that need a set should merge
/// via [`expand_selection`]. Cyclic input terminates: an accumulated node
/// is never walked twice.
#[must_use]
pub fn collect_descendants(categories: &[Category], id: i64) -> Vec<i64> {
    walk_descendants(&child_ids(categories), id)
}

/// Expands a category selection so that choosing a parent also selects all
/// of its subcategories, returning a uniqued, ordered set.
#[must_use]
pub fn expand_selection(categories: &[Category], selected: &[i64]) -> BTreeSet<i64> {
    let children = child_ids(categories);
    let mut out: BTreeSet<i64> = selected.iter().copied().collect();
    for &id in selected {
        out.extend(walk_descendants(&children, id));
    }
    out
}

fn child_ids(categories: &[Category]) -> HashMap<i64, Vec<i64>> {
    let mut children: HashMap<i64, Vec<i64>> = HashMap::new();
    for category in categories {
        if let Some(parent) = category.parent_id {
            children.entry(parent).or_default().push(category.id);
        }
    }
    children
}

fn walk_descendants(children: &HashMap<i64, Vec<i64>>, id: i64) -> Vec<i64> {
    let mut out = Vec::new();
    let mut seen: HashSet<i64> = HashSet::from([id]);
    let mut stack: Vec<i64> = children.get(&id).cloned().unwrap_or_default();
    while let Some(next) = stack.pop() {
        if !seen.insert(next) {
            continue;
        }
        out.push(next);
        if let Some(grandchildren) = children.get(&next) {
            stack.extend(grandchildren.iter().copied());
        }
    }
    out
}

#[cfg(test)]
#[path = "tree_test.rs"]
mod tests;
