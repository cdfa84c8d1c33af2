//! Tree data and the helpers that walk it.

use std::collections::HashSet;

use ariadom::aria::CheckedState;
use serde::{Deserialize, Serialize};

use crate::widgets::selection::Selection;

/// Path of keys from a root node down to a node.
///
/// Keys are only unique among siblings, so the path is the identity.
pub type KeyPath = Vec<String>;

/// A node in the tree data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub key: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn leaf(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            children: Vec::new(),
        }
    }

    pub fn group(
        key: impl Into<String>,
        label: impl Into<String>,
        children: impl IntoIterator<Item = TreeNode>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            children: children.into_iter().collect(),
        }
    }

    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }
}

/// A row of the flattened, visible tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleNode {
    pub path: KeyPath,
    pub depth: usize,
}

/// Find the node at `path`.
pub fn node_at<'a>(nodes: &'a [TreeNode], path: &[String]) -> Option<&'a TreeNode> {
    let (first, rest) = path.split_first()?;
    let node = nodes.iter().find(|node| &node.key == first)?;
    if rest.is_empty() {
        Some(node)
    } else {
        node_at(&node.children, rest)
    }
}

/// Depth-first list of the nodes whose ancestors are all expanded.
pub fn visible_nodes(nodes: &[TreeNode], expanded: &HashSet<KeyPath>) -> Vec<VisibleNode> {
    fn walk(
        nodes: &[TreeNode],
        parent: &[String],
        expanded: &HashSet<KeyPath>,
        out: &mut Vec<VisibleNode>,
    ) {
        for node in nodes {
            let mut path = parent.to_vec();
            path.push(node.key.clone());
            out.push(VisibleNode {
                path: path.clone(),
                depth: parent.len(),
            });
            if node.is_group() && expanded.contains(&path) {
                walk(&node.children, &path, expanded, out);
            }
        }
    }

    let mut out = Vec::new();
    walk(nodes, &[], expanded, &mut out);
    out
}

/// Key paths of every leaf at or below `path`.
pub fn leaves_under(nodes: &[TreeNode], path: &[String]) -> Vec<KeyPath> {
    fn collect(node: &TreeNode, path: KeyPath, out: &mut Vec<KeyPath>) {
        if !node.is_group() {
            out.push(path);
            return;
        }
        for child in &node.children {
            let mut child_path = path.clone();
            child_path.push(child.key.clone());
            collect(child, child_path, out);
        }
    }

    let mut out = Vec::new();
    if let Some(node) = node_at(nodes, path) {
        collect(node, path.to_vec(), &mut out);
    }
    out
}

/// Tri-state check of a node: leaves are checked when selected; a parent is
/// checked when every child is, and mixed when some child is checked or mixed.
pub fn checked_state(node: &TreeNode, path: &[String], selection: &Selection<KeyPath>) -> CheckedState {
    if !node.is_group() {
        return CheckedState::from(selection.is_selected(&path.to_vec()));
    }

    let states: Vec<CheckedState> = node
        .children
        .iter()
        .map(|child| {
            let mut child_path = path.to_vec();
            child_path.push(child.key.clone());
            checked_state(child, &child_path, selection)
        })
        .collect();

    let checked = states.iter().filter(|s| **s == CheckedState::True).count();
    if checked == states.len() {
        CheckedState::True
    } else if checked > 0 || states.contains(&CheckedState::Mixed) {
        CheckedState::Mixed
    } else {
        CheckedState::False
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(keys: &[&str]) -> KeyPath {
        keys.iter().map(|k| k.to_string()).collect()
    }

    fn data() -> Vec<TreeNode> {
        vec![TreeNode::group(
            "A",
            "Group A",
            [
                TreeNode::group("A", "Subgroup A", [TreeNode::leaf("A", "Item A"), TreeNode::leaf("B", "Item B")]),
                TreeNode::leaf("B", "Item B"),
            ],
        )]
    }

    #[test]
    fn test_node_at_follows_duplicate_keys_by_level() {
        let nodes = data();
        assert_eq!(node_at(&nodes, &path(&["A", "A", "B"])).map(|n| n.label.as_str()), Some("Item B"));
        assert_eq!(node_at(&nodes, &path(&["A", "B"])).map(|n| n.label.as_str()), Some("Item B"));
        assert!(node_at(&nodes, &path(&["B"])).is_none());
        assert!(node_at(&nodes, &[]).is_none());
    }

    #[test]
    fn test_leaves_under_group_and_leaf() {
        let nodes = data();
        assert_eq!(
            leaves_under(&nodes, &path(&["A"])),
            vec![path(&["A", "A", "A"]), path(&["A", "A", "B"]), path(&["A", "B"])]
        );
        assert_eq!(leaves_under(&nodes, &path(&["A", "B"])), vec![path(&["A", "B"])]);
    }

    #[test]
    fn test_partial_grandchild_makes_root_mixed() {
        let nodes = data();
        let mut selection = Selection::multi();
        selection.select(path(&["A", "A", "A"]));
        assert_eq!(checked_state(&nodes[0], &path(&["A"]), &selection), CheckedState::Mixed);
        assert_eq!(checked_state(&nodes[0].children[0], &path(&["A", "A"]), &selection), CheckedState::Mixed);

        selection.select(path(&["A", "A", "B"]));
        selection.select(path(&["A", "B"]));
        assert_eq!(checked_state(&nodes[0], &path(&["A"]), &selection), CheckedState::True);
    }
}
