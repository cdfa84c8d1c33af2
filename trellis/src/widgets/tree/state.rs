//! Tree list state.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use ariadom::aria::CheckedState;

use super::node::{KeyPath, TreeNode, VisibleNode, checked_state, leaves_under, node_at, visible_nodes};
use crate::widgets::callback::Callback;
use crate::widgets::events::FocusRequest;
use crate::widgets::selection::{Selection, SelectionMode};

/// Unique identifier for a TreeList instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TreeId(usize);

impl TreeId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for TreeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tree-{}", self.0)
    }
}

#[derive(Debug)]
pub(super) struct TreeInner {
    pub(super) prefix: String,
    pub(super) label: String,
    pub(super) nodes: Vec<TreeNode>,
    pub(super) expanded: HashSet<KeyPath>,
    pub(super) selection: Selection<KeyPath>,
    /// Index into the visible rows of the item holding `tabindex="0"`
    pub(super) focus_index: usize,
    pub(super) focus_request: Option<FocusRequest>,
}

impl TreeInner {
    pub(super) fn visible(&self) -> Vec<VisibleNode> {
        visible_nodes(&self.nodes, &self.expanded)
    }

    pub(super) fn is_multi(&self) -> bool {
        self.selection.mode == SelectionMode::Multi
    }

    pub(super) fn item_id(&self, path: &[String]) -> String {
        format!("{}-item-{}", self.prefix, path.join("/"))
    }

    pub(super) fn focused_path(&self) -> Option<KeyPath> {
        self.visible()
            .into_iter()
            .nth(self.focus_index)
            .map(|row| row.path)
    }

    /// Resolve an element ID (the item, its row or its checkbox) to a
    /// visible path. The flag is true for the checkbox.
    pub(super) fn resolve(&self, element_id: &str) -> Option<(KeyPath, bool)> {
        self.visible().into_iter().find_map(|row| {
            let item_id = self.item_id(&row.path);
            let rest = element_id.strip_prefix(item_id.as_str())?;
            match rest {
                "" | "-row" | "-text" => Some((row.path, false)),
                "-checkbox" => Some((row.path, true)),
                _ => None,
            }
        })
    }

    pub(super) fn index_of(&self, path: &[String]) -> Option<usize> {
        self.visible().iter().position(|row| row.path == path)
    }

    pub(super) fn checked(&self, path: &[String]) -> CheckedState {
        node_at(&self.nodes, path)
            .map(|node| checked_state(node, path, &self.selection))
            .unwrap_or_default()
    }

    /// Keep the roving index on a visible row after rows disappear.
    pub(super) fn clamp_focus(&mut self) {
        let len = self.visible().len();
        self.focus_index = self.focus_index.min(len.saturating_sub(1));
    }

    pub(super) fn set_expanded(&mut self, path: &[String], expanded: bool) -> bool {
        if !node_at(&self.nodes, path).is_some_and(TreeNode::is_group) {
            return false;
        }
        let changed = if expanded {
            self.expanded.insert(path.to_vec())
        } else {
            self.expanded.remove(path)
        };
        if changed {
            log::debug!(
                "[{}] {} {:?}",
                self.prefix,
                if expanded { "expanded" } else { "collapsed" },
                path
            );
            self.clamp_focus();
        }
        changed
    }

    pub(super) fn move_focus(&mut self, forward: bool) -> bool {
        let len = self.visible().len();
        if len == 0 {
            return false;
        }
        let next = if forward {
            (self.focus_index + 1).min(len - 1)
        } else {
            self.focus_index.saturating_sub(1)
        };
        self.focus_index = next;
        if let Some(path) = self.focused_path() {
            self.focus_request = Some(FocusRequest::Focus(self.item_id(&path)));
        }
        true
    }

    /// Single mode: select `path`. Multi mode: toggle every leaf under it,
    /// checking all of them unless the node was already fully checked.
    pub(super) fn activate(&mut self, path: &[String]) -> bool {
        if node_at(&self.nodes, path).is_none() {
            return false;
        }
        match self.selection.mode {
            SelectionMode::Single => self.selection.select(path.to_vec()),
            SelectionMode::Multi => {
                let check = self.checked(path) != CheckedState::True;
                self.selection.deselect_where(|selected| selected.starts_with(path));
                if check {
                    for leaf in leaves_under(&self.nodes, path) {
                        self.selection.select(leaf);
                    }
                }
                log::debug!("[{}] {:?} checked = {}", self.prefix, path, check);
                true
            }
        }
    }

    pub(super) fn selected_paths(&self) -> Vec<KeyPath> {
        let mut paths: Vec<KeyPath> = self.selection.get_all().cloned().collect();
        paths.sort();
        paths
    }
}

/// A tree list with roving focus and single or multi selection.
#[derive(Debug, Clone)]
pub struct TreeList {
    id: TreeId,
    pub(super) inner: Arc<RwLock<TreeInner>>,
    pub(super) dirty: Arc<AtomicBool>,
    on_select: Option<Callback<Vec<KeyPath>>>,
}

impl TreeList {
    /// Create a single-selection tree with every group collapsed.
    pub fn new(nodes: Vec<TreeNode>) -> Self {
        Self::with_selection(nodes, Selection::single())
    }

    /// Create a multi-selection (checkbox) tree.
    pub fn multi(nodes: Vec<TreeNode>) -> Self {
        Self::with_selection(nodes, Selection::multi())
    }

    fn with_selection(nodes: Vec<TreeNode>, selection: Selection<KeyPath>) -> Self {
        let id = TreeId::new();
        Self {
            id,
            inner: Arc::new(RwLock::new(TreeInner {
                prefix: id.to_string(),
                label: String::new(),
                nodes,
                expanded: HashSet::new(),
                selection,
                focus_index: 0,
                focus_request: None,
            })),
            dirty: Arc::new(AtomicBool::new(false)),
            on_select: None,
        }
    }

    pub fn label(self, label: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.label = label.into();
        }
        self
    }

    pub fn id_prefix(self, prefix: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.prefix = prefix.into();
        }
        self
    }

    /// Set the callback receiving the selected key paths (sorted).
    pub fn on_select(mut self, callback: impl Into<Callback<Vec<KeyPath>>>) -> Self {
        self.on_select = Some(callback.into());
        self
    }

    pub fn id(&self) -> TreeId {
        self.id
    }

    pub(super) fn read<R>(&self, f: impl FnOnce(&TreeInner) -> R) -> Option<R> {
        self.inner.read().ok().map(|guard| f(&guard))
    }

    pub(super) fn update<R>(&self, f: impl FnOnce(&mut TreeInner) -> (bool, R)) -> Option<R> {
        let mut guard = self.inner.write().ok()?;
        let (changed, result) = f(&mut guard);
        if changed {
            self.dirty.store(true, Ordering::SeqCst);
        }
        Some(result)
    }

    pub(super) fn notify(&self, selected: Vec<KeyPath>) {
        if let Some(callback) = &self.on_select {
            callback.call(&selected);
        }
    }

    pub(super) fn prefix(&self) -> String {
        self.read(|inner| inner.prefix.clone()).unwrap_or_default()
    }

    /// Element ID of the item at `path`.
    pub fn item_id(&self, path: &[String]) -> String {
        self.read(|inner| inner.item_id(path)).unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Expansion
    // -------------------------------------------------------------------------

    pub fn is_expanded(&self, path: &[String]) -> bool {
        self.read(|inner| inner.expanded.contains(path)).unwrap_or(false)
    }

    pub fn expand(&self, path: &[String]) -> bool {
        self.update(|inner| {
            let changed = inner.set_expanded(path, true);
            (changed, changed)
        })
        .unwrap_or(false)
    }

    pub fn collapse(&self, path: &[String]) -> bool {
        self.update(|inner| {
            let changed = inner.set_expanded(path, false);
            (changed, changed)
        })
        .unwrap_or(false)
    }

    /// Visible rows in display order.
    pub fn visible(&self) -> Vec<VisibleNode> {
        self.read(TreeInner::visible).unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Focus and selection
    // -------------------------------------------------------------------------

    pub fn focus_index(&self) -> usize {
        self.read(|inner| inner.focus_index).unwrap_or(0)
    }

    pub fn focused_path(&self) -> Option<KeyPath> {
        self.read(TreeInner::focused_path).flatten()
    }

    /// Selected paths. In multi mode these are leaves only.
    pub fn selected(&self) -> Vec<KeyPath> {
        self.read(TreeInner::selected_paths).unwrap_or_default()
    }

    pub fn checked_state(&self, path: &[String]) -> CheckedState {
        self.read(|inner| inner.checked(path)).unwrap_or_default()
    }

    /// Select (single) or toggle (multi) the node at `path` and invoke the callback.
    pub fn activate(&self, path: &[String]) -> bool {
        let selected = self
            .update(|inner| {
                let changed = inner.activate(path);
                (changed, changed.then(|| inner.selected_paths()))
            })
            .flatten();
        match selected {
            Some(selected) => {
                self.notify(selected);
                true
            }
            None => false,
        }
    }
}
