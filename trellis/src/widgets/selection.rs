//! Shared selection types for the tree widgets.

use std::collections::HashSet;
use std::hash::Hash;

/// Selection mode for list-like widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// Single item selection (radio-button style).
    #[default]
    Single,
    /// Multiple items can be selected (checkbox style).
    Multi,
}

/// Tracks selected items by their keys.
#[derive(Debug, Clone)]
pub struct Selection<K: Clone + Eq + Hash> {
    pub mode: SelectionMode,
    pub selected: HashSet<K>,
}

impl<K: Clone + Eq + Hash> Default for Selection<K> {
    fn default() -> Self {
        Self::single()
    }
}

impl<K: Clone + Eq + Hash> Selection<K> {
    /// Create single-selection mode.
    pub fn single() -> Self {
        Self {
            mode: SelectionMode::Single,
            selected: HashSet::new(),
        }
    }

    /// Create multi-selection mode.
    pub fn multi() -> Self {
        Self {
            mode: SelectionMode::Multi,
            selected: HashSet::new(),
        }
    }

    /// Select a key. In single mode this replaces the previous selection.
    /// Returns true if selection changed.
    pub fn select(&mut self, key: K) -> bool {
        match self.mode {
            SelectionMode::Single => {
                if self.selected.len() == 1 && self.selected.contains(&key) {
                    return false;
                }
                self.selected.clear();
                self.selected.insert(key);
                true
            }
            SelectionMode::Multi => self.selected.insert(key),
        }
    }

    /// Toggle selection for a key. Returns true if selection changed.
    pub fn toggle(&mut self, key: K) -> bool {
        if self.selected.contains(&key) {
            self.selected.remove(&key);
        } else {
            self.select(key);
        }
        true
    }

    /// Remove every key matching the predicate.
    pub fn deselect_where(&mut self, mut predicate: impl FnMut(&K) -> bool) {
        self.selected.retain(|key| !predicate(key));
    }

    /// Check if a key is selected.
    pub fn is_selected(&self, key: &K) -> bool {
        self.selected.contains(key)
    }

    /// Clear all selections.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Get the single selected key (for Single mode).
    pub fn get_single(&self) -> Option<&K> {
        self.selected.iter().next()
    }

    /// Get all selected keys.
    pub fn get_all(&self) -> impl Iterator<Item = &K> {
        self.selected.iter()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_select_replaces() {
        let mut selection = Selection::single();
        assert!(selection.select("a"));
        assert!(!selection.select("a"));
        assert!(selection.select("b"));
        assert_eq!(selection.get_single(), Some(&"b"));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_multi_toggle_accumulates() {
        let mut selection = Selection::multi();
        selection.toggle(1);
        selection.toggle(2);
        selection.toggle(1);
        assert!(!selection.is_selected(&1));
        assert!(selection.is_selected(&2));
    }

    #[test]
    fn test_deselect_where_filters() {
        let mut selection = Selection::multi();
        for key in 0..6 {
            selection.select(key);
        }
        selection.deselect_where(|key| key % 2 == 0);
        let mut remaining: Vec<_> = selection.get_all().copied().collect();
        remaining.sort();
        assert_eq!(remaining, vec![1, 3, 5]);
    }
}
