//! Combobox items.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Label shown for the "no selection" option.
pub const EMPTY_LABEL: &str = "---";

/// An option in a combobox.
///
/// Identity is the `id`; two items with equal labels are still different
/// options, and an item is matched against the list by `id` only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub label: String,
}

impl Item {
    pub fn new(id: i64, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }

    /// Whether `other` is the same option (same `id`).
    pub fn same_item(&self, other: &Item) -> bool {
        self.id == other.id
    }
}

/// Index of the item with the same identity as `item`.
pub(crate) fn position_of(items: &[Item], item: &Item) -> Option<usize> {
    items.iter().position(|candidate| candidate.same_item(item))
}

/// Log a warning for every id that appears more than once.
///
/// Duplicate ids make option element IDs ambiguous; the first occurrence wins.
pub fn warn_duplicate_ids(widget: &str, items: &[Item]) {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.id) {
            log::warn!("[{widget}] duplicate item id {} ({:?})", item.id, item.label);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_ignores_label() {
        let a = Item::new(1, "alpha");
        let renamed = Item::new(1, "beta");
        let twin = Item::new(2, "alpha");
        assert!(a.same_item(&renamed));
        assert!(!a.same_item(&twin));
    }

    #[test]
    fn test_position_matches_by_id() {
        let items = vec![Item::new(1, "x"), Item::new(2, "x")];
        assert_eq!(position_of(&items, &Item::new(2, "other")), Some(1));
        assert_eq!(position_of(&items, &Item::new(3, "x")), None);
    }
}
