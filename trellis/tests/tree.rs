use std::sync::{Arc, Mutex};

use ariadom::aria::CheckedState;
use ariadom::{Key, Modifiers, find_element};
use trellis::prelude::*;

type Log = Arc<Mutex<Vec<Vec<KeyPath>>>>;

fn path(keys: &[&str]) -> KeyPath {
    keys.iter().map(|k| k.to_string()).collect()
}

/// Keys repeat across levels on purpose.
fn nodes() -> Vec<TreeNode> {
    vec![
        TreeNode::group(
            "A",
            "Group A",
            [
                TreeNode::group(
                    "A",
                    "Subgroup A",
                    [TreeNode::leaf("A", "Item A"), TreeNode::leaf("B", "Item B")],
                ),
                TreeNode::leaf("B", "Item B"),
            ],
        ),
        TreeNode::leaf("B", "Item B"),
    ]
}

fn tree(multi: bool) -> (TreeList, Log) {
    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    let tree = if multi {
        TreeList::multi(nodes())
    } else {
        TreeList::new(nodes())
    };
    let tree = tree
        .label("Groups")
        .id_prefix("tree")
        .on_select(move |selected: &Vec<KeyPath>| sink.lock().unwrap().push(selected.clone()));
    (tree, log)
}

fn key(tree: &TreeList, target: &str, key: Key) -> EventResult {
    tree.on_key(target, key, Modifiers::NONE)
}

fn visible_paths(tree: &TreeList) -> Vec<KeyPath> {
    tree.visible().into_iter().map(|row| row.path).collect()
}

#[test]
fn test_groups_start_collapsed() {
    let (tree, _) = tree(false);
    assert_eq!(visible_paths(&tree), vec![path(&["A"]), path(&["B"])]);
    assert_eq!(tree.focused_path(), Some(path(&["A"])));
}

#[test]
fn test_arrow_keys_expand_and_walk() {
    let (tree, _) = tree(false);
    key(&tree, "tree-item-A", Key::Right);
    assert!(tree.is_expanded(&path(&["A"])));
    assert_eq!(
        visible_paths(&tree),
        vec![path(&["A"]), path(&["A", "A"]), path(&["A", "B"]), path(&["B"])]
    );

    key(&tree, "tree-item-A", Key::Down);
    assert_eq!(tree.focused_path(), Some(path(&["A", "A"])));
    key(&tree, "tree-item-A/A", Key::Right);
    key(&tree, "tree-item-A/A", Key::Down);
    assert_eq!(tree.focused_path(), Some(path(&["A", "A", "A"])));

    // Keys aimed at an item without the roving tabindex are ignored
    assert_eq!(key(&tree, "tree-item-B", Key::Down), EventResult::Ignored);
}

#[test]
fn test_collapse_clamps_focus() {
    let (tree, _) = tree(false);
    tree.expand(&path(&["A"]));
    for _ in 0..5 {
        let focused = tree.focused_path().unwrap();
        key(&tree, &tree.item_id(&focused), Key::Down);
    }
    assert_eq!(tree.focused_path(), Some(path(&["B"])));

    tree.collapse(&path(&["A"]));
    assert_eq!(tree.focus_index(), 1);
    assert_eq!(tree.focused_path(), Some(path(&["B"])));
}

#[test]
fn test_leaf_ignores_expand() {
    let (tree, _) = tree(false);
    assert!(!tree.expand(&path(&["B"])));
    assert!(!tree.is_expanded(&path(&["B"])));
}

#[test]
fn test_roving_focus_follows_arrows() {
    let (tree, _) = tree(false);
    let mut page = Page::new(tree.clone());

    page.tab();
    page.tab();
    assert_eq!(page.focused(), Some("tree-item-A"));

    page.key(Key::Down);
    assert_eq!(page.focused(), Some("tree-item-B"));

    let root = tree.element();
    assert_eq!(find_element(&root, "tree-item-B").unwrap().tabindex, Some(0));
    assert_eq!(find_element(&root, "tree-item-A").unwrap().tabindex, Some(-1));

    page.key(Key::Up);
    assert_eq!(page.focused(), Some("tree-item-A"));
}

#[test]
fn test_single_space_selects_focused_item() {
    let (tree, log) = tree(false);
    key(&tree, "tree-item-A", Key::SPACE);
    assert_eq!(tree.selected(), vec![path(&["A"])]);

    let root = tree.element();
    let item = find_element(&root, "tree-item-A").unwrap();
    assert_eq!(item.get_attr("aria-selected"), Some("true"));
    assert_eq!(item.get_attr("aria-expanded"), Some("false"));
    assert_eq!(*log.lock().unwrap(), vec![vec![path(&["A"])]]);
}

#[test]
fn test_single_click_toggles_and_selects() {
    let (tree, log) = tree(false);
    tree.on_click("tree-item-A-row");
    assert!(tree.is_expanded(&path(&["A"])));
    assert_eq!(tree.selected(), vec![path(&["A"])]);

    tree.on_click("tree-item-A/B");
    assert_eq!(tree.selected(), vec![path(&["A", "B"])]);
    assert_eq!(log.lock().unwrap().len(), 2);

    tree.on_click("tree-item-A");
    assert!(!tree.is_expanded(&path(&["A"])));
}

#[test]
fn test_multi_parent_state_follows_children() {
    let (tree, log) = tree(true);
    tree.expand(&path(&["A"]));

    tree.on_click("tree-item-A/A-checkbox");
    assert_eq!(
        tree.selected(),
        vec![path(&["A", "A", "A"]), path(&["A", "A", "B"])]
    );
    assert_eq!(tree.checked_state(&path(&["A", "A"])), CheckedState::True);
    assert_eq!(tree.checked_state(&path(&["A"])), CheckedState::Mixed);

    tree.on_click("tree-item-A/B-checkbox");
    assert_eq!(tree.checked_state(&path(&["A"])), CheckedState::True);

    let root = tree.element();
    assert_eq!(
        find_element(&root, "tree-item-A").unwrap().get_attr("aria-checked"),
        Some("true")
    );
    assert_eq!(
        find_element(&root, "tree").unwrap().get_attr("aria-multiselectable"),
        Some("true")
    );
    assert_eq!(log.lock().unwrap().len(), 2);
}

#[test]
fn test_multi_checking_full_parent_clears_it() {
    let (tree, _) = tree(true);
    tree.activate(&path(&["A"]));
    assert_eq!(tree.selected().len(), 3);
    assert_eq!(tree.checked_state(&path(&["A"])), CheckedState::True);

    tree.activate(&path(&["A"]));
    assert!(tree.selected().is_empty());
    assert_eq!(tree.checked_state(&path(&["A"])), CheckedState::False);
}

#[test]
fn test_multi_mixed_parent_checks_everything() {
    let (tree, _) = tree(true);
    tree.activate(&path(&["A", "B"]));
    assert_eq!(tree.checked_state(&path(&["A"])), CheckedState::Mixed);

    tree.activate(&path(&["A"]));
    assert_eq!(tree.checked_state(&path(&["A"])), CheckedState::True);
}

#[test]
fn test_multi_row_click_only_toggles_expansion() {
    let (tree, log) = tree(true);
    tree.on_click("tree-item-A-text");
    assert!(tree.is_expanded(&path(&["A"])));
    assert!(tree.selected().is_empty());
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn test_clicked_item_takes_roving_focus() {
    let (tree, _) = tree(false);
    let mut page = Page::new(tree.clone());
    page.click("tree-item-B-row");
    assert_eq!(page.focused(), Some("tree-item-B"));
    assert_eq!(tree.focused_path(), Some(path(&["B"])));
}
