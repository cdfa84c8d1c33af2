use std::sync::{Arc, Mutex};

use ariadom::{Key, Modifiers, find_element};
use trellis::prelude::*;

type Log = Arc<Mutex<Vec<Option<Item>>>>;

fn fruits() -> Vec<Item> {
    vec![
        Item::new(1, "apple"),
        Item::new(2, "banana"),
        Item::new(3, "mango"),
    ]
}

fn editable(mode: FilterMode) -> (EditableCombobox, Log) {
    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    let editable = EditableCombobox::new(fruits())
        .label("Fruit")
        .id_prefix("fruit")
        .filter_mode(mode)
        .on_change(move |value: &Option<Item>| sink.lock().unwrap().push(value.clone()));
    (editable, log)
}

fn key(editable: &EditableCombobox, key: Key) -> EventResult {
    editable.on_key("fruit-input", key, Modifiers::NONE)
}

fn labels(items: Vec<Item>) -> Vec<String> {
    items.into_iter().map(|item| item.label).collect()
}

#[test]
fn test_typing_filters_and_opens_without_candidate() {
    let (editable, _) = editable(FilterMode::Substring);
    key(&editable, Key::Char('a'));
    key(&editable, Key::Char('n'));
    assert_eq!(editable.input(), "an");
    assert!(editable.is_expanded());
    assert_eq!(editable.focused_item(), None);
    assert_eq!(labels(editable.filtered_items()), vec!["banana", "mango"]);
}

#[test]
fn test_arrow_then_enter_commits_filtered_item() {
    let (editable, log) = editable(FilterMode::Substring);
    editable.type_text("an");
    key(&editable, Key::Down);
    assert_eq!(editable.focused_item(), Some(Item::new(2, "banana")));
    key(&editable, Key::Down);
    assert_eq!(editable.focused_item(), Some(Item::new(3, "mango")));
    key(&editable, Key::Down);
    assert_eq!(editable.focused_item(), Some(Item::new(3, "mango")));

    key(&editable, Key::Enter);
    assert_eq!(editable.selected(), Some(Item::new(3, "mango")));
    assert_eq!(editable.input(), "mango");
    assert!(!editable.is_expanded());
    assert_eq!(*log.lock().unwrap(), vec![Some(Item::new(3, "mango"))]);
}

#[test]
fn test_enter_without_candidate_restores() {
    let (editable, log) = editable(FilterMode::Substring);
    let editable = editable.value(Some(&Item::new(1, "apple")));
    editable.type_text("zz");
    key(&editable, Key::Enter);
    assert!(!editable.is_expanded());
    assert_eq!(editable.input(), "apple");
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn test_escape_restores_committed_label() {
    let (editable, log) = editable(FilterMode::Substring);
    let editable = editable.value(Some(&Item::new(2, "banana")));
    key(&editable, Key::Backspace);
    assert_eq!(editable.input(), "banan");

    assert_eq!(key(&editable, Key::Escape), EventResult::Consumed);
    assert_eq!(editable.input(), "banana");
    assert!(!editable.is_expanded());
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn test_no_matches_keeps_aria_expanded_false() {
    let (editable, _) = editable(FilterMode::Substring);
    editable.type_text("kiwi");
    assert!(editable.is_expanded());
    assert!(!editable.popup_visible());

    let tree = editable.element();
    let input = find_element(&tree, "fruit-input").unwrap();
    assert_eq!(input.get_attr("aria-expanded"), Some("false"));
    assert!(find_element(&tree, "fruit-listitem-popup").unwrap().hidden);
}

#[test]
fn test_focus_selects_text_so_typing_replaces_it() {
    let (editable, _) = editable(FilterMode::Substring);
    let editable = editable.value(Some(&Item::new(1, "apple")));
    let mut page = Page::new(editable.clone());

    page.tab();
    page.tab();
    assert_eq!(page.focused(), Some("fruit-input"));
    assert!(editable.is_expanded());
    assert_eq!(editable.focused_item(), Some(Item::new(1, "apple")));

    page.type_text("m");
    assert_eq!(editable.input(), "m");
    assert_eq!(labels(editable.filtered_items()), vec!["mango"]);
}

#[test]
fn test_outside_click_restores_input() {
    let (editable, log) = editable(FilterMode::Substring);
    let mut page = Page::new(editable.clone());

    page.click("fruit-input");
    page.type_text("ban");
    assert!(editable.is_expanded());

    page.click_outside();
    assert!(!editable.is_expanded());
    assert_eq!(editable.input(), "");
    assert_eq!(editable.selected(), None);
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn test_option_click_commits_and_refocuses_input() {
    let (editable, log) = editable(FilterMode::Substring);
    let mut page = Page::new(editable.clone());

    page.click("fruit-input");
    page.click("fruit-listitem-2");
    assert_eq!(editable.selected(), Some(Item::new(2, "banana")));
    assert_eq!(editable.input(), "banana");
    assert_eq!(page.focused(), Some("fruit-input"));
    assert_eq!(log.lock().unwrap().len(), 1);
}

#[test]
fn test_hover_moves_candidate_and_hover_end_clears_it() {
    let (editable, _) = editable(FilterMode::Substring);
    key(&editable, Key::Down);
    assert!(editable.is_expanded());

    editable.on_hover("fruit-listitem-3");
    assert_eq!(editable.focused_item(), Some(Item::new(3, "mango")));
    let tree = editable.element();
    let input = find_element(&tree, "fruit-input").unwrap();
    assert_eq!(
        input.get_attr("aria-activedescendant"),
        Some("fruit-listitem-3")
    );

    editable.on_hover_end("fruit-listitem-3");
    assert_eq!(editable.focused_item(), None);
}

#[test]
fn test_fuzzy_mode_ranks_matches() {
    let (editable, _) = editable(FilterMode::Fuzzy);
    editable.type_text("MNG");
    assert_eq!(labels(editable.filtered_items()), vec!["mango"]);
}

#[test]
fn test_substring_mode_is_case_sensitive() {
    let (editable, _) = editable(FilterMode::Substring);
    editable.type_text("Apple");
    assert!(editable.filtered_items().is_empty());
}

#[test]
fn test_disabled_ignores_typing() {
    let (editable, _) = editable(FilterMode::Substring);
    let editable = editable.disabled(true);
    assert_eq!(key(&editable, Key::Char('a')), EventResult::Ignored);
    editable.type_text("b");
    assert_eq!(editable.input(), "");
    assert!(!editable.is_expanded());
}

#[test]
fn test_select_unknown_item_is_rejected() {
    let (editable, log) = editable(FilterMode::Substring);
    assert!(!editable.select(&Item::new(9, "durian")));
    assert!(editable.select(&Item::new(3, "mango")));
    assert_eq!(editable.input(), "mango");
    assert_eq!(log.lock().unwrap().len(), 1);
}
