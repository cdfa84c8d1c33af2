//! Tests for the Combobox widget: keyboard, pointer, focus and ARIA output.

use std::sync::{Arc, Mutex};

use ariadom::{Key, Modifiers, Role, find_element};
use trellis::prelude::*;
use trellis::widgets::combobox::Candidate;

type Log = Arc<Mutex<Vec<Option<Item>>>>;

fn items() -> Vec<Item> {
    vec![Item::new(1, "quirk"), Item::new(2, "alpha")]
}

fn combobox(variant: ComboboxVariant, items: Vec<Item>) -> (Combobox, Log) {
    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    let combobox = Combobox::new(items)
        .variant(variant)
        .label("Fruit")
        .id_prefix("fruit")
        .on_change(move |value: &Option<Item>| sink.lock().unwrap().push(value.clone()));
    (combobox, log)
}

fn key(combobox: &Combobox, key: Key) -> EventResult {
    combobox.on_key("fruit-input", key, Modifiers::NONE)
}

fn focused_id(combobox: &Combobox) -> Option<i64> {
    combobox.focused_item().map(|item| item.id)
}

#[test]
fn test_arrow_down_twice_then_enter_commits_second_item() {
    let (combobox, log) = combobox(ComboboxVariant::ActiveDescendant, items());
    assert!(!combobox.is_expanded());
    assert_eq!(combobox.selected(), None);

    assert_eq!(key(&combobox, Key::Down), EventResult::Consumed);
    assert!(combobox.is_expanded());
    assert_eq!(focused_id(&combobox), Some(1));

    key(&combobox, Key::Down);
    assert_eq!(focused_id(&combobox), Some(2));

    key(&combobox, Key::Enter);
    assert_eq!(combobox.selected(), Some(Item::new(2, "alpha")));
    assert!(!combobox.is_expanded());
    assert_eq!(*log.lock().unwrap(), vec![Some(Item::new(2, "alpha"))]);
}

#[test]
fn test_arrow_down_clamps_at_last_item() {
    let many = vec![Item::new(1, "a"), Item::new(2, "b"), Item::new(3, "c")];
    let (combobox, _) = combobox(ComboboxVariant::ActiveDescendant, many);
    key(&combobox, Key::Down);
    for _ in 0..5 {
        key(&combobox, Key::Down);
    }
    assert_eq!(focused_id(&combobox), Some(3));
}

#[test]
fn test_arrow_up_clamps_at_first_item() {
    let (combobox, _) = combobox(ComboboxVariant::ActiveDescendant, items());
    key(&combobox, Key::Up);
    assert_eq!(focused_id(&combobox), Some(1));
    key(&combobox, Key::Up);
    assert_eq!(focused_id(&combobox), Some(1));
}

#[test]
fn test_open_starts_on_committed_item() {
    let (combobox, _) = combobox(ComboboxVariant::ActiveDescendant, items());
    let combobox = combobox.value(Some(&Item::new(2, "alpha")));
    key(&combobox, Key::Enter);
    assert!(combobox.is_expanded());
    assert_eq!(focused_id(&combobox), Some(2));
}

#[test]
fn test_arrow_up_reaches_empty_option() {
    let (combobox, log) = combobox(ComboboxVariant::ActiveDescendant, items());
    let combobox = combobox.with_empty_option(true);

    key(&combobox, Key::Down);
    assert_eq!(combobox.focused(), Some(Candidate::Item(0)));
    key(&combobox, Key::Up);
    assert_eq!(combobox.focused(), Some(Candidate::Empty));
    key(&combobox, Key::Up);
    assert_eq!(combobox.focused(), Some(Candidate::Empty));

    key(&combobox, Key::SPACE);
    assert_eq!(combobox.selected(), None);
    assert_eq!(combobox.display_text(), "---");
    assert_eq!(*log.lock().unwrap(), vec![None]);
}

#[test]
fn test_escape_restores_committed_display() {
    let (combobox, log) = combobox(ComboboxVariant::ActiveDescendant, items());
    let combobox = combobox.value(Some(&Item::new(2, "alpha")));

    key(&combobox, Key::Down);
    key(&combobox, Key::Up);
    assert_eq!(focused_id(&combobox), Some(1));

    assert_eq!(key(&combobox, Key::Escape), EventResult::Consumed);
    assert!(!combobox.is_expanded());
    assert_eq!(combobox.focused(), None);
    assert_eq!(combobox.display_text(), "alpha");
    assert_eq!(combobox.selected(), Some(Item::new(2, "alpha")));
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn test_click_and_keyboard_commit_identically() {
    let (by_click, click_log) = combobox(ComboboxVariant::ActiveDescendant, items());
    let (by_keys, key_log) = combobox(ComboboxVariant::ActiveDescendant, items());

    by_click.on_click("fruit-input");
    by_click.on_click("fruit-listitem-2");

    key(&by_keys, Key::Down);
    key(&by_keys, Key::Down);
    key(&by_keys, Key::Enter);

    assert_eq!(by_click.selected(), by_keys.selected());
    assert_eq!(by_click.selected_index(), by_keys.selected_index());
    assert_eq!(by_click.is_expanded(), by_keys.is_expanded());
    assert_eq!(by_click.display_text(), by_keys.display_text());
    assert_eq!(*click_log.lock().unwrap(), *key_log.lock().unwrap());
}

#[test]
fn test_outside_click_discards_candidate() {
    let (combobox, log) = combobox(ComboboxVariant::ActiveDescendant, items());
    let mut page = Page::new(combobox.clone());

    page.tab();
    page.tab();
    assert_eq!(page.focused(), Some("fruit-input"));
    assert!(combobox.is_expanded());

    page.key(Key::Down);
    assert_eq!(focused_id(&combobox), Some(2));

    page.click_outside();
    assert!(!combobox.is_expanded());
    assert_eq!(combobox.focused(), None);
    assert_eq!(combobox.selected(), None);
    assert_eq!(page.focused(), None);
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn test_outside_click_closes_simple_variant() {
    let (combobox, _) = combobox(ComboboxVariant::Simple, items());
    combobox.on_click("fruit-input");
    assert!(combobox.is_expanded());
    assert_eq!(combobox.on_outside_click(), EventResult::Consumed);
    assert!(!combobox.is_expanded());
}

#[test]
fn test_focus_opens_and_the_same_click_keeps_it_open() {
    let (combobox, _) = combobox(ComboboxVariant::ActiveDescendant, items());
    let mut page = Page::new(combobox.clone());

    page.click("fruit-input");
    assert_eq!(page.focused(), Some("fruit-input"));
    assert!(combobox.is_expanded());

    page.click("fruit-input");
    assert!(!combobox.is_expanded());

    page.click("fruit-input");
    assert!(combobox.is_expanded());
}

#[test]
fn test_click_after_tab_in_closes() {
    let (combobox, _) = combobox(ComboboxVariant::ActiveDescendant, items());
    let mut page = Page::new(combobox.clone());
    page.focus("page-before");
    page.tab();
    assert_eq!(page.focused(), Some("fruit-input"));
    assert!(combobox.is_expanded());

    page.click("fruit-input");
    assert!(!combobox.is_expanded());
}

#[test]
fn test_click_after_tab_in_and_hover_closes() {
    let (combobox, _) = combobox(ComboboxVariant::ActiveDescendant, items());
    let mut page = Page::new(combobox.clone());
    page.focus("page-before");
    page.tab();
    page.hover("fruit-listitem-2");

    page.click("fruit-input");
    assert!(!combobox.is_expanded());
    assert_eq!(page.focused(), Some("fruit-input"));
}

#[test]
fn test_tab_away_closes() {
    let (combobox, _) = combobox(ComboboxVariant::ActiveDescendant, items());
    let mut page = Page::new(combobox.clone());
    page.tab();
    page.tab();
    assert!(combobox.is_expanded());

    page.tab();
    assert_eq!(page.focused(), Some(trellis::runtime::AFTER_ID));
    assert!(!combobox.is_expanded());
}

#[test]
fn test_pointer_commit_returns_focus_to_input() {
    let (combobox, log) = combobox(ComboboxVariant::ActiveDescendant, items());
    let mut page = Page::new(combobox.clone());

    page.click("fruit-input");
    page.click("fruit-listitem-1");
    assert_eq!(combobox.selected(), Some(Item::new(1, "quirk")));
    assert!(!combobox.is_expanded());
    assert_eq!(page.focused(), Some("fruit-input"));
    assert_eq!(log.lock().unwrap().len(), 1);
}

#[test]
fn test_roving_tabindex_moves_real_focus() {
    let (combobox, log) = combobox(ComboboxVariant::RovingTabindex, items());
    let mut page = Page::new(combobox.clone());

    page.tab();
    page.tab();
    assert!(combobox.is_expanded());
    assert_eq!(page.focused(), Some("fruit-listitem-1"));

    let tree = combobox.element();
    let tabindex = |id: &str| find_element(&tree, id).and_then(|el| el.tabindex);
    assert_eq!(tabindex("fruit-listitem-1"), Some(0));
    assert_eq!(tabindex("fruit-listitem-2"), Some(-1));
    assert_eq!(tabindex("fruit-input"), Some(-1));

    page.key(Key::Down);
    assert_eq!(page.focused(), Some("fruit-listitem-2"));
    assert!(combobox.is_expanded());

    page.key(Key::Enter);
    assert_eq!(combobox.selected(), Some(Item::new(2, "alpha")));
    assert!(!combobox.is_expanded());
    assert_eq!(page.focused(), Some("fruit-input"));
    assert_eq!(*log.lock().unwrap(), vec![Some(Item::new(2, "alpha"))]);
}

#[test]
fn test_roving_tabindex_exactly_one_option_tabbable() {
    let (combobox, _) = combobox(ComboboxVariant::RovingTabindex, items());
    combobox.open();
    let tree = combobox.element();
    let popup = find_element(&tree, "fruit-listitem-popup").unwrap();
    let tabbable = popup
        .child_elements()
        .iter()
        .filter(|option| option.tabindex == Some(0))
        .count();
    assert_eq!(tabbable, 1);
}

#[test]
fn test_hover_after_keyboard_navigation_is_swallowed_once() {
    let (combobox, _) = combobox(ComboboxVariant::ActiveDescendant, items());
    key(&combobox, Key::Down);
    key(&combobox, Key::Down);
    assert_eq!(focused_id(&combobox), Some(2));

    combobox.on_hover("fruit-listitem-1");
    assert_eq!(focused_id(&combobox), Some(2));

    combobox.on_hover("fruit-listitem-1");
    assert_eq!(focused_id(&combobox), Some(1));
}

#[test]
fn test_set_focus_candidate_does_not_commit() {
    let (combobox, log) = combobox(ComboboxVariant::ActiveDescendant, items());
    assert!(!combobox.set_focus_candidate(Some(&Item::new(2, "alpha"))));
    combobox.open();
    assert!(combobox.set_focus_candidate(Some(&Item::new(2, "renamed"))));
    assert_eq!(focused_id(&combobox), Some(2));
    assert_eq!(combobox.selected(), None);
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn test_active_descendant_markup() {
    let (combobox, _) = combobox(ComboboxVariant::ActiveDescendant, items());
    let tree = combobox.element();
    let input = find_element(&tree, "fruit-input").unwrap();
    assert_eq!(input.role, Some(Role::Combobox));
    assert_eq!(input.get_attr("aria-expanded"), Some("false"));
    assert_eq!(input.get_attr("aria-activedescendant"), None);
    assert_eq!(input.get_attr("aria-controls"), Some("fruit-listitem-popup"));
    assert_eq!(input.get_attr("aria-labelledby"), Some("fruit-label"));
    assert_eq!(input.get_attr("aria-readonly"), Some("false"));
    assert_eq!(input.tabindex, Some(0));

    combobox.open();
    key(&combobox, Key::Down);
    let tree = combobox.element();
    let input = find_element(&tree, "fruit-input").unwrap();
    assert_eq!(input.get_attr("aria-expanded"), Some("true"));
    assert_eq!(
        input.get_attr("aria-activedescendant"),
        Some("fruit-listitem-2")
    );

    let popup = find_element(&tree, "fruit-listitem-popup").unwrap();
    assert_eq!(popup.role, Some(Role::Listbox));
    assert!(!popup.hidden);
    let option = find_element(&tree, "fruit-listitem-2").unwrap();
    assert_eq!(option.role, Some(Role::Option));
    assert_eq!(option.get_attr("aria-selected"), Some("false"));
}

#[test]
fn test_simple_variant_has_no_roles_and_ignores_keys() {
    let (combobox, _) = combobox(ComboboxVariant::Simple, items());
    assert_eq!(key(&combobox, Key::Down), EventResult::Ignored);
    assert!(!combobox.is_expanded());

    let tree = combobox.element();
    assert_eq!(find_element(&tree, "fruit-input").unwrap().role, None);
    assert_eq!(find_element(&tree, "fruit-listitem-popup").unwrap().role, None);
}

#[test]
fn test_empty_list_never_shows_popup() {
    let (combobox, _) = combobox(ComboboxVariant::ActiveDescendant, Vec::new());
    key(&combobox, Key::Down);
    assert!(combobox.is_expanded());
    assert!(!combobox.popup_visible());
    let tree = combobox.element();
    assert!(find_element(&tree, "fruit-listitem-popup").unwrap().hidden);
}

#[test]
fn test_disabled_ignores_keys_and_clicks() {
    let (combobox, log) = combobox(ComboboxVariant::ActiveDescendant, items());
    let combobox = combobox.disabled(true);
    assert_eq!(key(&combobox, Key::Down), EventResult::Ignored);
    assert_eq!(combobox.on_click("fruit-input"), EventResult::Ignored);
    assert!(!combobox.is_expanded());
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn test_select_unknown_item_is_rejected() {
    let (combobox, log) = combobox(ComboboxVariant::ActiveDescendant, items());
    assert!(!combobox.select(Some(&Item::new(99, "ghost"))));
    assert!(combobox.select(Some(&Item::new(1, "any label"))));
    assert_eq!(combobox.selected(), Some(Item::new(1, "quirk")));
    assert_eq!(log.lock().unwrap().len(), 1);
}

#[test]
fn test_set_items_keeps_selection_by_id() {
    let (combobox, _) = combobox(ComboboxVariant::ActiveDescendant, items());
    combobox.set_value(Some(&Item::new(2, "alpha")));
    combobox.set_items(vec![Item::new(2, "alpha v2"), Item::new(3, "gamma")]);
    assert_eq!(combobox.selected(), Some(Item::new(2, "alpha v2")));
    assert_eq!(combobox.display_text(), "alpha v2");
}

#[test]
fn test_modifier_keys_are_ignored() {
    let (combobox, _) = combobox(ComboboxVariant::ActiveDescendant, items());
    assert_eq!(
        combobox.on_key("fruit-input", Key::Down, Modifiers::ctrl()),
        EventResult::Ignored
    );
    assert!(!combobox.is_expanded());
}
