use ariadom::{Event, Key};
use trellis::prelude::*;
use trellis::runtime::{AFTER_ID, BEFORE_ID};

fn fruit() -> Combobox {
    Combobox::new(vec![Item::new(1, "quirk"), Item::new(2, "alpha")])
        .variant(ComboboxVariant::RovingTabindex)
        .id_prefix("fruit")
}

#[test]
fn test_tab_walks_page_in_order() {
    let mut page = Page::new(Checkbox::new().id_prefix("cb"));
    page.tab();
    assert_eq!(page.focused(), Some(BEFORE_ID));
    page.tab();
    assert_eq!(page.focused(), Some("cb-input"));
    page.tab();
    assert_eq!(page.focused(), Some(AFTER_ID));
    page.back_tab();
    assert_eq!(page.focused(), Some("cb-input"));
}

#[test]
fn test_focus_request_is_delivered_before_later_events() {
    let combobox = fruit();
    let mut page = Page::new(combobox.clone());
    page.tab();

    let events = page.tab();
    let focus_targets: Vec<&str> = events
        .iter()
        .filter_map(|event| match event {
            Event::Focus { target, .. } => Some(target.as_str()),
            _ => None,
        })
        .collect();
    // Entering opens the popup and focus hops to the first option
    assert_eq!(focus_targets, vec!["fruit-input", "fruit-listitem-1"]);
    assert_eq!(page.focused(), Some("fruit-listitem-1"));
}

#[test]
fn test_dirty_flag_cleared_after_delivery() {
    let combobox = fruit();
    let mut page = Page::new(combobox.clone());
    page.click("fruit-input");
    assert!(combobox.is_expanded());
    assert!(!combobox.is_dirty());
}

#[test]
fn test_keys_without_focus_reach_nobody() {
    let combobox = fruit();
    let mut page = Page::new(combobox.clone());
    page.key(Key::Down);
    assert!(!combobox.is_expanded());
}

#[test]
fn test_markup_renders_widget_only() {
    let page = Page::new(Checkbox::new().id_prefix("cb").label("Agree"));
    let markup = page.markup();
    assert!(markup.contains("cb-input"));
    assert!(markup.contains("Agree"));
    assert!(!markup.contains(BEFORE_ID));
}
