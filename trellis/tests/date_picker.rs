use std::sync::{Arc, Mutex};

use ariadom::{Key, Modifiers, Role, find_element};
use chrono::NaiveDate;
use trellis::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn picker() -> (DatePicker, Arc<Mutex<Vec<NaiveDate>>>) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    let picker = DatePicker::new()
        .id_prefix("day")
        .today(date(2026, 10, 19))
        .on_change(move |date: &NaiveDate| sink.lock().unwrap().push(*date));
    (picker, log)
}

#[test]
fn test_starts_on_today() {
    let (picker, log) = picker();
    assert_eq!(picker.selected(), Some(date(2026, 10, 19)));
    assert_eq!(picker.focused_date(), Some(date(2026, 10, 19)));
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn test_arrows_move_cursor_enter_selects() {
    let (picker, log) = picker();
    let grid = picker.grid_id();
    picker.on_key(&grid, Key::Down, Modifiers::NONE);
    picker.on_key(&grid, Key::Left, Modifiers::NONE);
    assert_eq!(picker.focused_date(), Some(date(2026, 10, 25)));
    assert_eq!(picker.selected(), Some(date(2026, 10, 19)));

    picker.on_key(&grid, Key::Enter, Modifiers::NONE);
    assert_eq!(picker.selected(), Some(date(2026, 10, 25)));
    assert_eq!(*log.lock().unwrap(), vec![date(2026, 10, 25)]);
}

#[test]
fn test_click_selects_cell() {
    let (picker, log) = picker();
    let mut page = Page::new(picker.clone());
    page.click(&picker.cell_id(date(2026, 10, 3)));
    assert_eq!(picker.selected(), Some(date(2026, 10, 3)));
    assert_eq!(page.focused(), Some("day-grid"));
    assert_eq!(*log.lock().unwrap(), vec![date(2026, 10, 3)]);
}

#[test]
fn test_grid_markup() {
    let (picker, _) = picker();
    picker.move_focus(1);
    let tree = picker.element();

    let grid = find_element(&tree, "day-grid").unwrap();
    assert_eq!(grid.role, Some(Role::Grid));
    assert_eq!(grid.get_attr("aria-activedescendant"), Some("day-2026-10-20"));

    let today = find_element(&tree, "day-2026-10-19").unwrap();
    assert_eq!(today.role, Some(Role::Gridcell));
    assert_eq!(today.get_attr("aria-current"), Some("date"));
    assert_eq!(today.get_attr("aria-selected"), Some("true"));
    assert_eq!(today.get_attr("aria-label"), Some("19 October 2026"));
    assert_eq!(today.text_content(), "19");

    let other = find_element(&tree, "day-2026-10-20").unwrap();
    assert_eq!(other.get_attr("aria-current"), None);
    assert_eq!(other.get_attr("aria-selected"), Some("false"));
}

#[test]
fn test_markup_is_deterministic() {
    let (first, _) = picker();
    let (second, _) = picker();
    assert_eq!(
        Page::new(first).markup(),
        Page::new(second).markup()
    );
}
