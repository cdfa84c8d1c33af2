use chrono::NaiveDate;
use trellis::prelude::ComboboxVariant;
use trellis_playground::{CATALOGUE, Demo, DemoOptions, PlaygroundError};

fn options() -> DemoOptions {
    DemoOptions {
        today: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
        variant: ComboboxVariant::RovingTabindex,
    }
}

#[test]
fn test_every_catalogue_entry_builds() {
    for info in CATALOGUE {
        let demo = Demo::build(info.name, &options()).unwrap();
        assert_eq!(demo.name(), info.name);
        assert!(!demo.page().markup().is_empty(), "{} renders nothing", info.name);
        assert!(!demo.status().is_empty());
    }
}

#[test]
fn test_catalogue_names_are_unique() {
    let mut names: Vec<&str> = CATALOGUE.iter().map(|info| info.name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), CATALOGUE.len());
}

#[test]
fn test_unknown_demo() {
    let err = Demo::build("table", &options()).unwrap_err();
    assert!(matches!(err, PlaygroundError::UnknownDemo(name) if name == "table"));
}

#[test]
fn test_show_is_deterministic() {
    let first = Demo::build("date-range", &options()).unwrap();
    let second = Demo::build("date-range", &options()).unwrap();
    assert_eq!(first.page().markup(), second.page().markup());
}

#[test]
fn test_combobox_demo_uses_configured_variant() {
    let mut demo = Demo::build("combobox", &options()).unwrap();
    demo.page_mut().tab();
    demo.page_mut().tab();
    // Roving tabindex moves real focus onto the first option
    assert_eq!(demo.page().focused(), Some("combobox-listitem-1"));
}

#[test]
fn test_demo_data() {
    let demo = Demo::build("combobox-activedescendant", &options()).unwrap();
    let markup = demo.page().markup();
    for word in ["quirk", "alpha", "curd", "lark", "strong", "apologetic", "space", "vanilla"] {
        assert!(markup.contains(word), "missing {}", word);
    }

    let tree = Demo::build("tree", &options()).unwrap();
    let markup = tree.page().markup();
    assert!(markup.contains("Group A"));
    assert!(markup.contains("Group 1"));
}

#[test]
fn test_changes_drain_once() {
    let mut demo = Demo::build("checkbox", &options()).unwrap();
    demo.page_mut().click("checkbox-input");
    assert_eq!(demo.drain_changes(), vec!["true".to_string()]);
    assert!(demo.drain_changes().is_empty());
    assert_eq!(demo.status(), "checked: true");
}
