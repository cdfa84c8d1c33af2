use trellis::widgets::editable::{FilterMode, fuzzy_filter, substring_filter};

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_empty_query_returns_all() {
    let items = labels(&["apple", "banana"]);
    let matches = fuzzy_filter("", &items);
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].index, 0);
    assert_eq!(matches[1].index, 1);
}

#[test]
fn test_fuzzy_matching() {
    let items = labels(&["apple", "banana", "apricot"]);
    let matches = fuzzy_filter("ap", &items);
    assert_eq!(matches.len(), 2);
    let indices: Vec<usize> = matches.iter().map(|m| m.index).collect();
    assert!(indices.contains(&0)); // apple
    assert!(indices.contains(&2)); // apricot
}

#[test]
fn test_no_matches() {
    let items = labels(&["apple", "banana"]);
    assert!(fuzzy_filter("xyz", &items).is_empty());
    assert!(substring_filter("xyz", &items).is_empty());
}

#[test]
fn test_fuzzy_is_case_insensitive() {
    let items = labels(&["Apple", "BANANA"]);
    let matches = fuzzy_filter("apple", &items);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].index, 0);
}

#[test]
fn test_substring_keeps_list_order() {
    let items = labels(&["banana", "cherry", "ananas"]);
    let indices: Vec<usize> = substring_filter("an", &items)
        .iter()
        .map(|m| m.index)
        .collect();
    assert_eq!(indices, vec![0, 2]);
}

#[test]
fn test_substring_empty_query_returns_all() {
    let items = labels(&["a", "b", "c"]);
    assert_eq!(substring_filter("", &items).len(), 3);
}

#[test]
fn test_mode_dispatch() {
    let items = labels(&["Apple", "apple"]);
    assert_eq!(FilterMode::Substring.apply("App", &items).len(), 1);
    assert_eq!(FilterMode::Fuzzy.apply("App", &items).len(), 2);
}
