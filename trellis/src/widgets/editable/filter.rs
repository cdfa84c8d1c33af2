//! Option filtering for the editable combobox.

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use serde::{Deserialize, Serialize};

/// Result of a filter operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterMatch {
    /// Index of the matched item in the input list.
    pub index: usize,
    /// Match score (higher is better, 0 for substring matches).
    pub score: u32,
}

/// How typed text narrows the option list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterMode {
    /// Case-sensitive substring match, list order kept.
    #[default]
    Substring,
    /// Fuzzy match, best score first.
    Fuzzy,
}

impl FilterMode {
    pub fn apply(&self, query: &str, labels: &[String]) -> Vec<FilterMatch> {
        match self {
            FilterMode::Substring => substring_filter(query, labels),
            FilterMode::Fuzzy => fuzzy_filter(query, labels),
        }
    }
}

/// Substring filter. Empty query returns all items.
pub fn substring_filter(query: &str, items: &[String]) -> Vec<FilterMatch> {
    items
        .iter()
        .enumerate()
        .filter(|(_, label)| label.contains(query))
        .map(|(index, _)| FilterMatch { index, score: 0 })
        .collect()
}

/// Fuzzy filter using nucleo-matcher.
///
/// Returns matches sorted by score (highest first); equal scores keep list
/// order. Empty query returns all items with score 0.
pub fn fuzzy_filter(query: &str, items: &[String]) -> Vec<FilterMatch> {
    // Empty query returns all items
    if query.is_empty() {
        return items
            .iter()
            .enumerate()
            .map(|(index, _)| FilterMatch { index, score: 0 })
            .collect();
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let pattern = Pattern::new(
        query,
        CaseMatching::Ignore,
        Normalization::Smart,
        AtomKind::Fuzzy,
    );

    let mut matches: Vec<FilterMatch> = items
        .iter()
        .enumerate()
        .filter_map(|(index, label)| {
            let mut buf = Vec::new();
            let haystack = Utf32Str::new(label, &mut buf);
            pattern
                .score(haystack, &mut matcher)
                .map(|score| FilterMatch { index, score })
        })
        .collect();

    // Stable sort keeps list order among equal scores
    matches.sort_by(|a, b| b.score.cmp(&a.score));

    matches
}
