//! Filter state and the toolbar filter input.
//!
//! `Filters` holds per-column filter values; only non-empty values are
//! active, and a row must satisfy every active filter to pass. The
//! `FilterInput` is the small line editor backing the toolbar's free-text
//! filter, with grapheme-aware deletion.

use std::collections::HashMap;
use std::fmt;

use unicode_segmentation::UnicodeSegmentation;

/// Filter entry state for the toolbar input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// No filter applied.
    #[default]
    Unfiltered,
    /// User is actively editing the filter value.
    Filtering,
    /// Filter has been applied.
    Applied,
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unfiltered => write!(f, "unfiltered"),
            Self::Filtering => write!(f, "filtering"),
            Self::Applied => write!(f, "filter applied"),
        }
    }
}

/// Per-column filter values. Only non-empty values are stored.
#[derive(Debug, Clone, Default)]
pub struct Filters {
    values: HashMap<String, String>,
}

impl Filters {
    /// Creates an empty filter state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the filter value for a column. An empty value clears the
    /// column's entry.
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<String>) {
        let column = column.into();
        let value = value.into();
        if value.is_empty() {
            self.values.remove(&column);
        } else {
            self.values.insert(column, value);
        }
    }

    /// Returns the filter value for a column, if one is active.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }

    /// Clears the filter for a single column.
    pub fn clear_column(&mut self, column: &str) {
        self.values.remove(column);
    }

    /// Clears all filters.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Iterates over active (column, value) pairs.
    pub fn active(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns whether no filter is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Single-line editor for the toolbar filter value.
#[derive(Debug, Clone)]
pub struct FilterInput {
    /// Prompt rendered before the value.
    pub prompt: String,
    value: String,
}

impl Default for FilterInput {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterInput {
    /// Creates an empty input with the default prompt.
    #[must_use]
    pub fn new() -> Self {
        Self {
            prompt: "Search: ".to_string(),
            value: String::new(),
        }
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the value.
    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    /// Appends a character.
    pub fn insert_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Deletes the last grapheme cluster.
    pub fn backspace(&mut self) {
        if let Some((idx, _)) = self.value.grapheme_indices(true).next_back() {
            self.value.truncate(idx);
        }
    }

    /// Clears the value.
    pub fn reset(&mut self) {
        self.value.clear();
    }

    /// Renders the prompt and value.
    #[must_use]
    pub fn view(&self) -> String {
        format!("{}{}", self.prompt, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_set_get() {
        let mut filters = Filters::new();
        filters.set("title", "data");
        assert_eq!(filters.get("title"), Some("data"));
        assert_eq!(filters.get("status"), None);
    }

    #[test]
    fn test_filters_empty_value_clears() {
        let mut filters = Filters::new();
        filters.set("title", "data");
        filters.set("title", "");
        assert_eq!(filters.get("title"), None);
        assert!(filters.is_empty());
    }

    #[test]
    fn test_filters_clear_column() {
        let mut filters = Filters::new();
        filters.set("title", "a");
        filters.set("status", "open");
        filters.clear_column("title");
        assert_eq!(filters.get("title"), None);
        assert_eq!(filters.get("status"), Some("open"));
    }

    #[test]
    fn test_filters_active_iterates_all() {
        let mut filters = Filters::new();
        filters.set("title", "a");
        filters.set("status", "open");
        assert_eq!(filters.active().count(), 2);
    }

    #[test]
    fn test_input_editing() {
        let mut input = FilterInput::new();
        input.insert_char('a');
        input.insert_char('b');
        assert_eq!(input.value(), "ab");

        input.backspace();
        assert_eq!(input.value(), "a");

        input.reset();
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_input_backspace_grapheme() {
        let mut input = FilterInput::new();
        input.set_value("héllo");
        input.backspace();
        input.backspace();
        input.backspace();
        assert_eq!(input.value(), "hé");
    }

    #[test]
    fn test_input_backspace_empty_is_noop() {
        let mut input = FilterInput::new();
        input.backspace();
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_input_view() {
        let mut input = FilterInput::new();
        input.prompt = "Search title: ".to_string();
        input.set_value("ml");
        assert_eq!(input.view(), "Search title: ml");
    }

    #[test]
    fn test_filter_mode_display() {
        assert_eq!(FilterMode::Unfiltered.to_string(), "unfiltered");
        assert_eq!(FilterMode::Filtering.to_string(), "filtering");
        assert_eq!(FilterMode::Applied.to_string(), "filter applied");
    }
}
