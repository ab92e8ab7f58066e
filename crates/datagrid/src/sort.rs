//! Sort state.
//!
//! An ordered sequence of (column id, direction) entries. The first entry
//! is the most significant sort key; later entries break ties in insertion
//! order. Directions cycle ascending → descending → unsorted.

use std::fmt;

/// Sort direction for a single column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Non-decreasing under the column comparator.
    Ascending,
    /// Non-increasing under the column comparator.
    Descending,
}

impl Direction {
    /// Returns the header indicator for this direction.
    #[must_use]
    pub fn indicator(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => write!(f, "ascending"),
            Self::Descending => write!(f, "descending"),
        }
    }
}

/// One (column, direction) entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortEntry {
    /// Column id this entry sorts by.
    pub column: String,
    /// Sort direction.
    pub direction: Direction,
}

/// Ordered sort entries; first entry is the primary sort key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    entries: Vec<SortEntry>,
}

impl SortState {
    /// Creates an empty (unsorted) state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the entries in priority order.
    #[must_use]
    pub fn entries(&self) -> &[SortEntry] {
        &self.entries
    }

    /// Returns whether no sort is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the direction for a column, if it participates in the sort.
    #[must_use]
    pub fn direction_of(&self, column: &str) -> Option<Direction> {
        self.entries
            .iter()
            .find(|e| e.column == column)
            .map(|e| e.direction)
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Advances the column through the tri-state cycle, replacing any other
    /// entries (single-column sort).
    pub fn cycle(&mut self, column: &str) {
        let next = self.next_direction(column);
        self.entries.clear();
        if let Some(direction) = next {
            self.entries.push(SortEntry {
                column: column.to_string(),
                direction,
            });
        }
    }

    /// Advances the column through the tri-state cycle while keeping other
    /// entries. A column new to the sort is appended as the
    /// lowest-priority tie-breaker.
    pub fn cycle_append(&mut self, column: &str) {
        match self.entries.iter().position(|e| e.column == column) {
            Some(i) => match self.entries[i].direction {
                Direction::Ascending => self.entries[i].direction = Direction::Descending,
                Direction::Descending => {
                    self.entries.remove(i);
                }
            },
            None => self.entries.push(SortEntry {
                column: column.to_string(),
                direction: Direction::Ascending,
            }),
        }
    }

    fn next_direction(&self, column: &str) -> Option<Direction> {
        match self.direction_of(column) {
            None => Some(Direction::Ascending),
            Some(Direction::Ascending) => Some(Direction::Descending),
            Some(Direction::Descending) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_state_new() {
        let state = SortState::new();
        assert!(state.is_empty());
        assert_eq!(state.direction_of("title"), None);
    }

    #[test]
    fn test_cycle_tri_state() {
        let mut state = SortState::new();

        state.cycle("title");
        assert_eq!(state.direction_of("title"), Some(Direction::Ascending));

        state.cycle("title");
        assert_eq!(state.direction_of("title"), Some(Direction::Descending));

        state.cycle("title");
        assert!(state.is_empty());
    }

    #[test]
    fn test_cycle_replaces_other_entries() {
        let mut state = SortState::new();
        state.cycle("title");
        state.cycle("capacity");

        assert_eq!(state.entries().len(), 1);
        assert_eq!(state.direction_of("title"), None);
        assert_eq!(state.direction_of("capacity"), Some(Direction::Ascending));
    }

    #[test]
    fn test_cycle_append_keeps_priority_order() {
        let mut state = SortState::new();
        state.cycle_append("supervisor");
        state.cycle_append("title");

        let columns: Vec<&str> = state.entries().iter().map(|e| e.column.as_str()).collect();
        assert_eq!(columns, ["supervisor", "title"]);
    }

    #[test]
    fn test_cycle_append_removes_on_third_toggle() {
        let mut state = SortState::new();
        state.cycle_append("a");
        state.cycle_append("b");
        state.cycle_append("a");
        assert_eq!(state.direction_of("a"), Some(Direction::Descending));

        state.cycle_append("a");
        assert_eq!(state.direction_of("a"), None);
        assert_eq!(state.direction_of("b"), Some(Direction::Ascending));
    }

    #[test]
    fn test_direction_indicator() {
        assert_eq!(Direction::Ascending.indicator(), "▲");
        assert_eq!(Direction::Descending.indicator(), "▼");
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::Ascending.to_string(), "ascending");
        assert_eq!(Direction::Descending.to_string(), "descending");
    }
}
