//! Column descriptors.
//!
//! A column maps a stable identifier to a display header, a cell-rendering
//! function, an optional sort comparator, an optional filter predicate, and
//! a visibility-toggle capability flag. Renderers and comparators are plain
//! function values stored behind `Arc` so descriptors stay cheap to clone.
//!
//! # Example
//!
//! ```rust
//! use datagrid::column::Column;
//!
//! #[derive(Clone)]
//! struct Course {
//!     code: String,
//!     credits: u32,
//! }
//!
//! let code = Column::new("code", "Course", |c: &Course| c.code.clone())
//!     .width(12)
//!     .sorted_by_text();
//! let credits = Column::new("credits", "Credits", |c: &Course| c.credits.to_string())
//!     .width(8)
//!     .sorted_by(|a, b| a.credits.cmp(&b.credits))
//!     .no_hide();
//!
//! assert_eq!(code.id(), "code");
//! assert!(credits.has_sorter());
//! assert!(!credits.hideable());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// Type alias for cell-rendering functions.
pub type CellFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// Type alias for sort comparators.
pub type SortFn<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// Type alias for filter predicates. The second argument is the filter
/// value entered by the user.
pub type FilterFn<T> = Arc<dyn Fn(&T, &str) -> bool + Send + Sync>;

const DEFAULT_WIDTH: usize = 16;

/// A single column definition for the grid.
pub struct Column<T> {
    id: String,
    title: String,
    width: usize,
    cell: CellFn<T>,
    sorter: Option<SortFn<T>>,
    filter: Option<FilterFn<T>>,
    hideable: bool,
}

impl<T: 'static> Column<T> {
    /// Creates a new column with the given id, header title, and cell
    /// renderer.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        cell: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            width: DEFAULT_WIDTH,
            cell: Arc::new(cell),
            sorter: None,
            filter: None,
            hideable: true,
        }
    }

    /// Sets the display width in terminal cells (builder pattern).
    #[must_use]
    pub fn width(mut self, w: usize) -> Self {
        self.width = w;
        self
    }

    /// Sets a sort comparator (builder pattern).
    #[must_use]
    pub fn sorted_by(mut self, cmp: impl Fn(&T, &T) -> Ordering + Send + Sync + 'static) -> Self {
        self.sorter = Some(Arc::new(cmp));
        self
    }

    /// Sorts by the rendered cell text (builder pattern).
    #[must_use]
    pub fn sorted_by_text(mut self) -> Self {
        let cell = Arc::clone(&self.cell);
        self.sorter = Some(Arc::new(move |a, b| cell(a).cmp(&cell(b))));
        self
    }

    /// Sets a custom filter predicate (builder pattern). Without one, the
    /// column matches by case-insensitive substring over the rendered cell
    /// text.
    #[must_use]
    pub fn filtered_by(mut self, pred: impl Fn(&T, &str) -> bool + Send + Sync + 'static) -> Self {
        self.filter = Some(Arc::new(pred));
        self
    }

    /// Marks the column as always visible (builder pattern).
    #[must_use]
    pub fn no_hide(mut self) -> Self {
        self.hideable = false;
        self
    }

    /// Returns the column id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the header title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the display width.
    #[must_use]
    pub fn get_width(&self) -> usize {
        self.width
    }

    /// Returns whether the column can be hidden.
    #[must_use]
    pub fn hideable(&self) -> bool {
        self.hideable
    }

    /// Returns whether the column has a sort comparator.
    #[must_use]
    pub fn has_sorter(&self) -> bool {
        self.sorter.is_some()
    }

    /// Renders the cell value for a row.
    #[must_use]
    pub fn render_cell(&self, row: &T) -> String {
        (self.cell)(row)
    }

    /// Compares two rows under this column's comparator, if it has one.
    #[must_use]
    pub fn compare(&self, a: &T, b: &T) -> Option<Ordering> {
        self.sorter.as_ref().map(|cmp| cmp(a, b))
    }

    /// Returns whether a row satisfies this column's filter for the given
    /// value.
    #[must_use]
    pub fn matches(&self, row: &T, value: &str) -> bool {
        match &self.filter {
            Some(pred) => pred(row, value),
            None => self
                .render_cell(row)
                .to_lowercase()
                .contains(&value.to_lowercase()),
        }
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            title: self.title.clone(),
            width: self.width,
            cell: Arc::clone(&self.cell),
            sorter: self.sorter.as_ref().map(Arc::clone),
            filter: self.filter.as_ref().map(Arc::clone),
            hideable: self.hideable,
        }
    }
}

// Implement Debug manually since the function fields don't implement it.
impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("width", &self.width)
            .field("sortable", &self.sorter.is_some())
            .field("hideable", &self.hideable)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Item {
        name: String,
        score: u32,
    }

    fn item(name: &str, score: u32) -> Item {
        Item {
            name: name.into(),
            score,
        }
    }

    #[test]
    fn test_column_new() {
        let col = Column::new("name", "Name", |i: &Item| i.name.clone());
        assert_eq!(col.id(), "name");
        assert_eq!(col.title(), "Name");
        assert_eq!(col.get_width(), DEFAULT_WIDTH);
        assert!(col.hideable());
        assert!(!col.has_sorter());
    }

    #[test]
    fn test_render_cell() {
        let col = Column::new("score", "Score", |i: &Item| i.score.to_string());
        assert_eq!(col.render_cell(&item("a", 42)), "42");
    }

    #[test]
    fn test_sorted_by() {
        let col = Column::new("score", "Score", |i: &Item| i.score.to_string())
            .sorted_by(|a, b| a.score.cmp(&b.score));
        assert_eq!(
            col.compare(&item("a", 1), &item("b", 2)),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn test_sorted_by_text() {
        let col = Column::new("name", "Name", |i: &Item| i.name.clone()).sorted_by_text();
        assert_eq!(
            col.compare(&item("apple", 0), &item("banana", 0)),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn test_compare_without_sorter() {
        let col = Column::new("name", "Name", |i: &Item| i.name.clone());
        assert_eq!(col.compare(&item("a", 0), &item("b", 0)), None);
    }

    #[test]
    fn test_default_filter_is_substring() {
        let col = Column::new("name", "Name", |i: &Item| i.name.clone());
        assert!(col.matches(&item("Distributed Systems", 0), "syst"));
        assert!(!col.matches(&item("Compilers", 0), "syst"));
    }

    #[test]
    fn test_custom_filter() {
        let col = Column::new("score", "Score", |i: &Item| i.score.to_string())
            .filtered_by(|i, v| v.parse::<u32>().is_ok_and(|min| i.score >= min));
        assert!(col.matches(&item("a", 80), "50"));
        assert!(!col.matches(&item("a", 30), "50"));
    }

    #[test]
    fn test_no_hide() {
        let col = Column::new("name", "Name", |i: &Item| i.name.clone()).no_hide();
        assert!(!col.hideable());
    }

    #[test]
    fn test_clone_shares_renderer() {
        let col = Column::new("name", "Name", |i: &Item| i.name.clone()).width(20);
        let cloned = col.clone();
        assert_eq!(cloned.get_width(), 20);
        assert_eq!(cloned.render_cell(&item("x", 0)), "x");
    }
}
