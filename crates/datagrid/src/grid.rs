//! The data grid component.
//!
//! Composes the sort, filter, visibility, and selection state slices with
//! pagination over a host-supplied row collection and column schema. The
//! visible subset is derived on every read: filter, then stable sort, then
//! page slice, then visible columns in schema order. The slices are
//! mutually independent; in particular, selection is never cleared by
//! sort, filter, or page changes.
//!
//! # Example
//!
//! ```rust
//! use datagrid::column::Column;
//! use datagrid::grid::DataGrid;
//! use datagrid::row::Row;
//!
//! #[derive(Clone)]
//! struct Entry {
//!     id: u32,
//!     name: String,
//! }
//!
//! impl Row for Entry {
//!     type Key = u32;
//!
//!     fn key(&self) -> u32 {
//!         self.id
//!     }
//! }
//!
//! let columns = vec![Column::new("name", "Name", |e: &Entry| e.name.clone())];
//! let data: Vec<Entry> = (0..25)
//!     .map(|i| Entry { id: i, name: format!("entry {i}") })
//!     .collect();
//!
//! let mut grid = DataGrid::new(columns, data);
//! assert_eq!(grid.total_pages(), 3);
//! grid.next_page();
//! assert_eq!(grid.page_rows().len(), 10);
//! ```

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

use crossterm::event::{KeyEvent, KeyEventKind};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::column::Column;
use crate::filter::{FilterInput, FilterMode, Filters};
use crate::key::{Binding, key_string, matches};
use crate::paginator::Paginator;
use crate::row::Row;
use crate::selection::Selection;
use crate::sort::{Direction, SortState};
use crate::style::Style;
use crate::visibility::Visibility;

/// Type alias for selection-action callbacks. Receives the materialized
/// rows of the current selection, restricted to rows visible under the
/// active filters, in derived row order.
pub type ActionFn<T> = Box<dyn Fn(&[T]) + Send>;

const NO_RESULTS: &str = "No results.";
const CELL_GAP: &str = "  ";
const SELECT_MARK_WIDTH: usize = 4;

/// Key bindings for grid interaction.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Move the cursor up one row.
    pub cursor_up: Binding,
    /// Move the cursor down one row.
    pub cursor_down: Binding,
    /// Previous page.
    pub prev_page: Binding,
    /// Next page.
    pub next_page: Binding,
    /// Focus the previous column.
    pub focus_prev_column: Binding,
    /// Focus the next column.
    pub focus_next_column: Binding,
    /// Cycle sort on the focused column.
    pub toggle_sort: Binding,
    /// Cycle the focused column as a sort tie-breaker.
    pub append_sort: Binding,
    /// Toggle visibility of the focused column.
    pub toggle_hide: Binding,
    /// Start filter entry.
    pub filter: Binding,
    /// Leave filter entry, keeping the value.
    pub accept_while_filtering: Binding,
    /// Cancel filter entry, clearing the value.
    pub cancel_while_filtering: Binding,
    /// Clear the applied filter.
    pub clear_filter: Binding,
    /// Toggle selection of the cursor row.
    pub toggle_select: Binding,
    /// Trigger the selection action.
    pub run_action: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            cursor_up: Binding::new().keys(&["up", "k"]).help("↑/k", "up"),
            cursor_down: Binding::new().keys(&["down", "j"]).help("↓/j", "down"),
            prev_page: Binding::new()
                .keys(&["left", "h", "pgup"])
                .help("←/h", "prev page"),
            next_page: Binding::new()
                .keys(&["right", "l", "pgdown"])
                .help("→/l", "next page"),
            focus_prev_column: Binding::new()
                .keys(&["shift+tab"])
                .help("⇧tab", "prev column"),
            focus_next_column: Binding::new().keys(&["tab"]).help("tab", "next column"),
            toggle_sort: Binding::new().keys(&["s"]).help("s", "sort"),
            append_sort: Binding::new().keys(&["S"]).help("S", "multi-sort"),
            toggle_hide: Binding::new().keys(&["v"]).help("v", "hide column"),
            filter: Binding::new().keys(&["/"]).help("/", "filter"),
            accept_while_filtering: Binding::new()
                .keys(&["enter"])
                .help("enter", "apply filter"),
            cancel_while_filtering: Binding::new().keys(&["esc"]).help("esc", "cancel"),
            clear_filter: Binding::new().keys(&["esc"]).help("esc", "clear filter"),
            toggle_select: Binding::new().keys(&["space"]).help("space", "select"),
            run_action: Binding::new().keys(&["enter"]).help("enter", "run action"),
        }
    }
}

/// Styles for grid rendering.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Style for header cells.
    pub header: Style,
    /// Style for the focused column's header cell.
    pub header_focused: Style,
    /// Style for normal body rows.
    pub cell: Style,
    /// Style for the cursor row.
    pub cursor_row: Style,
    /// Style for selected rows.
    pub selected_row: Style,
    /// Style for the empty-result placeholder.
    pub placeholder: Style,
    /// Style for the selection status line.
    pub status_bar: Style,
    /// Style for the pagination readout.
    pub pagination: Style,
    /// Style for the help line.
    pub help: Style,
    /// Style for the filter prompt.
    pub filter_prompt: Style,
    /// Style for the enabled action label.
    pub action: Style,
    /// Style for the disabled action label.
    pub action_disabled: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            header: Style::new().bold(),
            header_focused: Style::new().bold().underline(),
            cell: Style::new(),
            cursor_row: Style::new().reverse(),
            selected_row: Style::new().bold().foreground("212"),
            placeholder: Style::new().foreground("240"),
            status_bar: Style::new().foreground("240"),
            pagination: Style::new().foreground("240"),
            help: Style::new().foreground("240"),
            filter_prompt: Style::new().faint(),
            action: Style::new().bold().foreground("212"),
            action_disabled: Style::new().faint(),
        }
    }
}

/// Data grid model composing sort, filter, visibility, selection, and
/// pagination over host rows.
pub struct DataGrid<T: Row> {
    /// Key bindings.
    pub key_map: KeyMap,
    /// Styles for rendering.
    pub styles: Styles,
    /// Whether to render the help line.
    pub show_help: bool,
    columns: Vec<Column<T>>,
    data: Vec<T>,
    filter_by: Option<String>,
    show_row_selection: bool,
    action_text: Option<String>,
    on_action: Option<ActionFn<T>>,
    sort: SortState,
    filters: Filters,
    visibility: Visibility,
    selection: Selection<T::Key>,
    paginator: Paginator,
    filter_mode: FilterMode,
    filter_input: FilterInput,
    cursor: usize,
    focused_col: usize,
}

impl<T: Row> DataGrid<T> {
    /// Creates a new grid over the given columns and rows.
    #[must_use]
    pub fn new(columns: Vec<Column<T>>, data: Vec<T>) -> Self {
        debug_assert!(unique_ids(&columns), "column ids must be unique");
        let mut paginator = Paginator::new();
        paginator.set_row_count(data.len());
        Self {
            key_map: KeyMap::default(),
            styles: Styles::default(),
            show_help: true,
            columns,
            data,
            filter_by: None,
            show_row_selection: false,
            action_text: None,
            on_action: None,
            sort: SortState::new(),
            filters: Filters::new(),
            visibility: Visibility::new(),
            selection: Selection::new(),
            paginator,
            filter_mode: FilterMode::Unfiltered,
            filter_input: FilterInput::new(),
            cursor: 0,
            focused_col: 0,
        }
    }

    /// Designates the column edited by the toolbar's free-text filter
    /// (builder pattern). Without one, no filter UI is rendered and filter
    /// entry keys are inert.
    #[must_use]
    pub fn filter_by(mut self, column: impl Into<String>) -> Self {
        let column = column.into();
        self.filter_input.prompt = format!("Search {column}: ");
        self.filter_by = Some(column);
        self
    }

    /// Sets the page size (builder pattern).
    #[must_use]
    pub fn page_size(mut self, n: usize) -> Self {
        let len = self.derived_len();
        self.paginator = Paginator::new().per_page(n);
        self.paginator.set_row_count(len);
        self
    }

    /// Enables the selection count readout and selection marks (builder
    /// pattern).
    #[must_use]
    pub fn show_row_selection(mut self, show: bool) -> Self {
        self.show_row_selection = show;
        self
    }

    /// Registers the selection action label and callback together (builder
    /// pattern).
    #[must_use]
    pub fn selection_action(
        mut self,
        text: impl Into<String>,
        action: impl Fn(&[T]) + Send + 'static,
    ) -> Self {
        self.action_text = Some(text.into());
        self.on_action = Some(Box::new(action));
        self
    }

    /// Sets the key map (builder pattern).
    #[must_use]
    pub fn with_key_map(mut self, key_map: KeyMap) -> Self {
        self.key_map = key_map;
        self
    }

    /// Sets the styles (builder pattern).
    #[must_use]
    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    /// Returns the rows.
    #[must_use]
    pub fn get_data(&self) -> &[T] {
        &self.data
    }

    /// Returns the column schema.
    #[must_use]
    pub fn get_columns(&self) -> &[Column<T>] {
        &self.columns
    }

    /// Replaces the rows. Selection keys absent from the new collection
    /// are pruned; the page index is clamped into the new range.
    pub fn set_data(&mut self, data: Vec<T>) {
        let keys: HashSet<T::Key> = data.iter().map(Row::key).collect();
        self.selection.retain(|k| keys.contains(k));
        self.data = data;
        tracing::debug!(rows = self.data.len(), "data replaced");
        self.refresh();
    }

    /// Replaces the column schema.
    pub fn set_columns(&mut self, columns: Vec<Column<T>>) {
        debug_assert!(unique_ids(&columns), "column ids must be unique");
        self.columns = columns;
        if self.focused_col >= self.columns.len() {
            self.focused_col = self.columns.len().saturating_sub(1);
        }
    }

    // ------------------------------------------------------------------
    // Derivation pipeline
    // ------------------------------------------------------------------

    /// Returns the filtered, sorted rows.
    #[must_use]
    pub fn derived(&self) -> Vec<&T> {
        self.derived_indices()
            .into_iter()
            .map(|i| &self.data[i])
            .collect()
    }

    /// Returns the rows of the current page.
    #[must_use]
    pub fn page_rows(&self) -> Vec<&T> {
        let indices = self.derived_indices();
        let (start, end) = self.paginator.slice_bounds(indices.len());
        indices[start..end].iter().map(|&i| &self.data[i]).collect()
    }

    /// Returns the visible columns in schema order.
    #[must_use]
    pub fn visible_columns(&self) -> Vec<&Column<T>> {
        self.columns
            .iter()
            .filter(|c| self.visibility.is_visible(c.id()))
            .collect()
    }

    fn filtered_indices(&self) -> Vec<usize> {
        self.data
            .iter()
            .enumerate()
            .filter(|(_, row)| {
                self.filters.active().all(|(column, value)| {
                    self.column(column)
                        .is_none_or(|col| col.matches(row, value))
                })
            })
            .map(|(i, _)| i)
            .collect()
    }

    fn derived_indices(&self) -> Vec<usize> {
        let mut indices = self.filtered_indices();
        if !self.sort.is_empty() {
            indices.sort_by(|&a, &b| self.compare_rows(&self.data[a], &self.data[b]));
        }
        indices
    }

    fn compare_rows(&self, a: &T, b: &T) -> Ordering {
        for entry in self.sort.entries() {
            let Some(col) = self.column(&entry.column) else {
                continue;
            };
            let Some(ord) = col.compare(a, b) else {
                continue;
            };
            let ord = match entry.direction {
                Direction::Ascending => ord,
                Direction::Descending => ord.reverse(),
            };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }

    fn derived_len(&self) -> usize {
        self.filtered_indices().len()
    }

    fn column(&self, id: &str) -> Option<&Column<T>> {
        self.columns.iter().find(|c| c.id() == id)
    }

    // ------------------------------------------------------------------
    // Filter
    // ------------------------------------------------------------------

    /// Overwrites the designated filter column's value. No-op without a
    /// `filter_by` column.
    pub fn set_filter_value(&mut self, value: &str) {
        let Some(column) = self.filter_by.clone() else {
            return;
        };
        self.filter_input.set_value(value);
        self.set_column_filter(&column, value);
    }

    /// Overwrites the filter value for an arbitrary column.
    pub fn set_column_filter(&mut self, column: &str, value: &str) {
        tracing::debug!(column, value, "filter changed");
        self.filters.set(column, value);
        self.refresh();
    }

    /// Clears the designated filter column and leaves filter entry.
    pub fn clear_filter(&mut self) {
        if let Some(column) = self.filter_by.clone() {
            self.filters.clear_column(&column);
        }
        self.filter_input.reset();
        self.filter_mode = FilterMode::Unfiltered;
        self.refresh();
    }

    /// Returns the current free-text filter value.
    #[must_use]
    pub fn filter_value(&self) -> &str {
        self.filter_input.value()
    }

    /// Returns the filter entry state.
    #[must_use]
    pub fn filter_mode(&self) -> FilterMode {
        self.filter_mode
    }

    // ------------------------------------------------------------------
    // Sort
    // ------------------------------------------------------------------

    /// Cycles sort on a column (ascending → descending → unsorted),
    /// replacing any other entries. No-op for columns without a
    /// comparator.
    pub fn cycle_sort(&mut self, column: &str) -> bool {
        if !self.column(column).is_some_and(Column::has_sorter) {
            return false;
        }
        self.sort.cycle(column);
        tracing::debug!(column, entries = ?self.sort.entries(), "sort cycled");
        true
    }

    /// Cycles sort on a column while keeping other entries as higher
    /// priority keys. No-op for columns without a comparator.
    pub fn cycle_sort_append(&mut self, column: &str) -> bool {
        if !self.column(column).is_some_and(Column::has_sorter) {
            return false;
        }
        self.sort.cycle_append(column);
        tracing::debug!(column, entries = ?self.sort.entries(), "sort cycled");
        true
    }

    /// Returns the sort state.
    #[must_use]
    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    // ------------------------------------------------------------------
    // Visibility
    // ------------------------------------------------------------------

    /// Flips a column's visibility. No-op for columns marked `no_hide`.
    pub fn toggle_visibility(&mut self, column: &str) -> bool {
        if !self.column(column).is_some_and(Column::hideable) {
            return false;
        }
        let visible = self.visibility.toggle(column);
        tracing::debug!(column, visible, "column visibility toggled");
        true
    }

    /// Returns whether a column is currently visible.
    #[must_use]
    pub fn is_column_visible(&self, column: &str) -> bool {
        self.visibility.is_visible(column)
    }

    // ------------------------------------------------------------------
    // Pagination and cursor
    // ------------------------------------------------------------------

    /// Returns the current page (0-indexed).
    #[must_use]
    pub fn page(&self) -> usize {
        self.paginator.page()
    }

    /// Returns the number of pages over the derived rows.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.paginator.total_pages()
    }

    /// Returns whether a next page exists.
    #[must_use]
    pub fn can_next_page(&self) -> bool {
        !self.paginator.on_last_page()
    }

    /// Returns whether a previous page exists.
    #[must_use]
    pub fn can_prev_page(&self) -> bool {
        !self.paginator.on_first_page()
    }

    /// Advances to the next page. No-op on the last page.
    pub fn next_page(&mut self) -> bool {
        if !self.can_next_page() {
            return false;
        }
        self.paginator.next_page();
        self.snap_cursor_to_page();
        true
    }

    /// Returns to the previous page. No-op on the first page.
    pub fn prev_page(&mut self) -> bool {
        if !self.can_prev_page() {
            return false;
        }
        self.paginator.prev_page();
        self.snap_cursor_to_page();
        true
    }

    /// Returns the cursor position within the derived rows.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Moves the cursor up one row; the page follows the cursor.
    pub fn cursor_up(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.follow_cursor();
        true
    }

    /// Moves the cursor down one row; the page follows the cursor.
    pub fn cursor_down(&mut self) -> bool {
        let len = self.derived_len();
        if len == 0 || self.cursor + 1 >= len {
            return false;
        }
        self.cursor += 1;
        self.follow_cursor();
        true
    }

    fn follow_cursor(&mut self) {
        self.paginator
            .set_page(self.cursor / self.paginator.get_per_page());
    }

    fn snap_cursor_to_page(&mut self) {
        let len = self.derived_len();
        let (start, end) = self.paginator.slice_bounds(len);
        if end == 0 {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.clamp(start, end - 1);
        }
    }

    fn refresh(&mut self) {
        let len = self.derived_len();
        self.paginator.set_row_count(len);
        self.snap_cursor_to_page();
    }

    // ------------------------------------------------------------------
    // Column focus
    // ------------------------------------------------------------------

    /// Returns the focused column.
    #[must_use]
    pub fn focused_column(&self) -> Option<&Column<T>> {
        self.columns.get(self.focused_col)
    }

    /// Focuses the next column.
    pub fn focus_next_column(&mut self) -> bool {
        if self.focused_col + 1 >= self.columns.len() {
            return false;
        }
        self.focused_col += 1;
        true
    }

    /// Focuses the previous column.
    pub fn focus_prev_column(&mut self) -> bool {
        if self.focused_col == 0 {
            return false;
        }
        self.focused_col -= 1;
        true
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Flips selection for a row key. Selection persists across sort,
    /// filter, and page changes.
    pub fn toggle_selected(&mut self, key: T::Key) -> bool {
        let selected = self.selection.toggle(key);
        tracing::debug!(selected_total = self.selection.len(), "selection toggled");
        selected
    }

    /// Flips selection for the row under the cursor.
    pub fn toggle_selected_at_cursor(&mut self) -> bool {
        let key = {
            let indices = self.derived_indices();
            indices.get(self.cursor).map(|&i| self.data[i].key())
        };
        match key {
            Some(key) => {
                self.toggle_selected(key);
                true
            }
            None => false,
        }
    }

    /// Returns whether a row key is selected.
    #[must_use]
    pub fn is_selected(&self, key: &T::Key) -> bool {
        self.selection.contains(key)
    }

    /// Returns the total number of selected keys, including keys filtered
    /// out of view.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// Returns the selected rows visible under the active filters, in
    /// derived row order.
    #[must_use]
    pub fn selected_rows(&self) -> Vec<&T> {
        self.derived_indices()
            .into_iter()
            .map(|i| &self.data[i])
            .filter(|row| self.selection.contains(&row.key()))
            .collect()
    }

    /// Returns the number of selected rows visible under the active
    /// filters.
    #[must_use]
    pub fn selected_visible_count(&self) -> usize {
        self.selected_rows().len()
    }

    /// Invokes the selection action with the materialized filtered
    /// selection. No-op without a registered action or with an empty
    /// filtered selection; the selection is not cleared afterward.
    pub fn trigger_selection_action(&self) -> bool {
        let Some(action) = &self.on_action else {
            return false;
        };
        let rows: Vec<T> = self.selected_rows().into_iter().cloned().collect();
        if rows.is_empty() {
            return false;
        }
        tracing::debug!(rows = rows.len(), "selection action triggered");
        action(&rows);
        true
    }

    // ------------------------------------------------------------------
    // Update
    // ------------------------------------------------------------------

    /// Updates the grid from a key event. Returns whether view state
    /// changed (or the selection action fired).
    pub fn update(&mut self, ev: &KeyEvent) -> bool {
        if ev.kind == KeyEventKind::Release {
            return false;
        }
        let key = key_string(ev);
        if key.is_empty() {
            return false;
        }
        self.handle_key(&key)
    }

    fn handle_key(&mut self, key: &str) -> bool {
        if self.filter_mode == FilterMode::Filtering {
            return self.handle_filter_key(key);
        }

        if matches(key, &[&self.key_map.cursor_up]) {
            self.cursor_up()
        } else if matches(key, &[&self.key_map.cursor_down]) {
            self.cursor_down()
        } else if matches(key, &[&self.key_map.prev_page]) {
            self.prev_page()
        } else if matches(key, &[&self.key_map.next_page]) {
            self.next_page()
        } else if matches(key, &[&self.key_map.focus_prev_column]) {
            self.focus_prev_column()
        } else if matches(key, &[&self.key_map.focus_next_column]) {
            self.focus_next_column()
        } else if matches(key, &[&self.key_map.toggle_sort]) {
            let column = self.focused_column().map(|c| c.id().to_string());
            column.is_some_and(|c| self.cycle_sort(&c))
        } else if matches(key, &[&self.key_map.append_sort]) {
            let column = self.focused_column().map(|c| c.id().to_string());
            column.is_some_and(|c| self.cycle_sort_append(&c))
        } else if matches(key, &[&self.key_map.toggle_hide]) {
            let column = self.focused_column().map(|c| c.id().to_string());
            column.is_some_and(|c| self.toggle_visibility(&c))
        } else if matches(key, &[&self.key_map.filter]) {
            if self.filter_by.is_none() {
                return false;
            }
            self.filter_mode = FilterMode::Filtering;
            true
        } else if matches(key, &[&self.key_map.clear_filter]) {
            if self.filter_input.value().is_empty() {
                false
            } else {
                self.clear_filter();
                true
            }
        } else if matches(key, &[&self.key_map.toggle_select]) {
            self.show_row_selection && self.toggle_selected_at_cursor()
        } else if matches(key, &[&self.key_map.run_action]) {
            self.trigger_selection_action()
        } else {
            false
        }
    }

    fn handle_filter_key(&mut self, key: &str) -> bool {
        if matches(key, &[&self.key_map.accept_while_filtering]) {
            self.filter_mode = if self.filter_input.value().is_empty() {
                FilterMode::Unfiltered
            } else {
                FilterMode::Applied
            };
            true
        } else if matches(key, &[&self.key_map.cancel_while_filtering]) {
            self.clear_filter();
            true
        } else if key == "backspace" {
            self.filter_input.backspace();
            self.apply_input_filter();
            true
        } else if key == "space" {
            self.filter_input.insert_char(' ');
            self.apply_input_filter();
            true
        } else {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if !c.is_control() => {
                    self.filter_input.insert_char(c);
                    self.apply_input_filter();
                    true
                }
                _ => false,
            }
        }
    }

    fn apply_input_filter(&mut self) {
        let Some(column) = self.filter_by.clone() else {
            return;
        };
        let value = self.filter_input.value().to_string();
        self.set_column_filter(&column, &value);
    }

    // ------------------------------------------------------------------
    // View
    // ------------------------------------------------------------------

    /// Renders the grid.
    #[must_use]
    pub fn view(&self) -> String {
        let mut sections: Vec<String> = Vec::new();

        if let Some(toolbar) = self.toolbar_view() {
            sections.push(toolbar);
        }

        sections.push(self.header_view());
        sections.extend(self.body_view());

        if self.show_row_selection {
            sections.push(self.status_view());
        }
        if self.paginator.total_pages() > 1 {
            sections.push(self.styles.pagination.render(&self.paginator.view()));
        }
        if self.show_help {
            sections.push(self.styles.help.render(&self.short_help()));
        }

        sections.join("\n")
    }

    fn toolbar_view(&self) -> Option<String> {
        let mut parts: Vec<String> = Vec::new();

        if self.filter_by.is_some() {
            let mut input = self.styles.filter_prompt.render(&self.filter_input.prompt);
            input.push_str(self.filter_input.value());
            if self.filter_mode == FilterMode::Filtering {
                input.push('█');
            }
            parts.push(input);
        }

        if self.show_row_selection {
            if let Some(text) = &self.action_text {
                let count = self.selected_visible_count();
                let label = format!("[{text} ({count})]");
                let styled = if count == 0 {
                    self.styles.action_disabled.render(&label)
                } else {
                    self.styles.action.render(&label)
                };
                parts.push(styled);
            }
        }

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(CELL_GAP))
        }
    }

    fn header_view(&self) -> String {
        let mut cells: Vec<String> = Vec::new();
        if self.show_row_selection {
            cells.push(" ".repeat(SELECT_MARK_WIDTH));
        }
        for (i, col) in self.columns.iter().enumerate() {
            if !self.visibility.is_visible(col.id()) {
                continue;
            }
            let mut title = col.title().to_string();
            if let Some(direction) = self.sort.direction_of(col.id()) {
                title.push(' ');
                title.push_str(direction.indicator());
            }
            let padded = pad(&clip(&title, col.get_width()), col.get_width());
            let style = if i == self.focused_col {
                &self.styles.header_focused
            } else {
                &self.styles.header
            };
            cells.push(style.render(&padded));
        }
        cells.join(CELL_GAP)
    }

    fn body_view(&self) -> Vec<String> {
        let indices = self.derived_indices();
        if indices.is_empty() {
            let width = self.total_width().max(NO_RESULTS.len());
            let placeholder = format!("{NO_RESULTS:^width$}");
            return vec![self.styles.placeholder.render(&placeholder)];
        }

        let (start, end) = self.paginator.slice_bounds(indices.len());
        let mut lines = Vec::with_capacity(end - start);
        for (offset, &data_idx) in indices[start..end].iter().enumerate() {
            let row = &self.data[data_idx];
            let selected = self.selection.contains(&row.key());

            let mut cells: Vec<String> = Vec::new();
            if self.show_row_selection {
                cells.push(if selected { "[x] " } else { "[ ] " }.to_string());
            }
            for col in &self.columns {
                if !self.visibility.is_visible(col.id()) {
                    continue;
                }
                let value = col.render_cell(row);
                cells.push(pad(&clip(&value, col.get_width()), col.get_width()));
            }

            let line = cells.join(CELL_GAP);
            let line = if start + offset == self.cursor {
                self.styles.cursor_row.render(&line)
            } else if selected {
                self.styles.selected_row.render(&line)
            } else {
                self.styles.cell.render(&line)
            };
            lines.push(line);
        }
        lines
    }

    fn status_view(&self) -> String {
        let text = format!(
            "{} of {} row(s) selected.",
            self.selected_visible_count(),
            self.derived_len()
        );
        self.styles.status_bar.render(&text)
    }

    fn short_help(&self) -> String {
        let bindings = [
            &self.key_map.cursor_up,
            &self.key_map.cursor_down,
            &self.key_map.next_page,
            &self.key_map.toggle_sort,
            &self.key_map.filter,
            &self.key_map.toggle_select,
        ];
        bindings
            .iter()
            .filter(|b| b.enabled())
            .map(|b| {
                let (key, desc) = b.get_help();
                format!("{key} {desc}")
            })
            .collect::<Vec<_>>()
            .join(" • ")
    }

    fn total_width(&self) -> usize {
        let cols = self.visible_columns();
        let cells: usize = cols.iter().map(|c| c.get_width()).sum();
        let gaps = cols.len().saturating_sub(1) * CELL_GAP.len();
        let select = if self.show_row_selection {
            SELECT_MARK_WIDTH + CELL_GAP.len()
        } else {
            0
        };
        cells + gaps + select
    }
}

// Implement Debug manually since the action callback doesn't implement it.
impl<T: Row> fmt::Debug for DataGrid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataGrid")
            .field("rows", &self.data.len())
            .field("columns", &self.columns.len())
            .field("page", &self.paginator.page())
            .field("filter_mode", &self.filter_mode)
            .field("selected", &self.selection.len())
            .finish()
    }
}

fn unique_ids<T: 'static>(columns: &[Column<T>]) -> bool {
    let mut seen = HashSet::new();
    columns.iter().all(|c| seen.insert(c.id()))
}

/// Truncates a string to the given display width, adding an ellipsis if
/// needed.
fn clip(s: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    if s.width() <= width {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let cw = c.width().unwrap_or(0);
        if used + cw > width - 1 {
            break;
        }
        out.push(c);
        used += cw;
    }
    out.push('…');
    out
}

/// Pads a string with spaces to the given display width.
fn pad(s: &str, width: usize) -> String {
    let used = s.width();
    if used >= width {
        return s.to_string();
    }
    format!("{}{}", s, " ".repeat(width - used))
}
