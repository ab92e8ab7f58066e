#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::doc_markdown)]
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # Datagrid
//!
//! A data table component for terminal applications.
//!
//! The grid owns four independent slices of view state over an externally
//! supplied row collection and column schema:
//! - **sort** - ordered (column, direction) entries with tri-state cycling
//! - **filter** - per-column filter values, substring matching by default
//! - **visibility** - per-column show/hide toggles
//! - **selection** - selected rows, keyed by a host-supplied stable id
//!
//! plus pagination, and derives the currently visible, sorted, filtered,
//! paginated subset of rows on every state change. Rows are never mutated;
//! the only outbound effect is the optional selection-action callback.
//!
//! ## Example
//!
//! ```rust
//! use datagrid::column::Column;
//! use datagrid::grid::DataGrid;
//! use datagrid::row::Row;
//!
//! #[derive(Clone)]
//! struct Project {
//!     id: u32,
//!     title: String,
//! }
//!
//! impl Row for Project {
//!     type Key = u32;
//!
//!     fn key(&self) -> u32 {
//!         self.id
//!     }
//! }
//!
//! let columns = vec![
//!     Column::new("id", "ID", |p: &Project| p.id.to_string()).width(6),
//!     Column::new("title", "Title", |p: &Project| p.title.clone()).sorted_by_text(),
//! ];
//!
//! let projects = vec![
//!     Project { id: 1, title: "Compilers".into() },
//!     Project { id: 2, title: "Databases".into() },
//! ];
//!
//! let grid = DataGrid::new(columns, projects).filter_by("title");
//! assert_eq!(grid.derived().len(), 2);
//! ```

pub mod column;
pub mod filter;
pub mod grid;
pub mod key;
pub mod paginator;
pub mod row;
pub mod selection;
pub mod sort;
pub mod style;
pub mod visibility;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::column::Column;
    pub use crate::filter::FilterMode;
    pub use crate::grid::{DataGrid, KeyMap, Styles};
    pub use crate::key::{Binding, key_string, matches};
    pub use crate::paginator::{Paginator, Readout};
    pub use crate::row::Row;
    pub use crate::selection::Selection;
    pub use crate::sort::{Direction, SortState};
    pub use crate::style::{Color, Style};
    pub use crate::visibility::Visibility;
}
