//! Row identity.
//!
//! Rows are opaque host records; the grid only needs a stable key per row
//! so selection survives re-sorting, re-filtering, and replacement of the
//! data collection. Selection is never keyed by position.

use std::hash::Hash;

/// Trait for records that can be displayed in a [`DataGrid`].
///
/// [`DataGrid`]: crate::grid::DataGrid
///
/// # Example
///
/// ```rust
/// use datagrid::row::Row;
///
/// #[derive(Clone)]
/// struct Student {
///     matric_no: String,
///     name: String,
/// }
///
/// impl Row for Student {
///     type Key = String;
///
///     fn key(&self) -> String {
///         self.matric_no.clone()
///     }
/// }
/// ```
pub trait Row: Clone + Send + 'static {
    /// The stable key type identifying this row.
    type Key: Clone + Eq + Hash + Send + 'static;

    /// Returns the stable key for this row.
    fn key(&self) -> Self::Key;
}
