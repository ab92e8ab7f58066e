//! Pagination state and readout.
//!
//! Tracks the current page over a derived row count. Unlike a free-running
//! page counter, `set_row_count` recomputes the page total and clamps the
//! page index whenever the row count changes, so filtering down a large
//! collection can never strand the view on an out-of-range page.
//!
//! # Example
//!
//! ```rust
//! use datagrid::paginator::Paginator;
//!
//! let mut paginator = Paginator::new().per_page(10);
//! paginator.set_row_count(25);
//!
//! assert_eq!(paginator.total_pages(), 3);
//! paginator.next_page();
//! assert_eq!(paginator.slice_bounds(25), (10, 20));
//! ```

/// Pagination readout style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Readout {
    /// Arabic numerals: "1/5"
    #[default]
    Arabic,
    /// Dot indicators: "•○○○○"
    Dots,
}

/// Pagination model.
#[derive(Debug, Clone)]
pub struct Paginator {
    /// Readout style (Arabic or Dots).
    pub readout: Readout,
    /// Character for the active page in Dots mode.
    pub active_dot: String,
    /// Character for inactive pages in Dots mode.
    pub inactive_dot: String,
    page: usize,
    per_page: usize,
    total_pages: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new()
    }
}

impl Paginator {
    /// Creates a new paginator with ten rows per page.
    #[must_use]
    pub fn new() -> Self {
        Self {
            readout: Readout::Arabic,
            active_dot: "•".to_string(),
            inactive_dot: "○".to_string(),
            page: 0,
            per_page: 10,
            total_pages: 1,
        }
    }

    /// Sets the number of rows per page (builder pattern).
    #[must_use]
    pub fn per_page(mut self, n: usize) -> Self {
        self.per_page = n.max(1);
        self
    }

    /// Sets the readout style (builder pattern).
    #[must_use]
    pub fn readout(mut self, readout: Readout) -> Self {
        self.readout = readout;
        self
    }

    /// Returns the current page (0-indexed).
    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    /// Sets the current page, clamped to the valid range.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.min(self.total_pages.saturating_sub(1));
    }

    /// Returns the rows per page.
    #[must_use]
    pub fn get_per_page(&self) -> usize {
        self.per_page
    }

    /// Returns the total number of pages.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Recomputes the page count for `rows` rows and clamps the page
    /// index. Zero rows leave a single empty page.
    pub fn set_row_count(&mut self, rows: usize) {
        self.total_pages = if rows == 0 {
            1
        } else {
            rows.div_ceil(self.per_page)
        };
        if self.page >= self.total_pages {
            self.page = self.total_pages - 1;
        }
    }

    /// Returns slice bounds for the current page over `len` rows.
    #[must_use]
    pub fn slice_bounds(&self, len: usize) -> (usize, usize) {
        let start = (self.page * self.per_page).min(len);
        let end = (start + self.per_page).min(len);
        (start, end)
    }

    /// Returns the number of rows on the current page.
    #[must_use]
    pub fn page_len(&self, len: usize) -> usize {
        let (start, end) = self.slice_bounds(len);
        end - start
    }

    /// Returns whether we're on the first page.
    #[must_use]
    pub fn on_first_page(&self) -> bool {
        self.page == 0
    }

    /// Returns whether we're on the last page.
    #[must_use]
    pub fn on_last_page(&self) -> bool {
        self.page == self.total_pages.saturating_sub(1)
    }

    /// Navigates to the previous page, if any.
    pub fn prev_page(&mut self) {
        if !self.on_first_page() {
            self.page -= 1;
        }
    }

    /// Navigates to the next page, if any.
    pub fn next_page(&mut self) {
        if !self.on_last_page() {
            self.page += 1;
        }
    }

    /// Renders the pagination readout.
    #[must_use]
    pub fn view(&self) -> String {
        match self.readout {
            Readout::Arabic => format!("{}/{}", self.page + 1, self.total_pages),
            Readout::Dots => (0..self.total_pages)
                .map(|i| {
                    if i == self.page {
                        self.active_dot.as_str()
                    } else {
                        self.inactive_dot.as_str()
                    }
                })
                .collect(),
        }
    }
}
