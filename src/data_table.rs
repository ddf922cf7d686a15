//! Pagination cursor for the grid.
//!
//! Tracks the current page and page size against the filtered row count
//! and produces the labels a renderer shows next to the page controls.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let mut pager = DataTableState::new(view.total);
//! pager.go_next();
//! let range = pager.visible_range();
//! ```

use crate::constants::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};

/// Pagination state for a grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataTableState {
    /// Current page (0-indexed)
    pub current_page: usize,
    /// Rows per page
    pub page_size: usize,
    /// Rows after filtering
    pub total_rows: usize,
}

impl Default for DataTableState {
    fn default() -> Self {
        Self::new(0)
    }
}

impl DataTableState {
    pub fn new(total_rows: usize) -> Self {
        Self::with_page_size(total_rows, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(total_rows: usize, page_size: usize) -> Self {
        Self {
            current_page: 0,
            page_size: page_size.max(1),
            total_rows,
        }
    }

    pub fn total_pages(&self) -> usize {
        if self.total_rows == 0 {
            1
        } else {
            self.total_rows.div_ceil(self.page_size)
        }
    }

    pub fn can_go_prev(&self) -> bool {
        self.current_page > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page < self.total_pages().saturating_sub(1)
    }

    pub fn go_first(&mut self) {
        self.current_page = 0;
    }

    pub fn go_prev(&mut self) {
        if self.can_go_prev() {
            self.current_page -= 1;
        }
    }

    pub fn go_next(&mut self) {
        if self.can_go_next() {
            self.current_page += 1;
        }
    }

    pub fn go_last(&mut self) {
        self.current_page = self.total_pages().saturating_sub(1);
    }

    /// Jump to a page, clamped to the last page
    pub fn go_to(&mut self, page: usize) {
        self.current_page = page.min(self.total_pages().saturating_sub(1));
    }

    /// Change rows per page. Zero is ignored.
    pub fn set_page_size(&mut self, size: usize) {
        if size == 0 {
            return;
        }
        self.page_size = size;
        // Reset to first page when changing page size
        self.current_page = 0;
    }

    /// Update the filtered row count, pulling the cursor back onto the last page
    pub fn set_total_rows(&mut self, total_rows: usize) {
        self.total_rows = total_rows;
        if self.current_page >= self.total_pages() {
            self.go_last();
        }
    }

    /// Get the range of rows to display for current page
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        let start = (self.current_page * self.page_size).min(self.total_rows);
        let end = (start + self.page_size).min(self.total_rows);
        start..end
    }

    /// "Showing X-Y of Z" with 1-indexed bounds
    pub fn showing_label(&self) -> String {
        let range = self.visible_range();
        let showing_start = if self.total_rows == 0 { 0 } else { range.start + 1 };
        format!("Showing {}-{} of {}", showing_start, range.end, self.total_rows)
    }

    /// "page / pages" with 1-indexed page
    pub fn page_label(&self) -> String {
        format!("{} / {}", self.current_page + 1, self.total_pages())
    }

    pub fn page_size_options() -> &'static [usize] {
        PAGE_SIZE_OPTIONS
    }
}
