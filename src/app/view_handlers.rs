//! Search, sort and page navigation.

use super::DataGrid;
use crate::data::{DataError, DataResult, ViewPage, ViewQuery, compute_view};
use crate::persistence::KeyValueStore;
use crate::types::{RowId, SortDirection, SortKey};

impl<S: KeyValueStore> DataGrid<S> {
    /// Derive the page the user currently sees
    pub fn current_page(&self) -> ViewPage<'_> {
        let query = ViewQuery {
            search: self.view.search.clone(),
            sort: self.view.sort.clone(),
            page: self.view.pager.current_page,
            page_size: self.view.pager.page_size,
        };
        compute_view(self.rows.rows(), &query)
    }

    /// Identity of the row at a position on the current page
    pub fn row_id_at(&self, view_index: usize) -> DataResult<RowId> {
        self.current_page()
            .rows
            .get(view_index)
            .map(|row| row.id)
            .ok_or_else(|| DataError::RowNotFound(format!("view index {}", view_index)))
    }

    pub fn search(&self) -> &str {
        &self.view.search
    }

    /// Change the search term and return to the first page
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.view.search = term.into();
        self.view.pager.go_first();
        self.refresh_total();
    }

    pub fn sort(&self) -> Option<&SortKey> {
        self.view.sort.as_ref()
    }

    /// Header click: flip direction on the active column, otherwise sort
    /// the clicked column ascending.
    pub fn toggle_sort(&mut self, column: &str) {
        let next = match self.view.sort.take() {
            Some(key) if key.column == column => SortKey {
                direction: key.direction.flipped(),
                ..key
            },
            _ => SortKey {
                column: column.to_string(),
                direction: SortDirection::Asc,
            },
        };
        tracing::debug!(column, direction = next.direction.label(), "sort changed");
        self.view.sort = Some(next);
    }

    pub fn set_sort(&mut self, sort: Option<SortKey>) {
        self.view.sort = sort;
    }

    pub fn go_first_page(&mut self) {
        self.view.pager.go_first();
    }

    pub fn go_prev_page(&mut self) {
        self.view.pager.go_prev();
    }

    pub fn go_next_page(&mut self) {
        self.view.pager.go_next();
    }

    pub fn go_last_page(&mut self) {
        self.view.pager.go_last();
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.view.pager.go_to(page);
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.view.pager.set_page_size(size);
    }
}
