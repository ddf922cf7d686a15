//! Table cell editing - buffered edits, commit and cancel.

use super::DataGrid;
use crate::constants::{MSG_FIX_VALIDATION, MSG_SAVED};
use crate::data::{DataError, DataResult};
use crate::edit::CommitSummary;
use crate::notifications::Toast;
use crate::persistence::KeyValueStore;
use crate::types::RowId;

impl<S: KeyValueStore> DataGrid<S> {
    /// Buffer an edit for a cell and validate it.
    ///
    /// Returns the validation message when the value is invalid.
    pub fn set_cell(
        &mut self,
        row: RowId,
        column: &str,
        value: &str,
    ) -> DataResult<Option<&'static str>> {
        if self.rows.get(row).is_none() {
            return Err(DataError::RowNotFound(row.to_string()));
        }
        Ok(self.edits.set_cell(row, column, value))
    }

    /// Buffer an edit addressed by position on the current page.
    ///
    /// The position is resolved to a row identity now, so later sorting,
    /// filtering or paging cannot redirect the edit to another row.
    pub fn set_cell_at(
        &mut self,
        view_index: usize,
        column: &str,
        value: &str,
    ) -> DataResult<Option<&'static str>> {
        let row = self.row_id_at(view_index)?;
        Ok(self.edits.set_cell(row, column, value))
    }

    /// What a cell shows: the pending edit, else the stored value
    pub fn display_value(&self, row: RowId, column: &str) -> String {
        if let Some(value) = self.edits.value(row, column) {
            return value.to_string();
        }
        self.rows
            .get(row)
            .map(|r| r.record.display(column))
            .unwrap_or_default()
    }

    /// Validation message shown next to a cell
    pub fn cell_error(&self, row: RowId, column: &str) -> Option<&str> {
        self.edits.error(row, column)
    }

    /// Whether Save All / Cancel should be offered
    pub fn has_pending_edits(&self) -> bool {
        !self.edits.is_empty()
    }

    /// Commit every buffered edit, or none of them.
    ///
    /// With validation errors outstanding the store is untouched and a
    /// warning toast is raised.
    pub fn commit_all(&mut self) -> DataResult<CommitSummary> {
        match self.edits.commit(&mut self.rows) {
            Ok(summary) => {
                tracing::info!(
                    rows_updated = summary.rows_updated,
                    rows_missing = summary.rows_missing.len(),
                    "committed edits"
                );
                self.refresh_total();
                self.toasts.push(Toast::success(MSG_SAVED));
                Ok(summary)
            }
            Err(e) => {
                tracing::warn!("commit blocked: {}", e);
                self.toasts.push(Toast::warning(MSG_FIX_VALIDATION));
                Err(e)
            }
        }
    }

    /// Discard every buffered edit and validation error
    pub fn cancel_all(&mut self) {
        tracing::debug!(rows = self.edits.pending_rows(), "cancelled edits");
        self.edits.clear();
    }
}
