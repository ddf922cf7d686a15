//! Row add and confirmed row delete.

use super::DataGrid;
use crate::constants::MSG_ROW_DELETED;
use crate::data::{DataError, DataResult};
use crate::notifications::Toast;
use crate::persistence::KeyValueStore;
use crate::types::{Row, RowId, blank_record};

impl<S: KeyValueStore> DataGrid<S> {
    /// Append a row with an empty value in every visible column.
    ///
    /// Hidden default columns keep their blank-record value, so a hidden
    /// `age` starts at 0.
    pub fn add_row(&mut self) -> RowId {
        let mut record = blank_record();
        for column in self.columns.visible_columns() {
            record.set(column.clone(), "");
        }
        let row = Row::new(record);
        let id = row.id;

        let next = self.rows.with_appended(row);
        self.discard_edits("row added");
        self.rows.replace_all(next);
        self.refresh_total();

        tracing::info!(row = %id, "added row");
        id
    }

    /// Stage a delete awaiting confirmation
    pub fn request_delete(&mut self, row: RowId) -> DataResult<()> {
        if self.rows.get(row).is_none() {
            return Err(DataError::RowNotFound(row.to_string()));
        }
        self.pending.delete = Some(row);
        Ok(())
    }

    /// Stage a delete for the row at a position on the current page
    pub fn request_delete_at(&mut self, view_index: usize) -> DataResult<RowId> {
        let row = self.row_id_at(view_index)?;
        self.pending.delete = Some(row);
        Ok(row)
    }

    /// Remove the staged row from the store
    pub fn confirm_delete(&mut self) -> DataResult<Row> {
        let id = self.pending.delete.take().ok_or(DataError::NoPendingDelete)?;
        let removed = self
            .rows
            .get(id)
            .cloned()
            .ok_or_else(|| DataError::RowNotFound(id.to_string()))?;
        let next = self
            .rows
            .without(id)
            .ok_or_else(|| DataError::RowNotFound(id.to_string()))?;

        self.discard_edits("row deleted");
        self.rows.replace_all(next);
        self.refresh_total();
        self.toasts.push(Toast::success(MSG_ROW_DELETED));

        tracing::info!(row = %id, "deleted row");
        Ok(removed)
    }

    /// Close the delete dialog without deleting. Returns whether one was staged.
    pub fn cancel_delete(&mut self) -> bool {
        self.pending.delete.take().is_some()
    }
}
