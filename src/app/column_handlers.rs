//! Column management - visibility, new fields, drag reorder.
//!
//! Every mutation is followed by an explicit save of the registry.

use super::DataGrid;
use crate::data::DataResult;
use crate::persistence::KeyValueStore;

impl<S: KeyValueStore> DataGrid<S> {
    /// Show or hide a column. Returns whether it is visible afterwards.
    pub fn toggle_column(&mut self, column: &str) -> DataResult<bool> {
        let visible = self.columns.toggle_visible(column);
        tracing::info!(column, visible, "toggled column");
        self.save_columns()?;
        Ok(visible)
    }

    /// Add a field from user input; blank input is ignored.
    pub fn add_field(&mut self, raw_name: &str) -> DataResult<Option<String>> {
        let Some(column) = self.columns.add_field(raw_name) else {
            return Ok(None);
        };
        tracing::info!(column = %column, "added field");
        self.save_columns()?;
        Ok(Some(column))
    }

    /// Move a visible column from one display position to another
    pub fn reorder_columns(&mut self, from: usize, to: usize) -> DataResult<()> {
        self.columns.reorder(from, to)?;
        tracing::debug!(from, to, "reordered columns");
        self.save_columns()
    }

    /// Persist both column lists
    pub fn save_columns(&mut self) -> DataResult<()> {
        self.persistence.save_columns(&self.columns).inspect_err(|e| {
            tracing::error!("Failed to save columns: {}", e);
        })
    }
}
