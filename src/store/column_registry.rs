//! Known columns and the ordered subset on display.

use crate::constants::DEFAULT_COLUMNS;
use crate::data::{DataError, DataResult};
use crate::types::column_id;
use serde::{Deserialize, Serialize};

/// Every column ever introduced plus the ordered subset on display.
///
/// Invariant: each visible column is also in `all_columns`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnRegistry {
    all_columns: Vec<String>,
    visible_columns: Vec<String>,
}

impl Default for ColumnRegistry {
    fn default() -> Self {
        let defaults: Vec<String> = DEFAULT_COLUMNS.iter().map(|c| c.to_string()).collect();
        Self {
            all_columns: defaults.clone(),
            visible_columns: defaults,
        }
    }
}

impl ColumnRegistry {
    /// Build from stored lists. Visible columns missing from `all_columns`
    /// are appended there; duplicates are dropped.
    pub fn new(all_columns: Vec<String>, visible_columns: Vec<String>) -> Self {
        let mut registry = Self {
            all_columns: Vec::with_capacity(all_columns.len()),
            visible_columns: Vec::with_capacity(visible_columns.len()),
        };
        for column in all_columns {
            registry.register(&column);
        }
        for column in visible_columns {
            if let Some(id) = column_id(&column) {
                registry.ensure_known(&id);
                if !registry.visible_columns.contains(&id) {
                    registry.visible_columns.push(id);
                }
            }
        }
        registry
    }

    pub fn all_columns(&self) -> &[String] {
        &self.all_columns
    }

    pub fn visible_columns(&self) -> &[String] {
        &self.visible_columns
    }

    pub fn is_visible(&self, column: &str) -> bool {
        self.visible_columns.iter().any(|c| c == column)
    }

    pub fn is_known(&self, column: &str) -> bool {
        self.all_columns.iter().any(|c| c == column)
    }

    /// Hide a visible column or append a hidden one to the display order.
    ///
    /// Unknown columns are added to both lists. Returns whether the column
    /// is visible afterwards.
    pub fn toggle_visible(&mut self, column: &str) -> bool {
        let Some(id) = column_id(column) else {
            return false;
        };
        if let Some(index) = self.visible_columns.iter().position(|c| *c == id) {
            self.visible_columns.remove(index);
            false
        } else {
            self.ensure_known(&id);
            self.visible_columns.push(id);
            true
        }
    }

    /// Introduce a field by name and make it visible.
    ///
    /// The name is trimmed and lowercased; returns the resulting column
    /// identifier, or `None` when the name is blank.
    pub fn add_field(&mut self, raw_name: &str) -> Option<String> {
        let id = column_id(raw_name)?;
        self.ensure_known(&id);
        if !self.is_visible(&id) {
            self.visible_columns.push(id.clone());
        }
        Some(id)
    }

    /// Record a column as known without changing visibility.
    /// Returns `true` if it was new.
    pub fn register(&mut self, column: &str) -> bool {
        match column_id(column) {
            Some(id) => self.ensure_known(&id),
            None => false,
        }
    }

    /// Move the visible column at `from` to position `to`.
    ///
    /// `to` past the end places the column last. `all_columns` is untouched.
    pub fn reorder(&mut self, from: usize, to: usize) -> DataResult<()> {
        let len = self.visible_columns.len();
        if from >= len {
            return Err(DataError::ColumnIndexOutOfRange { index: from, len });
        }
        let column = self.visible_columns.remove(from);
        let to = to.min(self.visible_columns.len());
        self.visible_columns.insert(to, column);
        Ok(())
    }

    fn ensure_known(&mut self, id: &str) -> bool {
        if self.is_known(id) {
            false
        } else {
            self.all_columns.push(id.to_string());
            true
        }
    }
}
