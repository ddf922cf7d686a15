//! The ordered row sequence.
//!
//! Rows are replaced wholesale; helpers compute the next sequence without
//! touching the current one.

use crate::types::{Row, RowId};

/// Ordered sequence of rows; the single source of truth for cell data.
///
/// Every change goes through [`RowStore::replace_all`]: callers compute the
/// next full sequence and hand it over. Helpers below only build those
/// sequences.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RowStore {
    rows: Vec<Row>,
}

impl RowStore {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Overwrite the full row sequence. No validation, no merge.
    pub fn replace_all(&mut self, rows: Vec<Row>) {
        tracing::debug!(from = self.rows.len(), to = rows.len(), "replacing rows");
        self.rows = rows;
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, id: RowId) -> Option<&Row> {
        self.rows.iter().find(|row| row.id == id)
    }

    /// Current position of a row in the store
    pub fn position(&self, id: RowId) -> Option<usize> {
        self.rows.iter().position(|row| row.id == id)
    }

    /// Next sequence with `row` appended
    pub fn with_appended(&self, row: Row) -> Vec<Row> {
        let mut next = self.rows.clone();
        next.push(row);
        next
    }

    /// Next sequence with the row removed, or `None` if it is not stored
    pub fn without(&self, id: RowId) -> Option<Vec<Row>> {
        let index = self.position(id)?;
        let mut next = self.rows.clone();
        next.remove(index);
        Some(next)
    }
}
