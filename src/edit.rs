//! Pending cell edits and per-cell validation.
//!
//! Edits are buffered per row identity and only reach the row store on
//! [`EditBuffer::commit`], which is all-or-nothing: any outstanding
//! validation error blocks the whole commit.

use crate::constants::{MSG_INVALID_AGE, MSG_INVALID_EMAIL};
use crate::data::{DataError, DataResult};
use crate::store::RowStore;
use crate::types::{CellValue, RowId, RowRecord};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Check a cell value for the columns that carry rules.
///
/// Empty values always pass. Returns the user-facing message on failure.
pub fn validate(column: &str, value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return None;
    }
    match column {
        "email" if !EMAIL_PATTERN.is_match(value) => Some(MSG_INVALID_EMAIL),
        "age" if !is_positive_number(value) => Some(MSG_INVALID_AGE),
        _ => None,
    }
}

fn is_positive_number(value: &str) -> bool {
    value
        .trim()
        .parse::<f64>()
        .map(|n| n > 0.0)
        .unwrap_or(false)
}

/// Address of a single cell: row identity plus column
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey {
    pub row: RowId,
    pub column: String,
}

impl CellKey {
    pub fn new(row: RowId, column: impl Into<String>) -> Self {
        Self {
            row,
            column: column.into(),
        }
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.column)
    }
}

/// Outcome of a successful commit
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommitSummary {
    /// Rows that received at least one edit
    pub rows_updated: usize,
    /// Buffered rows no longer present in the store
    pub rows_missing: Vec<RowId>,
}

/// Transient edits not yet in the row store, plus their validation state
#[derive(Clone, Debug, Default)]
pub struct EditBuffer {
    edits: HashMap<RowId, RowRecord>,
    /// Last validation result per touched cell; empty string means valid
    errors: BTreeMap<CellKey, String>,
}

impl EditBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer a value for one cell and re-run its validation.
    ///
    /// Returns the validation message if the value is invalid.
    pub fn set_cell(&mut self, row: RowId, column: &str, value: &str) -> Option<&'static str> {
        self.edits
            .entry(row)
            .or_default()
            .set(column, CellValue::text(value));

        let error = validate(column, value);
        self.errors
            .insert(CellKey::new(row, column), error.unwrap_or_default().to_string());

        tracing::debug!(%row, column, invalid = error.is_some(), "buffered cell edit");
        error
    }

    /// Buffered value for a cell, if it was touched
    pub fn value(&self, row: RowId, column: &str) -> Option<&CellValue> {
        self.edits.get(&row).and_then(|partial| partial.get(column))
    }

    /// Buffered partial record for a row
    pub fn pending(&self, row: RowId) -> Option<&RowRecord> {
        self.edits.get(&row)
    }

    /// Current validation message for a cell, if any
    pub fn error(&self, row: RowId, column: &str) -> Option<&str> {
        self.errors
            .get(&CellKey::new(row, column))
            .map(String::as_str)
            .filter(|msg| !msg.is_empty())
    }

    /// Every outstanding validation message
    pub fn errors(&self) -> impl Iterator<Item = (&CellKey, &str)> {
        self.errors
            .iter()
            .filter(|(_, msg)| !msg.is_empty())
            .map(|(key, msg)| (key, msg.as_str()))
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Number of rows with buffered edits
    pub fn pending_rows(&self) -> usize {
        self.edits.len()
    }

    /// Merge every buffered row into the store and clear the buffer.
    ///
    /// Refuses with [`DataError::ValidationFailed`] while any error is
    /// outstanding; the store and the buffer are then left as they were.
    pub fn commit(&mut self, store: &mut RowStore) -> DataResult<CommitSummary> {
        let count = self.error_count();
        if count > 0 {
            return Err(DataError::ValidationFailed { count });
        }

        let mut summary = CommitSummary::default();
        let mut next = store.rows().to_vec();
        for row in &mut next {
            if let Some(partial) = self.edits.get(&row.id) {
                row.record.merge(partial);
                summary.rows_updated += 1;
            }
        }

        summary.rows_missing = self
            .edits
            .keys()
            .filter(|id| store.position(**id).is_none())
            .copied()
            .collect();
        for id in &summary.rows_missing {
            tracing::warn!(row = %id, "dropping edits for a row that no longer exists");
        }

        store.replace_all(next);
        self.clear();
        Ok(summary)
    }

    /// Drop all buffered edits and validation state
    pub fn clear(&mut self) {
        self.edits.clear();
        self.errors.clear();
    }
}
