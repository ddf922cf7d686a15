//! Grid state - the DataGrid struct definition and sub-structs.

use crate::data::filter_rows;
use crate::data_table::DataTableState;
use crate::edit::EditBuffer;
use crate::notifications::ToastManager;
use crate::persistence::{KeyValueStore, Persistence};
use crate::store::{ColumnRegistry, RowStore};
use crate::types::{RowId, SortKey, ThemeMode};
use std::path::PathBuf;

/// Where a staged import reads its CSV from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImportSource {
    File(PathBuf),
    Text(String),
}

/// Search, sort and pagination inputs to the view pipeline
#[derive(Clone, Debug, Default)]
pub struct ViewState {
    pub search: String,
    pub sort: Option<SortKey>,
    pub pager: DataTableState,
}

/// Actions waiting on a confirmation dialog
#[derive(Clone, Debug, Default)]
pub struct PendingActions {
    pub import: Option<ImportSource>,
    pub delete: Option<RowId>,
}

/// The grid: one explicit store object handed to whatever renders it.
///
/// Every operation is synchronous and completes before the next render.
pub struct DataGrid<S: KeyValueStore> {
    pub(crate) rows: RowStore,
    pub(crate) columns: ColumnRegistry,
    pub(crate) edits: EditBuffer,
    pub(crate) view: ViewState,
    pub(crate) pending: PendingActions,
    pub(crate) persistence: Persistence<S>,
    pub(crate) theme: ThemeMode,
    pub(crate) toasts: ToastManager,
    pub(crate) export_file_name: String,
}

impl<S: KeyValueStore> DataGrid<S> {
    pub fn rows(&self) -> &RowStore {
        &self.rows
    }

    pub fn columns(&self) -> &ColumnRegistry {
        &self.columns
    }

    pub fn edits(&self) -> &EditBuffer {
        &self.edits
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    pub fn pager(&self) -> &DataTableState {
        &self.view.pager
    }

    pub fn pending(&self) -> &PendingActions {
        &self.pending
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn toasts(&self) -> &ToastManager {
        &self.toasts
    }

    pub fn toasts_mut(&mut self) -> &mut ToastManager {
        &mut self.toasts
    }

    pub fn storage(&self) -> &S {
        self.persistence.store()
    }

    pub fn export_file_name(&self) -> &str {
        &self.export_file_name
    }

    /// Re-sync the pager with the filtered row count
    pub(crate) fn refresh_total(&mut self) {
        let total = filter_rows(self.rows.rows(), &self.view.search).len();
        self.view.pager.set_total_rows(total);
    }

    /// Drop edits made against rows that a replace is about to discard
    pub(crate) fn discard_edits(&mut self, reason: &str) {
        if !self.edits.is_empty() {
            tracing::info!(
                rows = self.edits.pending_rows(),
                reason,
                "discarding pending edits"
            );
        }
        self.edits.clear();
    }
}
