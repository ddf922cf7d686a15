//! Grid lifecycle - construction from storage and settings.

use super::{DataGrid, PendingActions, ViewState};
use crate::constants::{DEFAULT_PAGE_SIZE, EXPORT_FILE_NAME};
use crate::data::{DataError, DataResult};
use crate::data_table::DataTableState;
use crate::edit::EditBuffer;
use crate::notifications::ToastManager;
use crate::persistence::{FileStore, KeyValueStore, Persistence};
use crate::settings::GridSettings;
use crate::store::RowStore;
use crate::types::{Row, seed_rows};

impl<S: KeyValueStore> DataGrid<S> {
    /// A grid with the seed rows and preferences loaded from `store`
    pub fn new(store: S) -> Self {
        Self::with_rows(store, seed_rows())
    }

    /// A grid over the given rows, preferences loaded from `store`
    pub fn with_rows(store: S, rows: Vec<Row>) -> Self {
        let persistence = Persistence::new(store);
        let columns = persistence.load_columns();
        let theme = persistence.load_theme();

        let mut grid = Self {
            rows: RowStore::new(rows),
            columns,
            edits: EditBuffer::new(),
            view: ViewState {
                search: String::new(),
                sort: None,
                pager: DataTableState::with_page_size(0, DEFAULT_PAGE_SIZE),
            },
            pending: PendingActions::default(),
            persistence,
            theme,
            toasts: ToastManager::new(),
            export_file_name: EXPORT_FILE_NAME.to_string(),
        };
        grid.refresh_total();

        tracing::debug!(
            rows = grid.rows.len(),
            visible_columns = grid.columns.visible_columns().len(),
            theme = grid.theme.as_str(),
            "grid initialized"
        );
        grid
    }

    /// Apply page size and export name from settings
    pub fn apply_settings(&mut self, settings: &GridSettings) {
        self.view.pager.set_page_size(settings.page_size);
        self.export_file_name = settings.export_file_name.clone();
        self.refresh_total();
    }

    /// Release the grid, returning its storage backend
    pub fn into_storage(self) -> S {
        self.persistence.into_store()
    }
}

impl DataGrid<FileStore> {
    /// Open a file-backed grid as configured by `settings`
    pub fn open(settings: &GridSettings) -> DataResult<Self> {
        let path = settings
            .resolved_storage_path()
            .ok_or_else(|| DataError::Storage("no data directory available".to_string()))?;
        tracing::info!(path = %path.display(), "opening grid storage");

        let mut grid = Self::new(FileStore::open(path)?);
        grid.apply_settings(settings);
        Ok(grid)
    }
}
