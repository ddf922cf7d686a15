//! CSV import behind a confirmation step, and CSV export of the view.

use super::{DataGrid, ImportSource};
use crate::constants::MSG_COLUMNS_NOT_SAVED;
use crate::data::{
    DataError, DataResult, parse_csv_content, parse_csv_file, sorted_view, write_csv_content,
    write_csv_file,
};
use crate::notifications::Toast;
use crate::persistence::KeyValueStore;
use std::path::{Path, PathBuf};

impl<S: KeyValueStore> DataGrid<S> {
    /// Stage an import; nothing is read until it is confirmed
    pub fn request_import(&mut self, source: ImportSource) {
        self.pending.import = Some(source);
    }

    /// Parse the staged CSV and replace every row with its contents.
    ///
    /// A parse failure raises an error toast and leaves the rows as they
    /// were; the staged import is dropped either way. Failing to save newly
    /// seen columns only raises a warning toast. Returns the number of
    /// imported rows.
    pub fn confirm_import(&mut self) -> DataResult<usize> {
        let source = self.pending.import.take().ok_or(DataError::NoPendingImport)?;
        let parsed = match &source {
            ImportSource::File(path) => parse_csv_file(path),
            ImportSource::Text(content) => parse_csv_content(content),
        };
        let parsed = match parsed {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("import failed: {}", e);
                self.toasts.push(Toast::error(e.to_string()));
                return Err(e);
            }
        };

        let count = parsed.rows.len();
        self.discard_edits("import replaced rows");
        self.rows.replace_all(parsed.rows);

        self.view.pager.go_first();
        self.refresh_total();

        let mut discovered = false;
        for column in &parsed.columns {
            discovered |= self.columns.register(column);
        }
        // The rows are already in; a failed save only loses the new headers
        if discovered && self.save_columns().is_err() {
            self.toasts.push(Toast::warning(MSG_COLUMNS_NOT_SAVED));
        }

        tracing::info!(rows = count, columns = parsed.columns.len(), "imported CSV");
        Ok(count)
    }

    /// Close the import dialog without importing. Returns whether one was staged.
    pub fn cancel_import(&mut self) -> bool {
        self.pending.import.take().is_some()
    }

    /// CSV of the visible columns over every filtered, sorted row
    pub fn export_csv(&self) -> String {
        let rows = sorted_view(self.rows.rows(), &self.view.search, self.view.sort.as_ref());
        write_csv_content(self.columns.visible_columns(), &rows)
    }

    /// Write the export into `dir` under the configured file name
    pub fn export_to_dir(&self, dir: &Path) -> DataResult<PathBuf> {
        let rows = sorted_view(self.rows.rows(), &self.view.search, self.view.sort.as_ref());
        write_csv_file(
            dir,
            &self.export_file_name,
            self.columns.visible_columns(),
            &rows,
        )
    }
}
