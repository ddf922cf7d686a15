//! Application module - the grid store object and every user action.
//!
//! This module is organized into several submodules:
//! - `state` - The DataGrid struct definition and sub-structs
//! - `lifecycle` - Construction from storage and settings
//! - `table_editing` - Cell edits, commit and cancel
//! - `row_management` - Row add and confirmed delete
//! - `column_handlers` - Column toggle, new fields, reorder, save
//! - `view_handlers` - Search, sort and page navigation
//! - `import_export` - Confirmed CSV import and CSV export
//! - `settings_handlers` - Theme mode

mod column_handlers;
mod import_export;
mod lifecycle;
mod row_management;
mod settings_handlers;
mod state;
mod table_editing;
mod view_handlers;

pub use state::{DataGrid, ImportSource, PendingActions, ViewState};
