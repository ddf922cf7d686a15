//! Application-wide constants.
//!
//! Centralizes defaults, storage keys and limits shared between the
//! store, the persistence adapter and the CSV bridge.

// ============================================================================
// Columns
// ============================================================================

/// Columns shown when nothing usable has been persisted yet
pub const DEFAULT_COLUMNS: &[&str] = &["name", "email", "age", "role"];

// ============================================================================
// Pagination
// ============================================================================

/// Rows per page for a fresh grid
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Page size options offered to the user
pub const PAGE_SIZE_OPTIONS: &[usize] = &[5, 10, 25, 50];

// ============================================================================
// Storage keys
// ============================================================================

/// Ordered list of every known column
pub const ALL_COLUMNS_KEY: &str = "allColumns";

/// Ordered list of displayed columns
pub const VISIBLE_COLUMNS_KEY: &str = "visibleColumns";

/// Theme mode flag (`"light"` / `"dark"`)
pub const THEME_MODE_KEY: &str = "mui-theme";

/// File name of the key-value storage file inside the data directory
pub const STORAGE_FILE_NAME: &str = "storage.json";

/// Directory name used under the platform config/data directories
pub const APP_DIR_NAME: &str = "editgrid";

// ============================================================================
// CSV
// ============================================================================

/// File name offered for exports
pub const EXPORT_FILE_NAME: &str = "table_export.csv";

/// Maximum CSV file size accepted for import
pub const MAX_CSV_SIZE_MB: usize = 100;

/// Maximum number of data rows accepted for import
pub const MAX_CSV_ROWS: usize = 100_000;

// ============================================================================
// Messages
// ============================================================================

pub const MSG_SAVED: &str = "Data saved successfully!";

pub const MSG_ROW_DELETED: &str = "Row deleted successfully!";

pub const MSG_FIX_VALIDATION: &str = "Please fix validation errors before saving.";

pub const MSG_INVALID_EMAIL: &str = "Invalid email format";

pub const MSG_INVALID_AGE: &str = "Age must be a positive number";

pub const MSG_COLUMNS_NOT_SAVED: &str = "Rows imported, but the new columns could not be saved.";
