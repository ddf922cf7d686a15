//! Editable data-grid core.
//!
//! The crate holds everything with state and invariants behind an editable
//! table: the row store, the column registry, the pending-edit buffer with
//! per-cell validation, the filter → sort → paginate view pipeline, the CSV
//! bridge and the key-value persistence adapter. Rendering is left to the
//! caller, which drives [`app::DataGrid`].

pub mod app;
pub mod constants;
pub mod data;
pub mod data_table;
pub mod edit;
pub mod logging;
pub mod notifications;
pub mod persistence;
pub mod settings;
pub mod store;
pub mod types;
