//! Data parsing and derivation module
//!
//! This module turns the row store into what the user sees and moves rows
//! in and out of CSV text:
//! - `view`: the filter → sort → paginate pipeline
//! - `csv_bridge`: CSV import parsing and export serialization
//!
//! ## Error Handling
//!
//! All data operations return `DataResult<T>` which uses the `DataError` type.
//! Common errors include:
//! - `TooLarge`: File exceeds size limits
//! - `TooManyRows`: Dataset exceeds row limits
//! - `Io`: File system errors
//! - `Csv`/`Json`: Parse errors
//! - `ValidationFailed`: Commit blocked by invalid cells

mod csv_bridge;
mod error;
mod view;

pub use csv_bridge::*;
pub use error::*;
pub use view::*;
