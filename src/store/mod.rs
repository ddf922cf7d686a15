//! Authoritative grid state.
//!
//! - `row_store`: the ordered row sequence; `replace_all` is its only mutation
//! - `column_registry`: known columns and the ordered visible subset

mod column_registry;
mod row_store;

pub use column_registry::ColumnRegistry;
pub use row_store::RowStore;
