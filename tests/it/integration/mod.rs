//! Integration tests for editgrid.
//!
//! These tests exercise whole user workflows:
//! - Editing, validation and commit
//! - Row add and delete with confirmation
//! - CSV import and export
//! - Column management with persistence

mod column_workflow_tests;
mod import_export_tests;
