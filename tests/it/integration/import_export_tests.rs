//! CSV Import/Export Integration Tests

use crate::helpers::{TestGridBuilder, column_values, john};
use editgrid::app::{DataGrid, ImportSource};
use editgrid::constants::{EXPORT_FILE_NAME, MSG_COLUMNS_NOT_SAVED};
use editgrid::data::{DataError, DataResult};
use editgrid::notifications::ToastVariant;
use editgrid::persistence::KeyValueStore;
use editgrid::types::{CellValue, Row, RowRecord, SortKey};
use tempfile::tempdir;

/// Storage that reads nothing and refuses every write
struct RejectingStore;

impl KeyValueStore for RejectingStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&mut self, key: &str, _value: String) -> DataResult<()> {
        Err(DataError::Storage(format!("failed to save {}", key)))
    }
}

#[test]
fn test_import_replaces_all_rows() {
    let mut grid = TestGridBuilder::new().with_record(john()).build();

    grid.request_import(ImportSource::Text(
        "name,email,age,role\nAnn,ann@x.com,22,QA\n".to_string(),
    ));
    assert_eq!(grid.rows().len(), 1, "nothing applied before confirmation");

    let count = grid.confirm_import().unwrap();
    assert_eq!(count, 1);
    assert_eq!(grid.rows().len(), 1);

    let expected = RowRecord::new()
        .with("name", "Ann")
        .with("email", "ann@x.com")
        .with("age", "22")
        .with("role", "QA");
    assert_eq!(grid.rows().rows()[0].record, expected);
    assert_eq!(
        grid.rows().rows()[0].record.get("age"),
        Some(&CellValue::text("22"))
    );
}

#[test]
fn test_unreadable_import_leaves_rows_untouched() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("binary.csv");
    std::fs::write(&path, b"name,age\n\xff\xfe,1\n").unwrap();

    let mut grid = TestGridBuilder::new().with_record(john()).build();
    let before = grid.rows().clone();

    grid.request_import(ImportSource::File(path));
    let err = grid.confirm_import().unwrap_err();

    assert!(matches!(err, DataError::Io(_)));
    assert_eq!(grid.rows(), &before);
    assert!(grid.pending().import.is_none());

    let toast = grid.toasts().latest().unwrap();
    assert_eq!(toast.variant, ToastVariant::Error);
    assert_eq!(toast.message, err.to_string());
}

#[test]
fn test_ragged_import_keeps_every_row() {
    let mut grid = TestGridBuilder::new().with_record(john()).build();

    grid.request_import(ImportSource::Text(
        "name,email,age,role\nAnn,ann@x.com,22\nBob,b@x.com,30,QA\n".to_string(),
    ));
    assert_eq!(grid.confirm_import().unwrap(), 2);

    assert_eq!(column_values(&grid, "name"), vec!["Ann", "Bob"]);
    assert_eq!(column_values(&grid, "role"), vec!["", "QA"]);
    assert_eq!(grid.rows().rows()[0].record.get("role"), None);
}

#[test]
fn test_import_survives_failed_column_save() {
    let rows: Vec<Row> = (0..12)
        .map(|i| Row::new(RowRecord::new().with("name", format!("p{}", i))))
        .collect();
    let mut grid = DataGrid::with_rows(RejectingStore, rows);
    grid.go_last_page();
    assert_eq!(grid.pager().current_page, 2);

    grid.request_import(ImportSource::Text("name,team\nAnn,Core\n".to_string()));
    assert_eq!(grid.confirm_import().unwrap(), 1);

    assert_eq!(grid.rows().len(), 1);
    assert_eq!(grid.pager().current_page, 0);
    assert_eq!(grid.pager().total_rows, 1);
    assert_eq!(grid.current_page().rows.len(), 1);
    assert!(grid.columns().is_known("team"));

    let toast = grid.toasts().latest().unwrap();
    assert_eq!(toast.variant, ToastVariant::Warning);
    assert_eq!(toast.message, MSG_COLUMNS_NOT_SAVED);
}

#[test]
fn test_cancel_import() {
    let mut grid = TestGridBuilder::new().with_record(john()).build();
    grid.request_import(ImportSource::Text("name\nAnn".to_string()));

    assert!(grid.cancel_import());
    assert!(matches!(grid.confirm_import(), Err(DataError::NoPendingImport)));
    assert_eq!(column_values(&grid, "name"), vec!["John"]);
}

#[test]
fn test_import_from_file_registers_new_headers() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("people.csv");
    std::fs::write(&path, "Name,Team\nAnn,Core\n\nBob,Infra\n").unwrap();

    let mut grid = TestGridBuilder::new().with_record(john()).build();
    grid.set_cell_at(0, "name", "pending").unwrap();

    grid.request_import(ImportSource::File(path));
    assert_eq!(grid.confirm_import().unwrap(), 2);

    assert_eq!(column_values(&grid, "name"), vec!["Ann", "Bob"]);
    assert!(grid.columns().is_known("team"));
    assert!(!grid.columns().is_visible("team"));
    assert!(!grid.has_pending_edits());
}

#[test]
fn test_import_missing_file() {
    let dir = tempdir().unwrap();
    let mut grid = TestGridBuilder::new().with_record(john()).build();

    grid.request_import(ImportSource::File(dir.path().join("absent.csv")));
    assert!(matches!(grid.confirm_import(), Err(DataError::Io(_))));
    assert_eq!(grid.rows().len(), 1);
}

#[test]
fn test_export_visible_columns_in_display_order() {
    let mut grid = TestGridBuilder::new()
        .with_record(RowRecord::new().with("name", "Jo").with("age", 40))
        .build();
    grid.toggle_column("email").unwrap();
    grid.toggle_column("role").unwrap();

    assert_eq!(grid.export_csv(), "name,age\nJo,40");

    grid.reorder_columns(1, 0).unwrap();
    assert_eq!(grid.export_csv(), "age,name\n40,Jo");
}

#[test]
fn test_export_uses_filtered_sorted_rows_across_pages() {
    let mut grid = TestGridBuilder::new()
        .with_people(&["Cara", "Abe", "Bea", "Zed"])
        .with_page_size(1)
        .build();
    grid.toggle_column("email").unwrap();
    grid.toggle_column("role").unwrap();
    grid.toggle_column("age").unwrap();

    // "b" only appears in Abe and Bea
    grid.set_search("b");
    grid.set_sort(Some(SortKey::desc("name")));

    assert_eq!(grid.current_page().rows.len(), 1);
    assert_eq!(grid.export_csv(), "name\nBea\nAbe");
}

#[test]
fn test_export_quotes_special_values() {
    let grid = TestGridBuilder::new()
        .with_record(
            RowRecord::new()
                .with("name", "Smith, Jo")
                .with("email", "jo@x.io")
                .with("age", 3)
                .with("role", "says \"hi\""),
        )
        .build();

    assert_eq!(
        grid.export_csv(),
        "name,email,age,role\n\"Smith, Jo\",jo@x.io,3,\"says \"\"hi\"\"\""
    );
}

#[test]
fn test_export_to_dir_writes_file() {
    let dir = tempdir().unwrap();
    let grid = TestGridBuilder::new().with_record(john()).build();

    let path = grid.export_to_dir(dir.path()).unwrap();
    assert_eq!(path.file_name().unwrap(), EXPORT_FILE_NAME);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), grid.export_csv());
}
