//! Column Management Integration Tests
//!
//! Column changes must be saved on every mutation and restored on the
//! next start.

use crate::helpers::{TestGridBuilder, john};
use editgrid::app::DataGrid;
use editgrid::constants::{ALL_COLUMNS_KEY, VISIBLE_COLUMNS_KEY};
use editgrid::persistence::{FileStore, KeyValueStore, MemoryStore};
use editgrid::settings::GridSettings;
use editgrid::types::ThemeMode;
use tempfile::tempdir;

#[test]
fn test_every_mutation_is_saved() {
    let mut grid = TestGridBuilder::new().with_record(john()).build();

    grid.toggle_column("age").unwrap();
    assert_eq!(
        grid.storage().get(VISIBLE_COLUMNS_KEY).unwrap(),
        r#"["name","email","role"]"#
    );

    grid.add_field("  Team ").unwrap();
    assert_eq!(
        grid.storage().get(ALL_COLUMNS_KEY).unwrap(),
        r#"["name","email","age","role","team"]"#
    );

    grid.reorder_columns(3, 0).unwrap();
    assert_eq!(
        grid.storage().get(VISIBLE_COLUMNS_KEY).unwrap(),
        r#"["team","name","email","role"]"#
    );
}

#[test]
fn test_layout_restored_from_storage() {
    let mut grid = TestGridBuilder::new().with_record(john()).build();
    grid.add_field("team").unwrap();
    grid.toggle_column("email").unwrap();
    let layout = grid.columns().clone();

    let restored = DataGrid::with_rows(grid.into_storage(), Vec::new());
    assert_eq!(restored.columns(), &layout);
}

#[test]
fn test_blank_field_is_ignored() {
    let mut grid = TestGridBuilder::new().build();
    assert_eq!(grid.add_field("   ").unwrap(), None);
    assert!(grid.storage().get(ALL_COLUMNS_KEY).is_none());
}

#[test]
fn test_reorder_out_of_range_is_not_saved() {
    let mut grid = TestGridBuilder::new().build();
    assert!(grid.reorder_columns(10, 0).is_err());
    assert!(grid.storage().get(VISIBLE_COLUMNS_KEY).is_none());
}

#[test]
fn test_theme_persists() {
    let mut grid = TestGridBuilder::new().build();
    assert_eq!(grid.theme(), ThemeMode::Light);
    assert_eq!(grid.toggle_theme().unwrap(), ThemeMode::Dark);

    let restored = DataGrid::new(grid.into_storage());
    assert!(restored.theme().is_dark());
}

#[test]
fn test_seeded_grid() {
    let grid = DataGrid::new(MemoryStore::new());
    assert_eq!(grid.rows().len(), 1);
    assert_eq!(grid.rows().rows()[0].record.display("name"), "Jeet");
    assert_eq!(grid.columns().visible_columns().len(), 4);
}

#[test]
fn test_file_backed_grid_survives_restart() {
    let dir = tempdir().unwrap();
    let settings = GridSettings {
        page_size: 10,
        storage_path: Some(dir.path().join("nested").join("storage.json")),
        ..GridSettings::default()
    };

    let mut grid = DataGrid::open(&settings).unwrap();
    assert_eq!(grid.pager().page_size, 10);
    grid.add_field("Team").unwrap();
    grid.toggle_column("name").unwrap();
    grid.toggle_theme().unwrap();
    drop(grid);

    let reopened = DataGrid::open(&settings).unwrap();
    assert_eq!(
        reopened.columns().visible_columns(),
        ["email", "age", "role", "team"]
    );
    assert!(reopened.columns().is_known("name"));
    assert_eq!(reopened.theme(), ThemeMode::Dark);
}

#[test]
fn test_corrupt_storage_file_falls_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("storage.json");
    std::fs::write(&path, "{{{ not json").unwrap();

    let store = FileStore::open(&path).unwrap();
    let grid = DataGrid::new(store);
    assert_eq!(grid.columns().visible_columns().len(), 4);
    assert_eq!(grid.theme(), ThemeMode::Light);
}
