//! Unit tests for the persistence module.

use editgrid::constants::{ALL_COLUMNS_KEY, THEME_MODE_KEY};
use editgrid::persistence::{FileStore, KeyValueStore, Persistence, default_storage_path};
use editgrid::store::ColumnRegistry;
use editgrid::types::ThemeMode;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_file_store_writes_json_object() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let mut store = FileStore::open(&path).unwrap();
    store.set(THEME_MODE_KEY, "\"dark\"".to_string()).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed[THEME_MODE_KEY], "\"dark\"");
}

#[test]
fn test_file_store_reopens_entries() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let mut persistence = Persistence::new(FileStore::open(&path).unwrap());
    let mut registry = ColumnRegistry::default();
    registry.add_field("Team");
    persistence.save_columns(&registry).unwrap();
    persistence.save_theme(ThemeMode::Dark).unwrap();

    let reopened = Persistence::new(FileStore::open(&path).unwrap());
    assert_eq!(reopened.load_columns(), registry);
    assert_eq!(reopened.load_theme(), ThemeMode::Dark);
    assert_eq!(reopened.store().path(), path.as_path());
}

#[test]
fn test_file_store_leaves_no_temp_files() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let mut store = FileStore::open(&path).unwrap();
    for i in 0..3 {
        store.set(ALL_COLUMNS_KEY, format!("[\"c{}\"]", i)).unwrap();
    }

    let names: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(names, vec![std::ffi::OsString::from("storage.json")]);
}

#[test]
fn test_default_paths() {
    // These should return Some on most systems
    let storage = default_storage_path();
    assert!(storage.is_some() || cfg!(target_os = "unknown"));
}
