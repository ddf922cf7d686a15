//! Durable key-value storage for column layout and theme mode.
//!
//! Values are JSON-encoded strings under fixed keys. A missing or
//! unparsable entry falls back to the in-code default; it never fails a load.
//!
//! Two backends ship with the crate:
//! - [`MemoryStore`] for tests and embedders that persist elsewhere
//! - [`FileStore`], a single JSON object file rewritten atomically on each set

use crate::constants::{
    ALL_COLUMNS_KEY, APP_DIR_NAME, DEFAULT_COLUMNS, STORAGE_FILE_NAME, THEME_MODE_KEY,
    VISIBLE_COLUMNS_KEY,
};
use crate::data::{DataError, DataResult};
use crate::store::ColumnRegistry;
use crate::types::ThemeMode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::{BTreeMap, HashMap};
use std::io::Write;
use std::path::{Path, PathBuf};

/// String key-value storage that survives across sessions
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String) -> DataResult<()>;
}

/// In-memory storage
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> DataResult<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// Default location of the storage file
pub fn default_storage_path() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join(APP_DIR_NAME).join(STORAGE_FILE_NAME))
}

/// Storage backed by one JSON object file
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the file at `path`. A missing file starts empty; so does a
    /// corrupt one, which is overwritten on the next set.
    pub fn open(path: impl Into<PathBuf>) -> DataResult<Self> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), "ignoring unreadable storage file: {}", e);
                BTreeMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> DataResult<()> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(dir)?;

        // Write to a sibling temp file and rename over the target
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(&serde_json::to_vec_pretty(&self.entries)?)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> DataResult<()> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }
}

/// Loads and saves grid preferences through a [`KeyValueStore`]
#[derive(Clone, Debug, Default)]
pub struct Persistence<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Column layout from storage, each list falling back to the defaults
    pub fn load_columns(&self) -> ColumnRegistry {
        let all = self
            .read_json::<Vec<String>>(ALL_COLUMNS_KEY)
            .unwrap_or_else(default_columns);
        let visible = self
            .read_json::<Vec<String>>(VISIBLE_COLUMNS_KEY)
            .unwrap_or_else(default_columns);
        ColumnRegistry::new(all, visible)
    }

    /// Write both column lists
    pub fn save_columns(&mut self, registry: &ColumnRegistry) -> DataResult<()> {
        self.write_json(ALL_COLUMNS_KEY, &registry.all_columns())?;
        self.write_json(VISIBLE_COLUMNS_KEY, &registry.visible_columns())?;
        tracing::debug!(
            all = registry.all_columns().len(),
            visible = registry.visible_columns().len(),
            "saved column layout"
        );
        Ok(())
    }

    /// Theme mode from storage, light when absent or unrecognized.
    ///
    /// Accepts both a JSON string and a bare `light`/`dark` value.
    pub fn load_theme(&self) -> ThemeMode {
        let Some(raw) = self.store.get(THEME_MODE_KEY) else {
            return ThemeMode::default();
        };
        serde_json::from_str::<ThemeMode>(&raw)
            .ok()
            .or_else(|| ThemeMode::parse(raw.trim()))
            .unwrap_or_else(|| {
                tracing::warn!(value = %raw, "unrecognized theme mode, using light");
                ThemeMode::default()
            })
    }

    pub fn save_theme(&mut self, mode: ThemeMode) -> DataResult<()> {
        self.write_json(THEME_MODE_KEY, &mode)
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.store.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, "stored value unparsable, using default: {}", e);
                None
            }
        }
    }

    fn write_json<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> DataResult<()> {
        let encoded = serde_json::to_string(value)?;
        self.store
            .set(key, encoded)
            .map_err(|e| DataError::Storage(format!("failed to save {}: {}", key, e)))
    }
}

fn default_columns() -> Vec<String> {
    DEFAULT_COLUMNS.iter().map(|c| c.to_string()).collect()
}
