//! Grid configuration file.
//!
//! A small JSON file; every field is optional and falls back to the
//! built-in default.

use crate::constants::{APP_DIR_NAME, DEFAULT_PAGE_SIZE, EXPORT_FILE_NAME};
use crate::persistence::default_storage_path;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default location of the settings file
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR_NAME).join("settings.json"))
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Rows per page on startup
    pub page_size: usize,
    /// Key-value storage file; platform data dir when unset
    pub storage_path: Option<PathBuf>,
    /// File name used for CSV exports
    pub export_file_name: String,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            storage_path: None,
            export_file_name: EXPORT_FILE_NAME.to_string(),
        }
    }
}

impl GridSettings {
    /// Read settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        let mut settings: Self = serde_json::from_str(&content)
            .with_context(|| format!("invalid settings in {}", path.display()))?;
        if settings.page_size == 0 {
            tracing::warn!("page_size 0 in settings, using {}", DEFAULT_PAGE_SIZE);
            settings.page_size = DEFAULT_PAGE_SIZE;
        }
        Ok(settings)
    }

    /// Load from [`default_settings_path`], or defaults when there is none
    pub fn load_default() -> anyhow::Result<Self> {
        match default_settings_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Where the key-value storage file lives
    pub fn resolved_storage_path(&self) -> Option<PathBuf> {
        self.storage_path.clone().or_else(default_storage_path)
    }
}
