//! Settings-related methods - theme mode

use super::DataGrid;
use crate::data::DataResult;
use crate::persistence::KeyValueStore;
use crate::types::ThemeMode;

impl<S: KeyValueStore> DataGrid<S> {
    /// Flip between light and dark and persist the choice
    pub fn toggle_theme(&mut self) -> DataResult<ThemeMode> {
        let next = self.theme.toggled();
        self.set_theme(next)?;
        Ok(next)
    }

    pub fn set_theme(&mut self, mode: ThemeMode) -> DataResult<()> {
        self.theme = mode;
        if let Err(e) = self.persistence.save_theme(mode) {
            tracing::error!("Failed to save theme mode: {}", e);
            return Err(e);
        }
        tracing::debug!(theme = mode.as_str(), "theme changed");
        Ok(())
    }
}
