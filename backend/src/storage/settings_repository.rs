use anyhow::Result;
use log::{debug, info};
use shared::SettingsData;
use std::sync::Arc;

use super::traits::{KeyValueStore, SettingsStorage};
use super::{read_json, write_json, SETTINGS_KEY};

/// Settings stored as a single JSON object under [`SETTINGS_KEY`]
#[derive(Clone)]
pub struct SettingsRepository {
    store: Arc<dyn KeyValueStore>,
}

impl SettingsRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

impl SettingsStorage for SettingsRepository {
    fn get_settings(&self) -> Result<SettingsData> {
        let settings: SettingsData = read_json(self.store.as_ref(), SETTINGS_KEY)?;
        debug!("Loaded settings for '{}'", settings.mosque_name);
        Ok(settings)
    }

    fn save_settings(&self, settings: &SettingsData) -> Result<()> {
        write_json(self.store.as_ref(), SETTINGS_KEY, settings)?;
        info!("Saved settings for '{}'", settings.mosque_name);
        Ok(())
    }
}
