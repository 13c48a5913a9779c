use anyhow::Result;
use log::{info, warn};
use shared::SettingsData;
use std::sync::Arc;

use crate::storage::{KeyValueStore, SettingsRepository, SettingsStorage};

/// Service for reading and replacing the committee settings
#[derive(Clone)]
pub struct SettingsService {
    settings_repository: SettingsRepository,
}

impl SettingsService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            settings_repository: SettingsRepository::new(store),
        }
    }

    /// Current settings, or the defaults if nothing was saved yet
    pub fn get_settings(&self) -> Result<SettingsData> {
        self.settings_repository.get_settings()
    }

    /// Replace the settings wholesale.
    ///
    /// Distribution rules that do not add up to 100% and an empty RT list are
    /// logged but still saved.
    pub fn update_settings(&self, settings: SettingsData) -> Result<SettingsData> {
        info!("Updating settings for '{}'", settings.mosque_name);

        let total = settings.distribution_rules.total_percentage();
        if (total - 100.0).abs() > 1e-9 {
            warn!("Distribution rules add up to {}% instead of 100%", total);
        }
        if settings.rt_numbers.is_empty() {
            warn!("No RT numbers configured; RT reports will be empty");
        }

        self.settings_repository.save_settings(&settings)?;
        Ok(settings)
    }
}
