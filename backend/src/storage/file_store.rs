//! # File Store
//!
//! A [`KeyValueStore`] that keeps one JSON file per key inside a data directory.
//!
//! ## File Structure
//!
//! ```text
//! SiZakat/
//! ├── sizakat_donors.json
//! ├── sizakat_recipients.json
//! └── sizakat_settings.json
//! ```
//!
//! Writes go to a `.tmp` file first and are renamed into place, so a crash
//! mid-write leaves the previous value intact.

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use super::traits::KeyValueStore;

/// Environment variable overriding the default data directory
pub const DATA_DIR_ENV: &str = "SIZAKAT_DATA_DIR";

const FILE_EXTENSION: &str = "json";

#[derive(Debug, Clone)]
pub struct FileStore {
    base_directory: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `base_directory`, creating it if needed
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)
                .with_context(|| format!("Failed to create data directory {:?}", base_path))?;
            info!("Created data directory: {:?}", base_path);
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Open the store in the default data directory
    ///
    /// Uses `$SIZAKAT_DATA_DIR` when set, otherwise `~/Documents/SiZakat`
    /// (falling back to the home directory when there is no documents folder).
    pub fn new_default() -> Result<Self> {
        Self::new(Self::default_directory()?)
    }

    pub fn default_directory() -> Result<PathBuf> {
        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            if !dir.trim().is_empty() {
                debug!("Using data directory from {}: {}", DATA_DIR_ENV, dir);
                return Ok(PathBuf::from(dir.trim()));
            }
        }

        let parent = dirs::document_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| anyhow!("Could not determine home directory"))?;
        Ok(parent.join("SiZakat"))
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        if !is_valid_key(key) {
            return Err(anyhow!(
                "Invalid storage key '{}': only letters, digits, '_' and '-' are allowed",
                key
            ));
        }
        Ok(self
            .base_directory
            .join(format!("{}.{}", key, FILE_EXTENSION)))
    }
}

fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let content =
            fs::read_to_string(&path).with_context(|| format!("Failed to read {:?}", path))?;
        debug!("Loaded key '{}' ({} bytes)", key, content.len());
        Ok(Some(content))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;

        if !self.base_directory.exists() {
            fs::create_dir_all(&self.base_directory)?;
            info!("Created data directory: {:?}", self.base_directory);
        }

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, value)
            .with_context(|| format!("Failed to write {:?}", temp_path))?;
        fs::rename(&temp_path, &path)
            .with_context(|| format!("Failed to move {:?} into place", temp_path))?;

        debug!("Saved key '{}' to {:?}", key, path);
        Ok(())
    }

    fn list_keys(&self) -> Result<Vec<String>> {
        if !self.base_directory.exists() {
            return Ok(Vec::new());
        }

        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.base_directory)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some(FILE_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                if is_valid_key(stem) {
                    keys.push(stem.to_string());
                }
            }
        }
        keys.sort();
        Ok(keys)
    }

    fn delete(&self, key: &str) -> Result<bool> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path).with_context(|| format!("Failed to delete {:?}", path))?;
        info!("Deleted key '{}'", key);
        Ok(true)
    }
}
