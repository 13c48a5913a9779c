//! # Storage Module
//!
//! Handles all data persistence for SiZakat.
//!
//! Everything is stored as JSON blobs in a [`KeyValueStore`]: one key for the
//! donor ledger, one for recipients and one for settings. The store can be
//! swapped (files on disk, memory for tests) without touching the domain layer.
//!
//! ## Keys
//!
//! - `sizakat_donors`: JSON array of donor records
//! - `sizakat_recipients`: JSON array of recipient records
//! - `sizakat_settings`: JSON settings object

pub mod traits;
pub mod memory;
pub mod file_store;
pub mod donor_repository;
pub mod recipient_repository;
pub mod settings_repository;

#[cfg(test)]
pub mod test_utils;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub use traits::{DonorStorage, KeyValueStore, RecipientStorage, SettingsStorage};
pub use memory::MemoryStore;
pub use file_store::FileStore;
pub use donor_repository::DonorRepository;
pub use recipient_repository::RecipientRepository;
pub use settings_repository::SettingsRepository;

pub const DONORS_KEY: &str = "sizakat_donors";
pub const RECIPIENTS_KEY: &str = "sizakat_recipients";
pub const SETTINGS_KEY: &str = "sizakat_settings";

/// Load a JSON blob, falling back to `T::default()` when the key is absent
pub(crate) fn read_json<T>(store: &dyn KeyValueStore, key: &str) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    match store.get(key)? {
        Some(raw) if !raw.trim().is_empty() => serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse stored value for key '{}'", key)),
        _ => Ok(T::default()),
    }
}

pub(crate) fn write_json<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<()> {
    let raw = serde_json::to_string(value)
        .with_context(|| format!("Failed to serialize value for key '{}'", key))?;
    store.set(key, &raw)
}
