//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.
//!
//! The lowest layer is a plain key-value store holding JSON blobs, the same
//! shape as the browser `localStorage` the web front end persists to. The
//! record-level traits sit on top of it.

use anyhow::Result;
use shared::{DonorRecord, RecipientRecord, SettingsData};

/// Trait defining a synchronous string key-value store
///
/// Implementations must be safe to share between services; every service
/// holds the same store behind an `Arc`.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` when absent
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// List every key currently stored, sorted
    fn list_keys(&self) -> Result<Vec<String>>;

    /// Remove `key`
    /// Returns true if the key existed
    fn delete(&self, key: &str) -> Result<bool>;
}

/// Trait defining the interface for donor ledger storage operations
pub trait DonorStorage: Send + Sync {
    /// List all donors in insertion order (empty when nothing is stored)
    fn list_donors(&self) -> Result<Vec<DonorRecord>>;

    /// Retrieve a specific donor by ID
    fn get_donor(&self, donor_id: &str) -> Result<Option<DonorRecord>>;

    /// Append a new donor to the ledger
    fn store_donor(&self, donor: &DonorRecord) -> Result<()>;

    /// Replace an existing donor in place
    /// Returns false if no donor with that ID exists
    fn update_donor(&self, donor: &DonorRecord) -> Result<bool>;

    /// Delete a donor by ID
    /// Returns true if the donor was found and deleted, false otherwise
    fn delete_donor(&self, donor_id: &str) -> Result<bool>;
}

/// Trait defining the interface for recipient storage operations
pub trait RecipientStorage: Send + Sync {
    fn list_recipients(&self) -> Result<Vec<RecipientRecord>>;

    fn get_recipient(&self, recipient_id: &str) -> Result<Option<RecipientRecord>>;

    fn store_recipient(&self, recipient: &RecipientRecord) -> Result<()>;

    /// Returns false if no recipient with that ID exists
    fn update_recipient(&self, recipient: &RecipientRecord) -> Result<bool>;

    /// Returns true if the recipient was found and deleted
    fn delete_recipient(&self, recipient_id: &str) -> Result<bool>;
}

/// Trait defining the interface for the single settings record
pub trait SettingsStorage: Send + Sync {
    /// Get the stored settings, or the defaults when none were saved yet
    fn get_settings(&self) -> Result<SettingsData>;

    /// Replace the stored settings wholesale
    fn save_settings(&self, settings: &SettingsData) -> Result<()>;
}
