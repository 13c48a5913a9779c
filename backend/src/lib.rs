//! # SiZakat backend
//!
//! Bookkeeping core for a mosque's zakat fitrah committee: the donor ledger,
//! collection reports, distribution shares and nisab calculators, on top of a
//! small key-value storage layer.

use anyhow::Result;
use log::info;
use std::sync::Arc;

pub mod domain;
pub mod storage;

pub use storage::{FileStore, KeyValueStore, MemoryStore};

/// All services wired around one shared store
#[derive(Clone)]
pub struct ZakatBackend {
    pub settings_service: domain::SettingsService,
    pub donor_service: domain::DonorService,
    pub recipient_service: domain::RecipientService,
    pub export_service: domain::ExportService,
}

impl ZakatBackend {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            settings_service: domain::SettingsService::new(store.clone()),
            donor_service: domain::DonorService::new(store.clone()),
            recipient_service: domain::RecipientService::new(store),
            export_service: domain::ExportService::new(),
        }
    }

    /// Backend over the default data directory (see [`FileStore::default_directory`])
    pub fn open_default() -> Result<Self> {
        let store = FileStore::new_default()?;
        info!("Opening SiZakat data in {:?}", store.base_directory());
        Ok(Self::new(Arc::new(store)))
    }

    /// Backend over an explicit data directory
    pub fn open<P: AsRef<std::path::Path>>(data_dir: P) -> Result<Self> {
        let store = FileStore::new(data_dir)?;
        info!("Opening SiZakat data in {:?}", store.base_directory());
        Ok(Self::new(Arc::new(store)))
    }

    /// Backend over a throwaway in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }
}
