/// Test utilities for consistent test infrastructure
///
/// `TestEnvironment` bundles a store with its repositories. The on-disk
/// variant owns a `TempDir`, so the data is removed even if a test panics.

use anyhow::Result;
use shared::{DonorRecord, Payment, PaymentType, RecipientCategory, RecipientRecord};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

use super::{DonorRepository, FileStore, KeyValueStore, MemoryStore, RecipientRepository, SettingsRepository};

pub struct TestEnvironment {
    pub store: Arc<dyn KeyValueStore>,
    pub donor_repo: DonorRepository,
    pub recipient_repo: RecipientRepository,
    pub settings_repo: SettingsRepository,
    /// Data directory of the on-disk variant
    pub base_path: Option<PathBuf>,
    _temp_dir: Option<TempDir>,
}

impl TestEnvironment {
    pub fn in_memory() -> Self {
        Self::from_store(Arc::new(MemoryStore::new()), None, None)
    }

    pub fn on_disk() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let base_path = temp_dir.path().to_path_buf();
        let store = Arc::new(FileStore::new(&base_path)?);
        Ok(Self::from_store(store, Some(base_path), Some(temp_dir)))
    }

    /// Open a second environment over the same data directory (simulates an app restart).
    /// The first environment must stay alive to keep the directory around.
    pub fn reopen(&self) -> Result<Self> {
        let base_path = self
            .base_path
            .clone()
            .ok_or_else(|| anyhow::anyhow!("In-memory environments cannot be reopened"))?;
        let store = Arc::new(FileStore::new(&base_path)?);
        Ok(Self::from_store(store, Some(base_path), None))
    }

    fn from_store(store: Arc<dyn KeyValueStore>, base_path: Option<PathBuf>, temp_dir: Option<TempDir>) -> Self {
        Self {
            donor_repo: DonorRepository::new(store.clone()),
            recipient_repo: RecipientRepository::new(store.clone()),
            settings_repo: SettingsRepository::new(store.clone()),
            store,
            base_path,
            _temp_dir: temp_dir,
        }
    }
}

/// Cash donor paying 45 000 per person with a 10 000 per-person infaq
pub fn sample_cash_donor(id: &str, rt_number: &str, family_count: u32) -> DonorRecord {
    DonorRecord {
        id: id.to_string(),
        head_of_family: format!("Keluarga {}", id),
        family_count,
        rt_number: rt_number.to_string(),
        rw_number: Some("01".to_string()),
        payment: Payment::Cash {
            amount: 45_000.0 * family_count as f64,
        },
        infaq_amount: 10_000.0,
        infaq_amount2: 0.0,
        mosque_infaq_amount: 0.0,
        payment_date: "2025-03-28".to_string(),
        payment_time: "08:00".to_string(),
        payment_type: PaymentType::Tunai,
        zakat_amount: 45_000.0 * family_count as f64,
        collector_name: None,
    }
}

pub fn sample_rice_donor(id: &str, rt_number: &str, family_count: u32, total_kg: f64) -> DonorRecord {
    DonorRecord {
        payment: Payment::Rice { kg: total_kg },
        infaq_amount: 0.0,
        zakat_amount: total_kg,
        ..sample_cash_donor(id, rt_number, family_count)
    }
}

pub fn sample_recipient(id: &str, category: RecipientCategory, cash_amount: f64, rice_amount: f64) -> RecipientRecord {
    RecipientRecord {
        id: id.to_string(),
        name: format!("Penerima {}", id),
        category,
        rt_number: "01".to_string(),
        cash_amount,
        rice_amount,
        notes: None,
        distributed_at: None,
    }
}
