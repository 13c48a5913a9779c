//! # Donor Repository
//!
//! Persists the donor ledger as one JSON array under [`DONORS_KEY`]. Every
//! mutation rewrites the whole array, matching how the web front end treats
//! its `localStorage` blob.

use anyhow::Result;
use log::{debug, info, warn};
use shared::DonorRecord;
use std::sync::Arc;

use super::traits::{DonorStorage, KeyValueStore};
use super::{read_json, write_json, DONORS_KEY};

#[derive(Clone)]
pub struct DonorRepository {
    store: Arc<dyn KeyValueStore>,
}

impl DonorRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn load(&self) -> Result<Vec<DonorRecord>> {
        read_json(self.store.as_ref(), DONORS_KEY)
    }

    fn save(&self, donors: &[DonorRecord]) -> Result<()> {
        write_json(self.store.as_ref(), DONORS_KEY, donors)
    }
}

impl DonorStorage for DonorRepository {
    fn list_donors(&self) -> Result<Vec<DonorRecord>> {
        let donors = self.load()?;
        debug!("Loaded {} donors", donors.len());
        Ok(donors)
    }

    fn get_donor(&self, donor_id: &str) -> Result<Option<DonorRecord>> {
        Ok(self.load()?.into_iter().find(|donor| donor.id == donor_id))
    }

    fn store_donor(&self, donor: &DonorRecord) -> Result<()> {
        let mut donors = self.load()?;
        if donors.iter().any(|existing| existing.id == donor.id) {
            return Err(anyhow::anyhow!("Donor with ID '{}' already exists", donor.id));
        }
        donors.push(donor.clone());
        self.save(&donors)?;
        info!("Stored donor {} ({})", donor.id, donor.head_of_family);
        Ok(())
    }

    fn update_donor(&self, donor: &DonorRecord) -> Result<bool> {
        let mut donors = self.load()?;
        match donors.iter_mut().find(|existing| existing.id == donor.id) {
            Some(existing) => {
                *existing = donor.clone();
                self.save(&donors)?;
                info!("Updated donor {}", donor.id);
                Ok(true)
            }
            None => {
                warn!("Cannot update donor {}: not found", donor.id);
                Ok(false)
            }
        }
    }

    fn delete_donor(&self, donor_id: &str) -> Result<bool> {
        let mut donors = self.load()?;
        let before = donors.len();
        donors.retain(|donor| donor.id != donor_id);
        if donors.len() == before {
            return Ok(false);
        }
        self.save(&donors)?;
        info!("Deleted donor {}", donor_id);
        Ok(true)
    }
}
