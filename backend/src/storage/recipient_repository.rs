use anyhow::Result;
use log::{info, warn};
use shared::RecipientRecord;
use std::sync::Arc;

use super::traits::{KeyValueStore, RecipientStorage};
use super::{read_json, write_json, RECIPIENTS_KEY};

/// Recipient list stored as one JSON array under [`RECIPIENTS_KEY`]
#[derive(Clone)]
pub struct RecipientRepository {
    store: Arc<dyn KeyValueStore>,
}

impl RecipientRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn load(&self) -> Result<Vec<RecipientRecord>> {
        read_json(self.store.as_ref(), RECIPIENTS_KEY)
    }

    fn save(&self, recipients: &[RecipientRecord]) -> Result<()> {
        write_json(self.store.as_ref(), RECIPIENTS_KEY, recipients)
    }
}

impl RecipientStorage for RecipientRepository {
    fn list_recipients(&self) -> Result<Vec<RecipientRecord>> {
        self.load()
    }

    fn get_recipient(&self, recipient_id: &str) -> Result<Option<RecipientRecord>> {
        Ok(self.load()?.into_iter().find(|r| r.id == recipient_id))
    }

    fn store_recipient(&self, recipient: &RecipientRecord) -> Result<()> {
        let mut recipients = self.load()?;
        if recipients.iter().any(|r| r.id == recipient.id) {
            return Err(anyhow::anyhow!(
                "Recipient with ID '{}' already exists",
                recipient.id
            ));
        }
        recipients.push(recipient.clone());
        self.save(&recipients)?;
        info!("Stored recipient {} ({})", recipient.id, recipient.category);
        Ok(())
    }

    fn update_recipient(&self, recipient: &RecipientRecord) -> Result<bool> {
        let mut recipients = self.load()?;
        let Some(existing) = recipients.iter_mut().find(|r| r.id == recipient.id) else {
            warn!("Cannot update recipient {}: not found", recipient.id);
            return Ok(false);
        };
        *existing = recipient.clone();
        self.save(&recipients)?;
        info!("Updated recipient {}", recipient.id);
        Ok(true)
    }

    fn delete_recipient(&self, recipient_id: &str) -> Result<bool> {
        let mut recipients = self.load()?;
        let before = recipients.len();
        recipients.retain(|r| r.id != recipient_id);
        if recipients.len() == before {
            return Ok(false);
        }
        self.save(&recipients)?;
        info!("Deleted recipient {}", recipient_id);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_utils::{sample_recipient, TestEnvironment};
    use shared::RecipientCategory;

    #[test]
    fn test_recipient_crud() {
        let env = TestEnvironment::in_memory();
        let recipient = sample_recipient("recipient::1", RecipientCategory::FakirMiskin, 100_000.0, 5.0);

        env.recipient_repo.store_recipient(&recipient).unwrap();
        assert_eq!(
            env.recipient_repo.get_recipient("recipient::1").unwrap(),
            Some(recipient.clone())
        );

        let mut edited = recipient.clone();
        edited.cash_amount = 150_000.0;
        assert!(env.recipient_repo.update_recipient(&edited).unwrap());
        assert_eq!(env.recipient_repo.list_recipients().unwrap()[0].cash_amount, 150_000.0);

        assert!(env.recipient_repo.delete_recipient("recipient::1").unwrap());
        assert!(env.recipient_repo.list_recipients().unwrap().is_empty());
    }

    #[test]
    fn test_missing_recipient_operations() {
        let env = TestEnvironment::in_memory();
        let ghost = sample_recipient("recipient::x", RecipientCategory::AmilinRt, 0.0, 0.0);
        assert!(!env.recipient_repo.update_recipient(&ghost).unwrap());
        assert!(!env.recipient_repo.delete_recipient("recipient::x").unwrap());
    }

    #[test]
    fn test_duplicate_recipient_rejected() {
        let env = TestEnvironment::in_memory();
        let recipient = sample_recipient("recipient::1", RecipientCategory::FiSabilillah, 1.0, 0.0);
        env.recipient_repo.store_recipient(&recipient).unwrap();
        assert!(env.recipient_repo.store_recipient(&recipient).is_err());
    }
}
