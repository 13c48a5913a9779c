use anyhow::{bail, Result};
use chrono::{Local, Utc};
use log::{info, warn};
use shared::{
    CategoryTotal, CreateRecipientRequest, DistributionCategory, DistributionProgress,
    DistributionResult, DonorRecord, RecipientCategory, RecipientRecord,
};
use std::sync::Arc;

use crate::domain::summary::get_zakat_distribution;
use crate::storage::{KeyValueStore, RecipientRepository, RecipientStorage};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecipientValidationError {
    #[error("Recipient name cannot be empty")]
    EmptyName,
    #[error("{field} cannot be negative (got {value})")]
    NegativeAmount { field: &'static str, value: f64 },
}

/// Service for beneficiaries and amil shares
#[derive(Clone)]
pub struct RecipientService {
    recipient_repository: RecipientRepository,
}

impl RecipientService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            recipient_repository: RecipientRepository::new(store),
        }
    }

    pub fn list_recipients(&self) -> Result<Vec<RecipientRecord>> {
        self.recipient_repository.list_recipients()
    }

    pub fn get_recipient(&self, recipient_id: &str) -> Result<Option<RecipientRecord>> {
        self.recipient_repository.get_recipient(recipient_id)
    }

    pub fn create_recipient(&self, request: CreateRecipientRequest) -> Result<RecipientRecord> {
        info!("Creating recipient '{}' ({})", request.name, request.category);
        validate(&request.name, request.cash_amount, request.rice_amount)?;

        let recipient = RecipientRecord {
            id: RecipientRecord::generate_id(Utc::now().timestamp_millis()),
            name: request.name.trim().to_string(),
            category: request.category,
            rt_number: request.rt_number,
            cash_amount: request.cash_amount,
            rice_amount: request.rice_amount,
            notes: request.notes.filter(|notes| !notes.trim().is_empty()),
            distributed_at: None,
        };

        self.recipient_repository.store_recipient(&recipient)?;
        Ok(recipient)
    }

    pub fn update_recipient(&self, recipient: RecipientRecord) -> Result<RecipientRecord> {
        info!("Updating recipient {}", recipient.id);
        validate(&recipient.name, recipient.cash_amount, recipient.rice_amount)?;

        if !self.recipient_repository.update_recipient(&recipient)? {
            return Err(anyhow::anyhow!("Recipient not found: {}", recipient.id));
        }
        Ok(recipient)
    }

    pub fn delete_recipient(&self, recipient_id: &str) -> Result<bool> {
        let deleted = self.recipient_repository.delete_recipient(recipient_id)?;
        if !deleted {
            warn!("Delete requested for unknown recipient {}", recipient_id);
        }
        Ok(deleted)
    }

    /// Stamp the recipient as handed out with the local time ("YYYY-MM-DD HH:MM")
    pub fn mark_distributed(&self, recipient_id: &str) -> Result<RecipientRecord> {
        let mut recipient = self
            .get_recipient(recipient_id)?
            .ok_or_else(|| anyhow::anyhow!("Recipient not found: {}", recipient_id))?;

        recipient.distributed_at = Some(Local::now().format("%Y-%m-%d %H:%M").to_string());
        if !self.recipient_repository.update_recipient(&recipient)? {
            bail!("Recipient not found: {}", recipient_id);
        }
        info!("Recipient {} marked as distributed", recipient_id);
        Ok(recipient)
    }

    pub fn category_totals(&self) -> Result<Vec<CategoryTotal>> {
        Ok(category_totals(&self.list_recipients()?))
    }

    /// Compare what the donors' collection allocates to each bucket with what
    /// has been assigned to recipients so far
    pub fn distribution_progress(&self, donors: &[DonorRecord]) -> Result<Vec<DistributionProgress>> {
        let distribution = get_zakat_distribution(donors);
        Ok(distribution_progress(&distribution, &self.list_recipients()?))
    }
}

fn validate(name: &str, cash_amount: f64, rice_amount: f64) -> Result<(), RecipientValidationError> {
    if name.trim().is_empty() {
        return Err(RecipientValidationError::EmptyName);
    }
    if cash_amount < 0.0 {
        return Err(RecipientValidationError::NegativeAmount {
            field: "Cash amount",
            value: cash_amount,
        });
    }
    if rice_amount < 0.0 {
        return Err(RecipientValidationError::NegativeAmount {
            field: "Rice amount",
            value: rice_amount,
        });
    }
    Ok(())
}

/// Recorded amounts per recipient category, one entry per category in
/// declaration order (zeros included)
pub fn category_totals(recipients: &[RecipientRecord]) -> Vec<CategoryTotal> {
    RecipientCategory::ALL
        .iter()
        .map(|&category| {
            let in_category = recipients.iter().filter(|r| r.category == category);
            in_category.fold(
                CategoryTotal {
                    category,
                    recipient_count: 0,
                    cash_amount: 0.0,
                    rice_amount: 0.0,
                },
                |mut total, recipient| {
                    total.recipient_count += 1;
                    total.cash_amount += recipient.cash_amount;
                    total.rice_amount += recipient.rice_amount;
                    total
                },
            )
        })
        .collect()
}

/// Allocated, assigned and remaining amounts per distribution bucket.
///
/// Recipient categories without a bucket (RT/RW amilin, collectors,
/// distributors) are not counted against any allocation.
pub fn distribution_progress(
    distribution: &DistributionResult,
    recipients: &[RecipientRecord],
) -> Vec<DistributionProgress> {
    DistributionCategory::ALL
        .iter()
        .map(|&category| {
            let bucket = distribution.bucket(category);
            let (distributed_cash, distributed_rice) = recipients
                .iter()
                .filter(|r| r.category.distribution_category() == Some(category))
                .fold((0.0, 0.0), |(cash, rice), r| (cash + r.cash_amount, rice + r.rice_amount));

            DistributionProgress {
                category,
                allocated_cash: bucket.cash,
                allocated_rice: bucket.rice,
                distributed_cash,
                distributed_rice,
                remaining_cash: bucket.cash - distributed_cash,
                remaining_rice: bucket.rice - distributed_rice,
            }
        })
        .collect()
}
