//! Donor ledger service: recording, editing and reporting on zakat payments.
//!
//! Wraps the donor and settings repositories and feeds the stored data into
//! the pure calculators (`family_donation`, `summary`, `distribution`).

use anyhow::Result;
use chrono::{Local, Utc};
use log::{info, warn};
use shared::{
    CreateDonorRequest, DistributionResult, DonorRecord, FamilyDonation, Payment, PaymentMethod,
    RtSummary, ZakatSummary,
};
use std::sync::Arc;

use crate::domain::distribution::calculate_distribution_with_rules;
use crate::domain::family_donation::calculate_family_donation;
use crate::domain::summary::{get_rt_summary, get_zakat_distribution, get_zakat_summary, unassigned_donors};
use crate::storage::{DonorRepository, DonorStorage, KeyValueStore, SettingsRepository, SettingsStorage};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DonorValidationError {
    #[error("Head of family name cannot be empty")]
    EmptyHeadOfFamily,
    #[error("Family count must be at least 1")]
    ZeroFamilyCount,
}

#[derive(Clone)]
pub struct DonorService {
    donor_repository: DonorRepository,
    settings_repository: SettingsRepository,
}

impl DonorService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            donor_repository: DonorRepository::new(store.clone()),
            settings_repository: SettingsRepository::new(store),
        }
    }

    pub fn list_donors(&self) -> Result<Vec<DonorRecord>> {
        self.donor_repository.list_donors()
    }

    pub fn get_donor(&self, donor_id: &str) -> Result<Option<DonorRecord>> {
        self.donor_repository.get_donor(donor_id)
    }

    /// Record a new payment.
    ///
    /// Assigns the ID, fills date and time with the local clock when absent,
    /// and sets `zakat_amount` to the payment total.
    pub fn create_donor(&self, request: CreateDonorRequest) -> Result<DonorRecord> {
        info!("Creating donor: {:?}", request);
        validate(&request.head_of_family, request.family_count)?;
        self.warn_if_unknown_rt(&request.rt_number)?;

        let now = Local::now();
        let donor = DonorRecord {
            id: DonorRecord::generate_id(Utc::now().timestamp_millis()),
            head_of_family: request.head_of_family.trim().to_string(),
            family_count: request.family_count,
            rt_number: request.rt_number,
            rw_number: request.rw_number,
            zakat_amount: payment_total(&request.payment),
            payment: request.payment,
            infaq_amount: request.infaq_amount,
            infaq_amount2: request.infaq_amount2,
            mosque_infaq_amount: request.mosque_infaq_amount,
            payment_date: request
                .payment_date
                .unwrap_or_else(|| now.format("%Y-%m-%d").to_string()),
            payment_time: request
                .payment_time
                .unwrap_or_else(|| now.format("%H:%M").to_string()),
            payment_type: request.payment_type,
            collector_name: request.collector_name.filter(|name| !name.trim().is_empty()),
        };

        self.donor_repository.store_donor(&donor)?;
        info!("Created donor {} for {} people", donor.id, donor.family_count);
        Ok(donor)
    }

    /// Replace an existing record (edit flow). The ID must already exist.
    pub fn update_donor(&self, donor: DonorRecord) -> Result<DonorRecord> {
        info!("Updating donor {}", donor.id);
        validate(&donor.head_of_family, donor.family_count)?;
        self.warn_if_unknown_rt(&donor.rt_number)?;

        if !self.donor_repository.update_donor(&donor)? {
            return Err(anyhow::anyhow!("Donor not found: {}", donor.id));
        }
        Ok(donor)
    }

    /// Returns false when no donor had that ID
    pub fn delete_donor(&self, donor_id: &str) -> Result<bool> {
        let deleted = self.donor_repository.delete_donor(donor_id)?;
        if !deleted {
            warn!("Delete requested for unknown donor {}", donor_id);
        }
        Ok(deleted)
    }

    /// What a family of `family_count` owes under the stored settings
    pub fn quote(
        &self,
        family_count: u32,
        payment_method: PaymentMethod,
        rice_amount_per_person: Option<f64>,
    ) -> Result<FamilyDonation> {
        let settings = self.settings_repository.get_settings()?;
        Ok(calculate_family_donation(
            &settings,
            family_count,
            payment_method,
            rice_amount_per_person,
        ))
    }

    pub fn summary(&self) -> Result<ZakatSummary> {
        Ok(get_zakat_summary(&self.list_donors()?))
    }

    pub fn rt_summary(&self) -> Result<Vec<RtSummary>> {
        let settings = self.settings_repository.get_settings()?;
        Ok(get_rt_summary(&self.list_donors()?, &settings))
    }

    /// Collected totals split with the fixed distribution percentages
    pub fn distribution(&self) -> Result<DistributionResult> {
        Ok(get_zakat_distribution(&self.list_donors()?))
    }

    /// Collected totals split with the committee's configured rules
    pub fn configured_distribution(&self) -> Result<DistributionResult> {
        let settings = self.settings_repository.get_settings()?;
        let summary = self.summary()?;
        Ok(calculate_distribution_with_rules(
            summary.total_cash,
            summary.total_rice,
            &settings.distribution_rules,
        ))
    }

    /// Donors whose RT is missing from the settings
    pub fn unassigned_donors(&self) -> Result<Vec<DonorRecord>> {
        let settings = self.settings_repository.get_settings()?;
        let donors = self.list_donors()?;
        Ok(unassigned_donors(&donors, &settings).into_iter().cloned().collect())
    }

    fn warn_if_unknown_rt(&self, rt_number: &str) -> Result<()> {
        let settings = self.settings_repository.get_settings()?;
        if !settings.rt_numbers.iter().any(|rt| rt == rt_number) {
            warn!("RT '{}' is not in the configured RT list", rt_number);
        }
        Ok(())
    }
}

fn validate(head_of_family: &str, family_count: u32) -> Result<(), DonorValidationError> {
    if head_of_family.trim().is_empty() {
        return Err(DonorValidationError::EmptyHeadOfFamily);
    }
    if family_count == 0 {
        return Err(DonorValidationError::ZeroFamilyCount);
    }
    Ok(())
}

fn payment_total(payment: &Payment) -> f64 {
    match *payment {
        Payment::Cash { amount } => amount,
        Payment::Rice { kg } => kg,
    }
}
