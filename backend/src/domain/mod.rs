//! # Domain Module
//!
//! Business logic for zakat fitrah collection and distribution.
//!
//! The calculators (`formatting`, `distribution`, `family_donation`,
//! `summary`, `nisab`) are pure functions over plain data: they never touch
//! storage, never log and never fail. The services wrap the storage
//! repositories and feed stored data into those calculators.
//!
//! ## Services
//!
//! - **SettingsService**: committee configuration (rates, RT list, rules)
//! - **DonorService**: recording payments and collection reports
//! - **RecipientService**: beneficiaries and progress against the allocation
//! - **ExportService**: CSV exports of the ledger and the RT report

pub mod distribution;
pub mod donor_service;
pub mod export_service;
pub mod family_donation;
pub mod formatting;
pub mod nisab;
pub mod recipient_service;
pub mod settings_service;
pub mod summary;

pub use distribution::{calculate_distribution_with_rules, calculate_zakat_distribution};
pub use donor_service::{DonorService, DonorValidationError};
pub use export_service::{ExportData, ExportKind, ExportService, ExportedFile};
pub use family_donation::calculate_family_donation;
pub use formatting::{format_currency, format_rice_kg, format_rice_weight};
pub use nisab::{calculate_zakat_mal, calculate_zakat_penghasilan};
pub use recipient_service::{RecipientService, RecipientValidationError};
pub use settings_service::SettingsService;
pub use summary::{get_rt_summary, get_zakat_distribution, get_zakat_summary};
