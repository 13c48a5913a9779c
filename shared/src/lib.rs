use serde::{Deserialize, Serialize};
use std::fmt;

/// One zakat fitrah payment event recorded by the committee.
///
/// Stored as camelCase JSON so existing ledgers written by the web front end
/// load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorRecord {
    /// Donor ID in format: "donor::<epoch_millis>::<suffix>"
    pub id: String,
    /// Name of the head of the family paying for the household
    pub head_of_family: String,
    /// Number of individuals covered by this payment
    pub family_count: u32,
    /// RT (neighborhood unit) the family belongs to
    pub rt_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rw_number: Option<String>,
    /// Cash or rice, with the total for the whole family
    #[serde(flatten)]
    pub payment: Payment,
    #[serde(default)]
    pub infaq_amount: f64,
    #[serde(default)]
    pub infaq_amount2: f64,
    #[serde(default)]
    pub mosque_infaq_amount: f64,
    /// Calendar date of the payment (YYYY-MM-DD)
    #[serde(default)]
    pub payment_date: String,
    /// Time of day of the payment (HH:MM)
    #[serde(default)]
    pub payment_time: String,
    #[serde(default)]
    pub payment_type: PaymentType,
    /// Total zakat as set by the entry flow
    #[serde(default)]
    pub zakat_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collector_name: Option<String>,
}

impl DonorRecord {
    /// Generate a donor ID from the creation time plus a random suffix
    pub fn generate_id(epoch_millis: i64) -> String {
        format!("donor::{}::{}", epoch_millis, random_suffix())
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment.method()
    }

    /// Cash total for this record, 0 for rice payments
    pub fn cash_amount(&self) -> f64 {
        match self.payment {
            Payment::Cash { amount } => amount,
            Payment::Rice { .. } => 0.0,
        }
    }

    /// Rice total in kilograms, 0 for cash payments
    pub fn rice_amount(&self) -> f64 {
        match self.payment {
            Payment::Rice { kg } => kg,
            Payment::Cash { .. } => 0.0,
        }
    }
}

/// The payment carried by a donor record. Only the amount belonging to the
/// method exists, so a cash record can never carry a rice total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "paymentMethod", rename_all = "lowercase")]
pub enum Payment {
    Cash {
        #[serde(rename = "cashAmount")]
        amount: f64,
    },
    Rice {
        #[serde(rename = "riceAmount")]
        kg: f64,
    },
}

impl Payment {
    pub fn method(&self) -> PaymentMethod {
        match self {
            Payment::Cash { .. } => PaymentMethod::Cash,
            Payment::Rice { .. } => PaymentMethod::Rice,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Rice,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Rice => "rice",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sub-method tag of a payment. Informational only; tags the app does not know
/// are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentType {
    #[default]
    Tunai,
    Transfer,
    Qris,
    Other(String),
}

impl PaymentType {
    pub fn as_str(&self) -> &str {
        match self {
            PaymentType::Tunai => "tunai",
            PaymentType::Transfer => "transfer",
            PaymentType::Qris => "qris",
            PaymentType::Other(tag) => tag,
        }
    }
}

impl From<String> for PaymentType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "tunai" => PaymentType::Tunai,
            "transfer" => PaymentType::Transfer,
            "qris" => PaymentType::Qris,
            _ => PaymentType::Other(tag),
        }
    }
}

impl From<PaymentType> for String {
    fn from(payment_type: PaymentType) -> Self {
        match payment_type {
            PaymentType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

/// Request to record a new donation. Date and time default to now when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDonorRequest {
    pub head_of_family: String,
    pub family_count: u32,
    pub rt_number: String,
    pub rw_number: Option<String>,
    pub payment: Payment,
    pub infaq_amount: f64,
    pub infaq_amount2: f64,
    pub mosque_infaq_amount: f64,
    pub payment_date: Option<String>,
    pub payment_time: Option<String>,
    pub payment_type: PaymentType,
    pub collector_name: Option<String>,
}

/// A zakat beneficiary or an amil share assignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientRecord {
    pub id: String,
    pub name: String,
    pub category: RecipientCategory,
    #[serde(default)]
    pub rt_number: String,
    #[serde(default)]
    pub cash_amount: f64,
    #[serde(default)]
    pub rice_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distributed_at: Option<String>,
}

impl RecipientRecord {
    pub fn generate_id(epoch_millis: i64) -> String {
        format!("recipient::{}::{}", epoch_millis, random_suffix())
    }
}

fn random_suffix() -> String {
    let mut suffix = uuid::Uuid::new_v4().simple().to_string();
    suffix.truncate(8);
    suffix
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipientRequest {
    pub name: String,
    pub category: RecipientCategory,
    pub rt_number: String,
    pub cash_amount: f64,
    pub rice_amount: f64,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipientCategory {
    FakirMiskin,
    FiSabilillah,
    AmilinDkm,
    AmilinRt,
    AmilinRw,
    AmilinDesa,
    AmilinKecamatan,
    PengumpulZakat,
    PenyalurZakat,
}

impl RecipientCategory {
    pub const ALL: [RecipientCategory; 9] = [
        RecipientCategory::FakirMiskin,
        RecipientCategory::FiSabilillah,
        RecipientCategory::AmilinDkm,
        RecipientCategory::AmilinRt,
        RecipientCategory::AmilinRw,
        RecipientCategory::AmilinDesa,
        RecipientCategory::AmilinKecamatan,
        RecipientCategory::PengumpulZakat,
        RecipientCategory::PenyalurZakat,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecipientCategory::FakirMiskin => "fakir_miskin",
            RecipientCategory::FiSabilillah => "fi_sabilillah",
            RecipientCategory::AmilinDkm => "amilin_dkm",
            RecipientCategory::AmilinRt => "amilin_rt",
            RecipientCategory::AmilinRw => "amilin_rw",
            RecipientCategory::AmilinDesa => "amilin_desa",
            RecipientCategory::AmilinKecamatan => "amilin_kecamatan",
            RecipientCategory::PengumpulZakat => "pengumpul_zakat",
            RecipientCategory::PenyalurZakat => "penyalur_zakat",
        }
    }

    /// The distribution bucket this category draws from, if any.
    /// RT/RW amilin and the collector/distributor shares have no bucket of their own.
    pub fn distribution_category(&self) -> Option<DistributionCategory> {
        match self {
            RecipientCategory::FakirMiskin => Some(DistributionCategory::FakirMiskin),
            RecipientCategory::FiSabilillah => Some(DistributionCategory::FiSabilillah),
            RecipientCategory::AmilinDkm => Some(DistributionCategory::AmilinDkm),
            RecipientCategory::AmilinDesa => Some(DistributionCategory::AmilinDesa),
            RecipientCategory::AmilinKecamatan => Some(DistributionCategory::AmilinKecamatan),
            RecipientCategory::AmilinRt
            | RecipientCategory::AmilinRw
            | RecipientCategory::PengumpulZakat
            | RecipientCategory::PenyalurZakat => None,
        }
    }
}

impl fmt::Display for RecipientCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The five buckets a collected pool is split into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DistributionCategory {
    FakirMiskin,
    #[serde(rename = "amilinDKM")]
    AmilinDkm,
    FiSabilillah,
    AmilinDesa,
    AmilinKecamatan,
}

impl DistributionCategory {
    /// Table order used by reports
    pub const ALL: [DistributionCategory; 5] = [
        DistributionCategory::FakirMiskin,
        DistributionCategory::AmilinDkm,
        DistributionCategory::FiSabilillah,
        DistributionCategory::AmilinDesa,
        DistributionCategory::AmilinKecamatan,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DistributionCategory::FakirMiskin => "Fakir Miskin",
            DistributionCategory::AmilinDkm => "Amilin DKM",
            DistributionCategory::FiSabilillah => "Fi Sabilillah",
            DistributionCategory::AmilinDesa => "Amilin Desa",
            DistributionCategory::AmilinKecamatan => "Amilin Kecamatan",
        }
    }
}

/// Process-wide configuration record. Replaced wholesale on save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsData {
    pub mosque_name: String,
    pub mosque_address: String,
    /// Valid RT numbers, in the order reports list them
    pub rt_numbers: Vec<String>,
    pub rw_numbers: Vec<String>,
    pub committee_members: Vec<CommitteeMember>,
    /// Zakat per person when paying in cash (Rupiah)
    pub cash_zakat_amount: f64,
    /// Zakat per person when paying in rice (kg)
    pub rice_zakat_amount: f64,
    pub min_infaq_amount: f64,
    pub min_mosque_infaq_amount: f64,
    pub payment_info: PaymentInfo,
    pub distribution_rules: DistributionRules,
    pub receipt: ReceiptPreferences,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self {
            mosque_name: "Masjid".to_string(),
            mosque_address: String::new(),
            rt_numbers: (1..=5).map(|n| format!("{:02}", n)).collect(),
            rw_numbers: vec!["01".to_string()],
            committee_members: Vec::new(),
            cash_zakat_amount: 45_000.0,
            rice_zakat_amount: 2.5,
            min_infaq_amount: 10_000.0,
            min_mosque_infaq_amount: 0.0,
            payment_info: PaymentInfo::default(),
            distribution_rules: DistributionRules::default(),
            receipt: ReceiptPreferences::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitteeMember {
    pub name: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Bank transfer and QRIS details printed on receipts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentInfo {
    pub bank_name: String,
    pub account_number: String,
    pub account_holder: String,
    pub qris_merchant_name: String,
}

/// Percentages per distribution bucket. Expected to sum to 100, never enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DistributionRules {
    pub fakir_miskin: f64,
    #[serde(rename = "amilinDKM")]
    pub amilin_dkm: f64,
    pub fi_sabilillah: f64,
    pub amilin_desa: f64,
    pub amilin_kecamatan: f64,
}

impl DistributionRules {
    pub fn percentage(&self, category: DistributionCategory) -> f64 {
        match category {
            DistributionCategory::FakirMiskin => self.fakir_miskin,
            DistributionCategory::AmilinDkm => self.amilin_dkm,
            DistributionCategory::FiSabilillah => self.fi_sabilillah,
            DistributionCategory::AmilinDesa => self.amilin_desa,
            DistributionCategory::AmilinKecamatan => self.amilin_kecamatan,
        }
    }

    pub fn total_percentage(&self) -> f64 {
        DistributionCategory::ALL
            .iter()
            .map(|category| self.percentage(*category))
            .sum()
    }
}

impl Default for DistributionRules {
    fn default() -> Self {
        Self {
            fakir_miskin: 75.0,
            amilin_dkm: 8.0,
            fi_sabilillah: 12.5,
            amilin_desa: 2.5,
            amilin_kecamatan: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReceiptPreferences {
    pub header_text: String,
    pub footer_text: String,
    /// Thermal paper width in millimetres (58 or 80)
    pub paper_width_mm: u32,
    pub show_logo: bool,
    pub auto_print: bool,
}

impl Default for ReceiptPreferences {
    fn default() -> Self {
        Self {
            header_text: "Bukti Pembayaran Zakat Fitrah".to_string(),
            footer_text: "Jazakumullahu khairan".to_string(),
            paper_width_mm: 58,
            show_logo: false,
            auto_print: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionBucket {
    pub percentage: f64,
    pub cash: f64,
    pub rice: f64,
}

/// A cash and rice pool split into the five distribution buckets
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionResult {
    pub fakir_miskin: DistributionBucket,
    #[serde(rename = "amilinDKM")]
    pub amilin_dkm: DistributionBucket,
    pub fi_sabilillah: DistributionBucket,
    pub amilin_desa: DistributionBucket,
    pub amilin_kecamatan: DistributionBucket,
}

impl DistributionResult {
    pub fn bucket(&self, category: DistributionCategory) -> &DistributionBucket {
        match category {
            DistributionCategory::FakirMiskin => &self.fakir_miskin,
            DistributionCategory::AmilinDkm => &self.amilin_dkm,
            DistributionCategory::FiSabilillah => &self.fi_sabilillah,
            DistributionCategory::AmilinDesa => &self.amilin_desa,
            DistributionCategory::AmilinKecamatan => &self.amilin_kecamatan,
        }
    }

    /// Buckets in report table order
    pub fn buckets(&self) -> impl Iterator<Item = (DistributionCategory, &DistributionBucket)> + '_ {
        DistributionCategory::ALL
            .into_iter()
            .map(move |category| (category, self.bucket(category)))
    }

    pub fn total_cash(&self) -> f64 {
        self.buckets().map(|(_, bucket)| bucket.cash).sum()
    }

    pub fn total_rice(&self) -> f64 {
        self.buckets().map(|(_, bucket)| bucket.rice).sum()
    }
}

/// Amount owed by one family
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyDonation {
    pub zakat_amount: f64,
    pub infaq_amount: f64,
    pub total_amount: f64,
}

/// Totals folded from a set of donor records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZakatSummary {
    /// Number of donor records (one per paying family)
    pub total_families: usize,
    /// Individuals covered across all records
    pub total_individuals: u64,
    pub cash_families: usize,
    pub cash_individuals: u64,
    pub total_cash: f64,
    pub rice_families: usize,
    pub rice_individuals: u64,
    pub total_rice: f64,
    /// Individuals paying exactly 2.5 kg per person
    pub rice_2_5_individuals: u64,
    pub rice_2_5_kg: f64,
    /// Individuals paying exactly 3 kg per person
    pub rice_3_individuals: u64,
    pub rice_3_kg: f64,
    pub total_infaq: f64,
    pub total_infaq2: f64,
    pub total_mosque_infaq: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RtSummary {
    pub rt_number: String,
    pub summary: ZakatSummary,
}

/// Inputs of the zakat mal calculator. Weights in grams, prices per gram.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MalAssets {
    pub gold: f64,
    pub silver: f64,
    pub cash: f64,
    pub trading_assets: f64,
    pub receivables: f64,
    pub liabilities: f64,
    pub gold_price_per_gram: f64,
    pub silver_price_per_gram: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MalResult {
    pub total_assets: f64,
    pub net_assets: f64,
    pub nisab: f64,
    pub eligible_for_zakat: bool,
    pub zakat_amount: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeInputs {
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub other_income: f64,
    pub gold_price_per_gram: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeResult {
    pub monthly_net_income: f64,
    pub annual_net_income: f64,
    pub nisab: f64,
    pub eligible_for_zakat: bool,
    pub zakat_amount: f64,
}

/// Amounts recorded for one recipient category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    pub category: RecipientCategory,
    pub recipient_count: usize,
    pub cash_amount: f64,
    pub rice_amount: f64,
}

/// Allocated versus handed-out amounts for one distribution bucket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionProgress {
    pub category: DistributionCategory,
    pub allocated_cash: f64,
    pub allocated_rice: f64,
    pub distributed_cash: f64,
    pub distributed_rice: f64,
    pub remaining_cash: f64,
    pub remaining_rice: f64,
}
