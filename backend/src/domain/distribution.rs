//! Splitting a collected cash and rice pool into the five distribution buckets.
//!
//! | Bucket | % |
//! |---|---|
//! | fakir miskin | 75 |
//! | amilin DKM | 8 |
//! | fi sabilillah | 12.5 |
//! | amilin desa | 2.5 |
//! | amilin kecamatan | 2 |
//!
//! No rounding is applied. The buckets add back up to the pool only within
//! floating-point tolerance, never exactly.

use shared::{DistributionBucket, DistributionResult, DistributionRules};

/// Split `total_cash` and `total_rice` with the fixed percentages above
pub fn calculate_zakat_distribution(total_cash: f64, total_rice: f64) -> DistributionResult {
    calculate_distribution_with_rules(total_cash, total_rice, &DistributionRules::default())
}

/// Split the pools with committee-configured percentages.
/// Rules that do not sum to 100 are applied as given.
pub fn calculate_distribution_with_rules(
    total_cash: f64,
    total_rice: f64,
    rules: &DistributionRules,
) -> DistributionResult {
    let split = |percentage: f64| DistributionBucket {
        percentage,
        cash: total_cash * (percentage / 100.0),
        rice: total_rice * (percentage / 100.0),
    };

    DistributionResult {
        fakir_miskin: split(rules.fakir_miskin),
        amilin_dkm: split(rules.amilin_dkm),
        fi_sabilillah: split(rules.fi_sabilillah),
        amilin_desa: split(rules.amilin_desa),
        amilin_kecamatan: split(rules.amilin_kecamatan),
    }
}
