//! Aggregation of donor records into collection totals.
//!
//! All functions here are read-only folds over the caller's slice: they never
//! mutate it and return the same result for the same input.
//!
//! ## Rice sub-buckets
//!
//! Rice payments are further split by the per-person rate, derived as
//! `rice_kg / family_count`. Only the exact rates 2.5 kg and 3 kg are
//! recognized. Any other rate, including the NaN/infinite rate of a record
//! with zero family members, lands in neither sub-bucket while still counting
//! toward `total_rice`.

use shared::{DistributionResult, DonorRecord, Payment, RtSummary, SettingsData, ZakatSummary};

use super::distribution::calculate_zakat_distribution;

/// Standard per-person rice rate (kg)
pub const RICE_RATE_STANDARD: f64 = 2.5;
/// Higher per-person rice rate some families choose (kg)
pub const RICE_RATE_HIGH: f64 = 3.0;

/// Fold all donors into a single summary
pub fn get_zakat_summary(donors: &[DonorRecord]) -> ZakatSummary {
    summarize(donors)
}

/// One summary per configured RT, in the configured order.
///
/// Donors match an RT by exact string comparison. Every configured RT appears,
/// with zeros when nobody from it has paid.
pub fn get_rt_summary(donors: &[DonorRecord], settings: &SettingsData) -> Vec<RtSummary> {
    settings
        .rt_numbers
        .iter()
        .map(|rt_number| RtSummary {
            rt_number: rt_number.clone(),
            summary: summarize(donors.iter().filter(|donor| &donor.rt_number == rt_number)),
        })
        .collect()
}

/// Split the collected cash and rice into the distribution buckets
pub fn get_zakat_distribution(donors: &[DonorRecord]) -> DistributionResult {
    let summary = get_zakat_summary(donors);
    calculate_zakat_distribution(summary.total_cash, summary.total_rice)
}

/// Donors whose RT is not in the configured list, so absent from `get_rt_summary`
pub fn unassigned_donors<'a>(donors: &'a [DonorRecord], settings: &SettingsData) -> Vec<&'a DonorRecord> {
    donors
        .iter()
        .filter(|donor| !settings.rt_numbers.contains(&donor.rt_number))
        .collect()
}

fn summarize<'a>(donors: impl IntoIterator<Item = &'a DonorRecord>) -> ZakatSummary {
    donors
        .into_iter()
        .fold(ZakatSummary::default(), |mut summary, donor| {
            accumulate(&mut summary, donor);
            summary
        })
}

fn accumulate(summary: &mut ZakatSummary, donor: &DonorRecord) {
    let members = u64::from(donor.family_count);
    let family_size = donor.family_count as f64;

    summary.total_families += 1;
    summary.total_individuals += members;
    summary.total_mosque_infaq += donor.mosque_infaq_amount;

    match donor.payment {
        Payment::Cash { amount } => {
            summary.cash_families += 1;
            summary.cash_individuals += members;
            summary.total_cash += amount;
            summary.total_infaq += donor.infaq_amount * family_size;
            summary.total_infaq2 += donor.infaq_amount2 * family_size;
        }
        Payment::Rice { kg } => {
            summary.rice_families += 1;
            summary.rice_individuals += members;
            summary.total_rice += kg;

            let per_person = kg / family_size;
            if per_person == RICE_RATE_STANDARD {
                summary.rice_2_5_individuals += members;
                summary.rice_2_5_kg += RICE_RATE_STANDARD * family_size;
            } else if per_person == RICE_RATE_HIGH {
                summary.rice_3_individuals += members;
                summary.rice_3_kg += RICE_RATE_HIGH * family_size;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_utils::{sample_cash_donor, sample_rice_donor};

    fn ledger() -> Vec<DonorRecord> {
        let mut with_infaq2 = sample_cash_donor("donor::3", "02", 2);
        with_infaq2.infaq_amount2 = 5_000.0;
        with_infaq2.mosque_infaq_amount = 20_000.0;

        vec![
            sample_cash_donor("donor::1", "01", 4),
            sample_rice_donor("donor::2", "01", 3, 7.5),
            with_infaq2,
            sample_rice_donor("donor::4", "03", 2, 6.0),
            sample_rice_donor("donor::5", "03", 2, 5.6),
        ]
    }

    fn settings_with_rts(rts: &[&str]) -> SettingsData {
        SettingsData {
            rt_numbers: rts.iter().map(|rt| rt.to_string()).collect(),
            ..SettingsData::default()
        }
    }

    #[test]
    fn test_empty_ledger_is_all_zero() {
        let summary = get_zakat_summary(&[]);
        assert_eq!(summary, ZakatSummary::default());
        assert_eq!(summary.total_families, 0);
        assert_eq!(summary.total_cash, 0.0);
    }

    #[test]
    fn test_counts_and_method_split() {
        let summary = get_zakat_summary(&ledger());

        assert_eq!(summary.total_families, 5);
        assert_eq!(summary.total_individuals, 13);
        assert_eq!(summary.cash_families, 2);
        assert_eq!(summary.cash_individuals, 6);
        assert_eq!(summary.total_cash, 270_000.0);
        assert_eq!(summary.rice_families, 3);
        assert_eq!(summary.rice_individuals, 7);
        assert!((summary.total_rice - 19.1).abs() < 1e-9);
    }

    #[test]
    fn test_rice_sub_buckets_by_exact_rate() {
        let summary = get_zakat_summary(&ledger());

        assert_eq!(summary.rice_2_5_individuals, 3);
        assert_eq!(summary.rice_2_5_kg, 7.5);
        assert_eq!(summary.rice_3_individuals, 2);
        assert_eq!(summary.rice_3_kg, 6.0);
        // 5.6 kg for two people (2.8 each) is in neither bucket
        assert!(summary.rice_2_5_kg + summary.rice_3_kg < summary.total_rice);
    }

    #[test]
    fn test_zero_member_rice_record_is_in_no_bucket() {
        let donors = vec![sample_rice_donor("donor::1", "01", 0, 2.5)];
        let summary = get_zakat_summary(&donors);

        assert_eq!(summary.total_rice, 2.5);
        assert_eq!(summary.rice_2_5_kg, 0.0);
        assert_eq!(summary.rice_3_kg, 0.0);
        assert_eq!(summary.total_individuals, 0);
    }

    #[test]
    fn test_infaq_totals_are_per_person_and_cash_only() {
        let mut rice_with_infaq = sample_rice_donor("donor::9", "01", 5, 12.5);
        rice_with_infaq.infaq_amount = 10_000.0;
        let mut donors = ledger();
        donors.push(rice_with_infaq);

        let summary = get_zakat_summary(&donors);
        // (4 + 2) people * 10 000; the rice donor's infaq is ignored
        assert_eq!(summary.total_infaq, 60_000.0);
        assert_eq!(summary.total_infaq2, 10_000.0);
        // mosque infaq is summed per record
        assert_eq!(summary.total_mosque_infaq, 20_000.0);
    }

    #[test]
    fn test_rt_summary_follows_configured_order() {
        let settings = settings_with_rts(&["03", "01", "05", "02"]);
        let rows = get_rt_summary(&ledger(), &settings);

        let order: Vec<&str> = rows.iter().map(|row| row.rt_number.as_str()).collect();
        assert_eq!(order, vec!["03", "01", "05", "02"]);

        assert_eq!(rows[0].summary.total_families, 2);
        assert_eq!(rows[0].summary.rice_3_kg, 6.0);
        assert_eq!(rows[1].summary.total_cash, 180_000.0);
        assert_eq!(rows[1].summary.rice_2_5_kg, 7.5);
        assert_eq!(rows[2].summary, ZakatSummary::default());
        assert_eq!(rows[3].summary.total_infaq2, 10_000.0);
    }

    #[test]
    fn test_rt_summary_length_matches_configuration() {
        let settings = settings_with_rts(&["01", "02", "03", "04", "05", "06"]);
        assert_eq!(get_rt_summary(&[], &settings).len(), 6);
        assert_eq!(get_rt_summary(&ledger(), &settings).len(), 6);
        assert!(get_rt_summary(&ledger(), &settings_with_rts(&[])).is_empty());
    }

    #[test]
    fn test_rt_match_is_exact() {
        let settings = settings_with_rts(&["1", "01"]);
        let rows = get_rt_summary(&ledger(), &settings);
        assert_eq!(rows[0].summary.total_families, 0);
        assert_eq!(rows[1].summary.total_families, 2);
    }

    #[test]
    fn test_unassigned_donors() {
        let settings = settings_with_rts(&["01", "02"]);
        let donors = ledger();
        let unassigned: Vec<&str> = unassigned_donors(&donors, &settings)
            .iter()
            .map(|donor| donor.id.as_str())
            .collect();
        assert_eq!(unassigned, vec!["donor::4", "donor::5"]);
    }

    #[test]
    fn test_distribution_uses_collected_totals() {
        let distribution = get_zakat_distribution(&ledger());
        assert!((distribution.fakir_miskin.cash - 202_500.0).abs() < 1e-6);
        assert!((distribution.total_rice() - 19.1).abs() < 1e-9);
    }

    #[test]
    fn test_aggregation_is_idempotent_and_read_only() {
        let donors = ledger();
        let snapshot = donors.clone();
        let settings = settings_with_rts(&["01", "02", "03"]);

        assert_eq!(get_zakat_summary(&donors), get_zakat_summary(&donors));
        assert_eq!(get_rt_summary(&donors, &settings), get_rt_summary(&donors, &settings));
        assert_eq!(get_zakat_distribution(&donors), get_zakat_distribution(&donors));
        assert_eq!(donors, snapshot);
    }
}
