//! Amount owed by one family for zakat fitrah.

use shared::{FamilyDonation, PaymentMethod, SettingsData};

/// Compute the zakat owed by a family plus the minimum infaq.
///
/// The per-person rate is `settings.cash_zakat_amount` for cash, and for rice
/// `rice_amount_per_person` when given, else `settings.rice_zakat_amount`.
/// `family_count` is not validated; zero members owe zero.
///
/// `infaq_amount` is the flat configured minimum and is NOT multiplied by the
/// family size. Callers that want a per-person infaq multiply it themselves.
/// Rice payments carry no infaq in their total.
pub fn calculate_family_donation(
    settings: &SettingsData,
    family_count: u32,
    payment_method: PaymentMethod,
    rice_amount_per_person: Option<f64>,
) -> FamilyDonation {
    let rate = match payment_method {
        PaymentMethod::Cash => settings.cash_zakat_amount,
        PaymentMethod::Rice => rice_amount_per_person.unwrap_or(settings.rice_zakat_amount),
    };

    let zakat_amount = rate * family_count as f64;
    let infaq_amount = settings.min_infaq_amount;
    let total_amount = match payment_method {
        PaymentMethod::Cash => zakat_amount + infaq_amount,
        PaymentMethod::Rice => zakat_amount,
    };

    FamilyDonation {
        zakat_amount,
        infaq_amount,
        total_amount,
    }
}
