//! Display formatting for Rupiah amounts and rice weights.
//!
//! Receipts, reports and the CLI all go through these two functions so the
//! same amount always renders the same way.

/// Format an amount as Indonesian Rupiah with no decimals: `45000` -> `"Rp45.000"`.
///
/// Rounds half away from zero. Negative amounts get a leading minus
/// (`"-Rp45.000"`). Non-finite values render as `"RpNaN"`, `"Rp∞"` and `"-Rp∞"`.
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return "RpNaN".to_string();
    }
    if amount.is_infinite() {
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("{}Rp∞", sign);
    }

    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());
    format!("{}Rp{}", sign, group_thousands(&digits))
}

/// Format a rice weight in kilograms.
///
/// Whole numbers render without decimals, anything else with exactly one
/// decimal place. The `" kg"` suffix is appended unless `include_unit` is false.
pub fn format_rice_weight(kg: f64, include_unit: bool) -> String {
    // -0.0 renders as "0"
    let kg = if kg == 0.0 { 0.0 } else { kg };
    let value = if kg.fract() == 0.0 {
        format!("{}", kg)
    } else {
        format!("{:.1}", kg)
    };

    if include_unit {
        format!("{} kg", value)
    } else {
        value
    }
}

/// `format_rice_weight` with the unit suffix
pub fn format_rice_kg(kg: f64) -> String {
    format_rice_weight(kg, true)
}

// Indonesian grouping uses '.' between thousands
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}
