//! Nisab-based calculators for zakat mal (wealth) and zakat penghasilan (income).
//!
//! Both use the gold nisab of 85 grams and a flat 2.5% rate. Inputs are taken
//! as given: negative values are not rejected, so e.g. negative liabilities
//! raise net assets.
//!
//! Only the gold nisab is computed. Silver holdings count toward total assets
//! at the silver price, but there is no silver-based (595 g) threshold.

use shared::{IncomeInputs, IncomeResult, MalAssets, MalResult};

/// Grams of gold that make up the nisab
pub const NISAB_GOLD_GRAMS: f64 = 85.0;

/// Zakat rate applied to eligible wealth or income
pub const ZAKAT_RATE: f64 = 0.025;

const MONTHS_PER_YEAR: f64 = 12.0;

pub fn nisab_threshold(gold_price_per_gram: f64) -> f64 {
    NISAB_GOLD_GRAMS * gold_price_per_gram
}

/// Zakat on accumulated wealth
pub fn calculate_zakat_mal(assets: &MalAssets) -> MalResult {
    let total_assets = assets.gold * assets.gold_price_per_gram
        + assets.silver * assets.silver_price_per_gram
        + assets.cash
        + assets.trading_assets
        + assets.receivables;
    let net_assets = total_assets - assets.liabilities;
    let nisab = nisab_threshold(assets.gold_price_per_gram);
    let eligible_for_zakat = net_assets >= nisab;

    MalResult {
        total_assets,
        net_assets,
        nisab,
        eligible_for_zakat,
        zakat_amount: if eligible_for_zakat { net_assets * ZAKAT_RATE } else { 0.0 },
    }
}

/// Zakat on income, annualized from monthly figures
pub fn calculate_zakat_penghasilan(inputs: &IncomeInputs) -> IncomeResult {
    let monthly_net_income = inputs.monthly_income - inputs.monthly_expenses + inputs.other_income;
    let annual_net_income = monthly_net_income * MONTHS_PER_YEAR;
    let nisab = nisab_threshold(inputs.gold_price_per_gram);
    let eligible_for_zakat = annual_net_income >= nisab;

    IncomeResult {
        monthly_net_income,
        annual_net_income,
        nisab,
        eligible_for_zakat,
        zakat_amount: if eligible_for_zakat { annual_net_income * ZAKAT_RATE } else { 0.0 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOLD_PRICE: f64 = 1_200_000.0;
    const SILVER_PRICE: f64 = 15_000.0;

    fn cash_only(cash: f64) -> MalAssets {
        MalAssets {
            cash,
            gold_price_per_gram: GOLD_PRICE,
            silver_price_per_gram: SILVER_PRICE,
            ..MalAssets::default()
        }
    }

    #[test]
    fn test_mal_below_nisab() {
        let result = calculate_zakat_mal(&cash_only(100_000_000.0));
        assert_eq!(result.nisab, 102_000_000.0);
        assert_eq!(result.net_assets, 100_000_000.0);
        assert!(!result.eligible_for_zakat);
        assert_eq!(result.zakat_amount, 0.0);
    }

    #[test]
    fn test_mal_above_nisab() {
        let result = calculate_zakat_mal(&cash_only(110_000_000.0));
        assert!(result.eligible_for_zakat);
        assert!((result.zakat_amount - 2_750_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_mal_exactly_at_nisab_is_eligible() {
        let result = calculate_zakat_mal(&cash_only(102_000_000.0));
        assert!(result.eligible_for_zakat);
    }

    #[test]
    fn test_mal_values_metals_and_subtracts_liabilities() {
        let assets = MalAssets {
            gold: 50.0,
            silver: 200.0,
            cash: 40_000_000.0,
            trading_assets: 10_000_000.0,
            receivables: 5_000_000.0,
            liabilities: 3_000_000.0,
            gold_price_per_gram: GOLD_PRICE,
            silver_price_per_gram: SILVER_PRICE,
        };
        let result = calculate_zakat_mal(&assets);
        // 60 000 000 gold + 3 000 000 silver + 55 000 000 other
        assert_eq!(result.total_assets, 118_000_000.0);
        assert_eq!(result.net_assets, 115_000_000.0);
        assert!(result.eligible_for_zakat);
    }

    #[test]
    fn test_mal_negative_liabilities_are_accepted() {
        let mut assets = cash_only(100_000_000.0);
        assets.liabilities = -5_000_000.0;
        let result = calculate_zakat_mal(&assets);
        assert_eq!(result.net_assets, 105_000_000.0);
        assert!(result.eligible_for_zakat);
    }

    #[test]
    fn test_silver_does_not_lower_the_threshold() {
        let mut assets = cash_only(0.0);
        assets.silver = 600.0; // above a 595 g silver nisab, far below the gold one
        let result = calculate_zakat_mal(&assets);
        assert_eq!(result.total_assets, 9_000_000.0);
        assert!(!result.eligible_for_zakat);
    }

    #[test]
    fn test_income_annualizes_monthly_net() {
        let inputs = IncomeInputs {
            monthly_income: 8_000_000.0,
            monthly_expenses: 3_000_000.0,
            other_income: 500_000.0,
            gold_price_per_gram: 1_000_000.0,
        };
        let result = calculate_zakat_penghasilan(&inputs);
        assert_eq!(result.monthly_net_income, 5_500_000.0);
        assert_eq!(result.annual_net_income, 66_000_000.0);
        assert_eq!(result.nisab, 85_000_000.0);
        assert!(!result.eligible_for_zakat);
        assert_eq!(result.zakat_amount, 0.0);
    }

    #[test]
    fn test_income_above_nisab() {
        let inputs = IncomeInputs {
            monthly_income: 10_000_000.0,
            monthly_expenses: 2_000_000.0,
            other_income: 0.0,
            gold_price_per_gram: 1_000_000.0,
        };
        let result = calculate_zakat_penghasilan(&inputs);
        assert_eq!(result.annual_net_income, 96_000_000.0);
        assert!(result.eligible_for_zakat);
        assert!((result.zakat_amount - 2_400_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_income_exactly_at_nisab_is_eligible() {
        let inputs = IncomeInputs {
            monthly_income: 8_500_000.0,
            monthly_expenses: 0.0,
            other_income: 0.0,
            gold_price_per_gram: GOLD_PRICE,
        };
        let result = calculate_zakat_penghasilan(&inputs);
        assert_eq!(result.annual_net_income, 102_000_000.0);
        assert_eq!(result.nisab, 102_000_000.0);
        assert!(result.eligible_for_zakat);
        assert!((result.zakat_amount - 2_550_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_income_negative_net_is_not_eligible() {
        let inputs = IncomeInputs {
            monthly_income: 1_000_000.0,
            monthly_expenses: 2_000_000.0,
            other_income: 0.0,
            gold_price_per_gram: GOLD_PRICE,
        };
        let result = calculate_zakat_penghasilan(&inputs);
        assert_eq!(result.annual_net_income, -12_000_000.0);
        assert!(!result.eligible_for_zakat);
    }
}
