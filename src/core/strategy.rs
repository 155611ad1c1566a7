//! Coverage evaluation for the three savings strategies.
//!
//! Each plan is computed from the input snapshot directly, never from the
//! monthly allocation split, so the three evaluations are independent and
//! order-free.
use crate::core::input::FinancialInput;
use serde::Serialize;
use tracing::debug;

/// Six months of expenses held as liquid cash, the regulator's
/// emergency-fund standard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmergencyFundPlan {
    pub target: i64,
    /// `target - current_savings`; negative means savings already exceed
    /// the standard.
    pub gap: i64,
    pub is_surplus: bool,
    /// Capped at 100. A zero target counts as fully covered.
    pub progress_percent: f64,
}

impl EmergencyFundPlan {
    pub const DESCRIPTION: &'static str = "Build a secure emergency fund equivalent to 6 months \
        of your critical monthly expenses. This standard ensures financial stability against \
        major life disruptions.";
}

/// Three months of liquid cash plus gold holdings valued at the current
/// price, measured against the cash target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AssetGrowthPlan {
    pub target_cash: i64,
    /// Gold holdings valued in whole rupiah.
    pub gold_value: i64,
    pub total_asset: i64,
    /// `total_asset / target_cash` in percent; 0 when the target is 0.
    pub coverage_ratio_percent: f64,
}

impl AssetGrowthPlan {
    pub const DESCRIPTION: &'static str = "A balanced approach maintaining 3 months of liquid \
        cash while investing the surplus into Gold assets for long-term wealth preservation \
        and growth.";
}

/// One month of expenses reserved for survival; whatever cash remains is
/// free working capital.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorkingCapitalPlan {
    pub target_buffer: i64,
    /// May be negative when savings do not cover the buffer.
    pub working_capital: i64,
    /// Strictly positive capital only; exactly covering the buffer does
    /// not count.
    pub has_capital: bool,
}

impl WorkingCapitalPlan {
    pub const DESCRIPTION: &'static str = "Designed for freelancers and entrepreneurs. Secures \
        a 1-month survival buffer and designates the remaining cash as working capital for \
        business expansion.";
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrategyReport {
    pub emergency_fund: EmergencyFundPlan,
    pub asset_growth: AssetGrowthPlan,
    pub working_capital: WorkingCapitalPlan,
}

/// Evaluates all three plans against the input snapshot.
pub fn evaluate(input: &FinancialInput, gold_price_per_gram: i64) -> StrategyReport {
    let emergency_fund = evaluate_emergency_fund(input);
    let asset_growth = evaluate_asset_growth(input, gold_price_per_gram);
    let working_capital = evaluate_working_capital(input);

    debug!(
        emergency_gap = emergency_fund.gap,
        asset_coverage = asset_growth.coverage_ratio_percent,
        working_capital = working_capital.working_capital,
        "Evaluated strategy plans"
    );

    StrategyReport {
        emergency_fund,
        asset_growth,
        working_capital,
    }
}

fn evaluate_emergency_fund(input: &FinancialInput) -> EmergencyFundPlan {
    let target = input.monthly_expenses.saturating_mul(6);
    let gap = target.saturating_sub(input.current_savings);
    let is_surplus = gap <= 0;

    // Zero expenses mean a zero target, which is trivially covered; the
    // guard keeps the division defined.
    let progress_percent = if target > 0 {
        (input.current_savings as f64 / target as f64 * 100.0).min(100.0)
    } else {
        100.0
    };

    EmergencyFundPlan {
        target,
        gap,
        is_surplus,
        progress_percent,
    }
}

fn evaluate_asset_growth(input: &FinancialInput, gold_price_per_gram: i64) -> AssetGrowthPlan {
    let target_cash = input.monthly_expenses.saturating_mul(3);
    let gold_value = (input.gold_grams * gold_price_per_gram as f64).round() as i64;
    let total_asset = input.current_savings.saturating_add(gold_value);
    let coverage_ratio_percent = if target_cash > 0 {
        total_asset as f64 / target_cash as f64 * 100.0
    } else {
        0.0
    };

    AssetGrowthPlan {
        target_cash,
        gold_value,
        total_asset,
        coverage_ratio_percent,
    }
}

fn evaluate_working_capital(input: &FinancialInput) -> WorkingCapitalPlan {
    let target_buffer = input.monthly_expenses;
    let working_capital = input.current_savings - target_buffer;

    WorkingCapitalPlan {
        target_buffer,
        working_capital,
        has_capital: working_capital > 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOLD_PRICE: i64 = 1_350_000;

    fn input(expenses: i64, savings: i64, gold_grams: f64) -> FinancialInput {
        FinancialInput::new(0, expenses, savings, gold_grams, 40).unwrap()
    }

    #[test]
    fn test_emergency_fund_shortfall() {
        let report = evaluate(&input(2_000_000, 10_000_000, 0.0), GOLD_PRICE);
        let plan = report.emergency_fund;
        assert_eq!(plan.target, 12_000_000);
        assert_eq!(plan.gap, 2_000_000);
        assert!(!plan.is_surplus);
        assert!((plan.progress_percent - 83.333).abs() < 0.01);
    }

    #[test]
    fn test_emergency_fund_surplus() {
        let plan = evaluate(&input(1_000_000, 9_000_000, 0.0), GOLD_PRICE).emergency_fund;
        assert_eq!(plan.gap, -3_000_000);
        assert!(plan.is_surplus);
        assert_eq!(plan.progress_percent, 100.0);
    }

    #[test]
    fn test_emergency_fund_zero_target_counts_as_covered() {
        let plan = evaluate(&input(0, 0, 0.0), GOLD_PRICE).emergency_fund;
        assert_eq!(plan.target, 0);
        assert!(plan.is_surplus);
        assert_eq!(plan.progress_percent, 100.0);
        assert!(plan.progress_percent.is_finite());
    }

    #[test]
    fn test_asset_growth_coverage() {
        let plan = evaluate(&input(3_000_000, 5_000_000, 2.0), GOLD_PRICE).asset_growth;
        assert_eq!(plan.target_cash, 9_000_000);
        assert_eq!(plan.gold_value, 2_700_000);
        assert_eq!(plan.total_asset, 7_700_000);
        assert!((plan.coverage_ratio_percent - 85.555).abs() < 0.01);
    }

    #[test]
    fn test_asset_growth_zero_target_has_zero_coverage() {
        let plan = evaluate(&input(0, 5_000_000, 1.0), GOLD_PRICE).asset_growth;
        assert_eq!(plan.coverage_ratio_percent, 0.0);
    }

    #[test]
    fn test_working_capital_shortfall() {
        let plan = evaluate(&input(2_000_000, 1_500_000, 0.0), GOLD_PRICE).working_capital;
        assert_eq!(plan.target_buffer, 2_000_000);
        assert_eq!(plan.working_capital, -500_000);
        assert!(!plan.has_capital);
    }

    #[test]
    fn test_working_capital_boundary_is_exclusive() {
        // Savings exactly equal to the buffer leave nothing to invest.
        let plan = evaluate(&input(2_000_000, 2_000_000, 0.0), GOLD_PRICE).working_capital;
        assert_eq!(plan.working_capital, 0);
        assert!(!plan.has_capital);

        let plan = evaluate(&input(2_000_000, 2_000_001, 0.0), GOLD_PRICE).working_capital;
        assert!(plan.has_capital);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let snapshot = input(2_500_000, 8_000_000, 1.5);
        assert_eq!(
            evaluate(&snapshot, GOLD_PRICE),
            evaluate(&snapshot, GOLD_PRICE)
        );
    }
}
