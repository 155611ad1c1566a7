//! Validated input snapshot for a planning run

use anyhow::{Result, bail};

/// Default share of the monthly surplus directed to gold, in percent.
pub const DEFAULT_ALLOCATION_RATIO: u8 = 40;

/// A single month's financial picture, as entered by the user.
///
/// Amounts are whole rupiah. The snapshot is immutable; every derived
/// value is recomputed from it in full, so there is no state to keep in
/// sync between the calculation modules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinancialInput {
    pub monthly_income: i64,
    pub monthly_expenses: i64,
    pub current_savings: i64,
    pub gold_grams: f64,
    /// Percent of the monthly surplus directed to gold; the remainder
    /// goes to cash. Always within [0, 100].
    pub allocation_ratio: u8,
}

impl FinancialInput {
    /// Builds a validated snapshot.
    ///
    /// Negative amounts are a contract violation and rejected. The
    /// allocation ratio is clamped to [0, 100] so the calculation layer
    /// can rely on it even for callers that skip the CLI's range check.
    pub fn new(
        monthly_income: i64,
        monthly_expenses: i64,
        current_savings: i64,
        gold_grams: f64,
        allocation_ratio: u8,
    ) -> Result<Self> {
        if monthly_income < 0 {
            bail!("Monthly income must not be negative, got {monthly_income}");
        }
        if monthly_expenses < 0 {
            bail!("Monthly expenses must not be negative, got {monthly_expenses}");
        }
        if current_savings < 0 {
            bail!("Current savings must not be negative, got {current_savings}");
        }
        if !gold_grams.is_finite() || gold_grams < 0.0 {
            bail!("Gold holdings must be a non-negative number of grams, got {gold_grams}");
        }

        Ok(FinancialInput {
            monthly_income,
            monthly_expenses,
            current_savings,
            gold_grams,
            allocation_ratio: allocation_ratio.min(100),
        })
    }
}

impl Default for FinancialInput {
    fn default() -> Self {
        FinancialInput {
            monthly_income: 0,
            monthly_expenses: 0,
            current_savings: 0,
            gold_grams: 0.0,
            allocation_ratio: DEFAULT_ALLOCATION_RATIO,
        }
    }
}
