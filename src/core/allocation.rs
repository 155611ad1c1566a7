//! Splits a monthly surplus between cash savings and gold.
use crate::core::input::FinancialInput;
use serde::Serialize;
use std::fmt::Display;
use tracing::debug;

/// The allocation of one month's surplus, derived entirely from a
/// [`FinancialInput`] and the gold price.
///
/// `cash_allocation + gold_allocation == effective_surplus` holds exactly:
/// the gold share is floored by integer division and cash absorbs the
/// rounding residue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AllocationResult {
    /// Income minus expenses; negative when the month runs a deficit.
    pub surplus: i64,
    pub is_deficit: bool,
    /// The floor used for all downstream allocation math, `max(0, surplus)`.
    pub effective_surplus: i64,
    pub cash_allocation: i64,
    pub gold_allocation: i64,
    /// Grams of gold the gold allocation buys this month. Fractional
    /// grams are valid.
    pub gold_grams_acquired: f64,
    /// Share of income kept as surplus, in percent. Defined as 0 when
    /// income is 0.
    pub savings_rate: f64,
}

/// Computes the cash/gold split for one month.
///
/// Total over all inputs: zero income, zero expenses, and deficits all
/// resolve to defined values and no NaN or infinity ever reaches a caller.
pub fn compute(input: &FinancialInput, gold_price_per_gram: i64) -> AllocationResult {
    let surplus = input.monthly_income - input.monthly_expenses;
    let is_deficit = surplus < 0;
    let effective_surplus = surplus.max(0);

    // Integer division floors the gold share so rounding can never push
    // the split past the available surplus. The i128 intermediate keeps
    // the multiply defined for extreme inputs.
    let gold_allocation =
        (i128::from(effective_surplus) * i128::from(input.allocation_ratio) / 100) as i64;
    let cash_allocation = effective_surplus - gold_allocation;

    let gold_grams_acquired = if gold_price_per_gram > 0 {
        gold_allocation as f64 / gold_price_per_gram as f64
    } else {
        0.0
    };

    let savings_rate = if input.monthly_income > 0 {
        effective_surplus as f64 / input.monthly_income as f64 * 100.0
    } else {
        0.0
    };

    debug!(
        surplus,
        gold_allocation, cash_allocation, savings_rate, "Computed monthly allocation"
    );

    AllocationResult {
        surplus,
        is_deficit,
        effective_surplus,
        cash_allocation,
        gold_allocation,
        gold_grams_acquired,
        savings_rate,
    }
}

/// Overall verdict on a month's finances, classified from the deficit
/// flag and the savings rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HealthStatus {
    Deficit,
    Thin,
    Adequate,
    Strong,
}

impl HealthStatus {
    /// Deficit wins outright; otherwise the savings rate buckets are
    /// below 10, below 30, and everything above.
    pub fn classify(is_deficit: bool, savings_rate: f64) -> Self {
        if is_deficit {
            HealthStatus::Deficit
        } else if savings_rate < 10.0 {
            HealthStatus::Thin
        } else if savings_rate < 30.0 {
            HealthStatus::Adequate
        } else {
            HealthStatus::Strong
        }
    }

    pub fn is_deficit(&self) -> bool {
        matches!(self, HealthStatus::Deficit)
    }
}

impl Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                HealthStatus::Deficit => "Deficit",
                HealthStatus::Thin => "Thin",
                HealthStatus::Adequate => "Adequate",
                HealthStatus::Strong => "Strong",
            }
        )
    }
}

/// Savings-rate based risk posture shown on the analytics view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskProfile {
    Aggressive,
    Moderate,
    Risky,
}

impl RiskProfile {
    pub fn classify(savings_rate: f64) -> Self {
        if savings_rate > 50.0 {
            RiskProfile::Aggressive
        } else if savings_rate > 20.0 {
            RiskProfile::Moderate
        } else {
            RiskProfile::Risky
        }
    }
}

impl Display for RiskProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                RiskProfile::Aggressive => "Aggressive",
                RiskProfile::Moderate => "Moderate",
                RiskProfile::Risky => "Risky",
            }
        )
    }
}

/// How the month's income divides into living cost, safety cash, and gold,
/// in percent of income. Feeds the dashboard's composition chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpendingBreakdown {
    pub expense_pct: f64,
    pub cash_pct: f64,
    pub gold_pct: f64,
}

/// Derives the income composition percentages.
///
/// With no income everything is 0; a deficit month shows expenses as the
/// full 100% since nothing is left to allocate.
pub fn spending_breakdown(input: &FinancialInput) -> SpendingBreakdown {
    if input.monthly_income <= 0 {
        return SpendingBreakdown {
            expense_pct: 0.0,
            cash_pct: 0.0,
            gold_pct: 0.0,
        };
    }

    if input.monthly_expenses > input.monthly_income {
        return SpendingBreakdown {
            expense_pct: 100.0,
            cash_pct: 0.0,
            gold_pct: 0.0,
        };
    }

    let expense_pct = input.monthly_expenses as f64 / input.monthly_income as f64 * 100.0;
    let surplus_pct = 100.0 - expense_pct;
    let gold_pct = surplus_pct * f64::from(input.allocation_ratio) / 100.0;
    let cash_pct = surplus_pct - gold_pct;

    SpendingBreakdown {
        expense_pct,
        cash_pct,
        gold_pct,
    }
}
