//! Linear wealth projection over fixed horizons.
//!
//! Horizons are plain multiples of the monthly surplus. There is no
//! compounding and no inflation adjustment; the presentation layer
//! carries the matching disclaimer.
use crate::core::allocation::AllocationResult;
use crate::core::input::FinancialInput;
use serde::Serialize;
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize)]
pub enum Horizon {
    OneYear,
    FiveYears,
    TenYears,
}

impl Horizon {
    pub const ALL: [Horizon; 3] = [Horizon::OneYear, Horizon::FiveYears, Horizon::TenYears];

    pub fn months(&self) -> i64 {
        match self {
            Horizon::OneYear => 12,
            Horizon::FiveYears => 60,
            Horizon::TenYears => 120,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Horizon::OneYear => "1 Year",
            Horizon::FiveYears => "5 Years",
            Horizon::TenYears => "10 Years",
        }
    }
}

impl Display for Horizon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Horizon::OneYear => "1Y",
                Horizon::FiveYears => "5Y",
                Horizon::TenYears => "10Y",
            }
        )
    }
}

impl FromStr for Horizon {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "1Y" => Ok(Horizon::OneYear),
            "5Y" => Ok(Horizon::FiveYears),
            "10Y" => Ok(Horizon::TenYears),
            _ => Err(anyhow::anyhow!("Invalid projection horizon: {}", s)),
        }
    }
}

/// Linear extrapolation of one month's allocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectionSeries {
    pub annual: i64,
    pub five_year: i64,
    pub ten_year: i64,
    pub annual_gold_grams: f64,
    /// Months the monthly cash allocation would cover current expenses;
    /// 0 when there are no expenses.
    pub runway_months: f64,
    /// Cash share of every horizon total, `1 - ratio/100`.
    pub cash_fraction: f64,
    /// Gold share of every horizon total, `ratio/100`.
    pub gold_fraction: f64,
}

impl ProjectionSeries {
    pub fn horizon_total(&self, horizon: Horizon) -> i64 {
        match horizon {
            Horizon::OneYear => self.annual,
            Horizon::FiveYears => self.five_year,
            Horizon::TenYears => self.ten_year,
        }
    }

    pub fn cash_portion(&self, horizon: Horizon) -> f64 {
        self.horizon_total(horizon) as f64 * self.cash_fraction
    }

    pub fn gold_portion(&self, horizon: Horizon) -> f64 {
        self.horizon_total(horizon) as f64 * self.gold_fraction
    }

    /// Bar height for a horizon, normalized so the ten-year bar is 100%.
    ///
    /// A zero ten-year total substitutes 1 as the denominator, rendering
    /// 0% bars instead of dividing by zero. Rendering normalization only,
    /// not a financial quantity.
    pub fn chart_height_ratio(&self, horizon: Horizon) -> f64 {
        let max = if self.ten_year == 0 { 1 } else { self.ten_year };
        self.horizon_total(horizon) as f64 / max as f64 * 100.0
    }
}

/// Extrapolates the monthly allocation across all horizons.
pub fn project(allocation: &AllocationResult, input: &FinancialInput) -> ProjectionSeries {
    let annual = allocation.effective_surplus.saturating_mul(12);
    let gold_fraction = f64::from(input.allocation_ratio) / 100.0;

    let runway_months = if input.monthly_expenses > 0 {
        allocation.cash_allocation as f64 / input.monthly_expenses as f64
    } else {
        0.0
    };

    ProjectionSeries {
        annual,
        five_year: annual.saturating_mul(5),
        ten_year: annual.saturating_mul(10),
        annual_gold_grams: allocation.gold_grams_acquired * 12.0,
        runway_months,
        cash_fraction: 1.0 - gold_fraction,
        gold_fraction,
    }
}
