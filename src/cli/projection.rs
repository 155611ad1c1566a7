use super::ui;
use crate::core::allocation;
use crate::core::input::FinancialInput;
use crate::core::money;
use crate::core::projection::{self, Horizon, ProjectionSeries};
use anyhow::Result;
use console::style;
use tracing::info;

const BAR_WIDTH: usize = 40;

pub fn run(input: &FinancialInput, gold_price_per_gram: i64) -> Result<()> {
    info!("Projecting wealth growth...");

    if input.monthly_income <= 0 {
        println!(
            "\n{}",
            ui::style_text("No income data available.", ui::StyleType::Warning)
        );
        println!(
            "{}",
            ui::style_text(
                "Provide --income and --expenses (or save a profile with `arta setup`) to see \
                 wealth projections.",
                ui::StyleType::Subtle
            )
        );
        return Ok(());
    }

    let result = allocation::compute(input, gold_price_per_gram);
    let series = projection::project(&result, input);

    println!(
        "\n{}\n",
        ui::style_text("Wealth Growth Forecast", ui::StyleType::Title)
    );

    println!(
        "Annual savings potential: {}",
        ui::style_text(
            &money::format_rupiah(series.annual),
            ui::StyleType::TotalValue
        )
    );
    println!(
        "Projected gold (1 year):  {:.1} grams",
        series.annual_gold_grams
    );
    println!(
        "Financial runway:         {:.1} months per month saved\n",
        series.runway_months
    );

    for horizon in Horizon::ALL {
        println!("{}", horizon_bar(&series, horizon));
    }

    println!(
        "\n{} {}",
        style("Cash █").blue().bold(),
        style("Gold █").yellow().bold()
    );
    println!(
        "{}",
        ui::style_text(
            "*Linear projection without inflation adjustment",
            ui::StyleType::Subtle
        )
    );

    Ok(())
}

/// One chart row: label, stacked cash/gold bar, and the horizon total.
fn horizon_bar(series: &ProjectionSeries, horizon: Horizon) -> String {
    let height = series.chart_height_ratio(horizon) / 100.0;
    let bar_len = (height * BAR_WIDTH as f64).round() as usize;
    let gold_len = (bar_len as f64 * series.gold_fraction).round() as usize;
    let cash_len = bar_len.saturating_sub(gold_len);

    let cash_bar = style("█".repeat(cash_len)).blue();
    let gold_bar = style("█".repeat(gold_len)).yellow();
    let padding = " ".repeat(BAR_WIDTH - bar_len.min(BAR_WIDTH));

    format!(
        "{:>8}  {}{}{}  Rp {}",
        horizon.label(),
        cash_bar,
        gold_bar,
        padding,
        money::format_short(series.horizon_total(horizon))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DEFAULT_GOLD_PRICE_PER_GRAM;

    #[test]
    fn test_projection_command_renders() {
        let input = FinancialInput::new(5_000_000, 3_000_000, 0, 0.0, 40).unwrap();
        assert!(run(&input, DEFAULT_GOLD_PRICE_PER_GRAM).is_ok());
    }

    #[test]
    fn test_projection_command_handles_missing_income() {
        let input = FinancialInput::default();
        assert!(run(&input, DEFAULT_GOLD_PRICE_PER_GRAM).is_ok());
    }

    #[test]
    fn test_bar_scales_with_horizon() {
        let input = FinancialInput::new(2_000_000, 1_000_000, 0, 0.0, 40).unwrap();
        let result = allocation::compute(&input, DEFAULT_GOLD_PRICE_PER_GRAM);
        let series = projection::project(&result, &input);

        let one_year = horizon_bar(&series, Horizon::OneYear);
        let ten_years = horizon_bar(&series, Horizon::TenYears);
        let bars = |s: &str| s.chars().filter(|c| *c == '█').count();
        assert!(bars(&one_year) < bars(&ten_years));
        assert_eq!(bars(&ten_years), BAR_WIDTH);
    }

    #[test]
    fn test_bar_is_empty_without_surplus() {
        let input = FinancialInput::new(1_000_000, 1_000_000, 0, 0.0, 40).unwrap();
        let result = allocation::compute(&input, DEFAULT_GOLD_PRICE_PER_GRAM);
        let series = projection::project(&result, &input);

        let row = horizon_bar(&series, Horizon::TenYears);
        assert_eq!(row.chars().filter(|c| *c == '█').count(), 0);
    }
}
