use super::ui;
use crate::core::allocation::{self, HealthStatus, RiskProfile};
use crate::core::input::FinancialInput;
use crate::core::money;
use anyhow::Result;
use comfy_table::Cell;
use tracing::info;

pub fn run(input: &FinancialInput, gold_price_per_gram: i64) -> Result<()> {
    info!("Rendering allocation dashboard...");

    let result = allocation::compute(input, gold_price_per_gram);
    let breakdown = allocation::spending_breakdown(input);
    let health = HealthStatus::classify(result.is_deficit, result.savings_rate);
    let risk = RiskProfile::classify(result.savings_rate);

    println!(
        "\n{}\n",
        ui::style_text("Monthly Allocation", ui::StyleType::Title)
    );

    if result.is_deficit {
        println!(
            "{}",
            ui::style_text(
                &format!(
                    "Budget deficit: expenses exceed income by {}.",
                    money::format_rupiah(result.surplus.unsigned_abs() as i64)
                ),
                ui::StyleType::Error
            )
        );
        println!(
            "{}",
            ui::style_text(
                "Cut non-essential spending or find additional income before allocating.",
                ui::StyleType::Subtle
            )
        );
        print_verdict(health, risk, result.savings_rate);
        return Ok(());
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Component"),
        ui::header_cell("Amount"),
        ui::header_cell("Share of Income"),
    ]);
    table.add_row(vec![
        Cell::new("Living Cost"),
        ui::value_cell(&money::format_rupiah(input.monthly_expenses)),
        ui::percentage_cell(breakdown.expense_pct),
    ]);
    table.add_row(vec![
        Cell::new("Safety Cash"),
        ui::value_cell(&money::format_rupiah(result.cash_allocation)),
        ui::percentage_cell(breakdown.cash_pct),
    ]);
    table.add_row(vec![
        Cell::new("Gold Asset"),
        ui::value_cell(&money::format_rupiah(result.gold_allocation)),
        ui::percentage_cell(breakdown.gold_pct),
    ]);
    println!("{table}");

    println!(
        "\n{} {}",
        ui::style_text("Total surplus:", ui::StyleType::TotalLabel),
        ui::style_text(
            &money::format_rupiah(result.effective_surplus),
            ui::StyleType::TotalValue
        )
    );
    if result.gold_grams_acquired > 0.0 {
        println!(
            "{}",
            ui::style_text(
                &format!(
                    "Gold potential this month: {:.3} gram at {} per gram",
                    result.gold_grams_acquired,
                    money::format_rupiah(gold_price_per_gram)
                ),
                ui::StyleType::Subtle
            )
        );
    }

    print_verdict(health, risk, result.savings_rate);
    Ok(())
}

fn print_verdict(health: HealthStatus, risk: RiskProfile, savings_rate: f64) {
    let health_label = format!("{health}");
    let styled_health = match health {
        HealthStatus::Deficit => ui::style_text(&health_label, ui::StyleType::Error),
        HealthStatus::Thin => ui::style_text(&health_label, ui::StyleType::Warning),
        _ => ui::style_text(&health_label, ui::StyleType::TotalValue),
    };

    println!(
        "\nFinancial health: {styled_health} (savings rate {savings_rate:.0}%) · Risk profile: {risk}"
    );
}
