use super::ui;
use crate::core::input::FinancialInput;
use crate::core::money;
use crate::core::strategy::{
    self, AssetGrowthPlan, EmergencyFundPlan, WorkingCapitalPlan,
};
use anyhow::Result;
use comfy_table::Cell;
use tracing::info;

pub fn run(input: &FinancialInput, gold_price_per_gram: i64) -> Result<()> {
    info!("Evaluating savings strategies...");

    let report = strategy::evaluate(input, gold_price_per_gram);

    let overall = if report.emergency_fund.is_surplus {
        ui::style_text("Excellent", ui::StyleType::TotalValue)
    } else {
        ui::style_text("Building", ui::StyleType::Warning)
    };
    println!("\nFinancial health: {overall}");

    display_emergency_fund(&report.emergency_fund, input.current_savings);
    ui::print_separator();
    display_asset_growth(&report.asset_growth, input, gold_price_per_gram);
    ui::print_separator();
    display_working_capital(&report.working_capital);

    Ok(())
}

fn display_emergency_fund(plan: &EmergencyFundPlan, current_savings: i64) {
    println!(
        "\n{}",
        ui::style_text("Core Safety: Emergency Standard", ui::StyleType::Title)
    );
    println!(
        "{}\n",
        ui::style_text(EmergencyFundPlan::DESCRIPTION, ui::StyleType::Subtle)
    );

    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Current Cash"), ui::header_cell("Target (6 Months)")]);
    table.add_row(vec![
        ui::value_cell(&money::format_rupiah(current_savings)),
        ui::value_cell(&money::format_rupiah(plan.target)),
    ]);
    println!("{table}");

    let verdict = if plan.is_surplus {
        ui::style_text(
            &format!(
                "Fully secure: {} above the emergency standard.",
                money::format_rupiah(plan.gap.unsigned_abs() as i64)
            ),
            ui::StyleType::TotalValue,
        )
    } else {
        ui::style_text(
            &format!(
                "Action required: {} short of the safety net.",
                money::format_rupiah(plan.gap)
            ),
            ui::StyleType::Warning,
        )
    };
    println!("\n{verdict}");
    println!(
        "Coverage {} {:.1}%",
        ui::meter(plan.progress_percent, 30),
        plan.progress_percent
    );
}

fn display_asset_growth(plan: &AssetGrowthPlan, input: &FinancialInput, gold_price_per_gram: i64) {
    println!(
        "\n{}",
        ui::style_text("Asset Growth: Portfolio Builder", ui::StyleType::Title)
    );
    println!(
        "{}\n",
        ui::style_text(AssetGrowthPlan::DESCRIPTION, ui::StyleType::Subtle)
    );

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Liquid Cash Target (3 Mo)"),
        ui::header_cell("Gold Asset Value"),
        ui::header_cell("Total Net Worth"),
    ]);
    table.add_row(vec![
        ui::value_cell(&money::format_rupiah(plan.target_cash)),
        ui::value_cell(&money::format_rupiah(plan.gold_value)),
        Cell::new(money::format_rupiah(plan.total_asset)),
    ]);
    println!("{table}");

    println!(
        "{}",
        ui::style_text(
            &format!(
                "{}g held at {} per gram",
                input.gold_grams,
                money::format_rupiah(gold_price_per_gram)
            ),
            ui::StyleType::Subtle
        )
    );
    println!(
        "\nCombined assets cover {:.0}% of the 3-month cash target.",
        plan.coverage_ratio_percent
    );
}

fn display_working_capital(plan: &WorkingCapitalPlan) {
    println!(
        "\n{}",
        ui::style_text("Working Capital: Capital Allocation", ui::StyleType::Title)
    );
    println!(
        "{}\n",
        ui::style_text(WorkingCapitalPlan::DESCRIPTION, ui::StyleType::Subtle)
    );

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Survival Buffer (1 Mo)"),
        ui::header_cell("Available Capital"),
    ]);
    let capital_display = if plan.has_capital {
        money::format_rupiah(plan.working_capital)
    } else {
        money::format_rupiah(0)
    };
    table.add_row(vec![
        ui::value_cell(&money::format_rupiah(plan.target_buffer)),
        ui::status_cell(plan.has_capital, &capital_display),
    ]);
    println!("{table}");

    if plan.has_capital {
        println!(
            "\nFree capital can go to inventory, tools, or ads without touching the survival buffer."
        );
    } else {
        println!(
            "\n{}",
            ui::style_text(
                "All current cash is reserved for the survival buffer; no safe business capital yet.",
                ui::StyleType::Warning
            )
        );
    }
}
