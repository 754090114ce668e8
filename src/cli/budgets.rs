use anyhow::Result;
use chrono::NaiveDate;
use comfy_table::Cell;

use super::{ensure_settled, ui};
use crate::core::models::BudgetStatus;
use crate::core::services::BudgetService;
use crate::core::session::Session;
use crate::views::budgets::{BUDGET_LABELS, BudgetForm, BudgetManager, BudgetTotals};

pub fn budgets_table(budgets: &[BudgetStatus]) -> String {
    if budgets.is_empty() {
        return ui::style_text("No budgets set yet.", ui::StyleType::Subtle);
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("ID"),
        ui::header_cell("Category"),
        ui::header_cell("Period"),
        ui::header_cell("Budgeted"),
        ui::header_cell("Spent"),
        ui::header_cell("Remaining"),
        ui::header_cell("Progress"),
    ]);
    for budget in budgets {
        let id = budget
            .budget_id
            .map_or_else(|| "-".to_string(), |id| id.to_string());
        table.add_row(vec![
            Cell::new(id),
            Cell::new(&budget.category),
            Cell::new(format!(
                "{} → {}",
                budget.start_date.format("%Y-%m-%d"),
                budget.end_date.format("%Y-%m-%d")
            )),
            ui::money_cell(budget.budgeted_amount),
            ui::money_cell(budget.actual_spent),
            ui::remaining_cell(budget.remaining_amount),
            ui::progress_cell(budget.progress()),
        ]);
    }
    table.to_string()
}

impl BudgetTotals {
    pub fn display(&self) -> String {
        let line = |label: &str, value: f64, style_type| {
            format!(
                "{}: {}",
                ui::style_text(label, ui::StyleType::TotalLabel),
                ui::style_text(&format!("{value:.2}"), style_type)
            )
        };
        let remaining_style = if self.remaining < 0.0 {
            ui::StyleType::Error
        } else {
            ui::StyleType::TotalValue
        };
        [
            line("Total Budgeted", self.budgeted, ui::StyleType::TotalValue),
            line("Total Spent", self.spent, ui::StyleType::TotalValue),
            line("Remaining", self.remaining, remaining_style),
        ]
        .join("\n")
    }
}

impl<S: BudgetService + ?Sized> BudgetManager<'_, S> {
    pub fn display(&self) -> String {
        let mut output = format!("{}\n\n", ui::style_text("Budgets", ui::StyleType::Title));
        if let Some(banner) = ui::error_banner(self.state()) {
            output.push_str(&banner);
            output.push_str("\n\n");
        }
        output.push_str(&budgets_table(self.budgets()));
        output.push_str("\n\n");
        output.push_str(&self.totals().display());
        output
    }
}

pub async fn list<S: BudgetService + ?Sized>(
    session: &Session,
    service: &S,
    today: NaiveDate,
) -> Result<()> {
    let mut manager = BudgetManager::new(session, service, today);
    ui::while_loading(ui::REFRESH_LABELS, manager.load()).await;
    ensure_settled(manager.state())?;
    println!("{}", manager.display());
    Ok(())
}

pub async fn set<S: BudgetService + ?Sized>(
    session: &Session,
    service: &S,
    today: NaiveDate,
    form: BudgetForm,
) -> Result<()> {
    let mut manager = BudgetManager::new(session, service, today);
    manager.form = form;
    ui::while_loading(BUDGET_LABELS, manager.submit()).await;
    ensure_settled(manager.state())?;
    println!("{}", manager.display());
    Ok(())
}

pub async fn delete<S: BudgetService + ?Sized>(
    session: &Session,
    service: &S,
    today: NaiveDate,
    budget_id: i64,
) -> Result<()> {
    let mut manager = BudgetManager::new(session, service, today);
    ui::while_loading(ui::DELETE_LABELS, manager.delete(budget_id)).await;
    ensure_settled(manager.state())?;
    println!("{}", manager.display());
    Ok(())
}
