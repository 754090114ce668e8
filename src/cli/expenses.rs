use anyhow::Result;
use chrono::NaiveDate;
use comfy_table::Cell;

use super::{ensure_settled, ui};
use crate::core::models::{CategoryTotal, Expense};
use crate::core::services::ExpenseService;
use crate::core::session::Session;
use crate::views::expenses::{EXPENSE_LABELS, ExpenseForm, ExpenseLedger};

pub fn expenses_table(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return ui::style_text("No expenses recorded yet.", ui::StyleType::Subtle);
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("ID"),
        ui::header_cell("Date"),
        ui::header_cell("Category"),
        ui::header_cell("Description"),
        ui::header_cell("Amount"),
    ]);
    for expense in expenses {
        table.add_row(vec![
            Cell::new(expense.expense_id),
            Cell::new(expense.expense_date.format("%Y-%m-%d")),
            Cell::new(&expense.category),
            Cell::new(&expense.description),
            ui::money_cell(expense.amount),
        ]);
    }
    table.to_string()
}

pub fn category_totals_table(totals: &[CategoryTotal]) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Category"), ui::header_cell("Total")]);
    for total in totals {
        table.add_row(vec![Cell::new(&total.category), ui::money_cell(total.total)]);
    }
    table.to_string()
}

impl<S: ExpenseService + ?Sized> ExpenseLedger<'_, S> {
    pub fn display(&self) -> String {
        let mut output = format!(
            "{}\n\n",
            ui::style_text("Expenses", ui::StyleType::Title)
        );
        if let Some(banner) = ui::error_banner(self.state()) {
            output.push_str(&banner);
            output.push_str("\n\n");
        }
        output.push_str(&expenses_table(self.expenses()));

        if !self.category_totals().is_empty() {
            output.push_str(&format!(
                "\n\n{}\n{}",
                ui::style_text("By Category", ui::StyleType::TotalLabel),
                category_totals_table(self.category_totals())
            ));
        }

        let spent: f64 = self.expenses().iter().map(|e| e.amount).sum();
        output.push_str(&format!(
            "\n\n{}: {}",
            ui::style_text("Total Spent", ui::StyleType::TotalLabel),
            ui::style_text(&format!("{spent:.2}"), ui::StyleType::TotalValue)
        ));
        output
    }
}

pub async fn list<S: ExpenseService + ?Sized>(
    session: &Session,
    service: &S,
    today: NaiveDate,
) -> Result<()> {
    let mut ledger = ExpenseLedger::new(session, service, today);
    ui::while_loading(ui::REFRESH_LABELS, ledger.load()).await;
    ensure_settled(ledger.state())?;
    println!("{}", ledger.display());
    Ok(())
}

pub async fn add<S: ExpenseService + ?Sized>(
    session: &Session,
    service: &S,
    today: NaiveDate,
    form: ExpenseForm,
) -> Result<()> {
    let mut ledger = ExpenseLedger::new(session, service, today);
    ledger.form = form;
    ui::while_loading(EXPENSE_LABELS, ledger.submit()).await;
    ensure_settled(ledger.state())?;
    println!("{}", ledger.display());
    Ok(())
}

pub async fn delete<S: ExpenseService + ?Sized>(
    session: &Session,
    service: &S,
    today: NaiveDate,
    expense_id: i64,
) -> Result<()> {
    let mut ledger = ExpenseLedger::new(session, service, today);
    ui::while_loading(ui::DELETE_LABELS, ledger.delete(expense_id)).await;
    ensure_settled(ledger.state())?;
    println!("{}", ledger.display());
    Ok(())
}
