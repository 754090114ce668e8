//! Interactive session. Views live for the whole session, so histories and
//! the last result of every page survive between commands.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use super::ui;
use crate::core::services::{AssistantService, BudgetService, ExpenseService, MarketService};
use crate::core::session::Session;
use crate::views::assistant::ASK_LABELS;
use crate::views::budgets::{BUDGET_LABELS, BudgetForm};
use crate::views::exchange::CONVERT_LABELS;
use crate::views::expenses::EXPENSE_LABELS;
use crate::views::news::SEARCH_LABELS;
use crate::views::stock::LOOKUP_LABELS;
use crate::views::{BudgetManager, ExpenseLedger, ToolsDashboard};

const PROMPT: &str = "finboard> ";

const HELP: &str = "\
Commands:
  expenses                              list expenses and category totals
  add <AMOUNT> <CATEGORY> <DESCRIPTION> add an expense dated today
  delete-expense <ID>                   delete an expense
  budgets                               list budgets with progress
  budget <CATEGORY> <AMOUNT> [START END] set a budget (dates YYYY-MM-DD)
  delete-budget <ID>                    delete a budget
  stock <SYMBOL>                        look up a stock price
  convert <AMOUNT> <FROM> <TO>          convert between currencies
  news <QUERY>                          search financial news
  ask <QUESTION>                        ask the financial assistant
  tools                                 show every tool with its history
  help                                  show this message
  quit                                  leave the shell";

/// Result of one shell line.
#[derive(Debug, PartialEq)]
pub enum Reply {
    Output(String),
    Quit,
}

pub struct Shell<'a, E, B, A, M>
where
    E: ExpenseService + ?Sized,
    B: BudgetService + ?Sized,
    A: AssistantService + ?Sized,
    M: MarketService + ?Sized,
{
    session: &'a Session,
    ledger: ExpenseLedger<'a, E>,
    budgets: BudgetManager<'a, B>,
    tools: ToolsDashboard<'a, A, M>,
    today: NaiveDate,
}

impl<'a, E, B, A, M> Shell<'a, E, B, A, M>
where
    E: ExpenseService + ?Sized,
    B: BudgetService + ?Sized,
    A: AssistantService + ?Sized,
    M: MarketService + ?Sized,
{
    pub fn new(
        session: &'a Session,
        expenses: &'a E,
        budgets: &'a B,
        assistant: &'a A,
        market: &'a M,
        today: NaiveDate,
    ) -> Self {
        Shell {
            session,
            ledger: ExpenseLedger::new(session, expenses, today),
            budgets: BudgetManager::new(session, budgets, today),
            tools: ToolsDashboard::new(assistant, market),
            today,
        }
    }

    /// Reads commands until `quit` or end of input.
    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let user = self.session.user();
        writeln!(out, "{}", ui::style_text("finboard", ui::StyleType::Title))?;
        writeln!(out, "Signed in as {} <{}>", user.username, user.email)?;
        writeln!(out, "{}", ui::style_text("Type 'help' for commands.", ui::StyleType::Subtle))?;

        let mut lines = input.lines();
        loop {
            write!(out, "{PROMPT}")?;
            out.flush()?;
            let Some(line) = lines.next_line().await.context("Failed to read input")? else {
                break;
            };
            match self.execute(&line).await {
                Reply::Output(text) if text.is_empty() => {}
                Reply::Output(text) => writeln!(out, "{text}")?,
                Reply::Quit => break,
            }
        }
        Ok(())
    }

    pub async fn execute(&mut self, line: &str) -> Reply {
        let line = line.trim();
        let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        let args: Vec<&str> = rest.split_whitespace().collect();
        debug!(command, "Shell command");

        let output = match command {
            "" => String::new(),
            "quit" | "exit" => return Reply::Quit,
            "help" => HELP.to_string(),
            "expenses" => {
                ui::while_loading(ui::REFRESH_LABELS, self.ledger.load()).await;
                self.ledger.display()
            }
            "add" => match args.as_slice() {
                [amount, category, description @ ..] if !description.is_empty() => {
                    self.ledger.form.amount = amount.to_string();
                    self.ledger.form.category = category.to_string();
                    self.ledger.form.description = description.join(" ");
                    ui::while_loading(EXPENSE_LABELS, self.ledger.submit()).await;
                    self.ledger.display()
                }
                _ => usage("add <AMOUNT> <CATEGORY> <DESCRIPTION>"),
            },
            "delete-expense" => match parse_id(&args) {
                Some(id) => {
                    ui::while_loading(ui::DELETE_LABELS, self.ledger.delete(id)).await;
                    self.ledger.display()
                }
                None => usage("delete-expense <ID>"),
            },
            "budgets" => {
                ui::while_loading(ui::REFRESH_LABELS, self.budgets.load()).await;
                self.budgets.display()
            }
            "budget" => match args.as_slice() {
                [category, amount, dates @ ..] if dates.is_empty() || dates.len() == 2 => {
                    let mut form = BudgetForm::new(self.today);
                    form.category = category.to_string();
                    form.amount = amount.to_string();
                    if let [start, end] = dates {
                        form.start_date = start.to_string();
                        form.end_date = end.to_string();
                    }
                    self.budgets.form = form;
                    ui::while_loading(BUDGET_LABELS, self.budgets.submit()).await;
                    self.budgets.display()
                }
                _ => usage("budget <CATEGORY> <AMOUNT> [START END]"),
            },
            "delete-budget" => match parse_id(&args) {
                Some(id) => {
                    ui::while_loading(ui::DELETE_LABELS, self.budgets.delete(id)).await;
                    self.budgets.display()
                }
                None => usage("delete-budget <ID>"),
            },
            "stock" => {
                self.tools.stock.ticker = rest.to_string();
                ui::while_loading(LOOKUP_LABELS, self.tools.stock.submit()).await;
                self.tools.stock.display()
            }
            "convert" => match args.as_slice() {
                [amount, from, to] => {
                    self.tools.exchange.amount = amount.to_string();
                    self.tools.exchange.from = from.to_string();
                    self.tools.exchange.to = to.to_string();
                    ui::while_loading(CONVERT_LABELS, self.tools.exchange.submit()).await;
                    self.tools.exchange.display()
                }
                _ => usage("convert <AMOUNT> <FROM> <TO>"),
            },
            "news" => {
                self.tools.news.query = rest.to_string();
                ui::while_loading(SEARCH_LABELS, self.tools.news.submit()).await;
                self.tools.news.display()
            }
            "ask" => {
                self.tools.assistant.question = rest.to_string();
                ui::while_loading(ASK_LABELS, self.tools.assistant.submit()).await;
                self.tools.assistant.display()
            }
            "tools" => self.tools.display(),
            other => ui::style_text(
                &format!("Unknown command '{other}'. Type 'help' for commands."),
                ui::StyleType::Error,
            ),
        };
        Reply::Output(output)
    }
}

fn usage(text: &str) -> String {
    ui::style_text(&format!("Usage: {text}"), ui::StyleType::Error)
}

fn parse_id(args: &[&str]) -> Option<i64> {
    match args {
        [id] => id.parse().ok(),
        _ => None,
    }
}
