pub mod api;
pub mod cli;
pub mod core;
pub mod views;

pub use crate::views::tools::{ExchangeInput, ToolsInput};
pub use crate::core::config;

use anyhow::Result;
use chrono::Local;
use tokio::io::BufReader;
use tracing::{debug, info};

use crate::api::Backend;
use crate::cli::shell::Shell;
use crate::core::session::Session;
use crate::views::budgets::BudgetForm;
use crate::views::expenses::ExpenseForm;

#[derive(Debug, Clone)]
pub enum ExpenseAction {
    List,
    Add {
        amount: String,
        category: String,
        description: String,
        date: Option<String>,
    },
    Delete {
        id: i64,
    },
}

#[derive(Debug, Clone)]
pub enum BudgetAction {
    List,
    Set {
        category: String,
        amount: String,
        start: Option<String>,
        end: Option<String>,
    },
    Delete {
        id: i64,
    },
}

#[derive(Debug, Clone)]
pub enum UserAction {
    Create { username: String, email: String },
}

#[derive(Debug, Clone)]
pub enum AppCommand {
    Expenses(ExpenseAction),
    Budgets(BudgetAction),
    Stock { symbols: Vec<String> },
    Exchange { amount: String, from: String, to: String },
    News { query: String },
    Ask { question: String },
    Tools(ToolsInput),
    Users(UserAction),
    Shell,
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("finboard starting...");

    let config = match config_path {
        Some(path) => config::AppConfig::load_from_path(path)?,
        None => config::AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let session = Session::from(&config.session);
    let backend = Backend::new(&config.api.base_url)?;
    let today = Local::now().date_naive();

    match command {
        AppCommand::Expenses(action) => match action {
            ExpenseAction::List => cli::expenses::list(&session, &backend.expenses, today).await,
            ExpenseAction::Add {
                amount,
                category,
                description,
                date,
            } => {
                let mut form = ExpenseForm::new(today);
                form.amount = amount;
                form.category = category;
                form.description = description;
                if let Some(date) = date {
                    form.expense_date = date;
                }
                cli::expenses::add(&session, &backend.expenses, today, form).await
            }
            ExpenseAction::Delete { id } => {
                cli::expenses::delete(&session, &backend.expenses, today, id).await
            }
        },
        AppCommand::Budgets(action) => match action {
            BudgetAction::List => cli::budgets::list(&session, &backend.budgets, today).await,
            BudgetAction::Set {
                category,
                amount,
                start,
                end,
            } => {
                let mut form = BudgetForm::new(today);
                form.category = category;
                form.amount = amount;
                if let Some(start) = start {
                    form.start_date = start;
                }
                if let Some(end) = end {
                    form.end_date = end;
                }
                cli::budgets::set(&session, &backend.budgets, today, form).await
            }
            BudgetAction::Delete { id } => {
                cli::budgets::delete(&session, &backend.budgets, today, id).await
            }
        },
        AppCommand::Stock { symbols } => cli::market::stock(&backend.market, &symbols).await,
        AppCommand::Exchange { amount, from, to } => {
            cli::market::exchange(&backend.market, &amount, &from, &to).await
        }
        AppCommand::News { query } => cli::market::news(&backend.market, &query).await,
        AppCommand::Ask { question } => cli::assistant::ask(&backend.assistant, &question).await,
        AppCommand::Tools(input) => {
            cli::tools::tools(&backend.assistant, &backend.market, input).await
        }
        AppCommand::Users(UserAction::Create { username, email }) => {
            cli::users::create(&backend.users, &username, &email).await?;
            Ok(())
        }
        AppCommand::Shell => {
            let mut shell = Shell::new(
                &session,
                &backend.expenses,
                &backend.budgets,
                &backend.assistant,
                &backend.market,
                today,
            );
            shell
                .run(BufReader::new(tokio::io::stdin()), &mut std::io::stdout())
                .await
        }
    }
}
