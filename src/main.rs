use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use finboard::core::log::init_logging;
use finboard::{AppCommand, BudgetAction, ExchangeInput, ExpenseAction, ToolsInput, UserAction};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Record and review expenses
    Expenses {
        #[command(subcommand)]
        action: ExpenseCommands,
    },
    /// Manage budgets and track spend against them
    Budgets {
        #[command(subcommand)]
        action: BudgetCommands,
    },
    /// Look up current stock prices
    Stock {
        #[arg(required = true)]
        symbols: Vec<String>,
    },
    /// Convert an amount between currencies
    Exchange {
        #[arg(allow_hyphen_values = true)]
        amount: String,
        from: String,
        to: String,
    },
    /// Search financial news
    News {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Ask the financial assistant
    Ask {
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
    /// Run several financial tools at once
    Tools {
        /// Question for the assistant
        #[arg(long)]
        question: Option<String>,
        /// Stock symbol to look up
        #[arg(long)]
        symbol: Option<String>,
        /// News search query
        #[arg(long)]
        query: Option<String>,
        /// Amount to convert, defaults to 1 when --from or --to is given
        #[arg(long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// Source currency, defaults to USD
        #[arg(long)]
        from: Option<String>,
        /// Target currency, defaults to EUR
        #[arg(long)]
        to: Option<String>,
    },
    /// Manage backend users
    Users {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Start an interactive session
    Shell,
}

#[derive(Subcommand)]
enum ExpenseCommands {
    /// List expenses with category totals
    List,
    /// Add an expense
    Add {
        #[arg(allow_hyphen_values = true)]
        amount: String,
        category: String,
        description: String,
        /// Expense date as YYYY-MM-DD, defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Delete an expense by id
    Delete { id: i64 },
}

#[derive(Subcommand)]
enum BudgetCommands {
    /// List budgets with spend and progress
    List,
    /// Set a budget for a category
    Set {
        category: String,
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Start date as YYYY-MM-DD, defaults to today
        #[arg(long)]
        start: Option<String>,
        /// End date as YYYY-MM-DD, defaults to one month after today
        #[arg(long)]
        end: Option<String>,
    },
    /// Delete a budget by id
    Delete { id: i64 },
}

#[derive(Subcommand)]
enum UserCommands {
    /// Create a user
    Create { username: String, email: String },
}

impl From<Commands> for AppCommand {
    fn from(cmd: Commands) -> AppCommand {
        match cmd {
            Commands::Expenses { action } => AppCommand::Expenses(match action {
                ExpenseCommands::List => ExpenseAction::List,
                ExpenseCommands::Add {
                    amount,
                    category,
                    description,
                    date,
                } => ExpenseAction::Add {
                    amount,
                    category,
                    description,
                    date,
                },
                ExpenseCommands::Delete { id } => ExpenseAction::Delete { id },
            }),
            Commands::Budgets { action } => AppCommand::Budgets(match action {
                BudgetCommands::List => BudgetAction::List,
                BudgetCommands::Set {
                    category,
                    amount,
                    start,
                    end,
                } => BudgetAction::Set {
                    category,
                    amount,
                    start,
                    end,
                },
                BudgetCommands::Delete { id } => BudgetAction::Delete { id },
            }),
            Commands::Stock { symbols } => AppCommand::Stock { symbols },
            Commands::Exchange { amount, from, to } => AppCommand::Exchange { amount, from, to },
            Commands::News { query } => AppCommand::News {
                query: query.join(" "),
            },
            Commands::Ask { question } => AppCommand::Ask {
                question: question.join(" "),
            },
            Commands::Tools {
                question,
                symbol,
                query,
                amount,
                from,
                to,
            } => {
                let exchange = (amount.is_some() || from.is_some() || to.is_some()).then(|| {
                    ExchangeInput {
                        amount: amount.unwrap_or_else(|| "1".to_string()),
                        from: from.unwrap_or_else(|| "USD".to_string()),
                        to: to.unwrap_or_else(|| "EUR".to_string()),
                    }
                });
                AppCommand::Tools(ToolsInput {
                    question,
                    symbol,
                    query,
                    exchange,
                })
            }
            Commands::Users {
                action: UserCommands::Create { username, email },
            } => AppCommand::Users(UserAction::Create { username, email }),
            Commands::Shell => AppCommand::Shell,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => match cli.config_path.as_deref() {
            Some(path) => finboard::cli::setup::setup_at_path(path),
            None => finboard::cli::setup::setup(),
        },
        Some(cmd) => finboard::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
