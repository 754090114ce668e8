//! Per-feature view models.
//!
//! Each view owns its form buffers, its result data and one [`RequestState`]
//! per asynchronous action. Validation happens here, before any service call.

pub mod assistant;
pub mod budgets;
pub mod catalog;
pub mod exchange;
pub mod expenses;
pub mod history;
pub mod news;
pub mod state;
pub mod stock;
pub mod tools;

#[cfg(test)]
pub(crate) mod test_doubles;

pub use assistant::FinancialAssistant;
pub use budgets::BudgetManager;
pub use exchange::ExchangeConverter;
pub use expenses::ExpenseLedger;
pub use history::History;
pub use news::NewsSearch;
pub use state::{ActionState, RequestState, SubmitLabels};
pub use stock::StockLookup;
pub use tools::ToolsDashboard;

use chrono::NaiveDate;

pub const MISSING_FIELDS: &str = "Please fill in all fields";
pub const INVALID_AMOUNT: &str = "Please enter a valid amount";
pub const INVALID_DATE: &str = "Please enter a valid date";

/// Parses a strictly positive, finite amount.
pub(crate) fn parse_amount(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount > 0.0)
}

pub(crate) fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()
}
