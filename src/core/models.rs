//! Records exchanged with the finance backend.
//!
//! Field names follow the backend's JSON. Everything here is owned by the
//! backend; the front end only holds disposable copies.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: i64,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub expense_id: i64,
    pub user_id: i64,
    pub amount: f64,
    pub category: String,
    pub description: String,
    pub expense_date: NaiveDate,
}

/// Payload for creating an expense. The backend assigns `expense_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExpense {
    pub user_id: i64,
    pub amount: f64,
    pub category: String,
    pub description: String,
    pub expense_date: NaiveDate,
}

/// Spend aggregated per category by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub budget_id: i64,
    pub user_id: i64,
    pub category: String,
    pub amount: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBudget {
    pub user_id: i64,
    pub category: String,
    pub amount: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Server-computed spend against a budget. Read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_id: Option<i64>,
    pub category: String,
    pub budgeted_amount: f64,
    pub actual_spent: f64,
    pub remaining_amount: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(alias = "response")]
    pub message: String,
    #[serde(default)]
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockQuote {
    #[serde(alias = "ticker")]
    pub symbol: String,
    pub price: f64,
    pub currency: String,
    #[serde(default)]
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub query: String,
    #[serde(default)]
    pub results: Vec<String>,
    #[serde(default)]
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    pub base: String,
    pub target: String,
    pub rate: f64,
    #[serde(default)]
    pub timestamp: String,
}
