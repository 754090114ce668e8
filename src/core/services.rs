//! Backend operations grouped by resource.
//!
//! Views depend on these traits rather than on the HTTP implementation in
//! [`crate::api`], so they can be driven by in-memory doubles in tests.

use async_trait::async_trait;

use crate::core::error::ApiResult;
use crate::core::models::{
    Budget, BudgetStatus, CategoryTotal, ChatReply, Expense, ExchangeRate, NewBudget, NewExpense,
    NewUser, SearchResults, StockQuote, User,
};

#[async_trait]
pub trait ExpenseService: Send + Sync {
    async fn create_expense(&self, expense: &NewExpense) -> ApiResult<Expense>;
    async fn list_expenses(&self, user_id: i64) -> ApiResult<Vec<Expense>>;
    async fn expenses_by_category(&self, user_id: i64) -> ApiResult<Vec<CategoryTotal>>;
    async fn delete_expense(&self, expense_id: i64) -> ApiResult<()>;
}

#[async_trait]
pub trait BudgetService: Send + Sync {
    async fn set_budget(&self, budget: &NewBudget) -> ApiResult<Budget>;
    async fn list_budgets(&self, user_id: i64) -> ApiResult<Vec<BudgetStatus>>;
    async fn delete_budget(&self, budget_id: i64) -> ApiResult<()>;
}

#[async_trait]
pub trait UserService: Send + Sync {
    async fn create_user(&self, user: &NewUser) -> ApiResult<User>;
}

#[async_trait]
pub trait AssistantService: Send + Sync {
    async fn ask(&self, query: &str) -> ApiResult<ChatReply>;
}

#[async_trait]
pub trait MarketService: Send + Sync {
    async fn stock_price(&self, ticker: &str) -> ApiResult<StockQuote>;
    async fn web_search(&self, query: &str) -> ApiResult<SearchResults>;
    async fn exchange_rate(&self, base: &str, target: &str) -> ApiResult<ExchangeRate>;
}
