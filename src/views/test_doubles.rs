//! In-memory stand-ins for the backend services.

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::core::error::{ApiError, ApiResult};
use crate::core::models::{
    Budget, BudgetStatus, CategoryTotal, ChatReply, Expense, ExchangeRate, NewBudget, NewExpense,
    NewUser, SearchResults, StockQuote, User,
};
use crate::core::services::{
    AssistantService, BudgetService, ExpenseService, MarketService, UserService,
};

pub(crate) const TIMESTAMP: &str = "2024-05-01T10:00:00";

#[derive(Default)]
pub(crate) struct FakeBackend {
    pub expenses: Mutex<Vec<Expense>>,
    pub budgets: Mutex<Vec<(Budget, f64)>>,
    pub failure: Mutex<Option<ApiError>>,
    pub category_failure: Mutex<Option<ApiError>>,
    pub rate: Mutex<f64>,
    pub calls: AtomicUsize,
}

impl FakeBackend {
    pub fn new() -> Self {
        let backend = FakeBackend::default();
        *backend.rate.lock().unwrap() = 0.92;
        backend
    }

    pub fn fail_with(&self, err: ApiError) {
        *self.failure.lock().unwrap() = Some(err);
    }

    pub fn recover(&self) {
        *self.failure.lock().unwrap() = None;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn enter(&self) -> ApiResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.failure.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn next_id(&self) -> i64 {
        self.calls.load(Ordering::SeqCst) as i64 + 100
    }
}

#[async_trait]
impl ExpenseService for FakeBackend {
    async fn create_expense(&self, expense: &NewExpense) -> ApiResult<Expense> {
        self.enter()?;
        let created = Expense {
            expense_id: self.next_id(),
            user_id: expense.user_id,
            amount: expense.amount,
            category: expense.category.clone(),
            description: expense.description.clone(),
            expense_date: expense.expense_date,
        };
        self.expenses.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn list_expenses(&self, user_id: i64) -> ApiResult<Vec<Expense>> {
        self.enter()?;
        Ok(self
            .expenses
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn expenses_by_category(&self, user_id: i64) -> ApiResult<Vec<CategoryTotal>> {
        self.enter()?;
        if let Some(err) = self.category_failure.lock().unwrap().clone() {
            return Err(err);
        }
        let mut totals: Vec<CategoryTotal> = Vec::new();
        for expense in self.expenses.lock().unwrap().iter() {
            if expense.user_id != user_id {
                continue;
            }
            match totals.iter_mut().find(|t| t.category == expense.category) {
                Some(total) => total.total += expense.amount,
                None => totals.push(CategoryTotal {
                    category: expense.category.clone(),
                    total: expense.amount,
                }),
            }
        }
        Ok(totals)
    }

    async fn delete_expense(&self, expense_id: i64) -> ApiResult<()> {
        self.enter()?;
        self.expenses
            .lock()
            .unwrap()
            .retain(|e| e.expense_id != expense_id);
        Ok(())
    }
}

#[async_trait]
impl BudgetService for FakeBackend {
    async fn set_budget(&self, budget: &NewBudget) -> ApiResult<Budget> {
        self.enter()?;
        let created = Budget {
            budget_id: self.next_id(),
            user_id: budget.user_id,
            category: budget.category.clone(),
            amount: budget.amount,
            start_date: budget.start_date,
            end_date: budget.end_date,
        };
        self.budgets.lock().unwrap().push((created.clone(), 0.0));
        Ok(created)
    }

    async fn list_budgets(&self, user_id: i64) -> ApiResult<Vec<BudgetStatus>> {
        self.enter()?;
        Ok(self
            .budgets
            .lock()
            .unwrap()
            .iter()
            .filter(|(b, _)| b.user_id == user_id)
            .map(|(b, spent)| BudgetStatus {
                budget_id: Some(b.budget_id),
                category: b.category.clone(),
                budgeted_amount: b.amount,
                actual_spent: *spent,
                remaining_amount: b.amount - spent,
                start_date: b.start_date,
                end_date: b.end_date,
            })
            .collect())
    }

    async fn delete_budget(&self, budget_id: i64) -> ApiResult<()> {
        self.enter()?;
        self.budgets
            .lock()
            .unwrap()
            .retain(|(b, _)| b.budget_id != budget_id);
        Ok(())
    }
}

#[async_trait]
impl UserService for FakeBackend {
    async fn create_user(&self, user: &NewUser) -> ApiResult<User> {
        self.enter()?;
        Ok(User {
            user_id: self.next_id(),
            username: user.username.clone(),
            email: user.email.clone(),
        })
    }
}

#[async_trait]
impl AssistantService for FakeBackend {
    async fn ask(&self, query: &str) -> ApiResult<ChatReply> {
        self.enter()?;
        Ok(ChatReply {
            message: format!("Answer to: {query}"),
            timestamp: TIMESTAMP.to_string(),
        })
    }
}

#[async_trait]
impl MarketService for FakeBackend {
    async fn stock_price(&self, ticker: &str) -> ApiResult<StockQuote> {
        self.enter()?;
        Ok(StockQuote {
            symbol: ticker.to_string(),
            price: 123.456,
            currency: "USD".to_string(),
            timestamp: TIMESTAMP.to_string(),
        })
    }

    async fn web_search(&self, query: &str) -> ApiResult<SearchResults> {
        self.enter()?;
        Ok(SearchResults {
            query: query.to_string(),
            results: vec![format!("Latest financial news related to: {query}")],
            timestamp: TIMESTAMP.to_string(),
        })
    }

    async fn exchange_rate(&self, base: &str, target: &str) -> ApiResult<ExchangeRate> {
        self.enter()?;
        Ok(ExchangeRate {
            base: base.to_string(),
            target: target.to_string(),
            rate: *self.rate.lock().unwrap(),
            timestamp: TIMESTAMP.to_string(),
        })
    }
}
