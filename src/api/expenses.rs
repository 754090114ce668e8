use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::api::client::ApiClient;
use crate::core::error::ApiResult;
use crate::core::models::{CategoryTotal, Expense, NewExpense};
use crate::core::services::ExpenseService;

#[derive(Debug, Deserialize)]
struct ExpensesEnvelope {
    #[serde(default)]
    expenses: Vec<Expense>,
}

#[derive(Debug, Deserialize)]
struct CategoriesEnvelope {
    #[serde(default)]
    categories: Vec<CategoryTotal>,
}

/// Expense endpoints of the backend.
pub struct ExpensesApi {
    client: ApiClient,
}

impl ExpensesApi {
    pub fn new(client: ApiClient) -> Self {
        ExpensesApi { client }
    }
}

#[async_trait]
impl ExpenseService for ExpensesApi {
    #[instrument(name = "CreateExpense", skip(self, expense), fields(category = %expense.category))]
    async fn create_expense(&self, expense: &NewExpense) -> ApiResult<Expense> {
        let created: Expense = self.client.post("/expenses", expense).await?;
        debug!(expense_id = created.expense_id, "Expense created");
        Ok(created)
    }

    #[instrument(name = "ListExpenses", skip(self))]
    async fn list_expenses(&self, user_id: i64) -> ApiResult<Vec<Expense>> {
        let envelope: ExpensesEnvelope = self.client.get(&format!("/expenses/{user_id}")).await?;
        debug!(count = envelope.expenses.len(), "Loaded expenses");
        Ok(envelope.expenses)
    }

    #[instrument(name = "ExpensesByCategory", skip(self))]
    async fn expenses_by_category(&self, user_id: i64) -> ApiResult<Vec<CategoryTotal>> {
        let envelope: CategoriesEnvelope = self
            .client
            .get(&format!("/expenses/{user_id}/by-category"))
            .await?;
        Ok(envelope.categories)
    }

    #[instrument(name = "DeleteExpense", skip(self))]
    async fn delete_expense(&self, expense_id: i64) -> ApiResult<()> {
        self.client.delete(&format!("/expenses/{expense_id}")).await
    }
}
