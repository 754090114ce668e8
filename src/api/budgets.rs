use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::api::client::ApiClient;
use crate::core::error::ApiResult;
use crate::core::models::{Budget, BudgetStatus, NewBudget};
use crate::core::services::BudgetService;

#[derive(Debug, Deserialize)]
struct SetBudgetEnvelope {
    budget: Budget,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BudgetsEnvelope {
    #[serde(default)]
    budgets: Vec<BudgetStatus>,
}

/// Budget endpoints of the backend.
pub struct BudgetsApi {
    client: ApiClient,
}

impl BudgetsApi {
    pub fn new(client: ApiClient) -> Self {
        BudgetsApi { client }
    }
}

#[async_trait]
impl BudgetService for BudgetsApi {
    #[instrument(name = "SetBudget", skip(self, budget), fields(category = %budget.category))]
    async fn set_budget(&self, budget: &NewBudget) -> ApiResult<Budget> {
        let envelope: SetBudgetEnvelope = self.client.post("/set-budget", budget).await?;
        if let Some(message) = &envelope.message {
            debug!(%message, "Budget saved");
        }
        Ok(envelope.budget)
    }

    #[instrument(name = "ListBudgets", skip(self))]
    async fn list_budgets(&self, user_id: i64) -> ApiResult<Vec<BudgetStatus>> {
        let envelope: BudgetsEnvelope =
            self.client.get(&format!("/get-budgets/{user_id}")).await?;
        debug!(count = envelope.budgets.len(), "Loaded budgets");
        Ok(envelope.budgets)
    }

    #[instrument(name = "DeleteBudget", skip(self))]
    async fn delete_budget(&self, budget_id: i64) -> ApiResult<()> {
        self.client.delete(&format!("/budgets/{budget_id}")).await
    }
}
