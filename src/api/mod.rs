//! HTTP implementations of the backend services.

pub mod assistant;
pub mod budgets;
pub mod client;
pub mod expenses;
pub mod market;
pub mod users;

#[cfg(test)]
pub(crate) mod test_support;

pub use assistant::AssistantApi;
pub use budgets::BudgetsApi;
pub use client::ApiClient;
pub use expenses::ExpensesApi;
pub use market::MarketApi;
pub use users::UsersApi;

use crate::core::error::ApiResult;

/// One handle per resource, all sharing the same configured client.
pub struct Backend {
    pub expenses: ExpensesApi,
    pub budgets: BudgetsApi,
    pub users: UsersApi,
    pub assistant: AssistantApi,
    pub market: MarketApi,
}

impl Backend {
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let client = ApiClient::new(base_url)?;
        Ok(Backend {
            expenses: ExpensesApi::new(client.clone()),
            budgets: BudgetsApi::new(client.clone()),
            users: UsersApi::new(client.clone()),
            assistant: AssistantApi::new(client.clone()),
            market: MarketApi::new(client),
        })
    }
}
