//! Expense ledger: list, category totals, add and delete.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::core::error::ApiResult;
use crate::core::models::{CategoryTotal, Expense, NewExpense};
use crate::core::services::ExpenseService;
use crate::core::session::Session;
use crate::views::state::{ActionState, SubmitLabels};
use crate::views::{INVALID_AMOUNT, INVALID_DATE, MISSING_FIELDS, parse_amount, parse_date};

pub const EXPENSE_LABELS: SubmitLabels = SubmitLabels {
    idle: "Add Expense",
    busy: "Adding...",
};

/// Raw text of the add-expense form.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseForm {
    pub amount: String,
    pub category: String,
    pub description: String,
    pub expense_date: String,
}

impl ExpenseForm {
    pub fn new(today: NaiveDate) -> Self {
        ExpenseForm {
            amount: String::new(),
            category: String::new(),
            description: String::new(),
            expense_date: today.format("%Y-%m-%d").to_string(),
        }
    }

    pub fn validate(&self, user_id: i64) -> Result<NewExpense, &'static str> {
        let category = self.category.trim();
        let description = self.description.trim();
        if self.amount.trim().is_empty() || category.is_empty() || description.is_empty() {
            return Err(MISSING_FIELDS);
        }
        let amount = parse_amount(&self.amount).ok_or(INVALID_AMOUNT)?;
        let expense_date = parse_date(&self.expense_date).ok_or(INVALID_DATE)?;

        Ok(NewExpense {
            user_id,
            amount,
            category: category.to_string(),
            description: description.to_string(),
            expense_date,
        })
    }
}

pub struct ExpenseLedger<'a, S: ExpenseService + ?Sized> {
    session: &'a Session,
    service: &'a S,
    expenses: Vec<Expense>,
    category_totals: Vec<CategoryTotal>,
    pub form: ExpenseForm,
    state: ActionState,
    today: NaiveDate,
}

impl<'a, S: ExpenseService + ?Sized> ExpenseLedger<'a, S> {
    pub fn new(session: &'a Session, service: &'a S, today: NaiveDate) -> Self {
        ExpenseLedger {
            session,
            service,
            expenses: Vec::new(),
            category_totals: Vec::new(),
            form: ExpenseForm::new(today),
            state: ActionState::Idle,
            today,
        }
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn category_totals(&self) -> &[CategoryTotal] {
        &self.category_totals
    }

    pub fn state(&self) -> &ActionState {
        &self.state
    }


    pub async fn load(&mut self) {
        if !self.state.begin() {
            return;
        }
        let outcome = self.reload().await;
        self.settle(outcome);
    }

    pub async fn submit(&mut self) {
        if self.state.is_loading() {
            debug!("Ignoring expense submission while a request is in flight");
            return;
        }
        let expense = match self.form.validate(self.session.user_id()) {
            Ok(expense) => expense,
            Err(message) => {
                self.state.fail(message);
                return;
            }
        };

        self.state.begin();
        let outcome = match self.service.create_expense(&expense).await {
            Ok(created) => {
                debug!(expense_id = created.expense_id, "Expense added");
                self.form = ExpenseForm::new(self.today);
                self.reload().await
            }
            Err(e) => Err(e),
        };
        self.settle(outcome);
    }

    pub async fn delete(&mut self, expense_id: i64) {
        if !self.state.begin() {
            return;
        }
        let outcome = match self.service.delete_expense(expense_id).await {
            Ok(()) => self.reload().await,
            Err(e) => Err(e),
        };
        self.settle(outcome);
    }

    /// Fetches the list and the category totals together. A failure of the
    /// totals is logged and leaves the previous totals in place.
    async fn reload(&mut self) -> ApiResult<()> {
        let user_id = self.session.user_id();
        let (expenses, totals) = futures::join!(
            self.service.list_expenses(user_id),
            self.service.expenses_by_category(user_id)
        );

        match totals {
            Ok(totals) => self.category_totals = totals,
            Err(e) => warn!(error = %e, "Failed to load category totals"),
        }
        self.expenses = expenses?;
        Ok(())
    }

    fn settle(&mut self, outcome: ApiResult<()>) {
        match outcome {
            Ok(()) => self.state.succeed(()),
            Err(e) => self.state.fail(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{ApiError, NO_RESPONSE_MESSAGE};
    use crate::core::models::User;
    use crate::views::test_doubles::FakeBackend;

    fn session() -> Session {
        Session::new(User {
            user_id: 1,
            username: "demo_user".to_string(),
            email: "demo@example.com".to_string(),
        })
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    fn fill(form: &mut ExpenseForm, amount: &str, category: &str) {
        form.amount = amount.to_string();
        form.category = category.to_string();
        form.description = format!("{category} spend");
    }

    #[test]
    fn test_form_validation() {
        let mut form = ExpenseForm::new(today());
        assert_eq!(form.expense_date, "2024-05-01");
        assert_eq!(form.validate(1), Err(MISSING_FIELDS));

        fill(&mut form, "abc", "Food");
        assert_eq!(form.validate(1), Err(INVALID_AMOUNT));

        form.amount = "-3".to_string();
        assert_eq!(form.validate(1), Err(INVALID_AMOUNT));

        form.amount = "12.50".to_string();
        form.expense_date = "05/01/2024".to_string();
        assert_eq!(form.validate(1), Err(INVALID_DATE));

        form.expense_date = "2024-05-02".to_string();
        let expense = form.validate(1).unwrap();
        assert_eq!(expense.amount, 12.5);
        assert_eq!(expense.category, "Food");
        assert_eq!(expense.expense_date, NaiveDate::from_ymd_opt(2024, 5, 2).unwrap());
    }

    #[tokio::test]
    async fn test_create_then_list_contains_new_expense_once() {
        let backend = FakeBackend::new();
        let session = session();
        let mut ledger = ExpenseLedger::new(&session, &backend, today());
        ledger.load().await;
        assert!(ledger.expenses().is_empty());

        fill(&mut ledger.form, "20", "Food");
        ledger.submit().await;

        assert_eq!(ledger.state(), &ActionState::Success(()));
        assert_eq!(ledger.expenses().len(), 1);
        let created = &ledger.expenses()[0];
        assert!(created.expense_id >= 100);
        assert_eq!(ledger.category_totals()[0].total, 20.0);
        assert!(ledger.form.amount.is_empty());
        assert_eq!(ledger.form.expense_date, "2024-05-01");
    }

    #[tokio::test]
    async fn test_delete_removes_expense_from_next_list() {
        let backend = FakeBackend::new();
        let session = session();
        let mut ledger = ExpenseLedger::new(&session, &backend, today());

        fill(&mut ledger.form, "20", "Food");
        ledger.submit().await;
        fill(&mut ledger.form, "35", "Rent");
        ledger.submit().await;
        assert_eq!(ledger.expenses().len(), 2);

        let doomed = ledger.expenses()[0].expense_id;
        ledger.delete(doomed).await;

        assert_eq!(ledger.expenses().len(), 1);
        assert!(ledger.expenses().iter().all(|e| e.expense_id != doomed));
    }

    #[tokio::test]
    async fn test_validation_error_skips_network() {
        let backend = FakeBackend::new();
        let session = session();
        let mut ledger = ExpenseLedger::new(&session, &backend, today());

        fill(&mut ledger.form, "0", "Food");
        ledger.submit().await;

        assert_eq!(ledger.state().error(), Some(INVALID_AMOUNT));
        assert_eq!(backend.calls(), 0);
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_existing_table() {
        let backend = FakeBackend::new();
        let session = session();
        let mut ledger = ExpenseLedger::new(&session, &backend, today());
        fill(&mut ledger.form, "20", "Food");
        ledger.submit().await;
        assert_eq!(ledger.expenses().len(), 1);

        backend.fail_with(ApiError::NoResponse {
            reason: "connection refused".to_string(),
        });
        ledger.load().await;

        assert_eq!(ledger.state().error(), Some(NO_RESPONSE_MESSAGE));
        assert_eq!(ledger.expenses().len(), 1);

        backend.recover();
        ledger.load().await;
        assert!(ledger.state().error().is_none());
    }

    #[tokio::test]
    async fn test_category_failure_is_not_a_view_error() {
        let backend = FakeBackend::new();
        *backend.category_failure.lock().unwrap() = Some(ApiError::Server {
            status: 500,
            detail: None,
        });
        let session = session();
        let mut ledger = ExpenseLedger::new(&session, &backend, today());

        fill(&mut ledger.form, "20", "Food");
        ledger.submit().await;

        assert_eq!(ledger.state(), &ActionState::Success(()));
        assert_eq!(ledger.expenses().len(), 1);
        assert!(ledger.category_totals().is_empty());
    }
}
