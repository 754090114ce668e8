//! Budget manager: budgets with server-computed spend, plus set and delete.

use chrono::{Months, NaiveDate};
use tracing::debug;

use crate::core::error::ApiResult;
use crate::core::models::{BudgetStatus, NewBudget};
use crate::core::services::BudgetService;
use crate::core::session::Session;
use crate::views::state::{ActionState, SubmitLabels};
use crate::views::{INVALID_AMOUNT, INVALID_DATE, MISSING_FIELDS, parse_amount, parse_date};

pub const END_BEFORE_START: &str = "End date must be on or after start date";
pub const BUDGET_LABELS: SubmitLabels = SubmitLabels {
    idle: "Create Budget",
    busy: "Creating...",
};

/// Colour band of a budget's consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTier {
    Green,
    Yellow,
    Red,
}

/// Spend-to-budget ratio as shown on a budget card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetProgress {
    pub percent: f64,
    pub tier: StatusTier,
}

impl BudgetProgress {
    pub fn new(budgeted_amount: f64, actual_spent: f64) -> Self {
        let percent = if budgeted_amount > 0.0 {
            actual_spent / budgeted_amount * 100.0
        } else if actual_spent > 0.0 {
            // Anything spent against an empty budget is over budget.
            100.0
        } else {
            0.0
        };

        let tier = if percent >= 100.0 {
            StatusTier::Red
        } else if percent >= 75.0 {
            StatusTier::Yellow
        } else {
            StatusTier::Green
        };

        BudgetProgress { percent, tier }
    }

    pub fn label(&self) -> String {
        format!("{:.0}%", self.percent)
    }

    /// Filled share of the progress bar, 0 to 100.
    pub fn bar_width(&self) -> f64 {
        self.percent.clamp(0.0, 100.0)
    }
}

impl BudgetStatus {
    pub fn progress(&self) -> BudgetProgress {
        BudgetProgress::new(self.budgeted_amount, self.actual_spent)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BudgetTotals {
    pub budgeted: f64,
    pub spent: f64,
    pub remaining: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetForm {
    pub category: String,
    pub amount: String,
    pub start_date: String,
    pub end_date: String,
}

impl BudgetForm {
    /// Empty form covering one month from `today`.
    pub fn new(today: NaiveDate) -> Self {
        let end = today.checked_add_months(Months::new(1)).unwrap_or(today);
        BudgetForm {
            category: String::new(),
            amount: String::new(),
            start_date: today.format("%Y-%m-%d").to_string(),
            end_date: end.format("%Y-%m-%d").to_string(),
        }
    }

    pub fn validate(&self, user_id: i64) -> Result<NewBudget, &'static str> {
        let category = self.category.trim();
        if category.is_empty() || self.amount.trim().is_empty() {
            return Err(MISSING_FIELDS);
        }
        let amount = parse_amount(&self.amount).ok_or(INVALID_AMOUNT)?;
        let start_date = parse_date(&self.start_date).ok_or(INVALID_DATE)?;
        let end_date = parse_date(&self.end_date).ok_or(INVALID_DATE)?;
        if end_date < start_date {
            return Err(END_BEFORE_START);
        }

        Ok(NewBudget {
            user_id,
            category: category.to_string(),
            amount,
            start_date,
            end_date,
        })
    }
}

pub struct BudgetManager<'a, S: BudgetService + ?Sized> {
    session: &'a Session,
    service: &'a S,
    budgets: Vec<BudgetStatus>,
    pub form: BudgetForm,
    state: ActionState,
    today: NaiveDate,
}

impl<'a, S: BudgetService + ?Sized> BudgetManager<'a, S> {
    pub fn new(session: &'a Session, service: &'a S, today: NaiveDate) -> Self {
        BudgetManager {
            session,
            service,
            budgets: Vec::new(),
            form: BudgetForm::new(today),
            state: ActionState::Idle,
            today,
        }
    }

    pub fn budgets(&self) -> &[BudgetStatus] {
        &self.budgets
    }

    pub fn state(&self) -> &ActionState {
        &self.state
    }


    pub fn totals(&self) -> BudgetTotals {
        self.budgets
            .iter()
            .fold(BudgetTotals::default(), |acc, b| BudgetTotals {
                budgeted: acc.budgeted + b.budgeted_amount,
                spent: acc.spent + b.actual_spent,
                remaining: acc.remaining + b.remaining_amount,
            })
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
            debug!("Ignoring budget submission while a request is in flight");
            return;
        }
        let budget = match self.form.validate(self.session.user_id()) {
            Ok(budget) => budget,
            Err(message) => {
                self.state.fail(message);
                return;
            }
        };

        self.state.begin();
        let outcome = match self.service.set_budget(&budget).await {
            Ok(created) => {
                debug!(budget_id = created.budget_id, "Budget created");
                self.form = BudgetForm::new(self.today);
                self.reload().await
            }
            Err(e) => Err(e),
        };
        self.settle(outcome);
    }

    pub async fn delete(&mut self, budget_id: i64) {
        if !self.state.begin() {
            return;
        }
        let outcome = match self.service.delete_budget(budget_id).await {
            Ok(()) => self.reload().await,
            Err(e) => Err(e),
        };
        self.settle(outcome);
    }

    async fn reload(&mut self) -> ApiResult<()> {
        self.budgets = self.service.list_budgets(self.session.user_id()).await?;
        Ok(())
    }

    fn settle(&mut self, outcome: ApiResult<()>) {
        match outcome {
            Ok(()) => self.state.succeed(()),
            Err(e) => self.state.fail(e.to_string()),
        }
    }
}
