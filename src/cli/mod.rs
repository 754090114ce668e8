//! Terminal front end: one module per page, rendering views to strings.

pub mod assistant;
pub mod budgets;
pub mod expenses;
pub mod market;
pub mod setup;
pub mod shell;
pub mod tools;
pub mod ui;
pub mod users;

use anyhow::{Result, bail};

use crate::views::RequestState;

/// Turns a view left in the error state into a command failure.
pub(crate) fn ensure_settled<T>(state: &RequestState<T>) -> Result<()> {
    match state.error() {
        Some(message) => bail!("{message}"),
        None => Ok(()),
    }
}
