//! Core domain types and service abstractions

pub mod config;
pub mod error;
pub mod log;
pub mod models;
pub mod services;
pub mod session;

// Re-export main types for cleaner imports
pub use error::{ApiError, ApiResult};
pub use services::{AssistantService, BudgetService, ExpenseService, MarketService, UserService};
pub use session::Session;
