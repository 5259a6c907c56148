//! Monthly budget evaluation.
//!
//! Classifies the remaining monthly budget for a tenant against a newly
//! proposed expense.

pub mod service;
pub mod types;

pub use service::{BudgetService, WARNING_THRESHOLD, month_start};
pub use types::BudgetStatus;
