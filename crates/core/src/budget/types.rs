//! Budget data types.

use rust_decimal::Decimal;

/// Outcome of a budget evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    /// No budget is configured for the tenant. Silent: callers display nothing.
    NoBudget,
    /// Plenty of budget remains.
    Ok,
    /// Remaining budget is at or below the warning threshold.
    Warning(Decimal),
    /// The budget is exceeded by the contained overage.
    Exceeded(Decimal),
}

impl BudgetStatus {
    /// Returns the user-facing message for this status, if any.
    ///
    /// `Ok` and `NoBudget` produce no message; success responses are simply
    /// not annotated.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Warning(remaining) => {
                Some(format!("Warning: {remaining:.2} left in your monthly budget."))
            }
            Self::Exceeded(overage) => Some(format!("Budget Exceeded by {overage:.2}!")),
            Self::Ok | Self::NoBudget => None,
        }
    }
}
