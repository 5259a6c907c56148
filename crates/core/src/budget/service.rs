//! Budget service for remaining-budget classification.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use super::types::BudgetStatus;

/// Remaining budget at or below this value triggers a warning.
///
/// Fixed policy for now. Making it tenant-configurable would mean widening
/// the settings row and the set_budget operation; see DESIGN.md.
pub const WARNING_THRESHOLD: Decimal = Decimal::from_parts(500, 0, 0, false, 0);

/// Returns the first day of the month containing `today`.
///
/// The budget period is always the current calendar month on the server
/// clock; there is no timezone negotiation.
#[must_use]
pub fn month_start(today: NaiveDate) -> NaiveDate {
    today.with_day(1).unwrap_or(today)
}

/// Budget service for business logic.
pub struct BudgetService;

impl BudgetService {
    /// Classifies the remaining budget after a proposed expense.
    ///
    /// `remaining = budget - month_spend - proposed_expense`, then:
    /// - `remaining < 0` is `Exceeded(-remaining)`
    /// - `0 <= remaining <= WARNING_THRESHOLD` is `Warning(remaining)`
    /// - otherwise `Ok`
    ///
    /// A tenant with no configured budget gets `NoBudget`.
    #[must_use]
    pub fn classify(
        budget: Option<Decimal>,
        month_spend: Decimal,
        proposed_expense: Decimal,
    ) -> BudgetStatus {
        let Some(budget) = budget else {
            return BudgetStatus::NoBudget;
        };

        let remaining = budget - month_spend - proposed_expense;

        if remaining < Decimal::ZERO {
            BudgetStatus::Exceeded(-remaining)
        } else if remaining <= WARNING_THRESHOLD {
            BudgetStatus::Warning(remaining)
        } else {
            BudgetStatus::Ok
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_no_budget_configured() {
        assert_eq!(
            BudgetService::classify(None, dec!(400), dec!(100)),
            BudgetStatus::NoBudget
        );
        assert!(BudgetStatus::NoBudget.message().is_none());
    }

    #[test]
    fn test_remaining_exactly_at_threshold_warns() {
        // budget=1000, spent=400, proposed=100 -> remaining=500
        assert_eq!(
            BudgetService::classify(Some(dec!(1000)), dec!(400), dec!(100)),
            BudgetStatus::Warning(dec!(500))
        );
    }

    #[test]
    fn test_remaining_below_threshold_warns() {
        // budget=1000, spent=400, proposed=101 -> remaining=499
        assert_eq!(
            BudgetService::classify(Some(dec!(1000)), dec!(400), dec!(101)),
            BudgetStatus::Warning(dec!(499))
        );
    }

    #[test]
    fn test_remaining_zero_warns() {
        assert_eq!(
            BudgetService::classify(Some(dec!(1000)), dec!(400), dec!(600)),
            BudgetStatus::Warning(dec!(0))
        );
    }

    #[test]
    fn test_overspend_is_exceeded() {
        // budget=1000, spent=400, proposed=700 -> remaining=-100
        assert_eq!(
            BudgetService::classify(Some(dec!(1000)), dec!(400), dec!(700)),
            BudgetStatus::Exceeded(dec!(100))
        );
    }

    #[test]
    fn test_plenty_remaining_is_ok() {
        // budget=1000, spent=0, proposed=0 -> remaining=1000
        let status = BudgetService::classify(Some(dec!(1000)), dec!(0), dec!(0));
        assert_eq!(status, BudgetStatus::Ok);
        assert!(status.message().is_none());
    }

    #[test]
    fn test_warning_message_format() {
        let status = BudgetService::classify(Some(dec!(1000)), dec!(400), dec!(101));
        assert_eq!(
            status.message().as_deref(),
            Some("Warning: 499.00 left in your monthly budget.")
        );
    }

    #[test]
    fn test_exceeded_message_format() {
        let status = BudgetService::classify(Some(dec!(1000)), dec!(400), dec!(700));
        assert_eq!(status.message().as_deref(), Some("Budget Exceeded by 100.00!"));
    }

    #[test]
    fn test_month_start() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        assert_eq!(month_start(today), NaiveDate::from_ymd_opt(2026, 8, 1).unwrap());

        let first = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        assert_eq!(month_start(first), first);

        let leap_end = NaiveDate::from_ymd_opt(2028, 2, 29).unwrap();
        assert_eq!(month_start(leap_end), NaiveDate::from_ymd_opt(2028, 2, 1).unwrap());
    }
}
