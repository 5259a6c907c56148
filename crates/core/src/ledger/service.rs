//! Ledger service for summary computation.
//!
//! This service contains pure business logic with no database dependencies.
//! The repository layer fetches `(kind, amount)` rows; the service folds them
//! into totals.

use rust_decimal::Decimal;

use super::types::{Summary, TransactionKind};

/// Ledger service for pure computations over ledger rows.
pub struct LedgerService;

impl LedgerService {
    /// Sums expenses and credits independently over `(kind, amount)` rows.
    ///
    /// Rows whose kind string is unrecognized are skipped rather than summed
    /// into either bucket. The net balance is `credits - expenses`.
    #[must_use]
    pub fn summarize(rows: &[(String, Decimal)]) -> Summary {
        let mut total_expense = Decimal::ZERO;
        let mut total_credit = Decimal::ZERO;

        for (kind, amount) in rows {
            match TransactionKind::parse(kind) {
                Some(TransactionKind::Expense) => total_expense += amount,
                Some(TransactionKind::Credit) => total_credit += amount,
                None => {}
            }
        }

        Summary {
            total_expense,
            total_credit,
            net_balance: total_credit - total_expense,
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn row(kind: &str, amount: Decimal) -> (String, Decimal) {
        (kind.to_string(), amount)
    }

    #[test]
    fn test_summarize_empty() {
        let summary = LedgerService::summarize(&[]);
        assert_eq!(summary.total_expense, dec!(0));
        assert_eq!(summary.total_credit, dec!(0));
        assert_eq!(summary.net_balance, dec!(0));
    }

    #[test]
    fn test_summarize_mixed() {
        let rows = vec![
            row("expense", dec!(100.50)),
            row("credit", dec!(250)),
            row("expense", dec!(49.50)),
        ];

        let summary = LedgerService::summarize(&rows);
        assert_eq!(summary.total_expense, dec!(150.00));
        assert_eq!(summary.total_credit, dec!(250));
        assert_eq!(summary.net_balance, dec!(100.00));
    }

    #[test]
    fn test_summarize_ignores_unrecognized_kind() {
        let rows = vec![
            row("expense", dec!(10)),
            row("transfer", dec!(999)),
            row("", dec!(999)),
            row("credit", dec!(30)),
        ];

        let summary = LedgerService::summarize(&rows);
        assert_eq!(summary.total_expense, dec!(10));
        assert_eq!(summary.total_credit, dec!(30));
        assert_eq!(summary.net_balance, dec!(20));
    }

    #[test]
    fn test_summarize_expense_only() {
        let rows = vec![row("expense", dec!(42))];

        let summary = LedgerService::summarize(&rows);
        assert_eq!(summary.net_balance, dec!(-42));
    }
}
