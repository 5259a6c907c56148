//! Property-based tests for summary computation.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::LedgerService;

fn arb_rows() -> impl Strategy<Value = Vec<(String, Decimal)>> {
    prop::collection::vec(
        (
            prop_oneof![
                Just("expense".to_string()),
                Just("credit".to_string()),
                Just("transfer".to_string()),
            ],
            (0i64..1_000_000_000).prop_map(|cents| Decimal::new(cents, 2)),
        ),
        0..50,
    )
}

proptest! {
    /// Net balance always equals credits minus expenses.
    #[test]
    fn test_net_balance_identity(rows in arb_rows()) {
        let summary = LedgerService::summarize(&rows);
        prop_assert_eq!(summary.net_balance, summary.total_credit - summary.total_expense);
    }

    /// Summarize is linear: totals over disjoint row sets add up.
    #[test]
    fn test_summarize_linearity(a in arb_rows(), b in arb_rows()) {
        let mut combined = a.clone();
        combined.extend(b.clone());

        let sum_a = LedgerService::summarize(&a);
        let sum_b = LedgerService::summarize(&b);
        let sum_combined = LedgerService::summarize(&combined);

        prop_assert_eq!(sum_combined.total_expense, sum_a.total_expense + sum_b.total_expense);
        prop_assert_eq!(sum_combined.total_credit, sum_a.total_credit + sum_b.total_credit);
        prop_assert_eq!(sum_combined.net_balance, sum_a.net_balance + sum_b.net_balance);
    }

    /// Rows with unrecognized kind never move the totals.
    #[test]
    fn test_unrecognized_rows_are_inert(
        rows in arb_rows(),
        noise in (0i64..1_000_000_000).prop_map(|cents| Decimal::new(cents, 2)),
    ) {
        let mut with_noise = rows.clone();
        with_noise.push(("mystery".to_string(), noise));

        prop_assert_eq!(LedgerService::summarize(&rows), LedgerService::summarize(&with_noise));
    }
}
