//! Business rule validation for ledger operations.

use rust_decimal::Decimal;

use super::error::LedgerError;
use super::types::NewTransaction;

/// Validates a new transaction before it is persisted.
///
/// # Errors
///
/// Returns an error if the amount is not positive or the category is empty.
pub fn validate_new_transaction(input: &NewTransaction) -> Result<(), LedgerError> {
    if input.amount <= Decimal::ZERO {
        return Err(LedgerError::NonPositiveAmount);
    }

    if input.category.trim().is_empty() {
        return Err(LedgerError::EmptyCategory);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::ledger::types::TransactionKind;

    fn make_input(amount: Decimal, category: &str) -> NewTransaction {
        NewTransaction {
            amount,
            kind: TransactionKind::Expense,
            category: category.to_string(),
            subcategory: String::new(),
            note: String::new(),
            date: NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(),
        }
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_new_transaction(&make_input(dec!(12.50), "Food & Dining")).is_ok());
    }

    #[test]
    fn test_zero_amount() {
        assert_eq!(
            validate_new_transaction(&make_input(dec!(0), "Food & Dining")),
            Err(LedgerError::NonPositiveAmount)
        );
    }

    #[test]
    fn test_negative_amount() {
        assert_eq!(
            validate_new_transaction(&make_input(dec!(-5), "Food & Dining")),
            Err(LedgerError::NonPositiveAmount)
        );
    }

    #[test]
    fn test_empty_category() {
        assert_eq!(
            validate_new_transaction(&make_input(dec!(10), "")),
            Err(LedgerError::EmptyCategory)
        );
    }

    #[test]
    fn test_whitespace_category() {
        assert_eq!(
            validate_new_transaction(&make_input(dec!(10), "   ")),
            Err(LedgerError::EmptyCategory)
        );
    }
}
