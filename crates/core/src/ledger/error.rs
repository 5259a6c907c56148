//! Ledger error types.

use thiserror::Error;

/// Validation errors for ledger operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// Transaction amount is zero or negative.
    #[error("Transaction amount must be positive")]
    NonPositiveAmount,

    /// Category is missing.
    #[error("Category must not be empty")]
    EmptyCategory,
}
