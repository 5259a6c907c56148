//! Ledger domain logic.
//!
//! This module implements the transaction side of the ledger:
//! - Domain types for transaction creation and filtering
//! - Input validation
//! - Summary computation over `(kind, amount)` rows

pub mod error;
pub mod service;
pub mod types;
pub mod validation;

#[cfg(test)]
mod service_props;

pub use error::LedgerError;
pub use service::LedgerService;
pub use types::{
    DEFAULT_LIST_LIMIT, NewTransaction, Summary, TransactionFilter, TransactionKind,
};
pub use validation::validate_new_transaction;
