//! Ledger domain types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default number of rows returned by list operations.
pub const DEFAULT_LIST_LIMIT: u64 = 50;

/// The kind of a ledger transaction.
///
/// Amounts are always stored positive; the sign is carried by the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Money spent.
    Expense,
    /// Money received.
    Credit,
}

impl TransactionKind {
    /// Returns the storage representation of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Credit => "credit",
        }
    }

    /// Parses a stored kind string.
    ///
    /// Returns `None` for unrecognized values; stored rows with an unknown
    /// kind are tolerated and skipped by summary computation.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "expense" => Some(Self::Expense),
            "credit" => Some(Self::Credit),
            _ => None,
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input for creating a new transaction.
///
/// The tenant is not part of the input; it is supplied separately by the
/// authenticated request context.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    /// Transaction amount, always positive.
    pub amount: Decimal,
    /// Transaction kind.
    pub kind: TransactionKind,
    /// Category label.
    pub category: String,
    /// Optional subcategory label.
    pub subcategory: String,
    /// Optional free-text note.
    pub note: String,
    /// Transaction date.
    pub date: NaiveDate,
}

/// Filter options for listing transactions.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Include transactions dated on/after this date.
    pub start_date: Option<NaiveDate>,
    /// Include transactions dated on/before this date.
    pub end_date: Option<NaiveDate>,
    /// Include only transactions with this category.
    pub category: Option<String>,
}

/// Totals over a set of ledger rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Sum of expense amounts.
    pub total_expense: Decimal,
    /// Sum of credit amounts.
    pub total_credit: Decimal,
    /// `total_credit - total_expense`.
    pub net_balance: Decimal,
}
