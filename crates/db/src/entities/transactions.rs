//! `SeaORM` Entity for the transactions table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A single ledger row, always partitioned by `tenant_id`.
///
/// `kind` is stored as text rather than a database enum so that rows with an
/// unrecognized kind stay readable; summary computation skips them.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    /// Store-assigned identifier, immutable once created.
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Partition key derived from the caller's credential.
    pub tenant_id: String,
    /// Transaction amount, always positive; sign is carried by `kind`.
    pub amount: Decimal,
    /// Transaction kind: "expense" or "credit".
    pub kind: String,
    /// Category label.
    pub category: String,
    /// Subcategory label, empty when not supplied.
    pub subcategory: String,
    /// Free-text note, empty when not supplied.
    pub note: String,
    /// Transaction date.
    pub date: Date,
    /// Row creation timestamp.
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
