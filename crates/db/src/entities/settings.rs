//! `SeaORM` Entity for the settings table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Per-tenant budget setting; one row per tenant, replaced wholesale on
/// set_budget.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "settings")]
pub struct Model {
    /// Partition key derived from the caller's credential.
    #[sea_orm(primary_key, auto_increment = false)]
    pub tenant_id: String,
    /// Total monthly budget.
    pub total_budget: Decimal,
    /// Last update timestamp.
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
