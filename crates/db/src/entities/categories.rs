//! `SeaORM` Entity for the categories reference table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Shared read-only category reference data (not tenant-scoped).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    /// Category name.
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,
    /// JSON array of subcategory names.
    pub subcategories: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
