//! Budget repository for per-tenant budget settings.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    DatabaseConnection, DbErr, EntityTrait, Set, sea_query::OnConflict,
};
use tracing::debug;

use tally_shared::TenantId;

use crate::entities::settings;

/// Budget repository for the per-tenant settings row.
#[derive(Debug, Clone)]
pub struct BudgetRepository {
    db: DatabaseConnection,
}

impl BudgetRepository {
    /// Creates a new budget repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sets or replaces the tenant's monthly budget.
    ///
    /// Upsert semantics: insert if absent, overwrite wholesale if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the database upsert fails.
    pub async fn upsert(&self, tenant: &TenantId, amount: Decimal) -> Result<(), DbErr> {
        let row = settings::ActiveModel {
            tenant_id: Set(tenant.as_str().to_string()),
            total_budget: Set(amount),
            updated_at: Set(Utc::now().into()),
        };

        settings::Entity::insert(row)
            .on_conflict(
                OnConflict::column(settings::Column::TenantId)
                    .update_columns([settings::Column::TotalBudget, settings::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec(&self.db)
            .await?;

        debug!(tenant = %tenant, %amount, "Upserted budget setting");
        Ok(())
    }

    /// Returns the tenant's monthly budget, or `None` if none is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get(&self, tenant: &TenantId) -> Result<Option<Decimal>, DbErr> {
        Ok(settings::Entity::find_by_id(tenant.as_str())
            .one(&self.db)
            .await?
            .map(|row| row.total_budget))
    }
}
