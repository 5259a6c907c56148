//! Transaction repository for tenant-scoped ledger row access.
//!
//! Every method takes the tenant identifier and applies it as a server-side
//! filter. An update or delete that targets another tenant's row id affects
//! zero rows rather than erroring; callers decide how to report that.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter,
    QueryOrder, QuerySelect, Set, sea_query::Expr,
};
use tracing::debug;

use tally_core::ledger::{NewTransaction, TransactionFilter, TransactionKind};
use tally_shared::TenantId;

use crate::entities::transactions;

/// Transaction repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    db: DatabaseConnection,
}

impl TransactionRepository {
    /// Creates a new transaction repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new transaction for the tenant.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn insert(
        &self,
        tenant: &TenantId,
        input: &NewTransaction,
    ) -> Result<transactions::Model, DbErr> {
        let row = transactions::ActiveModel {
            id: NotSet,
            tenant_id: Set(tenant.as_str().to_string()),
            amount: Set(input.amount),
            kind: Set(input.kind.as_str().to_string()),
            category: Set(input.category.clone()),
            subcategory: Set(input.subcategory.clone()),
            note: Set(input.note.clone()),
            date: Set(input.date),
            created_at: Set(Utc::now().into()),
        };

        let model = row.insert(&self.db).await?;
        debug!(tenant = %tenant, id = model.id, kind = %model.kind, "Inserted transaction");
        Ok(model)
    }

    /// Lists the tenant's transactions, newest first, bounded by `limit`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(
        &self,
        tenant: &TenantId,
        filter: &TransactionFilter,
        limit: u64,
    ) -> Result<Vec<transactions::Model>, DbErr> {
        let mut query = transactions::Entity::find()
            .filter(transactions::Column::TenantId.eq(tenant.as_str()));

        if let Some(start_date) = filter.start_date {
            query = query.filter(transactions::Column::Date.gte(start_date));
        }
        if let Some(end_date) = filter.end_date {
            query = query.filter(transactions::Column::Date.lte(end_date));
        }
        if let Some(category) = &filter.category {
            query = query.filter(transactions::Column::Category.eq(category));
        }

        query
            .order_by_desc(transactions::Column::Date)
            .limit(limit)
            .all(&self.db)
            .await
    }

    /// Finds the tenant's transactions matching date, amount, and category
    /// exactly.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn search(
        &self,
        tenant: &TenantId,
        date: NaiveDate,
        amount: Decimal,
        category: &str,
    ) -> Result<Vec<transactions::Model>, DbErr> {
        transactions::Entity::find()
            .filter(transactions::Column::TenantId.eq(tenant.as_str()))
            .filter(transactions::Column::Date.eq(date))
            .filter(transactions::Column::Amount.eq(amount))
            .filter(transactions::Column::Category.eq(category))
            .all(&self.db)
            .await
    }

    /// Updates the amount of one of the tenant's transactions.
    ///
    /// Returns the number of affected rows: zero when the id does not exist
    /// or belongs to another tenant.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn update_amount(
        &self,
        tenant: &TenantId,
        id: i64,
        new_amount: Decimal,
    ) -> Result<u64, DbErr> {
        let result = transactions::Entity::update_many()
            .col_expr(transactions::Column::Amount, Expr::value(new_amount))
            .filter(transactions::Column::Id.eq(id))
            .filter(transactions::Column::TenantId.eq(tenant.as_str()))
            .exec(&self.db)
            .await?;

        debug!(tenant = %tenant, id, rows = result.rows_affected, "Updated transaction amount");
        Ok(result.rows_affected)
    }

    /// Deletes one of the tenant's transactions. Deletion is physical.
    ///
    /// Returns the number of deleted rows: zero when the id does not exist
    /// or belongs to another tenant.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete(&self, tenant: &TenantId, id: i64) -> Result<u64, DbErr> {
        let result = transactions::Entity::delete_many()
            .filter(transactions::Column::Id.eq(id))
            .filter(transactions::Column::TenantId.eq(tenant.as_str()))
            .exec(&self.db)
            .await?;

        debug!(tenant = %tenant, id, rows = result.rows_affected, "Deleted transaction");
        Ok(result.rows_affected)
    }

    /// Fetches `(kind, amount)` pairs for the tenant within an optional date
    /// window, for summary computation.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn kind_amount_pairs(
        &self,
        tenant: &TenantId,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<(String, Decimal)>, DbErr> {
        let mut query = transactions::Entity::find()
            .select_only()
            .column(transactions::Column::Kind)
            .column(transactions::Column::Amount)
            .filter(transactions::Column::TenantId.eq(tenant.as_str()));

        if let Some(start_date) = start_date {
            query = query.filter(transactions::Column::Date.gte(start_date));
        }
        if let Some(end_date) = end_date {
            query = query.filter(transactions::Column::Date.lte(end_date));
        }

        query.into_tuple().all(&self.db).await
    }

    /// Sums the tenant's expense amounts dated on/after `month_start`.
    ///
    /// Only expense-kind rows count; credits never affect budget evaluation.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn sum_month_expenses(
        &self,
        tenant: &TenantId,
        month_start: NaiveDate,
    ) -> Result<Decimal, DbErr> {
        let amounts: Vec<Decimal> = transactions::Entity::find()
            .select_only()
            .column(transactions::Column::Amount)
            .filter(transactions::Column::TenantId.eq(tenant.as_str()))
            .filter(transactions::Column::Kind.eq(TransactionKind::Expense.as_str()))
            .filter(transactions::Column::Date.gte(month_start))
            .into_tuple()
            .all(&self.db)
            .await?;

        Ok(amounts.into_iter().sum())
    }
}
