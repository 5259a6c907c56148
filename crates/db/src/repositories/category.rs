//! Category repository for shared reference data.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::entities::categories;

/// Category repository. Read-only, best-effort; callers fall back to a fixed
/// default list when this store is unreachable.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    db: DatabaseConnection,
}

impl CategoryRepository {
    /// Creates a new category repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all categories with their subcategory lists.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_all(&self) -> Result<Vec<categories::Model>, DbErr> {
        categories::Entity::find()
            .order_by_asc(categories::Column::Name)
            .all(&self.db)
            .await
    }
}
