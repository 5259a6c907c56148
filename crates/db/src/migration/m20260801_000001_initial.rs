//! Initial database migration.
//!
//! Creates the transactions ledger, per-tenant settings, and shared category
//! reference tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // ============================================================
        // PART 1: CORE TABLES
        // ============================================================
        db.execute_unprepared(TRANSACTIONS_SQL).await?;
        db.execute_unprepared(SETTINGS_SQL).await?;
        db.execute_unprepared(CATEGORIES_SQL).await?;

        // ============================================================
        // PART 2: SEED DATA
        // ============================================================
        db.execute_unprepared(SEED_CATEGORIES_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

// ============================================================
// SQL CONSTANTS
// ============================================================

const TRANSACTIONS_SQL: &str = r"
-- Ledger rows. Every access path filters by tenant_id; the composite index
-- covers the tenant-scoped date-ordered queries.
CREATE TABLE transactions (
    id BIGSERIAL PRIMARY KEY,
    tenant_id TEXT NOT NULL,
    amount NUMERIC(15, 2) NOT NULL CHECK (amount > 0),
    kind TEXT NOT NULL,
    category TEXT NOT NULL,
    subcategory TEXT NOT NULL DEFAULT '',
    note TEXT NOT NULL DEFAULT '',
    date DATE NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_transactions_tenant_date ON transactions (tenant_id, date DESC);
CREATE INDEX idx_transactions_tenant_kind_date ON transactions (tenant_id, kind, date);
";

const SETTINGS_SQL: &str = r"
-- One budget row per tenant, replaced wholesale by set_budget.
CREATE TABLE settings (
    tenant_id TEXT PRIMARY KEY,
    total_budget NUMERIC(15, 2) NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const CATEGORIES_SQL: &str = r"
-- Shared read-only category reference data (not tenant-scoped).
CREATE TABLE categories (
    name TEXT PRIMARY KEY,
    subcategories JSONB NOT NULL DEFAULT '[]'
);
";

const SEED_CATEGORIES_SQL: &str = r#"
INSERT INTO categories (name, subcategories) VALUES
    ('Food & Dining', '[]'),
    ('Transportation', '[]'),
    ('Shopping', '[]'),
    ('Entertainment', '[]'),
    ('Bills & Utilities', '[]'),
    ('Healthcare', '[]'),
    ('Travel', '[]'),
    ('Education', '[]'),
    ('Business', '[]'),
    ('Other', '[]')
ON CONFLICT (name) DO NOTHING;
"#;

const DROP_ALL_SQL: &str = r"
DROP TABLE IF EXISTS categories;
DROP TABLE IF EXISTS settings;
DROP TABLE IF EXISTS transactions;
";
