//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations, hiding
//! the `SeaORM` implementation details from the rest of the application.
//! Every tenant-owned table is accessed exclusively through methods that take
//! the tenant identifier as a mandatory filter.

pub mod budget;
pub mod category;
pub mod transaction;

pub use budget::BudgetRepository;
pub use category::CategoryRepository;
pub use transaction::TransactionRepository;
