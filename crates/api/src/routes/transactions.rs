//! Transaction tool routes.
//!
//! The seven ledger operations are exposed as named tool invocations. Every
//! handler resolves the tenant from the authenticated request context and
//! passes it to the repository layer; no handler ever queries unscoped.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info, warn};

use crate::{AppState, middleware::AuthTenant};
use tally_core::budget::{BudgetService, month_start};
use tally_core::ledger::{
    DEFAULT_LIST_LIMIT, LedgerService, NewTransaction, TransactionFilter, TransactionKind,
    validate_new_transaction,
};
use tally_db::entities::transactions;
use tally_db::repositories::{BudgetRepository, TransactionRepository};
use tally_shared::TenantId;

/// Creates the transaction tool routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/tools/add_transaction", post(add_transaction))
        .route("/tools/list_expenses", post(list_expenses))
        .route("/tools/get_summary", post(get_summary))
        .route("/tools/search_transactions", post(search_transactions))
        .route("/tools/update_transaction", post(update_transaction_by_id))
        .route("/tools/delete_transaction", post(delete_transaction_by_id))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for adding a transaction.
#[derive(Debug, Deserialize)]
pub struct AddTransactionRequest {
    /// Transaction amount, always positive.
    pub amount: Decimal,
    /// Category label.
    pub category: String,
    /// Optional subcategory label.
    #[serde(default)]
    pub subcategory: String,
    /// Optional free-text note.
    #[serde(default)]
    pub note: String,
    /// Transaction date (YYYY-MM-DD); defaults to today.
    pub date: Option<NaiveDate>,
    /// Whether this is a credit rather than an expense.
    #[serde(default)]
    pub is_credit: bool,
}

/// Request body for listing transactions.
#[derive(Debug, Deserialize)]
pub struct ListExpensesRequest {
    /// Include transactions dated on/after this date.
    pub start_date: Option<NaiveDate>,
    /// Include transactions dated on/before this date.
    pub end_date: Option<NaiveDate>,
    /// Include only transactions with this category.
    pub category: Option<String>,
    /// Maximum number of rows (default: 50).
    pub limit: Option<u64>,
}

/// Request body for the summary tool.
#[derive(Debug, Deserialize)]
pub struct GetSummaryRequest {
    /// Include transactions dated on/after this date.
    pub start_date: Option<NaiveDate>,
    /// Include transactions dated on/before this date.
    pub end_date: Option<NaiveDate>,
}

/// Request body for the exact-match search tool.
///
/// Search is the precursor to update/delete: those operate on store-assigned
/// ids, which are otherwise never exposed.
#[derive(Debug, Deserialize)]
pub struct SearchTransactionsRequest {
    /// Transaction date (YYYY-MM-DD).
    pub date: NaiveDate,
    /// Transaction amount.
    pub amount: Decimal,
    /// Category label.
    pub category: String,
}

/// Request body for updating a transaction amount.
#[derive(Debug, Deserialize)]
pub struct UpdateTransactionRequest {
    /// Store-assigned transaction id, found via search.
    pub transaction_id: i64,
    /// The new amount; omitting it makes the operation a no-op.
    pub new_amount: Option<Decimal>,
}

/// Request body for deleting a transaction.
#[derive(Debug, Deserialize)]
pub struct DeleteTransactionRequest {
    /// Store-assigned transaction id, found via search.
    pub transaction_id: i64,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST `/tools/add_transaction` - Log a new expense or credit.
async fn add_transaction(
    State(state): State<AppState>,
    auth: AuthTenant,
    Json(payload): Json<AddTransactionRequest>,
) -> impl IntoResponse {
    let tenant = auth.tenant_id();

    let kind = if payload.is_credit {
        TransactionKind::Credit
    } else {
        TransactionKind::Expense
    };

    let input = NewTransaction {
        amount: payload.amount,
        kind,
        category: payload.category,
        subcategory: payload.subcategory,
        note: payload.note,
        date: payload.date.unwrap_or_else(|| Utc::now().date_naive()),
    };

    if let Err(e) = validate_new_transaction(&input) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "validation_error",
                "message": e.to_string()
            })),
        )
            .into_response();
    }

    let repo = TransactionRepository::new((*state.db).clone());
    let inserted = match repo.insert(tenant, &input).await {
        Ok(model) => model,
        Err(e) => {
            error!(error = %e, "Failed to insert transaction");
            return internal_error();
        }
    };

    info!(tenant = %tenant, id = inserted.id, kind = %kind, "Transaction logged");

    let mut message = format!("Logged {kind}: {}.", input.amount);

    // The insert stands regardless of what budget evaluation does; a failure
    // here degrades to "no budget message", never to an error.
    if kind == TransactionKind::Expense {
        if let Some(budget_msg) = budget_message(&state, tenant, input.amount, input.date).await {
            message.push('\n');
            message.push_str(&budget_msg);
        }
    }

    (StatusCode::OK, Json(json!({ "message": message }))).into_response()
}

/// POST `/tools/list_expenses` - List transactions with optional filters.
async fn list_expenses(
    State(state): State<AppState>,
    auth: AuthTenant,
    Json(payload): Json<ListExpensesRequest>,
) -> impl IntoResponse {
    let filter = TransactionFilter {
        start_date: payload.start_date,
        end_date: payload.end_date,
        category: payload.category,
    };
    let limit = payload.limit.unwrap_or(DEFAULT_LIST_LIMIT);

    let repo = TransactionRepository::new((*state.db).clone());
    match repo.list(auth.tenant_id(), &filter, limit).await {
        Ok(rows) if rows.is_empty() => {
            (StatusCode::OK, Json(json!({ "message": "No transactions found." }))).into_response()
        }
        Ok(rows) => {
            let items: Vec<serde_json::Value> = rows.iter().map(transaction_json).collect();
            (StatusCode::OK, Json(json!({ "transactions": items }))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to list transactions");
            internal_error()
        }
    }
}

/// POST `/tools/get_summary` - Total expenses and credits within a period.
async fn get_summary(
    State(state): State<AppState>,
    auth: AuthTenant,
    Json(payload): Json<GetSummaryRequest>,
) -> impl IntoResponse {
    let repo = TransactionRepository::new((*state.db).clone());
    match repo
        .kind_amount_pairs(auth.tenant_id(), payload.start_date, payload.end_date)
        .await
    {
        Ok(rows) => {
            let summary = LedgerService::summarize(&rows);
            (StatusCode::OK, Json(summary)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to summarize transactions");
            internal_error()
        }
    }
}

/// POST `/tools/search_transactions` - Exact-match lookup returning ids.
async fn search_transactions(
    State(state): State<AppState>,
    auth: AuthTenant,
    Json(payload): Json<SearchTransactionsRequest>,
) -> impl IntoResponse {
    let repo = TransactionRepository::new((*state.db).clone());
    match repo
        .search(auth.tenant_id(), payload.date, payload.amount, &payload.category)
        .await
    {
        Ok(rows) if rows.is_empty() => (
            StatusCode::OK,
            Json(json!({ "message": "No matching transactions found." })),
        )
            .into_response(),
        Ok(rows) => {
            let lines: Vec<String> = rows.iter().map(format_match_line).collect();
            (StatusCode::OK, Json(json!({ "message": lines.join("\n") }))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to search transactions");
            internal_error()
        }
    }
}

/// POST `/tools/update_transaction` - Update an amount by store-assigned id.
async fn update_transaction_by_id(
    State(state): State<AppState>,
    auth: AuthTenant,
    Json(payload): Json<UpdateTransactionRequest>,
) -> impl IntoResponse {
    let Some(new_amount) = payload.new_amount else {
        return (StatusCode::OK, Json(json!({ "message": "Nothing to update." }))).into_response();
    };

    if new_amount <= Decimal::ZERO {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "validation_error",
                "message": "Transaction amount must be positive"
            })),
        )
            .into_response();
    }

    let repo = TransactionRepository::new((*state.db).clone());
    match repo
        .update_amount(auth.tenant_id(), payload.transaction_id, new_amount)
        .await
    {
        Ok(rows) if rows > 0 => {
            info!(tenant = %auth.tenant_id(), id = payload.transaction_id, "Transaction updated");
            (
                StatusCode::OK,
                Json(json!({
                    "message": format!(
                        "Transaction {} successfully updated to {new_amount}.",
                        payload.transaction_id
                    )
                })),
            )
                .into_response()
        }
        // Nonexistent ids and other tenants' ids are deliberately reported
        // identically so existence never leaks across tenants.
        Ok(_) => (
            StatusCode::OK,
            Json(json!({ "message": "Transaction not found or unauthorized." })),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Failed to update transaction");
            internal_error()
        }
    }
}

/// POST `/tools/delete_transaction` - Delete a transaction by store-assigned id.
async fn delete_transaction_by_id(
    State(state): State<AppState>,
    auth: AuthTenant,
    Json(payload): Json<DeleteTransactionRequest>,
) -> impl IntoResponse {
    let repo = TransactionRepository::new((*state.db).clone());
    match repo.delete(auth.tenant_id(), payload.transaction_id).await {
        Ok(rows) if rows > 0 => {
            info!(tenant = %auth.tenant_id(), id = payload.transaction_id, "Transaction deleted");
            (
                StatusCode::OK,
                Json(json!({
                    "message": format!(
                        "Transaction {} successfully deleted.",
                        payload.transaction_id
                    )
                })),
            )
                .into_response()
        }
        Ok(_) => (
            StatusCode::OK,
            Json(json!({ "message": "Transaction not found or unauthorized." })),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Failed to delete transaction");
            internal_error()
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Evaluates the tenant's monthly budget against a just-inserted expense.
///
/// Runs after the insert, so the monthly sum already contains the new row
/// whenever its date falls in the current month; it is subtracted back out so
/// the expense is counted exactly once, as the proposed amount.
///
/// Returns `None` when no budget is configured or when evaluation fails;
/// neither case may surface as an error to the caller.
async fn budget_message(
    state: &AppState,
    tenant: &TenantId,
    amount: Decimal,
    date: NaiveDate,
) -> Option<String> {
    let budget_repo = BudgetRepository::new((*state.db).clone());
    let budget = match budget_repo.get(tenant).await {
        Ok(budget) => budget?,
        Err(e) => {
            warn!(error = %e, "Budget lookup failed; skipping budget message");
            return None;
        }
    };

    let start = month_start(Utc::now().date_naive());
    let repo = TransactionRepository::new((*state.db).clone());
    let spent = match repo.sum_month_expenses(tenant, start).await {
        Ok(spent) => spent,
        Err(e) => {
            warn!(error = %e, "Monthly spend query failed; skipping budget message");
            return None;
        }
    };

    let month_spend = if date >= start { spent - amount } else { spent };

    BudgetService::classify(Some(budget), month_spend, amount).message()
}

fn transaction_json(row: &transactions::Model) -> serde_json::Value {
    json!({
        "id": row.id,
        "date": row.date.to_string(),
        "amount": row.amount,
        "kind": row.kind,
        "category": row.category,
        "subcategory": row.subcategory,
        "note": row.note,
    })
}

fn format_match_line(row: &transactions::Model) -> String {
    format!(
        "ID: {} | {} | {} | {} ({}) | Note: {}",
        row.id, row.date, row.amount, row.category, row.subcategory, row.note
    )
}

fn internal_error() -> axum::response::Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "internal_error",
            "message": "An error occurred"
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use super::*;

    fn sample_row() -> transactions::Model {
        transactions::Model {
            id: 7,
            tenant_id: "ba7816bf8f01cfea".to_string(),
            amount: dec!(42.50),
            kind: "expense".to_string(),
            category: "Travel".to_string(),
            subcategory: "Flights".to_string(),
            note: "conference".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(),
            created_at: chrono::Utc::now().into(),
        }
    }

    #[test]
    fn test_format_match_line() {
        assert_eq!(
            format_match_line(&sample_row()),
            "ID: 7 | 2026-08-06 | 42.50 | Travel (Flights) | Note: conference"
        );
    }

    #[test]
    fn test_transaction_json_omits_tenant() {
        let value = transaction_json(&sample_row());
        assert_eq!(value["id"], 7);
        assert_eq!(value["category"], "Travel");
        assert!(value.get("tenant_id").is_none());
    }
}
