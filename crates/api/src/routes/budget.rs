//! Budget tool routes.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::{AppState, middleware::AuthTenant};
use tally_db::repositories::BudgetRepository;

/// Creates the budget tool routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/tools/set_budget", post(set_budget))
}

/// Request body for setting the monthly budget.
#[derive(Debug, Deserialize)]
pub struct SetBudgetRequest {
    /// Total monthly budget.
    pub amount: Decimal,
}

/// POST `/tools/set_budget` - Set or replace the tenant's monthly budget.
///
/// Upsert semantics: the previous setting, if any, is overwritten wholesale.
async fn set_budget(
    State(state): State<AppState>,
    auth: AuthTenant,
    Json(payload): Json<SetBudgetRequest>,
) -> impl IntoResponse {
    let repo = BudgetRepository::new((*state.db).clone());
    match repo.upsert(auth.tenant_id(), payload.amount).await {
        Ok(()) => {
            info!(tenant = %auth.tenant_id(), amount = %payload.amount, "Budget updated");
            (
                StatusCode::OK,
                Json(json!({
                    "message": format!("Budget updated to {}.", payload.amount)
                })),
            )
                .into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to set budget");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "internal_error",
                    "message": "An error occurred"
                })),
            )
                .into_response()
        }
    }
}
