//! Identity-echo liveness check.

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use crate::{AppState, middleware::AuthTenant};

/// GET `/tools/ping` - Echoes the derived tenant identity.
async fn ping(auth: AuthTenant) -> Json<Value> {
    Json(json!({ "message": format!("pong for {}", auth.tenant_id()) }))
}

/// Creates the ping route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/tools/ping", get(ping))
}
