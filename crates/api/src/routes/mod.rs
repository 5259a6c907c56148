//! API route definitions.

use axum::{Router, middleware};

use crate::{AppState, middleware::auth::auth_middleware};

pub mod budget;
pub mod categories;
pub mod health;
pub mod ping;
pub mod transactions;

/// Creates the API router with all routes.
///
/// Tool operations require a bearer credential; the health probe and the
/// read-only categories resource are public.
pub fn api_routes() -> Router<AppState> {
    // Protected tool routes that require authentication
    let protected_routes = Router::new()
        .merge(ping::routes())
        .merge(transactions::routes())
        .merge(budget::routes())
        .layer(middleware::from_fn(auth_middleware));

    // Combine public and protected routes
    Router::new()
        .merge(health::routes())
        .merge(categories::routes())
        .merge(protected_routes)
}
