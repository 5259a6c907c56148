//! Authentication middleware for protected routes.
//!
//! Every tool operation is gated on possession of a bearer credential. The
//! credential is never validated against a registry; the derived tenant
//! identifier IS the caller's identity, and all storage is partitioned by it.

use axum::{
    Json,
    extract::{FromRequestParts, Request},
    http::{StatusCode, header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;

use tally_shared::TenantId;

/// Checks that the Authorization header carries a bearer token.
///
/// Returns the full header value; derivation hashes the whole header, prefix
/// included, so the identifier partition matches existing data.
fn bearer_header(header: &str) -> Option<&str> {
    header.starts_with("Bearer ").then_some(header)
}

/// Authentication middleware that binds a tenant identity to the request.
///
/// This middleware:
/// 1. Extracts the Authorization header and requires the `Bearer <token>` form
/// 2. Derives the tenant identifier from the credential
/// 3. Stores the identifier in request extensions for handlers to access
///
/// The binding happens exactly once per request, before any domain logic
/// runs; a missing or malformed credential rejects the request with no side
/// effects. Request extensions are the only carrier of the identity, so
/// concurrent requests from different tenants can never observe each other's
/// identifier.
pub async fn auth_middleware(mut request: Request, next: Next) -> Response {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let Some(credential) = auth_header.and_then(bearer_header) else {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "missing_token",
                "message": "Unauthorized: Please provide a Bearer Token in your config."
            })),
        )
            .into_response();
    };

    match TenantId::derive(credential) {
        Ok(tenant) => {
            request.extensions_mut().insert(tenant);
            next.run(request).await
        }
        Err(_) => (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "invalid_token",
                "message": "Unauthorized: Please provide a Bearer Token in your config."
            })),
        )
            .into_response(),
    }
}

/// Extractor for the authenticated tenant identity.
///
/// Use this in handlers to get the tenant derived by the middleware:
///
/// ```ignore
/// async fn handler(auth: AuthTenant) -> impl IntoResponse {
///     let tenant = auth.tenant_id();
///     // ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthTenant(pub TenantId);

impl AuthTenant {
    /// Returns the tenant identifier.
    #[must_use]
    pub fn tenant_id(&self) -> &TenantId {
        &self.0
    }
}

impl<S> FromRequestParts<S> for AuthTenant
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<serde_json::Value>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<TenantId>()
            .cloned()
            .map(AuthTenant)
            .ok_or_else(|| {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({
                        "error": "unauthorized",
                        "message": "Authentication required"
                    })),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        middleware,
        routing::get,
    };
    use rstest::rstest;
    use tower::ServiceExt;

    use super::*;

    #[test]
    fn test_bearer_header_accepts_bearer_form() {
        assert_eq!(bearer_header("Bearer abc"), Some("Bearer abc"));
    }

    #[rstest]
    #[case("Basic abc")]
    #[case("bearer abc")]
    #[case("abc")]
    #[case("")]
    fn test_bearer_header_rejects_other_schemes(#[case] header: &str) {
        assert_eq!(bearer_header(header), None);
    }

    fn test_router() -> Router {
        async fn whoami(auth: AuthTenant) -> String {
            format!("pong for {}", auth.tenant_id())
        }

        Router::new()
            .route("/whoami", get(whoami))
            .layer(middleware::from_fn(auth_middleware))
    }

    #[tokio::test]
    async fn test_missing_header_is_rejected() {
        let response = test_router()
            .oneshot(HttpRequest::get("/whoami").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_malformed_header_is_rejected() {
        let response = test_router()
            .oneshot(
                HttpRequest::get("/whoami")
                    .header("Authorization", "Token xyz")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_bearer_header_binds_tenant() {
        let response = test_router()
            .oneshot(
                HttpRequest::get("/whoami")
                    .header("Authorization", "Bearer integration-token")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        let expected = TenantId::derive("Bearer integration-token").unwrap();
        assert_eq!(text, format!("pong for {expected}"));
    }

    #[tokio::test]
    async fn test_distinct_credentials_bind_distinct_tenants() {
        let mut bodies = Vec::new();
        for token in ["Bearer one", "Bearer two"] {
            let response = test_router()
                .oneshot(
                    HttpRequest::get("/whoami")
                        .header("Authorization", token)
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            let body = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            bodies.push(String::from_utf8(body.to_vec()).unwrap());
        }

        assert_ne!(bodies[0], bodies[1]);
    }
}
