// Authentication gate for protected routes
// Decision: Token travels in the `x-access-token` header
// Decision: A missing token is rejected before any verification work is done

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use std::borrow::Cow;
use std::sync::Arc;

use super::{config::AuthConfig, jwt::JwtService};
use crate::error::ApiError;

/// Request header carrying the authentication token
pub const TOKEN_HEADER: &str = "x-access-token";

/// Verified identity attached to the request by the gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthIdentity(pub i64);

/// Auth state shared across routes
#[derive(Clone)]
pub struct AuthState {
    pub config: AuthConfig,
    pub jwt_service: Arc<JwtService>,
}

impl AuthState {
    pub fn new(config: AuthConfig) -> Self {
        let jwt_service = Arc::new(JwtService::new(&config.jwt));
        Self {
            config,
            jwt_service,
        }
    }
}

/// Middleware that requires a valid token before the wrapped handler runs
pub async fn require_token(
    State(auth_state): State<AuthState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let identity = {
        let token = extract_token(req.headers()).ok_or_else(|| {
            tracing::debug!(path = %req.uri().path(), "Rejected request without token");
            ApiError::Unauthenticated
        })?;

        auth_state.jwt_service.verify(&token).map_err(|e| {
            tracing::debug!(path = %req.uri().path(), "JWT validation failed: {}", e);
            ApiError::AuthenticationFailed(e)
        })?
    };

    req.extensions_mut().insert(AuthIdentity(identity));

    Ok(next.run(req).await)
}

/// Read the token header. An empty value counts as absent.
fn extract_token(headers: &HeaderMap) -> Option<Cow<'_, str>> {
    let value = headers.get(TOKEN_HEADER)?;
    let token = match String::from_utf8_lossy(value.as_bytes()) {
        Cow::Borrowed(s) => Cow::Borrowed(s.trim()),
        Cow::Owned(s) => Cow::Owned(s.trim().to_string()),
    };
    (!token.is_empty()).then_some(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{HeaderValue, Request, StatusCode},
        middleware,
        routing::get,
        Extension, Router,
    };
    use tower::ServiceExt;

    fn test_state() -> AuthState {
        AuthState::new(AuthConfig::with_secret("middleware-test-secret"))
    }

    fn protected_app(state: AuthState) -> Router {
        Router::new()
            .route(
                "/whoami",
                get(|Extension(identity): Extension<AuthIdentity>| async move {
                    identity.0.to_string()
                }),
            )
            .route_layer(middleware::from_fn_with_state(state, require_token))
    }

    #[test]
    fn test_extract_token() {
        let mut headers = HeaderMap::new();
        assert!(extract_token(&headers).is_none());

        headers.insert(TOKEN_HEADER, HeaderValue::from_static(""));
        assert!(extract_token(&headers).is_none());

        headers.insert(TOKEN_HEADER, HeaderValue::from_static("  abc  "));
        assert_eq!(extract_token(&headers).as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn test_missing_token_is_unauthenticated() {
        let response = protected_app(test_state())
            .oneshot(Request::builder().uri("/whoami").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_bad_token_is_authentication_failure() {
        let response = protected_app(test_state())
            .oneshot(
                Request::builder()
                    .uri("/whoami")
                    .header(TOKEN_HEADER, "not-a-jwt")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_valid_token_attaches_identity() {
        use http_body_util::BodyExt;

        let state = test_state();
        let token = state.jwt_service.issue(7).unwrap();

        let response = protected_app(state)
            .oneshot(
                Request::builder()
                    .uri("/whoami")
                    .header(TOKEN_HEADER, token)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"7");
    }
}
