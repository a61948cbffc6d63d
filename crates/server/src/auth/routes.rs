// Authentication HTTP routes
// Decision: Login and logout are public; neither goes through the gate
// Decision: Logout is stateless and revokes nothing, issued tokens live until expiry

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::middleware::AuthState;
use crate::api::common::AuthErrorResponse;
use crate::error::ApiError;

/// Login request
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "felipe")]
    pub user: String,
    #[schema(example = "123")]
    pub pwd: String,
}

/// Authentication status returned by login and logout
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    /// Whether the caller holds a valid token after this call.
    #[serde(rename = "auth")]
    pub authenticated: bool,
    /// Issued token, `null` after logout.
    pub token: Option<String>,
}

impl TokenResponse {
    pub fn authenticated(token: String) -> Self {
        Self {
            authenticated: true,
            token: Some(token),
        }
    }

    pub fn signed_out() -> Self {
        Self {
            authenticated: false,
            token: None,
        }
    }
}

/// Create auth routes
pub fn routes(state: AuthState) -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/logout", get(logout))
        .with_state(state)
}

/// POST /login - Exchange the fixed credentials for a token
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 400, description = "Malformed request body", body = crate::api::common::ErrorResponse),
        (status = 500, description = "Invalid login", body = AuthErrorResponse)
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AuthState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, ApiError> {
    let Json(req) = payload?;

    if !state.config.credentials.matches(&req.user, &req.pwd) {
        tracing::info!(user = %req.user, "Login rejected");
        return Err(ApiError::InvalidCredentials);
    }

    let identity = state.config.credentials.identity;
    let token = state.jwt_service.issue(identity).map_err(|e| {
        tracing::error!("Failed to issue token: {}", e);
        ApiError::Internal("Failed to issue token".to_string())
    })?;

    tracing::info!(identity, "Login succeeded");
    Ok(Json(TokenResponse::authenticated(token)))
}

/// GET /logout - Report a signed-out state
#[utoipa::path(
    get,
    path = "/logout",
    responses(
        (status = 200, description = "Signed out", body = TokenResponse)
    ),
    tag = "auth"
)]
pub async fn logout() -> Json<TokenResponse> {
    Json(TokenResponse::signed_out())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_signed_out_serializes_null_token() {
        let value = serde_json::to_value(TokenResponse::signed_out()).unwrap();
        assert_eq!(value, json!({"auth": false, "token": null}));
    }

    #[test]
    fn test_authenticated_serializes_token() {
        let value = serde_json::to_value(TokenResponse::authenticated("abc".to_string())).unwrap();
        assert_eq!(value, json!({"auth": true, "token": "abc"}));
    }
}
