// API error taxonomy
// Decision: A rejected token and a bad login both answer 500
// Decision: Auth failures use the `{auth, message}` body, everything else `{error}`

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pessoas_core::StoreError;
use thiserror::Error;

use crate::api::common::{AuthErrorResponse, ErrorResponse};
use crate::auth::jwt::TokenError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// No token was supplied on a protected route
    #[error("No token provided.")]
    Unauthenticated,

    /// A token was supplied but failed verification
    #[error("Failed to authenticate token.")]
    AuthenticationFailed(#[source] TokenError),

    #[error(transparent)]
    NotFound(#[from] StoreError),

    /// Login with credentials other than the configured pair
    #[error("Invalid login.")]
    InvalidCredentials,

    /// Request body could not be parsed into the expected shape
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::AuthenticationFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidCredentials => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::Unauthenticated
            | ApiError::AuthenticationFailed(_)
            | ApiError::InvalidCredentials => {
                (status, Json(AuthErrorResponse::new(self.to_string()))).into_response()
            }
            ApiError::NotFound(_) | ApiError::Validation(_) | ApiError::Internal(_) => {
                (status, Json(ErrorResponse::new(self.to_string()))).into_response()
            }
        }
    }
}
