// Common DTOs for public API
//
// These types are shared across multiple API endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standard error response for API endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message describing what went wrong.
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Error body for failed authentication (missing token, rejected token or bad login).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthErrorResponse {
    /// Always `false`.
    #[serde(rename = "auth")]
    pub authenticated: bool,
    /// What went wrong.
    #[schema(example = "No token provided.")]
    pub message: String,
}

impl AuthErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            authenticated: false,
            message: message.into(),
        }
    }
}
