// Authentication module
//
// Token issuance and verification, the gate in front of protected routes,
// and the public login/logout endpoints.

pub mod config;
pub mod jwt;
pub mod middleware;
pub mod routes;

pub use config::{AuthConfig, ConfigError, Credentials, JwtConfig};
pub use jwt::{JwtService, TokenClaims, TokenError};
pub use middleware::{require_token, AuthIdentity, AuthState, TOKEN_HEADER};
pub use routes::routes;
