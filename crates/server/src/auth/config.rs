// Authentication configuration loaded from environment variables.
// Decision: The signing secret has no default; startup fails without it
// Decision: A single fixed credential pair, no user table

use std::time::Duration;
use thiserror::Error;

/// Username accepted by the login route
pub const LOGIN_USER: &str = "felipe";
/// Password accepted by the login route
pub const LOGIN_PASSWORD: &str = "123";
/// Identity embedded in tokens issued at login
pub const LOGIN_IDENTITY: i64 = 1;

/// Default token lifetime (30 seconds)
pub const DEFAULT_TOKEN_LIFETIME: Duration = Duration::from_secs(30);

/// Configuration errors surfaced at startup
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("AUTH_JWT_SECRET (or SECRET) environment variable is required")]
    MissingSecret,
    #[error("invalid AUTH_JWT_TOKEN_LIFETIME: {0}")]
    InvalidLifetime(String),
}

/// JWT configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Secret key for signing JWTs
    pub secret: String,
    /// Token lifetime
    pub token_lifetime: Duration,
}

/// Fixed login credentials
#[derive(Debug, Clone)]
pub struct Credentials {
    pub user: String,
    pub password: String,
    /// Identity issued to whoever presents these credentials
    pub identity: i64,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            user: LOGIN_USER.to_string(),
            password: LOGIN_PASSWORD.to_string(),
            identity: LOGIN_IDENTITY,
        }
    }
}

impl Credentials {
    pub fn matches(&self, user: &str, password: &str) -> bool {
        user == self.user && password == self.password
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt: JwtConfig,
    pub credentials: Credentials,
}

impl AuthConfig {
    /// Build a configuration with the given secret and default settings
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            jwt: JwtConfig {
                secret: secret.into(),
                token_lifetime: DEFAULT_TOKEN_LIFETIME,
            },
            credentials: Credentials::default(),
        }
    }

    /// Load configuration from environment variables
    ///
    /// - `AUTH_JWT_SECRET` (fallback `SECRET`): required signing secret
    /// - `AUTH_JWT_TOKEN_LIFETIME`: token lifetime in seconds (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = std::env::var("AUTH_JWT_SECRET")
            .or_else(|_| std::env::var("SECRET"))
            .ok();
        let lifetime = std::env::var("AUTH_JWT_TOKEN_LIFETIME").ok();

        Self::from_values(secret.as_deref(), lifetime.as_deref())
    }

    fn from_values(secret: Option<&str>, lifetime: Option<&str>) -> Result<Self, ConfigError> {
        let secret = secret
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingSecret)?;

        // Expiry is a signed Unix timestamp, so the lifetime must fit in i64
        let token_lifetime = match lifetime {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| i64::try_from(*secs).is_ok())
                .map(Duration::from_secs)
                .ok_or_else(|| ConfigError::InvalidLifetime(raw.to_string()))?,
            None => DEFAULT_TOKEN_LIFETIME,
        };

        let mut config = Self::with_secret(secret);
        config.jwt.token_lifetime = token_lifetime;
        Ok(config)
    }
}
