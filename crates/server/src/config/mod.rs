// Server configuration loading
//
// Process-level settings read once at startup. Authentication settings live in
// `auth::config`; the person seed dataset is loaded by `seed`.

pub mod seed;

pub use seed::{load_seed, parse_seed};

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Default listen address
pub const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:3000";

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    pub addr: SocketAddr,
    /// Optional path to a JSON seed file; the embedded dataset is used when absent
    pub seed_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// - `SERVER_ADDR`: listen address (default: `0.0.0.0:3000`)
    /// - `PERSON_SEED_PATH`: JSON file with the initial person collection
    pub fn from_env() -> Result<Self> {
        let addr_str =
            std::env::var("SERVER_ADDR").unwrap_or_else(|_| DEFAULT_SERVER_ADDR.to_string());
        let addr = addr_str
            .parse()
            .with_context(|| format!("Invalid SERVER_ADDR: {}", addr_str))?;

        let seed_path = std::env::var("PERSON_SEED_PATH")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self { addr, seed_path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_addr_parses() {
        let addr: SocketAddr = DEFAULT_SERVER_ADDR.parse().unwrap();
        assert_eq!(addr.port(), 3000);
    }
}
