// Pessoas API server
// Decision: Secret comes from the environment (optionally via .env); no default
// Decision: Multi-threaded runtime; the store serializes its own mutations

use anyhow::{Context, Result};
use pessoas_core::PersonStore;
use pessoas_server::auth::{AuthConfig, AuthState};
use pessoas_server::config::{load_seed, ServerConfig};
use pessoas_server::telemetry::{init_telemetry, TelemetryConfig};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; variables may come from the process environment
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    let mut telemetry_config = TelemetryConfig::from_env();
    if telemetry_config.log_filter.is_none() {
        telemetry_config.log_filter = Some("pessoas_server=debug,tower_http=debug".to_string());
    }
    telemetry_config.service_version = Some(env!("CARGO_PKG_VERSION").to_string());
    init_telemetry(telemetry_config);

    tracing::info!(dotenv = dotenv_loaded, "pessoas-server starting...");

    let auth_config =
        AuthConfig::from_env().context("Failed to load authentication configuration")?;
    let auth_state = AuthState::new(auth_config);
    tracing::info!(
        token_lifetime_secs = auth_state.jwt_service.token_lifetime_secs(),
        "Authentication configured"
    );

    let server_config = ServerConfig::from_env()?;

    let seed = load_seed(server_config.seed_path.as_deref()).context("Failed to load seed")?;
    let store = Arc::new(PersonStore::with_seed(seed));

    let app = pessoas_server::build_router(store, auth_state);

    let listener = tokio::net::TcpListener::bind(server_config.addr)
        .await
        .context("Failed to bind to address")?;
    tracing::info!("HTTP server listening on {}", server_config.addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
