// Router assembly
//
// Public routes (health, login, logout, docs) plus the gated person routes.

use axum::{routing::get, Json, Router};
use pessoas_core::PersonStore;
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api;
use crate::auth::{self, AuthState};
use crate::openapi::ApiDoc;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the complete application router
pub fn build_router(store: Arc<PersonStore>, auth_state: AuthState) -> Router {
    let persons_state = api::persons::AppState::new(store);

    Router::new()
        .route("/health", get(health))
        .merge(api::persons::routes(persons_state, auth_state.clone()))
        .merge(auth::routes(auth_state))
        .merge(SwaggerUi::new("/api-docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}
