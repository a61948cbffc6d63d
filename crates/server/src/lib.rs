// Pessoas server library
// Decision: Shared library for binaries (API server, OpenAPI export) and tests

// API routes and types
pub mod api;

// Authentication: token service, gate, login/logout
pub mod auth;

pub mod app;
pub mod config;
pub mod error;

// OpenAPI spec generation
pub mod openapi;

pub mod telemetry;

pub use app::build_router;
pub use error::ApiError;
