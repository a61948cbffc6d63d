// HTTP API routes
//
// Person resource handlers and the DTOs shared with the auth routes.

pub mod common;
pub mod persons;

pub use common::{AuthErrorResponse, ErrorResponse};
