// Person CRUD HTTP routes
//
// Every route here sits behind the token gate.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    middleware,
    routing::get,
    Extension, Json, Router,
};
use pessoas_core::{Person, PersonId, PersonStore, UpdatePerson};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

use super::common::{AuthErrorResponse, ErrorResponse};
use crate::auth::{require_token, AuthIdentity, AuthState};
use crate::error::ApiError;

/// Request to add a person to the collection
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreatePersonRequest {
    /// Identifier (number or string). Not checked for uniqueness.
    #[schema(value_type = String, example = "5")]
    pub id: PersonId,
    #[schema(example = "Bea")]
    pub nome: String,
    #[schema(example = "São Paulo")]
    pub cidade: String,
}

impl From<CreatePersonRequest> for Person {
    fn from(req: CreatePersonRequest) -> Self {
        Person {
            id: req.id,
            nome: req.nome,
            cidade: req.cidade,
        }
    }
}

/// App state for person routes
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PersonStore>,
}

impl AppState {
    pub fn new(store: Arc<PersonStore>) -> Self {
        Self { store }
    }
}

/// Create person routes, all guarded by the token gate
pub fn routes(state: AppState, auth_state: AuthState) -> Router {
    Router::new()
        .route("/pessoa", get(list_persons).post(create_person))
        .route(
            "/pessoa/:id",
            get(get_person).put(update_person).delete(delete_person),
        )
        .route_layer(middleware::from_fn_with_state(auth_state, require_token))
        .with_state(state)
}

/// GET /pessoa - List the whole collection
#[utoipa::path(
    get,
    path = "/pessoa",
    responses(
        (status = 200, description = "Full person collection", body = Vec<Person>),
        (status = 401, description = "No token provided", body = AuthErrorResponse),
        (status = 500, description = "Token rejected", body = AuthErrorResponse)
    ),
    security(("access_token" = [])),
    tag = "persons"
)]
pub async fn list_persons(State(state): State<AppState>) -> Json<Vec<Person>> {
    Json(state.store.list())
}

/// GET /pessoa/{id} - Get a person by id
#[utoipa::path(
    get,
    path = "/pessoa/{id}",
    params(
        ("id" = String, Path, description = "Person id")
    ),
    responses(
        (status = 200, description = "Person found", body = Person),
        (status = 404, description = "Person not found (empty body)"),
        (status = 401, description = "No token provided", body = AuthErrorResponse),
        (status = 500, description = "Token rejected", body = AuthErrorResponse)
    ),
    security(("access_token" = [])),
    tag = "persons"
)]
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Person>, StatusCode> {
    let person = state.store.find_by_id(&id).map_err(|e| {
        tracing::debug!("{}", e);
        StatusCode::NOT_FOUND
    })?;

    Ok(Json(person))
}

/// POST /pessoa - Append a person and return the updated collection
#[utoipa::path(
    post,
    path = "/pessoa",
    request_body = CreatePersonRequest,
    responses(
        (status = 201, description = "Person added; full collection returned", body = Vec<Person>),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 401, description = "No token provided", body = AuthErrorResponse),
        (status = 500, description = "Token rejected", body = AuthErrorResponse)
    ),
    security(("access_token" = [])),
    tag = "persons"
)]
pub async fn create_person(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthIdentity>,
    payload: Result<Json<CreatePersonRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Vec<Person>>), ApiError> {
    let Json(req) = payload?;
    let person = Person::from(req);

    tracing::info!(id = %person.id, by = identity.0, "Creating person");
    let persons = state.store.append(person);

    Ok((StatusCode::CREATED, Json(persons)))
}

/// PUT /pessoa/{id} - Overwrite name and city of a person
#[utoipa::path(
    put,
    path = "/pessoa/{id}",
    params(
        ("id" = String, Path, description = "Person id")
    ),
    request_body = UpdatePerson,
    responses(
        (status = 200, description = "Person updated", body = Person),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 404, description = "Person not found", body = ErrorResponse),
        (status = 401, description = "No token provided", body = AuthErrorResponse),
        (status = 500, description = "Token rejected", body = AuthErrorResponse)
    ),
    security(("access_token" = [])),
    tag = "persons"
)]
pub async fn update_person(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthIdentity>,
    Path(id): Path<String>,
    payload: Result<Json<UpdatePerson>, JsonRejection>,
) -> Result<Json<Person>, ApiError> {
    let Json(update) = payload?;

    let person = state.store.update_fields(&id, update)?;
    tracing::info!(id = %person.id, by = identity.0, "Updated person");

    Ok(Json(person))
}

/// DELETE /pessoa/{id} - Remove a person and return it
#[utoipa::path(
    delete,
    path = "/pessoa/{id}",
    params(
        ("id" = String, Path, description = "Person id")
    ),
    responses(
        (status = 200, description = "Person removed", body = Person),
        (status = 404, description = "Person not found", body = ErrorResponse),
        (status = 401, description = "No token provided", body = AuthErrorResponse),
        (status = 500, description = "Token rejected", body = AuthErrorResponse)
    ),
    security(("access_token" = [])),
    tag = "persons"
)]
pub async fn delete_person(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthIdentity>,
    Path(id): Path<String>,
) -> Result<Json<Person>, ApiError> {
    let person = state.store.remove_by_id(&id)?;
    tracing::info!(id = %person.id, by = identity.0, "Deleted person");

    Ok(Json(person))
}
