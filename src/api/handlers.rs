//! HTTP API handlers.
//!
//! All errors are resolved locally into responses via [`ApiError`]; a
//! malformed request never propagates past the handler layer. The `:id`
//! segment is extracted as text and parsed here so that parse failures
//! produce the contract's 400 body instead of a framework rejection.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::error::ApiError;
use crate::store::TodoStore;

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The in-memory todo collection.
    pub store: TodoStore,
}

impl AppState {
    /// Create app state around an existing store.
    pub fn new(store: TodoStore) -> Self {
        Self { store }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(TodoStore::new())
    }
}

/// Create request body. A missing `name` defaults to the empty string;
/// presence is not enforced.
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    /// Label for the new todo.
    #[serde(default)]
    pub name: String,
}

/// Update request body. Absent fields mean "leave unchanged".
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTodoRequest {
    /// New label, if provided.
    pub name: Option<String>,
    /// New completion flag, if provided.
    pub completed: Option<bool>,
}

fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse().map_err(|_| ApiError::InvalidId)
}

/// Root greeting handler, independent of the todo resource.
pub async fn hello() -> &'static str {
    "hello world"
}

/// List handler. Always 200, even when the collection is empty.
pub async fn list_todos(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.list().await)
}

/// Get-by-id handler. 200 with the record, 400 on a non-integer id,
/// 404 when no record matches.
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let todo = state.store.get(id).await.ok_or(ApiError::NotFound)?;
    Ok(Json(todo))
}

/// Create handler. 201 with the ENTIRE post-insertion collection as the
/// body (contract quirk, preserved deliberately), 400 on malformed JSON.
pub async fn create_todo(
    State(state): State<AppState>,
    body: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body.map_err(|_| ApiError::InvalidJson)?;
    let todos = state.store.create(body.name).await;
    Ok((StatusCode::CREATED, Json(todos)))
}

/// Partial-update handler. The id is parsed before the body, so a bad id
/// on a bad body reports "cannot parse id". 200 with the updated record,
/// 404 (no mutation) when no record matches.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let Json(body) = body.map_err(|_| ApiError::InvalidBody)?;
    let todo = state
        .store
        .update(id, body.name, body.completed)
        .await
        .ok_or(ApiError::NotFound)?;
    Ok(Json(todo))
}

/// Delete handler. 204 empty body on removal, 400 on a non-integer id,
/// 404 when no record matches.
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    if state.store.remove(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}
