//! HTTP API route definitions.

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use super::handlers::{
    create_todo, delete_todo, get_todo, hello, list_todos, update_todo, AppState,
};

/// Create the API router.
///
/// The todo routes form a versioned group under `/v1/todos`; the root
/// greeting sits outside it. The trace layer logs method, path and
/// latency for every request and never alters a response.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(hello))
        .nest("/v1/todos", todos_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// The todo resource group: list/create at the collection path,
/// get/update/delete at the `:id` path.
fn todos_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_todos).post(create_todo))
        .route("/:id", get(get_todo).patch(update_todo).delete(delete_todo))
}
