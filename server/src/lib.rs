//! In-memory todo HTTP server.
//!
//! # Routes
//! - `GET /todos` → `{"todos": [...]}`
//! - `POST /todos` → the created todo (201), or 400 `{"error": ...}`
//! - `DELETE /todos/{id}` → `{"message": "Todo deleted!"}`, whether or not
//!   anything matched
//!
//! # Design
//! The store lives behind a `tokio::sync::RwLock`. Create holds the write
//! guard across the length read and the append, so concurrent creates never
//! hand out the same id. Ids still repeat after a delete; see [`store`].

pub mod config;
pub mod error;
pub mod store;

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::Serialize;
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use error::ApiError;
pub use store::{CreateTodo, Todo, TodoStore};

pub const DELETED_MESSAGE: &str = "Todo deleted!";

pub type SharedStore = Arc<RwLock<TodoStore>>;

#[derive(Serialize)]
pub struct TodoList {
    pub todos: Vec<Todo>,
}

#[derive(Serialize)]
pub struct Message {
    pub message: &'static str,
}

/// Router over a freshly seeded store.
pub fn app() -> Router {
    app_with_store(TodoStore::seeded())
}

pub fn app_with_store(store: TodoStore) -> Router {
    let store: SharedStore = Arc::new(RwLock::new(store));
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", delete(delete_todo))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_todos(State(store): State<SharedStore>) -> Json<TodoList> {
    let store = store.read().await;
    Json(TodoList {
        todos: store.list().to_vec(),
    })
}

async fn create_todo(
    State(store): State<SharedStore>,
    body: Bytes,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    // Decoded by hand: the content type is not checked.
    let input: CreateTodo = serde_json::from_slice(&body).map_err(|err| {
        tracing::warn!(error = %err, "rejected create body");
        ApiError::from(err)
    })?;
    let todo = store.write().await.create(input);
    tracing::info!(id = %todo.id, task = %todo.task, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn delete_todo(State(store): State<SharedStore>, Path(id): Path<String>) -> Json<Message> {
    let removed = store.write().await.delete(&id);
    tracing::debug!(%id, removed = removed.is_some(), "delete todo");
    Json(Message {
        message: DELETED_MESSAGE,
    })
}
