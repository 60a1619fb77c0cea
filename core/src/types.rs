//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the server's schema but are defined independently, so
//! the client core does not pull in Axum. The live-server integration test
//! catches any schema drift between the two crates.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single todo item returned by the API. `task` is whatever JSON the
/// creator sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Todo {
    #[serde(rename = "_id")]
    pub id: String,
    pub task: Value,
    pub completed: bool,
}

/// Request payload for creating a new todo. The server always stores
/// `completed: false`, so there is no field for it here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub task: Value,
}

impl CreateTodo {
    pub fn new(task: impl Into<Value>) -> Self {
        Self { task: task.into() }
    }
}

/// `GET /todos` response envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct TodoList {
    pub todos: Vec<Todo>,
}

/// `DELETE /todos/{id}` response body.
#[derive(Debug, Deserialize)]
pub(crate) struct Message {
    pub message: String,
}

/// Body of a 400 response.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}
