//! In-memory todo collection.
//!
//! # Design
//! `TodoStore` owns an ordered `Vec<Todo>`; insertion order is list order.
//! Ids are derived from the current length at creation time, so they are
//! not unique once a delete has happened: with three todos, deleting "2"
//! and creating a new one yields a second "3". Callers that need stable
//! identity must not rely on `_id`.
//!
//! The store itself is not synchronized. The router shares it behind a
//! `tokio::sync::RwLock` (see [`crate::SharedStore`]).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single todo record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(rename = "_id")]
    pub id: String,
    /// Untyped payload, stored and echoed verbatim.
    pub task: Value,
    pub completed: bool,
}

/// Request body accepted by create. `_id` and `completed` are decoded so that
/// values of the wrong type are rejected, but they never reach the store.
/// Both tolerate an explicit `null`.
#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    #[serde(default, rename = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub task: Value,
    #[serde(default)]
    pub completed: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    todos: Vec<Todo>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self { todos: Vec::new() }
    }

    /// The store the server starts with.
    pub fn seeded() -> Self {
        let seed = [
            ("1", "First task", false),
            ("2", "Second task", true),
            ("3", "Third task", false),
        ];
        Self {
            todos: seed
                .into_iter()
                .map(|(id, task, completed)| Todo {
                    id: id.to_string(),
                    task: Value::from(task),
                    completed,
                })
                .collect(),
        }
    }

    pub fn list(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Removes the first todo whose id equals `id`. Later duplicates stay.
    pub fn delete(&mut self, id: &str) -> Option<Todo> {
        let index = self.todos.iter().position(|todo| todo.id == id)?;
        Some(self.todos.remove(index))
    }

    /// Appends a new todo with `completed` forced to `false` and returns it.
    pub fn create(&mut self, input: CreateTodo) -> Todo {
        let todo = Todo {
            id: (self.todos.len() + 1).to_string(),
            task: input.task,
            completed: false,
        };
        self.todos.push(todo.clone());
        todo
    }
}
