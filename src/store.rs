//! The `Todo` record and the owned in-memory collection.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

/// A single task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Identifier, assigned at creation as collection length + 1.
    pub id: i64,
    /// Text label.
    pub name: String,
    /// Completion flag.
    pub completed: bool,
}

/// The ordered, process-lifetime collection of todos.
///
/// A single instance is owned by the server and shared with handlers.
/// Every read-scan-then-write sequence runs under one lock acquisition,
/// so each operation is atomic with respect to concurrent requests.
/// Nothing survives a restart.
///
/// Ids are NOT guaranteed unique: creation assigns `len + 1`, so after a
/// deletion a later create can collide with an existing id. This is a
/// preserved contract, not an oversight; lookups return the first match.
#[derive(Debug, Clone)]
pub struct TodoStore {
    todos: Arc<Mutex<Vec<Todo>>>,
}

impl TodoStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            todos: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a store with the three seed records.
    pub fn seeded() -> Self {
        Self {
            todos: Arc::new(Mutex::new(vec![
                Todo {
                    id: 1,
                    name: "Walk the dog".to_string(),
                    completed: false,
                },
                Todo {
                    id: 2,
                    name: "Walk the cat".to_string(),
                    completed: false,
                },
                Todo {
                    id: 3,
                    name: "Walk the bat".to_string(),
                    completed: true,
                },
            ])),
        }
    }

    /// Snapshot of the full collection, in order.
    pub async fn list(&self) -> Vec<Todo> {
        self.todos.lock().await.clone()
    }

    /// First record with the given id, if any.
    pub async fn get(&self, id: i64) -> Option<Todo> {
        self.todos
            .lock()
            .await
            .iter()
            .find(|todo| todo.id == id)
            .cloned()
    }

    /// Append a new record with `id = len + 1` and `completed = false`.
    ///
    /// Returns the full post-insertion collection; the create endpoint
    /// responds with the whole list rather than the new record.
    pub async fn create(&self, name: String) -> Vec<Todo> {
        let mut todos = self.todos.lock().await;
        let todo = Todo {
            id: todos.len() as i64 + 1,
            name,
            completed: false,
        };
        todos.push(todo);
        todos.clone()
    }

    /// Overwrite the provided fields of the record with the given id.
    ///
    /// `None` leaves a field untouched. Returns the updated record, or
    /// `None` if no record matches (in which case nothing is mutated).
    pub async fn update(
        &self,
        id: i64,
        name: Option<String>,
        completed: Option<bool>,
    ) -> Option<Todo> {
        let mut todos = self.todos.lock().await;
        let todo = todos.iter_mut().find(|todo| todo.id == id)?;

        if let Some(name) = name {
            todo.name = name;
        }
        if let Some(completed) = completed {
            todo.completed = completed;
        }

        Some(todo.clone())
    }

    /// Remove the first record with the given id, preserving the order
    /// of the remaining records. Returns whether a record was removed.
    pub async fn remove(&self, id: i64) -> bool {
        let mut todos = self.todos.lock().await;
        match todos.iter().position(|todo| todo.id == id) {
            Some(index) => {
                todos.remove(index);
                true
            }
            None => false,
        }
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}
