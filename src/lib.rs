//! In-memory todos CRUD service over HTTP.
//!
//! A single `Todo` resource (id, name, completed) kept in a process-local
//! collection, exposed through five handlers mounted under `/v1/todos`.
//! State is seeded at startup and lost on shutdown; there is no
//! persistence layer.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Handler error type and its response rendering
//! - [`store`]: The `Todo` record and the owned in-memory collection
//! - [`api`]: HTTP router and handlers

pub mod api;
pub mod config;
pub mod error;
pub mod store;

pub use config::Config;
pub use error::ApiError;
pub use store::{Todo, TodoStore};
