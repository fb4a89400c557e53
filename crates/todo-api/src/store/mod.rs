//! Persistence seam for todo records.

use async_trait::async_trait;
use thiserror::Error;
use todo_domain::{NewTodo, Todo, TodoPatch};

mod memory;
mod mongo;

pub use memory::MemStore;
pub use mongo::MongoStore;

/// Store layer errors. `MalformedId` is a client fault; everything else
/// is a backend failure.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("malformed todo id: {0}")]
    MalformedId(String),
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Minimal abstraction over the document collection. The store assigns
/// ids and timestamps on insert.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// All todos, newest first.
    async fn list(&self) -> Result<Vec<Todo>, StoreError>;
    /// Inserts a new record and returns it with its assigned id.
    async fn insert(&self, new: NewTodo) -> Result<Todo, StoreError>;
    /// Applies a patch; `None` when no record has that id.
    async fn update(&self, id: &str, patch: TodoPatch) -> Result<Option<Todo>, StoreError>;
    /// Removes a record, returning it; `None` when no record has that id.
    async fn delete(&self, id: &str) -> Result<Option<Todo>, StoreError>;
}
