//! In-memory store for tests and database-less local runs.

use std::sync::Mutex;

use async_trait::async_trait;
use todo_domain::{NewTodo, Todo, TodoPatch};
use ulid::Ulid;

use super::{StoreError, TodoStore};

#[derive(Default)]
pub struct MemStore {
    items: Mutex<Vec<Todo>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemStore {
    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let mut todos = self.items.lock().unwrap().clone();
        todos.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(todos)
    }

    async fn insert(&self, new: NewTodo) -> Result<Todo, StoreError> {
        let now = chrono::Utc::now();
        let todo = Todo {
            id: Ulid::new().to_string(),
            task: new.task.clone(),
            status: new.initial_status(),
            created_at: now,
            updated_at: now,
        };
        self.items.lock().unwrap().push(todo.clone());
        Ok(todo)
    }

    async fn update(&self, id: &str, patch: TodoPatch) -> Result<Option<Todo>, StoreError> {
        let mut items = self.items.lock().unwrap();
        let Some(todo) = items.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        patch.apply(todo, chrono::Utc::now());
        Ok(Some(todo.clone()))
    }

    async fn delete(&self, id: &str) -> Result<Option<Todo>, StoreError> {
        let mut items = self.items.lock().unwrap();
        let Some(pos) = items.iter().position(|t| t.id == id) else {
            return Ok(None);
        };
        Ok(Some(items.remove(pos)))
    }
}
