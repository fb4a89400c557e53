//! Shared domain model for the todo service.
//!
//! Both the API server and the client depend on this crate so that the
//! record shape and validation rules stay in one place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Completion status of a todo. Serialized as the JSON literals
/// `"pending"` / `"done"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pending,
    Done,
}

impl Status {
    /// The other of the two statuses.
    pub fn toggled(self) -> Self {
        match self {
            Status::Pending => Status::Done,
            Status::Done => Status::Pending,
        }
    }

    pub fn is_done(self) -> bool {
        matches!(self, Status::Done)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Pending => f.write_str("pending"),
            Status::Done => f.write_str("done"),
        }
    }
}

/// A single todo record as it travels over the wire.
///
/// The id is opaque to everything except the store that minted it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub task: String,
    pub status: Status,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /todos`. Status defaults to pending when omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTodo {
    pub task: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

impl NewTodo {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.task.trim().is_empty() {
            return Err(DomainError::EmptyTask);
        }
        Ok(())
    }

    /// The status the created record starts with.
    pub fn initial_status(&self) -> Status {
        self.status.unwrap_or(Status::Pending)
    }
}

/// Body of `PUT /todos/:id`. At least one field must be present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodoPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

impl TodoPatch {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.task.is_none() && self.status.is_none() {
            return Err(DomainError::EmptyPatch);
        }
        if let Some(task) = &self.task {
            if task.trim().is_empty() {
                return Err(DomainError::EmptyTask);
            }
        }
        Ok(())
    }

    /// Applies the patch to an existing record, bumping `updated_at`.
    pub fn apply(&self, todo: &mut Todo, now: DateTime<Utc>) {
        if let Some(task) = &self.task {
            todo.task = task.clone();
        }
        if let Some(status) = self.status {
            todo.status = status;
        }
        todo.updated_at = now;
    }
}

/// Invariant violations on request bodies.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("task cannot be empty")]
    EmptyTask,
    #[error("at least one of 'task' or 'status' is required")]
    EmptyPatch,
}
