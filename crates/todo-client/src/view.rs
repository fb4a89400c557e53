//! Rendered list state: optimistic mutations, reconciliation against
//! server responses, and the filter/sort projection.

use std::str::FromStr;

use chrono::Utc;
use todo_domain::{NewTodo, Status, Todo, TodoPatch};
use ulid::Ulid;

use crate::api::TodoApi;
use crate::demo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Done,
}

impl StatusFilter {
    fn matches(self, todo: &Todo) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => !todo.status.is_done(),
            StatusFilter::Done => todo.status.is_done(),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(StatusFilter::All),
            "pending" => Ok(StatusFilter::Pending),
            "done" => Ok(StatusFilter::Done),
            other => Err(format!("unknown filter '{other}' (expected all, pending or done)")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    NewestFirst,
    OldestFirst,
    Alphabetical,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(SortOrder::NewestFirst),
            "oldest" => Ok(SortOrder::OldestFirst),
            "alpha" => Ok(SortOrder::Alphabetical),
            other => Err(format!("unknown sort '{other}' (expected newest, oldest or alpha)")),
        }
    }
}

/// Client-side view of the list.
///
/// Mutations apply to the local list first and are then reconciled with
/// the server's answer; a failed call rolls the local change back and
/// leaves an inline error. After a failed refresh the view switches to a
/// local demo dataset and stops talking to the network until a refresh
/// succeeds again.
pub struct TodoView<A: TodoApi> {
    api: A,
    items: Vec<Todo>,
    pub filter: StatusFilter,
    pub sort: SortOrder,
    error: Option<String>,
    demo: bool,
}

impl<A: TodoApi> TodoView<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            items: Vec::new(),
            filter: StatusFilter::All,
            sort: SortOrder::NewestFirst,
            error: None,
            demo: false,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_demo(&self) -> bool {
        self.demo
    }

    pub fn items(&self) -> &[Todo] {
        &self.items
    }

    /// Replaces the list with the server's, or falls back to demo data.
    pub fn refresh(&mut self) {
        match self.api.fetch() {
            Ok(todos) => {
                self.items = todos;
                self.demo = false;
                self.error = None;
            }
            Err(e) => {
                self.error = Some(e.to_string());
                self.items = demo::demo_todos();
                self.demo = true;
            }
        }
    }

    /// Optimistically inserts a pending record, then reconciles it with
    /// the created record the server returns.
    pub fn add(&mut self, task: &str) {
        let new = NewTodo { task: task.to_string(), status: None };
        if let Err(e) = new.validate() {
            self.error = Some(e.to_string());
            return;
        }

        let now = Utc::now();
        let provisional_id = Ulid::new().to_string();
        self.items.insert(
            0,
            Todo {
                id: provisional_id.clone(),
                task: new.task.clone(),
                status: Status::Pending,
                created_at: now,
                updated_at: now,
            },
        );
        self.error = None;

        if self.demo {
            return;
        }

        match self.api.create(&new) {
            Ok(server) => {
                if let Some(slot) = self.items.iter_mut().find(|t| t.id == provisional_id) {
                    *slot = server;
                }
            }
            Err(e) => {
                self.items.retain(|t| t.id != provisional_id);
                self.error = Some(e.to_string());
            }
        }
    }

    /// Flips a record between pending and done.
    pub fn toggle(&mut self, id: &str) {
        let Some(target) = self.items.iter().find(|t| t.id == id).map(|t| t.status.toggled())
        else {
            self.error = Some(format!("no todo with id {id}"));
            return;
        };
        self.set_status(id, target);
    }

    pub fn set_status(&mut self, id: &str, status: Status) {
        let Some(pos) = self.items.iter().position(|t| t.id == id) else {
            self.error = Some(format!("no todo with id {id}"));
            return;
        };

        let previous = self.items[pos].status;
        self.items[pos].status = status;
        self.items[pos].updated_at = Utc::now();
        self.error = None;

        if self.demo {
            return;
        }

        match self.api.update(id, &TodoPatch { task: None, status: Some(status) }) {
            Ok(server) => self.items[pos] = server,
            Err(e) if e.is_not_found() => {
                // Server no longer has it; drop our copy too.
                self.items.remove(pos);
                self.error = Some(e.to_string());
            }
            Err(e) => {
                self.items[pos].status = previous;
                self.error = Some(e.to_string());
            }
        }
    }

    /// Removes a record; on failure it comes back at its old position.
    pub fn remove(&mut self, id: &str) {
        let Some(pos) = self.items.iter().position(|t| t.id == id) else {
            self.error = Some(format!("no todo with id {id}"));
            return;
        };
        let removed = self.items.remove(pos);
        self.error = None;

        if self.demo {
            return;
        }

        match self.api.delete(id) {
            Ok(_) => {}
            // Already gone server-side counts as success.
            Err(e) if e.is_not_found() => {}
            Err(e) => {
                self.items.insert(pos.min(self.items.len()), removed);
                self.error = Some(e.to_string());
            }
        }
    }

    /// The filter/sort projection the UI renders.
    pub fn visible(&self) -> Vec<&Todo> {
        let mut out: Vec<&Todo> = self.items.iter().filter(|t| self.filter.matches(t)).collect();
        match self.sort {
            SortOrder::NewestFirst => out.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortOrder::OldestFirst => out.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            SortOrder::Alphabetical => {
                out.sort_by(|a, b| a.task.to_lowercase().cmp(&b.task.to_lowercase()));
            }
        }
        out
    }
}
