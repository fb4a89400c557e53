//! Fixed dataset substituted when the backend is unreachable.

use chrono::{Duration, Utc};
use todo_domain::{Status, Todo};

pub fn demo_todos() -> Vec<Todo> {
    let now = Utc::now();
    let entry = |id: &str, task: &str, status, age_min: i64| {
        let at = now - Duration::minutes(age_min);
        Todo {
            id: id.to_string(),
            task: task.to_string(),
            status,
            created_at: at,
            updated_at: at,
        }
    };

    vec![
        entry("01JDEM00000000000000000001", "Walk the dog", Status::Pending, 5),
        entry("01JDEM00000000000000000002", "Pay rent", Status::Done, 60),
        entry("01JDEM00000000000000000003", "Write weekly report", Status::Pending, 240),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_dataset_is_nonempty_with_both_statuses() {
        let todos = demo_todos();
        assert!(!todos.is_empty());
        assert!(todos.iter().any(|t| t.status.is_done()));
        assert!(todos.iter().any(|t| !t.status.is_done()));
    }

    #[test]
    fn demo_ids_are_distinct() {
        let todos = demo_todos();
        let mut ids: Vec<_> = todos.iter().map(|t| t.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), todos.len());
    }
}
