//! Client for the todo REST API.
//!
//! [`HttpTodoApi`] speaks the wire protocol; [`TodoView`] keeps the
//! rendered list, applies mutations optimistically, and falls back to a
//! local demo dataset when the backend is unreachable.

pub mod api;
pub mod demo;
pub mod view;

pub use api::{ApiError, HttpTodoApi, TodoApi};
pub use view::{SortOrder, StatusFilter, TodoView};
