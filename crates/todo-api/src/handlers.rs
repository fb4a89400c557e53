use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use todo_domain::{NewTodo, Todo, TodoPatch};

use crate::error::ApiError;
use crate::AppState;

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = state.store.list().await?;
    Ok(Json(todos))
}

pub async fn create_todo(
    State(state): State<AppState>,
    body: Result<Json<NewTodo>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let Json(input) = body?;
    input.validate()?;
    let todo = state.store.insert(input).await?;
    tracing::info!(id = %todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn update_todo(
    Path(id): Path<String>,
    State(state): State<AppState>,
    body: Result<Json<TodoPatch>, JsonRejection>,
) -> Result<Json<Todo>, ApiError> {
    let Json(patch) = body?;
    patch.validate()?;
    let todo = state.store.update(&id, patch).await?.ok_or(ApiError::NotFound)?;
    tracing::info!(id = %todo.id, status = %todo.status, "updated todo");
    Ok(Json(todo))
}

pub async fn delete_todo(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Todo>, ApiError> {
    let todo = state.store.delete(&id).await?.ok_or(ApiError::NotFound)?;
    tracing::info!(id = %todo.id, "deleted todo");
    Ok(Json(todo))
}
