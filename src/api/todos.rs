//! Todo CRUD endpoints.
//!
//! - List todos
//! - Create todo
//! - Get todo details
//! - Replace / partially update todo
//! - Delete todo

use std::sync::Arc;

use axum::{
    extract::{Path as AxumPath, State},
    http::StatusCode,
    routing::{delete, get, patch, post, put},
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::service::TaskError;
use crate::task::Task;
use crate::validation;

use super::routes::AppState;

/// Create todo routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_todos))
        .route("/", post(create_todo))
        .route("/:id", get(get_todo))
        .route("/:id", put(put_todo))
        .route("/:id", patch(patch_todo))
        .route("/:id", delete(delete_todo))
}

/// Map service errors to HTTP status codes. Raw filesystem detail stays out
/// of response bodies; clients see the error display string only.
fn error_response(err: TaskError) -> (StatusCode, String) {
    let status = match &err {
        TaskError::EmptyTitle | TaskError::DuplicateTitle(_) | TaskError::ConflictingFilters => {
            StatusCode::BAD_REQUEST
        }
        TaskError::NotFound(_) => StatusCode::NOT_FOUND,
        TaskError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, err.to_string())
}

// ─────────────────────────────────────────────────────────────────────────────
// Request Types
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Deadline string; absent or unparseable means "now".
    pub deadline: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReplaceTodoRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    pub deadline: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PatchTodoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
    pub deadline: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET /api/todos - List all todos.
async fn list_todos(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Task>>, (StatusCode, String)> {
    let tasks = state
        .service
        .list_tasks(&Default::default())
        .map_err(error_response)?;
    Ok(Json(tasks))
}

/// POST /api/todos - Create a new todo.
async fn create_todo(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<Task>), (StatusCode, String)> {
    let task = state
        .service
        .add_task(&req.title, &req.description, req.deadline.as_deref())
        .map_err(error_response)?;

    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /api/todos/:id - Get todo details.
async fn get_todo(
    State(state): State<Arc<AppState>>,
    AxumPath(id): AxumPath<Uuid>,
) -> Result<Json<Task>, (StatusCode, String)> {
    state
        .service
        .find_task_by_id(id)
        .map_err(error_response)?
        .map(Json)
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("Todo {} not found", id)))
}

/// PUT /api/todos/:id - Replace all mutable fields of a todo.
async fn put_todo(
    State(state): State<Arc<AppState>>,
    AxumPath(id): AxumPath<Uuid>,
    Json(req): Json<ReplaceTodoRequest>,
) -> Result<Json<Task>, (StatusCode, String)> {
    let updated = Task {
        id,
        title: req.title,
        description: req.description,
        completed: req.completed,
        deadline: validation::normalize_deadline(req.deadline.as_deref()),
    };

    state
        .service
        .update_task_by_id(updated)
        .map(Json)
        .map_err(error_response)
}

/// PATCH /api/todos/:id - Update selected fields of a todo.
async fn patch_todo(
    State(state): State<Arc<AppState>>,
    AxumPath(id): AxumPath<Uuid>,
    Json(req): Json<PatchTodoRequest>,
) -> Result<Json<Task>, (StatusCode, String)> {
    let mut task = state
        .service
        .find_task_by_id(id)
        .map_err(error_response)?
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("Todo {} not found", id)))?;

    if let Some(title) = req.title {
        task.title = title;
    }
    if let Some(description) = req.description {
        task.description = description;
    }
    if let Some(completed) = req.completed {
        task.set_completed(completed);
    }
    if let Some(deadline) = req.deadline.as_deref() {
        task.deadline = validation::normalize_deadline(Some(deadline));
    }

    state
        .service
        .update_task_by_id(task)
        .map(Json)
        .map_err(error_response)
}

/// DELETE /api/todos/:id - Delete a todo.
async fn delete_todo(
    State(state): State<Arc<AppState>>,
    AxumPath(id): AxumPath<Uuid>,
) -> Result<(StatusCode, String), (StatusCode, String)> {
    state
        .service
        .remove_task_by_id(id)
        .map(|task| {
            (
                StatusCode::OK,
                format!("Todo \"{}\" deleted successfully", task.title),
            )
        })
        .map_err(error_response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StorageError;

    #[test]
    fn test_error_response_status_mapping() {
        let (status, _) = error_response(TaskError::EmptyTitle);
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = error_response(TaskError::DuplicateTitle("X".to_string()));
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = error_response(TaskError::ConflictingFilters);
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = error_response(TaskError::NotFound("id 1".to_string()));
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = error_response(TaskError::Storage(StorageError::Corrupt(
            "bad file".to_string(),
        )));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_response_message_comes_from_display() {
        let (_, message) = error_response(TaskError::DuplicateTitle("Buy milk".to_string()));
        assert_eq!(message, "A task with title \"Buy milk\" already exists");
    }
}
