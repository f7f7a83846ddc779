// handlers/todos.rs - /todos CRUD handlers
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{AppendHeaders, IntoResponse, Json},
};
use uuid::Uuid;

use crate::error::ApiError;
use crate::todos::ToDo;
use crate::AppState;

/// GET /todos - snapshot of every stored item.
pub async fn get_all(State(state): State<AppState>) -> Result<Json<Vec<ToDo>>, ApiError> {
    let repository = state.read_repository()?;
    Ok(Json(repository.get_all()))
}

/// GET /todos/:id - single item or 404.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ToDo>, ApiError> {
    let repository = state.read_repository()?;
    repository
        .get_by_id(id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("no to-do with id {id}")))
}

/// POST /todos - the validating middleware has already vetted the body.
pub async fn create_todo(
    State(state): State<AppState>,
    Json(todo): Json<ToDo>,
) -> Result<impl IntoResponse, ApiError> {
    let location = format!("/todos/{}", todo.id);
    state.write_repository()?.create(todo.clone());

    Ok((
        StatusCode::CREATED,
        AppendHeaders([(header::LOCATION, location)]),
        Json(todo),
    ))
}

/// PUT /todos/:id - the path id is authoritative over whatever id the body
/// carries; unknown ids leave the repository untouched.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(mut todo): Json<ToDo>,
) -> Result<Json<ToDo>, ApiError> {
    todo.id = id;

    let replaced = state.write_repository()?.update(todo.clone());
    if replaced {
        Ok(Json(todo))
    } else {
        Err(ApiError::not_found(format!("no to-do with id {id}")))
    }
}

/// DELETE /todos/:id - 200 on removal, 404 when the id was never there.
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state.write_repository()?.delete(id) {
        Ok(StatusCode::OK)
    } else {
        Err(ApiError::not_found(format!("no to-do with id {id}")))
    }
}
