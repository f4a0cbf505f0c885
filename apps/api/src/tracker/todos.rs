use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::todo::TodoRow;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct TodoListParams {
    pub user_id: Uuid,
}

#[derive(Deserialize)]
pub struct TodoPayload {
    pub user_id: Uuid,
    pub title: String,
    pub link: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

/// GET /api/v1/todos
pub async fn list_todos(
    State(state): State<AppState>,
    Query(params): Query<TodoListParams>,
) -> Result<Json<Vec<TodoRow>>, AppError> {
    let rows: Vec<TodoRow> = sqlx::query_as(
        "SELECT * FROM todos WHERE user_id = $1 ORDER BY completed, created_at DESC",
    )
    .bind(params.user_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(rows))
}

/// POST /api/v1/todos
pub async fn create_todo(
    State(state): State<AppState>,
    Json(req): Json<TodoPayload>,
) -> Result<(StatusCode, Json<TodoRow>), AppError> {
    let row: TodoRow = sqlx::query_as(
        r#"
        INSERT INTO todos (id, user_id, title, link, completed)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(req.user_id)
    .bind(&req.title)
    .bind(&req.link)
    .bind(req.completed)
    .fetch_one(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(row)))
}

#[derive(Deserialize)]
pub struct OwnerParams {
    pub user_id: Uuid,
}

/// GET /api/v1/todos/:id
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<OwnerParams>,
) -> Result<Json<TodoRow>, AppError> {
    let row: Option<TodoRow> = sqlx::query_as("SELECT * FROM todos WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(params.user_id)
        .fetch_optional(&state.db)
        .await?;

    row.map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Todo {id} not found")))
}

/// PUT /api/v1/todos/:id
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<TodoPayload>,
) -> Result<Json<TodoRow>, AppError> {
    let row: Option<TodoRow> = sqlx::query_as(
        r#"
        UPDATE todos
        SET title = $3, link = $4, completed = $5
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(req.user_id)
    .bind(&req.title)
    .bind(&req.link)
    .bind(req.completed)
    .fetch_optional(&state.db)
    .await?;

    row.map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Todo {id} not found")))
}

/// DELETE /api/v1/todos/:id
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<OwnerParams>,
) -> Result<StatusCode, AppError> {
    let deleted: Option<Uuid> =
        sqlx::query_scalar("DELETE FROM todos WHERE id = $1 AND user_id = $2 RETURNING id")
            .bind(id)
            .bind(params.user_id)
            .fetch_optional(&state.db)
            .await?;

    match deleted {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err(AppError::NotFound(format!("Todo {id} not found"))),
    }
}
