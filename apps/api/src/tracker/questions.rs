use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::question::QuestionRow;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct QuestionListParams {
    pub user_id: Uuid,
    pub application_id: Option<Uuid>,
}

#[derive(Deserialize)]
pub struct QuestionPayload {
    pub user_id: Uuid,
    pub application_id: Option<Uuid>,
    pub question: String,
    pub answer: String,
}

/// GET /api/v1/questions
pub async fn list_questions(
    State(state): State<AppState>,
    Query(params): Query<QuestionListParams>,
) -> Result<Json<Vec<QuestionRow>>, AppError> {
    let rows: Vec<QuestionRow> = sqlx::query_as(
        r#"
        SELECT * FROM questions
        WHERE user_id = $1 AND ($2::uuid IS NULL OR application_id = $2)
        ORDER BY created_at DESC
        "#,
    )
    .bind(params.user_id)
    .bind(params.application_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(rows))
}

/// POST /api/v1/questions
pub async fn create_question(
    State(state): State<AppState>,
    Json(req): Json<QuestionPayload>,
) -> Result<(StatusCode, Json<QuestionRow>), AppError> {
    let row: QuestionRow = sqlx::query_as(
        r#"
        INSERT INTO questions (id, user_id, application_id, question, answer)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(req.user_id)
    .bind(req.application_id)
    .bind(&req.question)
    .bind(&req.answer)
    .fetch_one(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(row)))
}

#[derive(Deserialize)]
pub struct OwnerParams {
    pub user_id: Uuid,
}

/// GET /api/v1/questions/:id
pub async fn get_question(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<OwnerParams>,
) -> Result<Json<QuestionRow>, AppError> {
    let row: Option<QuestionRow> =
        sqlx::query_as("SELECT * FROM questions WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(params.user_id)
            .fetch_optional(&state.db)
            .await?;

    row.map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Question {id} not found")))
}

/// PUT /api/v1/questions/:id
pub async fn update_question(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<QuestionPayload>,
) -> Result<Json<QuestionRow>, AppError> {
    let row: Option<QuestionRow> = sqlx::query_as(
        r#"
        UPDATE questions
        SET application_id = $3, question = $4, answer = $5
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(req.user_id)
    .bind(req.application_id)
    .bind(&req.question)
    .bind(&req.answer)
    .fetch_optional(&state.db)
    .await?;

    row.map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Question {id} not found")))
}

/// DELETE /api/v1/questions/:id
pub async fn delete_question(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<OwnerParams>,
) -> Result<StatusCode, AppError> {
    let deleted: Option<Uuid> =
        sqlx::query_scalar("DELETE FROM questions WHERE id = $1 AND user_id = $2 RETURNING id")
            .bind(id)
            .bind(params.user_id)
            .fetch_optional(&state.db)
            .await?;

    match deleted {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err(AppError::NotFound(format!("Question {id} not found"))),
    }
}
