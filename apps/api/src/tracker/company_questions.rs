use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::company_question::CompanyQuestionRow;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CompanyQuestionListParams {
    pub user_id: Uuid,
    pub company_id: Option<Uuid>,
}

#[derive(Deserialize)]
pub struct CompanyQuestionPayload {
    pub user_id: Uuid,
    pub company_id: Option<Uuid>,
    pub question: String,
    pub answer: String,
}

/// GET /api/v1/company-questions
pub async fn list_company_questions(
    State(state): State<AppState>,
    Query(params): Query<CompanyQuestionListParams>,
) -> Result<Json<Vec<CompanyQuestionRow>>, AppError> {
    let rows: Vec<CompanyQuestionRow> = sqlx::query_as(
        r#"
        SELECT * FROM company_questions
        WHERE user_id = $1 AND ($2::uuid IS NULL OR company_id = $2)
        ORDER BY created_at DESC
        "#,
    )
    .bind(params.user_id)
    .bind(params.company_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(rows))
}

/// POST /api/v1/company-questions
pub async fn create_company_question(
    State(state): State<AppState>,
    Json(req): Json<CompanyQuestionPayload>,
) -> Result<(StatusCode, Json<CompanyQuestionRow>), AppError> {
    let row: CompanyQuestionRow = sqlx::query_as(
        r#"
        INSERT INTO company_questions (id, user_id, company_id, question, answer)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(req.user_id)
    .bind(req.company_id)
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

/// GET /api/v1/company-questions/:id
pub async fn get_company_question(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<OwnerParams>,
) -> Result<Json<CompanyQuestionRow>, AppError> {
    let row: Option<CompanyQuestionRow> =
        sqlx::query_as("SELECT * FROM company_questions WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(params.user_id)
            .fetch_optional(&state.db)
            .await?;

    row.map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Company question {id} not found")))
}

/// PUT /api/v1/company-questions/:id
pub async fn update_company_question(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<CompanyQuestionPayload>,
) -> Result<Json<CompanyQuestionRow>, AppError> {
    let row: Option<CompanyQuestionRow> = sqlx::query_as(
        r#"
        UPDATE company_questions
        SET company_id = $3, question = $4, answer = $5
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(req.user_id)
    .bind(req.company_id)
    .bind(&req.question)
    .bind(&req.answer)
    .fetch_optional(&state.db)
    .await?;

    row.map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Company question {id} not found")))
}

/// DELETE /api/v1/company-questions/:id
pub async fn delete_company_question(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<OwnerParams>,
) -> Result<StatusCode, AppError> {
    let deleted: Option<Uuid> = sqlx::query_scalar(
        "DELETE FROM company_questions WHERE id = $1 AND user_id = $2 RETURNING id",
    )
    .bind(id)
    .bind(params.user_id)
    .fetch_optional(&state.db)
    .await?;

    match deleted {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err(AppError::NotFound(format!("Company question {id} not found"))),
    }
}
