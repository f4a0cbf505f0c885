use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::application::{ApplicationRow, ApplicationStatus, Stage};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ApplicationListParams {
    pub user_id: Uuid,
    pub company_id: Option<Uuid>,
    pub status: Option<String>,
    pub submission_date: Option<NaiveDate>,
}

#[derive(Deserialize)]
pub struct ApplicationPayload {
    pub user_id: Uuid,
    pub company_id: Option<Uuid>,
    pub job_title: String,
    pub job_type: String,
    pub description: String,
    pub link: Option<String>,
    #[serde(default)]
    pub ats_score: i16,
    pub stage: String,
    pub status: String,
    /// Defaults to today when omitted.
    pub submission_date: Option<NaiveDate>,
}

fn validate_payload(req: &ApplicationPayload) -> Result<(), AppError> {
    if ApplicationStatus::parse(&req.status).is_none() {
        return Err(AppError::Validation(format!(
            "Invalid application status: {}",
            req.status
        )));
    }
    if Stage::parse(&req.stage).is_none() {
        return Err(AppError::Validation(format!("Invalid stage: {}", req.stage)));
    }
    Ok(())
}

/// GET /api/v1/applications
pub async fn list_applications(
    State(state): State<AppState>,
    Query(params): Query<ApplicationListParams>,
) -> Result<Json<Vec<ApplicationRow>>, AppError> {
    if let Some(status) = params.status.as_deref() {
        if ApplicationStatus::parse(status).is_none() {
            return Err(AppError::Validation(format!(
                "Invalid application status: {status}"
            )));
        }
    }

    let rows: Vec<ApplicationRow> = sqlx::query_as(
        r#"
        SELECT * FROM applications
        WHERE user_id = $1
          AND ($2::uuid IS NULL OR company_id = $2)
          AND ($3::text IS NULL OR status = $3)
          AND ($4::date IS NULL OR submission_date = $4)
        ORDER BY submission_date DESC
        "#,
    )
    .bind(params.user_id)
    .bind(params.company_id)
    .bind(&params.status)
    .bind(params.submission_date)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(rows))
}

/// POST /api/v1/applications
pub async fn create_application(
    State(state): State<AppState>,
    Json(req): Json<ApplicationPayload>,
) -> Result<(StatusCode, Json<ApplicationRow>), AppError> {
    validate_payload(&req)?;
    let submission_date = req
        .submission_date
        .unwrap_or_else(|| Utc::now().date_naive());

    let row: ApplicationRow = sqlx::query_as(
        r#"
        INSERT INTO applications
            (id, user_id, company_id, job_title, job_type, description, link,
             ats_score, stage, status, submission_date)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(req.user_id)
    .bind(req.company_id)
    .bind(&req.job_title)
    .bind(&req.job_type)
    .bind(&req.description)
    .bind(&req.link)
    .bind(req.ats_score)
    .bind(&req.stage)
    .bind(&req.status)
    .bind(submission_date)
    .fetch_one(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(row)))
}

#[derive(Deserialize)]
pub struct OwnerParams {
    pub user_id: Uuid,
}

/// GET /api/v1/applications/:id
pub async fn get_application(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<OwnerParams>,
) -> Result<Json<ApplicationRow>, AppError> {
    let row: Option<ApplicationRow> =
        sqlx::query_as("SELECT * FROM applications WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(params.user_id)
            .fetch_optional(&state.db)
            .await?;

    row.map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Application {id} not found")))
}

/// PUT /api/v1/applications/:id
pub async fn update_application(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ApplicationPayload>,
) -> Result<Json<ApplicationRow>, AppError> {
    validate_payload(&req)?;
    let submission_date = req
        .submission_date
        .unwrap_or_else(|| Utc::now().date_naive());

    let row: Option<ApplicationRow> = sqlx::query_as(
        r#"
        UPDATE applications
        SET company_id = $3, job_title = $4, job_type = $5, description = $6,
            link = $7, ats_score = $8, stage = $9, status = $10, submission_date = $11
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(req.user_id)
    .bind(req.company_id)
    .bind(&req.job_title)
    .bind(&req.job_type)
    .bind(&req.description)
    .bind(&req.link)
    .bind(req.ats_score)
    .bind(&req.stage)
    .bind(&req.status)
    .bind(submission_date)
    .fetch_optional(&state.db)
    .await?;

    row.map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Application {id} not found")))
}

/// DELETE /api/v1/applications/:id
pub async fn delete_application(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<OwnerParams>,
) -> Result<StatusCode, AppError> {
    let deleted: Option<Uuid> =
        sqlx::query_scalar("DELETE FROM applications WHERE id = $1 AND user_id = $2 RETURNING id")
            .bind(id)
            .bind(params.user_id)
            .fetch_optional(&state.db)
            .await?;

    match deleted {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err(AppError::NotFound(format!("Application {id} not found"))),
    }
}
