use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::contact::{ContactRow, ContactStatus};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ContactListParams {
    pub user_id: Uuid,
    pub company_id: Option<Uuid>,
}

#[derive(Deserialize)]
pub struct ContactPayload {
    pub user_id: Uuid,
    pub company_id: Option<Uuid>,
    pub name: String,
    pub job_title: String,
    pub email: Option<String>,
    pub linkedin_link: Option<String>,
    pub contacted: String,
}

fn validate_contacted(s: &str) -> Result<(), AppError> {
    ContactStatus::parse(s)
        .map(|_| ())
        .ok_or_else(|| AppError::Validation(format!("Invalid contact status: {s}")))
}

/// GET /api/v1/contacts
pub async fn list_contacts(
    State(state): State<AppState>,
    Query(params): Query<ContactListParams>,
) -> Result<Json<Vec<ContactRow>>, AppError> {
    let rows: Vec<ContactRow> = sqlx::query_as(
        r#"
        SELECT * FROM contacts
        WHERE user_id = $1 AND ($2::uuid IS NULL OR company_id = $2)
        ORDER BY name
        "#,
    )
    .bind(params.user_id)
    .bind(params.company_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(rows))
}

/// POST /api/v1/contacts
pub async fn create_contact(
    State(state): State<AppState>,
    Json(req): Json<ContactPayload>,
) -> Result<(StatusCode, Json<ContactRow>), AppError> {
    validate_contacted(&req.contacted)?;

    let row: ContactRow = sqlx::query_as(
        r#"
        INSERT INTO contacts (id, user_id, company_id, name, job_title, email, linkedin_link, contacted)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(req.user_id)
    .bind(req.company_id)
    .bind(&req.name)
    .bind(&req.job_title)
    .bind(&req.email)
    .bind(&req.linkedin_link)
    .bind(&req.contacted)
    .fetch_one(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(row)))
}

#[derive(Deserialize)]
pub struct OwnerParams {
    pub user_id: Uuid,
}

/// GET /api/v1/contacts/:id
pub async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<OwnerParams>,
) -> Result<Json<ContactRow>, AppError> {
    let row: Option<ContactRow> =
        sqlx::query_as("SELECT * FROM contacts WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(params.user_id)
            .fetch_optional(&state.db)
            .await?;

    row.map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Contact {id} not found")))
}

/// PUT /api/v1/contacts/:id
pub async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ContactPayload>,
) -> Result<Json<ContactRow>, AppError> {
    validate_contacted(&req.contacted)?;

    let row: Option<ContactRow> = sqlx::query_as(
        r#"
        UPDATE contacts
        SET company_id = $3, name = $4, job_title = $5, email = $6,
            linkedin_link = $7, contacted = $8
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(req.user_id)
    .bind(req.company_id)
    .bind(&req.name)
    .bind(&req.job_title)
    .bind(&req.email)
    .bind(&req.linkedin_link)
    .bind(&req.contacted)
    .fetch_optional(&state.db)
    .await?;

    row.map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Contact {id} not found")))
}

/// DELETE /api/v1/contacts/:id
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<OwnerParams>,
) -> Result<StatusCode, AppError> {
    let deleted: Option<Uuid> =
        sqlx::query_scalar("DELETE FROM contacts WHERE id = $1 AND user_id = $2 RETURNING id")
            .bind(id)
            .bind(params.user_id)
            .fetch_optional(&state.db)
            .await?;

    match deleted {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err(AppError::NotFound(format!("Contact {id} not found"))),
    }
}
