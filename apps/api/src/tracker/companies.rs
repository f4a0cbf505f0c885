use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::company::CompanyRow;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CompanyPayload {
    pub name: String,
    pub location: String,
    pub careers_link: Option<String>,
    pub linkedin_link: Option<String>,
    pub description: Option<String>,
}

/// GET /api/v1/companies
pub async fn list_companies(
    State(state): State<AppState>,
) -> Result<Json<Vec<CompanyRow>>, AppError> {
    let rows: Vec<CompanyRow> = sqlx::query_as("SELECT * FROM companies ORDER BY name")
        .fetch_all(&state.db)
        .await?;
    Ok(Json(rows))
}

/// POST /api/v1/companies
pub async fn create_company(
    State(state): State<AppState>,
    Json(req): Json<CompanyPayload>,
) -> Result<(StatusCode, Json<CompanyRow>), AppError> {
    let row: CompanyRow = sqlx::query_as(
        r#"
        INSERT INTO companies (id, name, location, careers_link, linkedin_link, description)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&req.name)
    .bind(&req.location)
    .bind(&req.careers_link)
    .bind(&req.linkedin_link)
    .bind(&req.description)
    .fetch_one(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/companies/:id
pub async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CompanyRow>, AppError> {
    let row: Option<CompanyRow> = sqlx::query_as("SELECT * FROM companies WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.db)
        .await?;

    row.map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Company {id} not found")))
}

/// PUT /api/v1/companies/:id
pub async fn update_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<CompanyPayload>,
) -> Result<Json<CompanyRow>, AppError> {
    let row: Option<CompanyRow> = sqlx::query_as(
        r#"
        UPDATE companies
        SET name = $2, location = $3, careers_link = $4, linkedin_link = $5, description = $6
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&req.name)
    .bind(&req.location)
    .bind(&req.careers_link)
    .bind(&req.linkedin_link)
    .bind(&req.description)
    .fetch_optional(&state.db)
    .await?;

    row.map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Company {id} not found")))
}

/// DELETE /api/v1/companies/:id
pub async fn delete_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let deleted: Option<Uuid> = sqlx::query_scalar("DELETE FROM companies WHERE id = $1 RETURNING id")
        .bind(id)
        .fetch_optional(&state.db)
        .await?;

    match deleted {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err(AppError::NotFound(format!("Company {id} not found"))),
    }
}
