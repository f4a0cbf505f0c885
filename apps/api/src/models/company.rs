use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Companies are shared reference data, not owner-scoped.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CompanyRow {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub careers_link: Option<String>,
    pub linkedin_link: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}
