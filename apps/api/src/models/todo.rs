use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A to-apply reminder: a job posting the user wants to get back to.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TodoRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub link: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}
