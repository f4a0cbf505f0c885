use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A question-and-answer note kept against a company rather than a single
/// application (culture, process, compensation research).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CompanyQuestionRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub company_id: Option<Uuid>,
    pub question: String,
    pub answer: String,
    pub created_at: DateTime<Utc>,
}
