#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Outreach status for a company contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactStatus {
    Sent,
    Accepted,
    Messaged,
    Replied,
    StrongConnection,
}

impl ContactStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactStatus::Sent => "Sent",
            ContactStatus::Accepted => "Accepted",
            ContactStatus::Messaged => "Messaged",
            ContactStatus::Replied => "Replied",
            ContactStatus::StrongConnection => "Strong Connection",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Sent" => Some(ContactStatus::Sent),
            "Accepted" => Some(ContactStatus::Accepted),
            "Messaged" => Some(ContactStatus::Messaged),
            "Replied" => Some(ContactStatus::Replied),
            "Strong Connection" => Some(ContactStatus::StrongConnection),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContactRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub company_id: Option<Uuid>,
    pub name: String,
    pub job_title: String,
    pub email: Option<String>,
    pub linkedin_link: Option<String>,
    pub contacted: String,
    pub created_at: DateTime<Utc>,
}
