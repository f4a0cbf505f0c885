#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Terminal-ish status of an application. `Rejected` and `Accepted` are the
/// decided outcomes; everything else counts as pending in the summary stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Pending,
    Assessment,
    Interview,
    Rejected,
    Accepted,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::Assessment => "Assessment",
            ApplicationStatus::Interview => "Interview",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Accepted => "Accepted",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Pending" => Some(ApplicationStatus::Pending),
            "Assessment" => Some(ApplicationStatus::Assessment),
            "Interview" => Some(ApplicationStatus::Interview),
            "Rejected" => Some(ApplicationStatus::Rejected),
            "Accepted" => Some(ApplicationStatus::Accepted),
            _ => None,
        }
    }
}

/// How far an application progressed through the pipeline, independent of
/// its final status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    Applied,
    PhoneScreen,
    Assessment,
    Interview,
    Offer,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Applied => "Applied",
            Stage::PhoneScreen => "Phone Screen",
            Stage::Assessment => "Assessment",
            Stage::Interview => "Interview",
            Stage::Offer => "Offer",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Applied" => Some(Stage::Applied),
            "Phone Screen" => Some(Stage::PhoneScreen),
            "Assessment" => Some(Stage::Assessment),
            "Interview" => Some(Stage::Interview),
            "Offer" => Some(Stage::Offer),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicationRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub company_id: Option<Uuid>,
    pub job_title: String,
    pub job_type: String,
    pub description: String,
    pub link: Option<String>,
    pub ats_score: i16,
    pub stage: String,
    pub status: String,
    pub submission_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips() {
        for s in [
            ApplicationStatus::Pending,
            ApplicationStatus::Assessment,
            ApplicationStatus::Interview,
            ApplicationStatus::Rejected,
            ApplicationStatus::Accepted,
        ] {
            assert_eq!(ApplicationStatus::parse(s.as_str()), Some(s));
        }
        assert_eq!(ApplicationStatus::parse("Ghosted"), None);
    }

    #[test]
    fn test_stage_uses_display_labels() {
        assert_eq!(Stage::PhoneScreen.as_str(), "Phone Screen");
        assert_eq!(Stage::parse("Phone Screen"), Some(Stage::PhoneScreen));
    }
}
