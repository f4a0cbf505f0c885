//! One-shot aggregate endpoints: overall counts and per-stage percentages.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct OwnerParams {
    pub user_id: Uuid,
}

#[derive(Debug, Serialize, FromRow)]
pub struct SummaryStats {
    pub total_applications: i64,
    pub pending_applications: i64,
    pub rejected_applications: i64,
    pub accepted_applications: i64,
    pub last_application: Option<NaiveDate>,
    pub last_rejection: Option<NaiveDate>,
    pub last_acceptance: Option<NaiveDate>,
    pub last_pending: Option<NaiveDate>,
}

/// GET /api/v1/stats/summary
///
/// Single aggregate query over the user's applications. "Pending" is any
/// status other than Rejected or Accepted.
pub async fn handle_summary(
    State(state): State<AppState>,
    Query(params): Query<OwnerParams>,
) -> Result<Json<SummaryStats>, AppError> {
    let stats: SummaryStats = sqlx::query_as(
        r#"
        SELECT COUNT(*) AS total_applications,
               COUNT(*) FILTER (WHERE status NOT IN ('Rejected', 'Accepted')) AS pending_applications,
               COUNT(*) FILTER (WHERE status = 'Rejected') AS rejected_applications,
               COUNT(*) FILTER (WHERE status = 'Accepted') AS accepted_applications,
               MAX(submission_date) AS last_application,
               MAX(submission_date) FILTER (WHERE status = 'Rejected') AS last_rejection,
               MAX(submission_date) FILTER (WHERE status = 'Accepted') AS last_acceptance,
               MAX(submission_date) FILTER (WHERE status NOT IN ('Rejected', 'Accepted')) AS last_pending
        FROM applications
        WHERE user_id = $1
        "#,
    )
    .bind(params.user_id)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(stats))
}

#[derive(Debug, FromRow)]
pub struct StageCounts {
    pub total_applications: i64,
    pub applied_stage: i64,
    pub phonescreen_stage: i64,
    pub assessment_stage: i64,
    pub interview_stage: i64,
    pub offer_stage: i64,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct StagePercents {
    pub total_applications: f64,
    pub applied_stage: f64,
    pub phonescreen_stage: f64,
    pub assessment_stage: f64,
    pub interview_stage: f64,
    pub offer_stage: f64,
}

/// GET /api/v1/stats/stage-percents
///
/// Among decided applications (Accepted or Rejected), the percentage that
/// reached each pipeline stage.
pub async fn handle_stage_percents(
    State(state): State<AppState>,
    Query(params): Query<OwnerParams>,
) -> Result<Json<StagePercents>, AppError> {
    let counts: StageCounts = sqlx::query_as(
        r#"
        SELECT COUNT(*) AS total_applications,
               COUNT(*) FILTER (WHERE stage = 'Applied') AS applied_stage,
               COUNT(*) FILTER (WHERE stage = 'Phone Screen') AS phonescreen_stage,
               COUNT(*) FILTER (WHERE stage = 'Assessment') AS assessment_stage,
               COUNT(*) FILTER (WHERE stage = 'Interview') AS interview_stage,
               COUNT(*) FILTER (WHERE stage = 'Offer') AS offer_stage
        FROM applications
        WHERE user_id = $1 AND status IN ('Accepted', 'Rejected')
        "#,
    )
    .bind(params.user_id)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(stage_percents(&counts)))
}

/// Converts decided-application stage counts into percentages rounded to two
/// decimals. The denominator clamps to 1 so an empty history yields zeros
/// instead of a division by zero.
fn stage_percents(counts: &StageCounts) -> StagePercents {
    let total = counts.total_applications.max(1) as f64;
    let pct = |n: i64| ((n as f64 / total) * 100.0 * 100.0).round() / 100.0;

    StagePercents {
        total_applications: pct(counts.total_applications),
        applied_stage: pct(counts.applied_stage),
        phonescreen_stage: pct(counts.phonescreen_stage),
        assessment_stage: pct(counts.assessment_stage),
        interview_stage: pct(counts.interview_stage),
        offer_stage: pct(counts.offer_stage),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(total: i64, applied: i64, phone: i64, assess: i64, interview: i64, offer: i64) -> StageCounts {
        StageCounts {
            total_applications: total,
            applied_stage: applied,
            phonescreen_stage: phone,
            assessment_stage: assess,
            interview_stage: interview,
            offer_stage: offer,
        }
    }

    #[test]
    fn test_empty_history_is_all_zero() {
        let p = stage_percents(&counts(0, 0, 0, 0, 0, 0));
        assert_eq!(p.total_applications, 0.0);
        assert_eq!(p.applied_stage, 0.0);
        assert_eq!(p.offer_stage, 0.0);
    }

    #[test]
    fn test_total_is_one_hundred_percent() {
        let p = stage_percents(&counts(4, 4, 2, 1, 1, 0));
        assert_eq!(p.total_applications, 100.0);
        assert_eq!(p.applied_stage, 100.0);
        assert_eq!(p.phonescreen_stage, 50.0);
        assert_eq!(p.assessment_stage, 25.0);
    }

    #[test]
    fn test_rounds_to_two_decimals() {
        let p = stage_percents(&counts(3, 1, 2, 0, 0, 0));
        assert_eq!(p.applied_stage, 33.33);
        assert_eq!(p.phonescreen_stage, 66.67);
    }
}
