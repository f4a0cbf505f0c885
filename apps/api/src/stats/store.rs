//! Store seam for the time-series aggregator.
//!
//! `AppState` holds an `Arc<dyn ApplicationStore>`; production uses
//! `PgApplicationStore`, unit tests substitute an in-memory store.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::interval::Interval;

/// One pre-summarized bucket as returned by the store: counts of a user's
/// applications sharing the same truncated submission date.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct GroupedAggregate {
    pub bucket_date: NaiveDate,
    pub total_applications: i64,
    pub rejections: i64,
    pub acceptances: i64,
}

#[async_trait]
pub trait ApplicationStore: Send + Sync {
    /// All of `owner`'s applications submitted on or after `since`, grouped
    /// by submission date truncated to `interval`, ascending, one row per
    /// distinct truncated date with at least one record, at most `limit` rows.
    async fn grouped_by_interval(
        &self,
        owner: Uuid,
        since: NaiveDate,
        interval: Interval,
        limit: i64,
    ) -> Result<Vec<GroupedAggregate>, sqlx::Error>;

    /// Account-creation date, used as the default window start when the
    /// caller does not supply one.
    async fn registration_date(&self, owner: Uuid) -> Result<Option<NaiveDate>, sqlx::Error>;
}

pub struct PgApplicationStore {
    pool: PgPool,
}

impl PgApplicationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApplicationStore for PgApplicationStore {
    async fn grouped_by_interval(
        &self,
        owner: Uuid,
        since: NaiveDate,
        interval: Interval,
        limit: i64,
    ) -> Result<Vec<GroupedAggregate>, sqlx::Error> {
        // DATE_TRUNC('week', ...) truncates to Monday, matching the Monday
        // snap applied to week-interval start dates.
        let sql = format!(
            r#"
            SELECT DATE_TRUNC('{unit}', submission_date)::date AS bucket_date,
                   COUNT(*) AS total_applications,
                   COUNT(*) FILTER (WHERE status = 'Rejected') AS rejections,
                   COUNT(*) FILTER (WHERE status = 'Accepted') AS acceptances
            FROM applications
            WHERE user_id = $1 AND submission_date >= $2
            GROUP BY bucket_date
            ORDER BY bucket_date
            LIMIT $3
            "#,
            unit = interval.as_str()
        );

        sqlx::query_as(&sql)
            .bind(owner)
            .bind(since)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
    }

    async fn registration_date(&self, owner: Uuid) -> Result<Option<NaiveDate>, sqlx::Error> {
        sqlx::query_scalar("SELECT created_at::date FROM users WHERE id = $1")
            .bind(owner)
            .fetch_optional(&self.pool)
            .await
    }
}
