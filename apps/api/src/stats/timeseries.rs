//! Interval-bucketed time series over a user's application history.
//!
//! The output is a fixed-length, chronologically ascending, gap-filled
//! sequence of per-bucket counts suitable for charting: exactly `points`
//! entries regardless of how sparse the underlying records are, so callers
//! never gap-fill themselves. One grouped store query, then a linear merge
//! against the generated expected-date sequence.

use chrono::{Datelike, Duration, NaiveDate, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::errors::AppError;

use super::interval::Interval;
use super::store::{ApplicationStore, GroupedAggregate};

pub const MIN_POINTS: u32 = 1;
pub const MAX_POINTS: u32 = 100;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("Invalid interval. Choose from: month, week, day")]
    InvalidInterval,

    #[error("Invalid number of points. Choose from 1 to 100")]
    InvalidPointCount,

    #[error("Invalid date format. Use: YYYY-MM-DD")]
    InvalidDateFormat,

    #[error("application store unavailable: {0}")]
    StoreUnavailable(#[from] sqlx::Error),
}

impl From<StatsError> for AppError {
    fn from(err: StatsError) -> Self {
        match err {
            StatsError::StoreUnavailable(e) => AppError::Database(e),
            other => AppError::Validation(other.to_string()),
        }
    }
}

/// One request's worth of inputs, already past string-level validation.
#[derive(Debug, Clone)]
pub struct BucketQuery {
    pub owner: Uuid,
    pub interval: Interval,
    pub points: u32,
    /// Window start. `None` falls back to an interval-dependent default
    /// relative to today.
    pub start_date: Option<NaiveDate>,
}

/// One aggregated time-period slot in the output series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket {
    pub date: String,
    pub total_applications: i64,
    pub rejections: i64,
    pub acceptances: i64,
}

impl Bucket {
    fn zero(label: String) -> Self {
        Bucket {
            date: label,
            total_applications: 0,
            rejections: 0,
            acceptances: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TimeSeriesResult {
    pub points: u32,
    pub start_date: String,
    pub interval: Interval,
    pub results: Vec<Bucket>,
}

pub fn validate_points(points: u32) -> Result<(), StatsError> {
    if (MIN_POINTS..=MAX_POINTS).contains(&points) {
        Ok(())
    } else {
        Err(StatsError::InvalidPointCount)
    }
}

/// Computes the gap-filled series for one query. Pure given the store
/// snapshot; validation runs before the single store round-trip, and no
/// partial result is produced on failure.
pub async fn compute_series(
    store: &dyn ApplicationStore,
    query: &BucketQuery,
) -> Result<TimeSeriesResult, StatsError> {
    validate_points(query.points)?;

    let today = Utc::now().date_naive();
    let start = normalize_start(query.start_date, query.interval, query.points, today);

    let grouped = store
        .grouped_by_interval(query.owner, start, query.interval, query.points as i64)
        .await?;

    Ok(TimeSeriesResult {
        points: query.points,
        start_date: query.interval.format_label(start),
        interval: query.interval,
        results: merge_buckets(start, query.interval, query.points, &grouped),
    })
}

/// Resolves the window start for bucket generation.
///
/// An unset start falls back per interval: `day` covers exactly `points`
/// days ending today, `week` reaches back `points` whole weeks, and `month`
/// steps back from the first of the current month in 4-week increments.
/// Week-interval starts always snap back to the Monday of their week,
/// explicit dates included, so they line up with week-truncated store
/// buckets.
pub fn normalize_start(
    start: Option<NaiveDate>,
    interval: Interval,
    points: u32,
    today: NaiveDate,
) -> NaiveDate {
    let span = points as i64;
    match interval {
        Interval::Day => start.unwrap_or(today - Duration::days(span - 1)),
        Interval::Week => {
            let base = start.unwrap_or(today - Duration::weeks(span));
            base - Duration::days(base.weekday().num_days_from_monday() as i64)
        }
        Interval::Month => {
            start.unwrap_or_else(|| first_of_month(today) - Duration::weeks(4 * (span - 1)))
        }
    }
}

fn first_of_month(d: NaiveDate) -> NaiveDate {
    // Day 1 exists in every month; fall back to the input just in case.
    d.with_day(1).unwrap_or(d)
}

/// Merges the grouped aggregates into the expected-date sequence,
/// zero-filling periods with no data. Linear in `points + grouped.len()`.
///
/// The cursor `j` never rewinds: an aggregate is consumed only on an exact
/// date match with the current expected date. Store bucket dates are assumed
/// to be a subset of the generated sequence; a bucket date that precedes the
/// current expected date (clock skew, timezone mismatch) stays pending
/// forever and silently drops out. Known edge case, kept as-is.
pub fn merge_buckets(
    start: NaiveDate,
    interval: Interval,
    points: u32,
    grouped: &[GroupedAggregate],
) -> Vec<Bucket> {
    let mut results = Vec::with_capacity(points as usize);
    let mut j = 0usize;

    for i in 0..points {
        let expected = interval.step_from(start, i);
        match grouped.get(j) {
            Some(agg) if agg.bucket_date == expected => {
                results.push(Bucket {
                    date: interval.format_label(agg.bucket_date),
                    total_applications: agg.total_applications,
                    rejections: agg.rejections,
                    acceptances: agg.acceptances,
                });
                j += 1;
            }
            _ => results.push(Bucket::zero(interval.format_label(expected))),
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// In-memory stand-in for the Postgres store: pre-grouped rows, filtered
    /// by `since` and truncated to `limit` like the real query.
    struct MemoryStore {
        rows: Vec<GroupedAggregate>,
        calls: AtomicUsize,
    }

    impl MemoryStore {
        fn new(rows: Vec<GroupedAggregate>) -> Self {
            Self {
                rows,
                calls: AtomicUsize::new(0),
            }
        }

        fn empty() -> Self {
            Self::new(Vec::new())
        }
    }

    #[async_trait]
    impl ApplicationStore for MemoryStore {
        async fn grouped_by_interval(
            &self,
            _owner: Uuid,
            since: NaiveDate,
            _interval: Interval,
            limit: i64,
        ) -> Result<Vec<GroupedAggregate>, sqlx::Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .rows
                .iter()
                .filter(|r| r.bucket_date >= since)
                .take(limit as usize)
                .cloned()
                .collect())
        }

        async fn registration_date(&self, _owner: Uuid) -> Result<Option<NaiveDate>, sqlx::Error> {
            Ok(None)
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn agg(date: NaiveDate, total: i64, rej: i64, acc: i64) -> GroupedAggregate {
        GroupedAggregate {
            bucket_date: date,
            total_applications: total,
            rejections: rej,
            acceptances: acc,
        }
    }

    fn query(interval: Interval, points: u32, start: Option<NaiveDate>) -> BucketQuery {
        BucketQuery {
            owner: Uuid::new_v4(),
            interval,
            points,
            start_date: start,
        }
    }

    #[tokio::test]
    async fn test_series_len_always_matches_points() {
        let store = MemoryStore::empty();
        for points in [1, 7, 100] {
            let q = query(Interval::Day, points, Some(day(2024, 3, 1)));
            let series = compute_series(&store, &q).await.unwrap();
            assert_eq!(series.results.len(), points as usize);
            assert!(series
                .results
                .iter()
                .all(|b| b.total_applications == 0 && b.rejections == 0 && b.acceptances == 0));
        }
    }

    #[tokio::test]
    async fn test_points_bounds() {
        let store = MemoryStore::empty();
        for points in [0, 101] {
            let err = compute_series(&store, &query(Interval::Day, points, None))
                .await
                .unwrap_err();
            assert!(matches!(err, StatsError::InvalidPointCount));
        }
        // Out-of-range points never reach the store.
        assert_eq!(store.calls.load(Ordering::SeqCst), 0);

        for points in [1, 100] {
            compute_series(&store, &query(Interval::Day, points, Some(day(2024, 3, 1))))
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn test_day_gap_fill_single_rejection() {
        // One rejected application on day 3 of a 3-day window.
        let store = MemoryStore::new(vec![agg(day(2024, 3, 3), 1, 1, 0)]);
        let q = query(Interval::Day, 3, Some(day(2024, 3, 1)));
        let series = compute_series(&store, &q).await.unwrap();

        assert_eq!(series.start_date, "2024-03-01");
        let counts: Vec<(i64, i64, i64)> = series
            .results
            .iter()
            .map(|b| (b.total_applications, b.rejections, b.acceptances))
            .collect();
        assert_eq!(counts, vec![(0, 0, 0), (0, 0, 0), (1, 1, 0)]);

        let labels: Vec<&str> = series.results.iter().map(|b| b.date.as_str()).collect();
        assert_eq!(labels, vec!["2024-03-01", "2024-03-02", "2024-03-03"]);
    }

    #[tokio::test]
    async fn test_week_start_snaps_back_to_monday() {
        // 2024-03-06 is a Wednesday; the window must start on Monday 03-04.
        let store = MemoryStore::new(vec![agg(day(2024, 3, 4), 2, 0, 1)]);
        let q = query(Interval::Week, 2, Some(day(2024, 3, 6)));
        let series = compute_series(&store, &q).await.unwrap();

        assert_eq!(series.start_date, "2024-03-W10");
        assert_eq!(series.results[0].total_applications, 2);
        assert_eq!(series.results[0].acceptances, 1);
        assert_eq!(series.results[1].date, "2024-03-W11");
        assert_eq!(series.results[1].total_applications, 0);
    }

    #[tokio::test]
    async fn test_month_second_bucket_is_four_weeks_out() {
        let store = MemoryStore::new(vec![agg(day(2024, 1, 1), 3, 1, 1)]);
        let q = query(Interval::Month, 2, Some(day(2024, 1, 1)));
        let series = compute_series(&store, &q).await.unwrap();

        // Second expected date is 2024-01-29 (start + 4 weeks), not 02-01,
        // so both labels carry January.
        assert_eq!(series.results[0].total_applications, 3);
        assert_eq!(series.results[0].date, "2024-01");
        assert_eq!(series.results[1].total_applications, 0);
        assert_eq!(series.results[1].date, "2024-01");
    }

    #[tokio::test]
    async fn test_month_aggregate_off_sequence_stays_pending() {
        // A month-truncated bucket at 2024-02-01 never matches the expected
        // date 2024-01-29, so the cursor sticks and the data drops out.
        let store = MemoryStore::new(vec![agg(day(2024, 1, 1), 1, 0, 0), agg(day(2024, 2, 1), 5, 2, 1)]);
        let q = query(Interval::Month, 3, Some(day(2024, 1, 1)));
        let series = compute_series(&store, &q).await.unwrap();

        assert_eq!(series.results[0].total_applications, 1);
        assert_eq!(series.results[1].total_applications, 0);
        assert_eq!(series.results[2].total_applications, 0);
    }

    #[tokio::test]
    async fn test_idempotent_given_unchanged_store() {
        let store = MemoryStore::new(vec![agg(day(2024, 3, 2), 4, 2, 1)]);
        let q = query(Interval::Day, 5, Some(day(2024, 3, 1)));
        let first = compute_series(&store, &q).await.unwrap();
        let second = compute_series(&store, &q).await.unwrap();
        assert_eq!(first.results, second.results);
        assert_eq!(first.start_date, second.start_date);
    }

    #[test]
    fn test_merge_never_rewinds_cursor() {
        // Aggregate earlier than every expected date: never consumed.
        let grouped = vec![agg(day(2024, 3, 1), 9, 9, 0)];
        let buckets = merge_buckets(day(2024, 3, 2), Interval::Day, 3, &grouped);
        assert!(buckets.iter().all(|b| b.total_applications == 0));
    }

    #[test]
    fn test_merge_labels_ascending_and_contiguous() {
        let buckets = merge_buckets(day(2024, 12, 30), Interval::Day, 4, &[]);
        let labels: Vec<&str> = buckets.iter().map(|b| b.date.as_str()).collect();
        assert_eq!(
            labels,
            vec!["2024-12-30", "2024-12-31", "2025-01-01", "2025-01-02"]
        );
    }

    #[test]
    fn test_normalize_start_defaults() {
        let today = day(2024, 3, 15); // a Friday

        // day: window of exactly `points` days ending today.
        assert_eq!(
            normalize_start(None, Interval::Day, 7, today),
            day(2024, 3, 9)
        );

        // week: back `points` weeks, then snapped to Monday.
        let week_start = normalize_start(None, Interval::Week, 4, today);
        assert_eq!(week_start, day(2024, 2, 12));
        assert_eq!(week_start.weekday(), chrono::Weekday::Mon);

        // month: first of current month, back 4*(points-1) weeks.
        assert_eq!(
            normalize_start(None, Interval::Month, 2, today),
            day(2024, 2, 2)
        );
    }

    #[test]
    fn test_normalize_explicit_start_used_as_given_except_week_snap() {
        let today = day(2024, 3, 15);
        let wed = day(2024, 3, 6);

        assert_eq!(normalize_start(Some(wed), Interval::Day, 3, today), wed);
        assert_eq!(normalize_start(Some(wed), Interval::Month, 3, today), wed);
        assert_eq!(
            normalize_start(Some(wed), Interval::Week, 3, today),
            day(2024, 3, 4)
        );
    }
}
