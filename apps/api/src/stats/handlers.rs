use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

use super::interval::Interval;
use super::timeseries::{
    compute_series, validate_points, BucketQuery, StatsError, TimeSeriesResult,
};

const DEFAULT_POINTS: u32 = 12;

#[derive(Deserialize)]
pub struct TimeSeriesParams {
    pub user_id: Uuid,
    pub interval: Option<String>,
    pub points: Option<u32>,
    pub start_date: Option<String>,
}

/// GET /api/v1/stats/timeseries
pub async fn handle_timeseries(
    State(state): State<AppState>,
    Query(params): Query<TimeSeriesParams>,
) -> Result<Json<TimeSeriesResult>, AppError> {
    // All string-level validation happens before touching the store.
    let (interval, points, start_date) = validate_params(&params)?;

    let start_date = match start_date {
        Some(d) => Some(d),
        None => state
            .store
            .registration_date(params.user_id)
            .await
            .map_err(StatsError::StoreUnavailable)?,
    };

    let query = BucketQuery {
        owner: params.user_id,
        interval,
        points,
        start_date,
    };
    let series = compute_series(state.store.as_ref(), &query).await?;
    Ok(Json(series))
}

/// Validates the raw query parameters: interval, then points, then date.
fn validate_params(
    params: &TimeSeriesParams,
) -> Result<(Interval, u32, Option<NaiveDate>), StatsError> {
    let interval = match params.interval.as_deref() {
        None => Interval::Month,
        Some(s) => Interval::parse(s).ok_or(StatsError::InvalidInterval)?,
    };

    let points = params.points.unwrap_or(DEFAULT_POINTS);
    validate_points(points)?;

    let start_date = params
        .start_date
        .as_deref()
        .map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| StatsError::InvalidDateFormat))
        .transpose()?;

    Ok((interval, points, start_date))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(
        interval: Option<&str>,
        points: Option<u32>,
        start_date: Option<&str>,
    ) -> TimeSeriesParams {
        TimeSeriesParams {
            user_id: Uuid::new_v4(),
            interval: interval.map(String::from),
            points,
            start_date: start_date.map(String::from),
        }
    }

    #[test]
    fn test_defaults_month_twelve_points() {
        let (interval, points, start) = validate_params(&params(None, None, None)).unwrap();
        assert_eq!(interval, Interval::Month);
        assert_eq!(points, 12);
        assert_eq!(start, None);
    }

    #[test]
    fn test_year_interval_rejected() {
        let err = validate_params(&params(Some("year"), None, None)).unwrap_err();
        assert!(matches!(err, StatsError::InvalidInterval));
    }

    #[test]
    fn test_points_out_of_range_rejected() {
        for bad in [0, 101] {
            let err = validate_params(&params(Some("day"), Some(bad), None)).unwrap_err();
            assert!(matches!(err, StatsError::InvalidPointCount));
        }
    }

    #[test]
    fn test_malformed_date_rejected() {
        for bad in ["03-01-2024", "2024/03/01", "yesterday"] {
            let err = validate_params(&params(Some("day"), Some(3), Some(bad))).unwrap_err();
            assert!(matches!(err, StatsError::InvalidDateFormat));
        }
    }

    #[test]
    fn test_well_formed_params_pass() {
        let (interval, points, start) =
            validate_params(&params(Some("week"), Some(4), Some("2024-03-06"))).unwrap();
        assert_eq!(interval, Interval::Week);
        assert_eq!(points, 4);
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 3, 6));
    }
}
