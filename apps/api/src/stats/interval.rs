use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Bucket granularity for the time-series endpoint. Fixed set; anything else
/// is rejected at the validation edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    Day,
    Week,
    Month,
}

impl Interval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::Day => "day",
            Interval::Week => "week",
            Interval::Month => "month",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "day" => Some(Interval::Day),
            "week" => Some(Interval::Week),
            "month" => Some(Interval::Month),
            _ => None,
        }
    }

    /// The i-th expected bucket date, stepping forward from `start`.
    /// Month steps are 4 fixed weeks, not calendar months; labels drift
    /// from true month boundaries over long windows.
    pub fn step_from(&self, start: NaiveDate, i: u32) -> NaiveDate {
        match self {
            Interval::Day => start + Duration::days(i as i64),
            Interval::Week => start + Duration::weeks(i as i64),
            Interval::Month => start + Duration::weeks(4 * i as i64),
        }
    }

    /// Chart label for a bucket date. Week labels carry the raw Monday-based
    /// week-of-year number (`%W`, zero-padded, weeks before the first Monday
    /// are 00).
    pub fn format_label(&self, date: NaiveDate) -> String {
        match self {
            Interval::Day => date.format("%Y-%m-%d").to_string(),
            Interval::Week => date.format("%Y-%m-W%W").to_string(),
            Interval::Month => date.format("%Y-%m").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_accepts_only_fixed_set() {
        assert_eq!(Interval::parse("day"), Some(Interval::Day));
        assert_eq!(Interval::parse("week"), Some(Interval::Week));
        assert_eq!(Interval::parse("month"), Some(Interval::Month));
        assert_eq!(Interval::parse("year"), None);
        assert_eq!(Interval::parse("Day"), None);
    }

    #[test]
    fn test_month_step_is_four_weeks() {
        let start = day(2024, 1, 1);
        assert_eq!(Interval::Month.step_from(start, 1), day(2024, 1, 29));
        // Not 2024-02-01: the month step is a 4-week approximation.
        assert_ne!(Interval::Month.step_from(start, 1), day(2024, 2, 1));
    }

    #[test]
    fn test_step_sequences_are_contiguous() {
        let start = day(2024, 3, 4);
        for i in 0..5u32 {
            assert_eq!(
                Interval::Day.step_from(start, i),
                start + Duration::days(i as i64)
            );
            assert_eq!(
                Interval::Week.step_from(start, i),
                start + Duration::weeks(i as i64)
            );
        }
    }

    #[test]
    fn test_labels_per_interval() {
        let d = day(2024, 3, 4); // a Monday, week 10 of 2024
        assert_eq!(Interval::Day.format_label(d), "2024-03-04");
        assert_eq!(Interval::Week.format_label(d), "2024-03-W10");
        assert_eq!(Interval::Month.format_label(d), "2024-03");
    }

    #[test]
    fn test_week_label_zero_pads_early_weeks() {
        // 2025-01-01 is a Wednesday; days before the first Monday are week 00.
        assert_eq!(Interval::Week.format_label(day(2025, 1, 1)), "2025-01-W00");
        assert_eq!(Interval::Week.format_label(day(2025, 1, 6)), "2025-01-W01");
    }
}
