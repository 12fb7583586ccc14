use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Named query windows offered by the period selector.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Period {
    All,
    Today,
    Week,
    Month,
}

impl Period {
    /// Every period in selector order.
    pub const ALL: [Period; 4] = [Period::All, Period::Today, Period::Week, Period::Month];

    pub fn label(self) -> &'static str {
        match self {
            Period::All => "All",
            Period::Today => "Today",
            Period::Week => "Week",
            Period::Month => "Month",
        }
    }

    /// Resolves the period against a reference instant into a concrete
    /// half-open window. Pure: same inputs always give the same range.
    ///
    /// Weeks start on Monday (ISO 8601). Calendar math runs on the UTC day
    /// of the reference instant.
    pub fn resolve(self, reference: DateTime<Utc>) -> TimeRange {
        let day = reference.date_naive();
        match self {
            Period::All => TimeRange::UNBOUNDED,
            Period::Today => TimeRange::between(day, day + Duration::days(1)),
            Period::Week => {
                let monday = day - Duration::days(day.weekday().num_days_from_monday() as i64);
                TimeRange::between(monday, monday + Duration::days(7))
            }
            Period::Month => {
                // Day 1 always exists.
                let first = day.with_day(1).unwrap();
                TimeRange::between(first, first_of_next_month(first))
            }
        }
    }
}

/// Half-open instant range `[start, end)`; an absent bound is unbounded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeRange {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl TimeRange {
    pub const UNBOUNDED: TimeRange = TimeRange {
        start: None,
        end: None,
    };

    /// Range spanning `[start, end)` in whole UTC days.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start_of_day(start)),
            end: Some(start_of_day(end)),
        }
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start.map_or(true, |start| instant >= start)
            && self.end.map_or(true, |end| instant < end)
    }
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    // Midnight always exists in UTC.
    Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).unwrap())
}

fn first_of_next_month(first: NaiveDate) -> NaiveDate {
    let (year, month) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap()
}
