use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, TimeDelta};

/// Canonical English day names indexed by days from Monday.
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const MILLIS_PER_DAY: i64 = 86_400_000;

pub fn weekday_name(date: NaiveDate) -> &'static str {
    WEEKDAYS[date.weekday().num_days_from_monday() as usize]
}

/// Calendar date in the committer's own zone, offset dropped.
pub fn local_date(timestamp: &DateTime<FixedOffset>) -> NaiveDate {
    timestamp.naive_local().date()
}

/// Whole days rounded toward negative infinity.
pub fn floor_days(delta: TimeDelta) -> i64 {
    delta.num_milliseconds().div_euclid(MILLIS_PER_DAY)
}
