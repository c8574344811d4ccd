use chrono::{
    Datelike,
    Duration,
    NaiveDate,
    Weekday
};

use crate::time::datekey::{
    DateKey,
    DateKeyParseError
};

#[inline]
pub fn to_date_key(d: NaiveDate) -> DateKey {
    DateKey::from(d)
}

pub fn from_date_key(key: &str) -> Result<NaiveDate, DateKeyParseError> {
    key.parse::<DateKey>().map(|k| k.date())
}

/// Calendar date `n` days after `d` (before it when `n` is negative).
///
/// Month, year and leap-day rollover are left to chrono.
///
/// # Panics
/// Panics if the result falls outside chrono's representable range.
#[inline]
pub fn add_days(d: NaiveDate, n: i64) -> NaiveDate {
    d + Duration::days(n)
}

/// 0 = Sunday ... 6 = Saturday.
#[inline]
pub fn day_of_week(d: NaiveDate) -> u32 {
    d.weekday().num_days_from_sunday()
}

#[inline]
pub fn is_weekend(d: NaiveDate) -> bool {
    matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn weekday_name(d: NaiveDate) -> &'static str {
    match d.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday"
    }
}
