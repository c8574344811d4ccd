use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{
    Datelike,
    NaiveDate
};
use serde::{
    Serialize,
    Deserialize
};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateKeyParseError {
    #[error("'{0}' is not of the form YYYY-MM-DD")]
    Malformed(String),

    #[error("'{0}' contains a non-numeric date component")]
    NonNumeric(String),

    #[error("'{0}' is not a valid calendar date")]
    OutOfRange(String)
}

/// Canonical `YYYY-MM-DD` text of a calendar date.
///
/// Keys are only ever produced from a valid `NaiveDate` or by a successful
/// parse, so every key names exactly one date. Years are zero-padded to four
/// digits; years before 0001 carry a leading `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateKey(String);

impl DateKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The date this key names.
    pub fn date(&self) -> NaiveDate {
        // A DateKey is only built from a valid date, so re-parsing cannot fail.
        parse_components(&self.0).unwrap_or(NaiveDate::MIN)
    }
}

impl From<NaiveDate> for DateKey {
    fn from(d: NaiveDate) -> DateKey {
        let year = d.year();
        if year < 0 {
            DateKey(format!("-{:04}-{:02}-{:02}", -year, d.month(), d.day()))
        } else {
            DateKey(format!("{:04}-{:02}-{:02}", year, d.month(), d.day()))
        }
    }
}

impl From<DateKey> for String {
    fn from(key: DateKey) -> String {
        key.0
    }
}

impl TryFrom<String> for DateKey {
    type Error = DateKeyParseError;

    fn try_from(s: String) -> Result<DateKey, DateKeyParseError> {
        s.parse()
    }
}

impl FromStr for DateKey {
    type Err = DateKeyParseError;

    fn from_str(s: &str) -> Result<DateKey, DateKeyParseError> {
        let d = parse_components(s)?;
        Ok(DateKey::from(d))
    }
}

/// Keys order like the dates they name, not like their text.
impl Ord for DateKey {
    fn cmp(&self, other: &DateKey) -> Ordering {
        self.date().cmp(&other.date())
    }
}

impl PartialOrd for DateKey {
    fn partial_cmp(&self, other: &DateKey) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn parse_components(s: &str) -> Result<NaiveDate, DateKeyParseError> {
    let (negative, body) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s)
    };
    let parts: Vec<&str> = body.split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(DateKeyParseError::Malformed(s.to_owned()));
    };

    let numeric = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
    if !(numeric(year) && numeric(month) && numeric(day)) {
        return Err(DateKeyParseError::NonNumeric(s.to_owned()));
    }
    if year.len() < 4 || month.len() != 2 || day.len() != 2 {
        return Err(DateKeyParseError::Malformed(s.to_owned()));
    }

    // Digit runs too long for the integer types cannot name a real date.
    let out_of_range = || DateKeyParseError::OutOfRange(s.to_owned());
    let y: i32 = year.parse().map_err(|_| out_of_range())?;
    let y = if negative { -y } else { y };
    let m: u32 = month.parse().map_err(|_| out_of_range())?;
    let d: u32 = day.parse().map_err(|_| out_of_range())?;
    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(out_of_range)
}
