use chrono::{
    Datelike,
    Duration,
    NaiveDate,
    Weekday
};

use super::recurringholiday::{
    HolidayRuleKind,
    RecurringHoliday
};

/// The `n`-th `weekday` of `month`: the first occurrence, then `n - 1` weeks on.
///
/// No clamping is done. An `n` past the last occurrence rolls into the
/// following month, so callers keep `n` within the month (at most 4 is
/// always safe). Returns `None` only for an invalid month or an
/// unrepresentable date.
pub fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, n: u32) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let offset = (weekday.num_days_from_sunday() + 7 - first.weekday().num_days_from_sunday()) % 7;
    let days = offset as i64 + (n as i64 - 1) * 7;
    first.checked_add_signed(Duration::days(days))
}

#[derive(Debug, Clone)]
pub struct NthWeekdayHoliday {
    month: u32,
    n: u8,
    weekday: Weekday,
}

impl NthWeekdayHoliday {
    pub fn new(month: u32, n: u8, weekday: Weekday) -> Option<NthWeekdayHoliday> {
        if !(1..=12).contains(&month) || !(1..=5).contains(&n) {
            None
        } else {
            Some(NthWeekdayHoliday { month, n, weekday })
        }
    }
}

impl RecurringHoliday for NthWeekdayHoliday {
    fn kind(&self) -> HolidayRuleKind {
        HolidayRuleKind::NthWeekday
    }

    /// A fifth occurrence that does not exist in `year` yields `None`.
    fn observed_date(&self, year: i32) -> Option<NaiveDate> {
        nth_weekday_of_month(year, self.month, self.weekday, self.n as u32)
            .filter(|d| d.month() == self.month)
    }
}
