use chrono::{
    Datelike,
    Duration,
    Months,
    NaiveDate,
    Weekday
};

use super::recurringholiday::{
    HolidayRuleKind,
    RecurringHoliday
};

/// The last `weekday` of `month`, found by stepping back from the month's
/// final day.
pub fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    let last = NaiveDate::from_ymd_opt(year, month, 1)?
        .checked_add_months(Months::new(1))?
        .pred_opt()?;
    let days_back = (last.weekday().num_days_from_sunday() + 7 - weekday.num_days_from_sunday()) % 7;
    last.checked_sub_signed(Duration::days(days_back as i64))
}

#[derive(Debug, Clone)]
pub struct LastWeekdayHoliday {
    month: u32,
    weekday: Weekday,
}

impl LastWeekdayHoliday {
    pub fn new(month: u32, weekday: Weekday) -> Option<LastWeekdayHoliday> {
        if !(1..=12).contains(&month) {
            None
        } else {
            Some(LastWeekdayHoliday { month, weekday })
        }
    }
}

impl RecurringHoliday for LastWeekdayHoliday {
    fn kind(&self) -> HolidayRuleKind {
        HolidayRuleKind::LastWeekday
    }

    fn observed_date(&self, year: i32) -> Option<NaiveDate> {
        last_weekday_of_month(year, self.month, self.weekday)
    }
}
