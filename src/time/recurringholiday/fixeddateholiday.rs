use chrono::NaiveDate;

use super::recurringholiday::{
    HolidayRuleKind,
    RecurringHoliday
};
use super::weekendadjustment::{
    FEDERAL_WEEKEND_ADJUSTMENT,
    WeekendAdjustmentRule
};

/// The weekday a fixed-date holiday falling on `d` is observed on:
/// Saturday → preceding Friday, Sunday → following Monday.
#[inline]
pub fn observed_fixed_holiday(d: NaiveDate) -> NaiveDate {
    FEDERAL_WEEKEND_ADJUSTMENT.adjust(d)
}

#[derive(Debug, Clone)]
pub struct FixedDateHoliday {
    month: u32,
    day: u32,
    weekend_adjustment_rule: WeekendAdjustmentRule
}

impl FixedDateHoliday {
    /// `None` unless `month`/`day` name a day that exists in at least leap years.
    pub fn new(month: u32, day: u32, weekend_adjustment_rule: WeekendAdjustmentRule) -> Option<FixedDateHoliday> {
        NaiveDate::from_ymd_opt(2000, month, day)?;
        Some(FixedDateHoliday {
            month,
            day,
            weekend_adjustment_rule
        })
    }

    pub fn federal(month: u32, day: u32) -> Option<FixedDateHoliday> {
        FixedDateHoliday::new(month, day, FEDERAL_WEEKEND_ADJUSTMENT)
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn kind(&self) -> HolidayRuleKind {
        HolidayRuleKind::FixedDate
    }

    fn observed_date(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
            .map(|d| self.weekend_adjustment_rule.adjust(d))
    }
}
