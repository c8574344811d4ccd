use chrono::{Datelike, NaiveDate};
use serde::{
    Serialize,
    Deserialize
};


#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum HolidayRuleKind {
    FixedDate,
    NthWeekday,
    LastWeekday
}

/// A holiday recognised once a year.
pub trait RecurringHoliday: Send + Sync {

    fn kind(&self) -> HolidayRuleKind;

    /// The date the holiday is observed on in `year`. The date itself may
    /// sit in a neighbouring year when a weekend shift crosses New Year.
    ///
    /// `None` when the date cannot be represented.
    fn observed_date(&self, year: i32) -> Option<NaiveDate>;

    fn is_holiday(&self, d: NaiveDate) -> bool {
        let year = d.year();
        (year - 1..=year + 1).any(|y| self.observed_date(y) == Some(d))
    }
}
