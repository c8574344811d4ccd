use chrono::{Days, NaiveDate};

use crate::time::calendar::businessdayclassification::BusinessDayClassification;
use crate::time::recurringholiday::federalholiday::FederalHoliday;
use crate::time::utility;

const ONE_DAY: Days = Days::new(1);

pub trait HolidayCalendar: Send + Sync {
    /// The holiday observed on `d`, whatever day of the week it is.
    fn holiday(&self, d: NaiveDate) -> Option<FederalHoliday>;

    fn is_weekend(&self, d: NaiveDate) -> bool {
        utility::is_weekend(d)
    }

    /// Weekends take priority: a weekend date is classified as weekend
    /// without consulting the holiday lookup.
    fn classify(&self, d: NaiveDate) -> BusinessDayClassification {
        if self.is_weekend(d) {
            return BusinessDayClassification::weekend();
        }
        match self.holiday(d) {
            Some(holiday) => BusinessDayClassification::holiday(holiday),
            None => BusinessDayClassification::weekday()
        }
    }

    fn is_business_day(&self, d: NaiveDate) -> bool {
        self.classify(d).is_business_day()
    }

    /// Any non-business day, weekends included.
    fn is_non_business_day(&self, d: NaiveDate) -> bool {
        !self.is_business_day(d)
    }

    /// First business day strictly after `d`, `None` past the end of the
    /// representable calendar.
    fn next_business_day(&self, d: NaiveDate) -> Option<NaiveDate> {
        let mut next = d.checked_add_days(ONE_DAY)?;
        while self.is_non_business_day(next) {
            next = next.checked_add_days(ONE_DAY)?;
        }
        Some(next)
    }

    fn previous_business_day(&self, d: NaiveDate) -> Option<NaiveDate> {
        let mut previous = d.checked_sub_days(ONE_DAY)?;
        while self.is_non_business_day(previous) {
            previous = previous.checked_sub_days(ONE_DAY)?;
        }
        Some(previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::calendar::businessdayclassification::ClassificationReason;
    use crate::time::calendar::holidayindex::HolidayIndex;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Every day of the year is Independence Day.
    struct AlwaysHoliday;

    impl HolidayCalendar for AlwaysHoliday {
        fn holiday(&self, _d: NaiveDate) -> Option<FederalHoliday> {
            Some(FederalHoliday::IndependenceDay)
        }
    }

    struct WeekendsOnly;

    impl HolidayCalendar for WeekendsOnly {
        fn holiday(&self, _d: NaiveDate) -> Option<FederalHoliday> {
            None
        }
    }

    #[test]
    fn weekend_wins_over_holiday() {
        // 2026-07-04 is a Saturday
        let saturday = date(2026, 7, 4);
        assert_eq!(AlwaysHoliday.classify(saturday).reason(), ClassificationReason::Weekend);
        assert_eq!(AlwaysHoliday.classify(saturday).to_string(), "weekend");
        assert_eq!(
            AlwaysHoliday.classify(date(2026, 7, 3)).reason(),
            ClassificationReason::Holiday(FederalHoliday::IndependenceDay)
        );
    }

    #[test]
    fn non_business_days_include_weekends() {
        let index = HolidayIndex::build_range(2024, 2024);
        assert!(index.is_non_business_day(date(2024, 1, 13)));
        assert!(index.is_non_business_day(date(2024, 1, 15)));
        assert!(!index.is_non_business_day(date(2024, 1, 16)));
    }

    #[test]
    fn next_and_previous_business_day() {
        let index = HolidayIndex::build_range(2024, 2024);
        // Fri 2024-01-12, then the weekend and MLK Day
        assert_eq!(index.next_business_day(date(2024, 1, 12)), Some(date(2024, 1, 16)));
        assert_eq!(index.previous_business_day(date(2024, 1, 16)), Some(date(2024, 1, 12)));
        // Strictly after and before, even from a business day
        assert_eq!(index.next_business_day(date(2024, 1, 16)), Some(date(2024, 1, 17)));
        assert_eq!(index.previous_business_day(date(2024, 1, 17)), Some(date(2024, 1, 16)));
        // 2024-12-25 is a Wednesday
        assert_eq!(index.next_business_day(date(2024, 12, 24)), Some(date(2024, 12, 26)));
    }

    #[test]
    fn no_business_day_past_the_calendar_ends() {
        assert_eq!(WeekendsOnly.next_business_day(NaiveDate::MAX), None);
        assert_eq!(WeekendsOnly.previous_business_day(NaiveDate::MIN), None);
        assert_eq!(AlwaysHoliday.next_business_day(NaiveDate::MAX - Days::new(3)), None);
    }
}
