use chrono::{
    Duration,
    NaiveDate
};
use tracing::trace;

use crate::time::calendar::businessdayclassification::BusinessDayClassification;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::traversal::startinclusionpolicy::StartInclusionPolicy;
use crate::time::traversal::traversaldirection::TraversalDirection;
use crate::time::traversal::traversalerror::TraversalError;

fn step(d: NaiveDate, direction: TraversalDirection) -> Result<NaiveDate, TraversalError> {
    d.checked_add_signed(Duration::days(direction.step()))
        .ok_or(TraversalError::OutOfRange(d))
}

/// Parses a caller-supplied business-day count.
pub fn parse_day_count(text: &str) -> Result<i64, TraversalError> {
    let n: i64 = text
        .trim()
        .parse()
        .map_err(|_| TraversalError::InvalidCount(text.to_owned()))?;
    if n < 0 {
        return Err(TraversalError::InvalidCount(text.to_owned()));
    }
    Ok(n)
}

/// Moves `n` business days from `start` in `direction`, one calendar day at
/// a time, counting only the days `calendar` classifies as business days.
///
/// `n == 0` returns `start` unchanged, business day or not. For `n > 0` the
/// result is always a business day under either policy.
///
/// # Errors
/// `InvalidCount` for a negative `n`; `OutOfRange` if the walk would leave
/// the representable calendar.
pub fn add_business_days<C>(
    start: NaiveDate,
    n: i64,
    direction: TraversalDirection,
    policy: StartInclusionPolicy,
    calendar: &C
) -> Result<NaiveDate, TraversalError>
where
    C: HolidayCalendar + ?Sized
{
    if n < 0 {
        return Err(TraversalError::InvalidCount(n.to_string()));
    }
    if n == 0 {
        return Ok(start);
    }

    let mut d = start;
    let mut counted = 0;
    if policy.includes_start() && calendar.is_business_day(start) {
        counted = 1;
    }

    while counted < n {
        d = step(d, direction)?;
        if calendar.is_business_day(d) {
            counted += 1;
        }
    }

    // Landing guarantee: never hand back a weekend or holiday for n > 0.
    while !calendar.is_business_day(d) {
        d = step(d, direction)?;
    }

    trace!(%start, n, ?direction, ?policy, landed = %d, "business day offset");
    Ok(d)
}

/// A landed date together with why it counts as a business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessDayOffset {
    date: NaiveDate,
    classification: BusinessDayClassification
}

impl BusinessDayOffset {
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn classification(&self) -> BusinessDayClassification {
        self.classification
    }
}

pub fn business_day_offset<C>(
    start: NaiveDate,
    n: i64,
    direction: TraversalDirection,
    policy: StartInclusionPolicy,
    calendar: &C
) -> Result<BusinessDayOffset, TraversalError>
where
    C: HolidayCalendar + ?Sized
{
    let date = add_business_days(start, n, direction, policy, calendar)?;
    Ok(BusinessDayOffset {
        date,
        classification: calendar.classify(date)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::calendar::holidayindex::HolidayIndex;
    use crate::time::recurringholiday::federalholiday::FederalHoliday;

    use crate::time::traversal::startinclusionpolicy::StartInclusionPolicy::{
        ExcludeStart,
        IncludeStartIfBusinessDay
    };
    use crate::time::traversal::traversaldirection::TraversalDirection::{Backward, Forward};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn index() -> HolidayIndex {
        HolidayIndex::build_range(2023, 2025)
    }

    struct WeekendsOnly;

    impl HolidayCalendar for WeekendsOnly {
        fn holiday(&self, _d: NaiveDate) -> Option<FederalHoliday> {
            None
        }
    }

    #[test]
    fn one_day_after_mlk_day() {
        let cal = index();
        assert_eq!(
            add_business_days(date(2024, 1, 15), 1, Forward, ExcludeStart, &cal),
            Ok(date(2024, 1, 16))
        );
    }

    #[test]
    fn zero_is_a_no_op_under_both_policies() {
        let cal = index();
        let saturday = date(2024, 1, 6);
        assert_eq!(add_business_days(saturday, 0, Forward, ExcludeStart, &cal), Ok(saturday));
        assert_eq!(add_business_days(saturday, 0, Backward, IncludeStartIfBusinessDay, &cal), Ok(saturday));
    }

    #[test]
    fn negative_count_is_rejected() {
        let cal = index();
        assert_eq!(
            add_business_days(date(2024, 1, 8), -1, Forward, ExcludeStart, &cal),
            Err(TraversalError::InvalidCount("-1".to_owned()))
        );
    }

    #[test]
    fn included_start_counts_once() {
        let cal = index();
        let tuesday = date(2024, 1, 16);
        assert_eq!(add_business_days(tuesday, 1, Forward, IncludeStartIfBusinessDay, &cal), Ok(tuesday));
        assert_eq!(
            add_business_days(tuesday, 2, Forward, IncludeStartIfBusinessDay, &cal),
            Ok(date(2024, 1, 17))
        );
        assert_eq!(
            add_business_days(tuesday, 2, Backward, IncludeStartIfBusinessDay, &cal),
            Ok(date(2024, 1, 12))
        );
    }

    #[test]
    fn non_business_start_is_never_counted() {
        let cal = index();
        let mlk = date(2024, 1, 15);
        for policy in [ExcludeStart, IncludeStartIfBusinessDay] {
            assert_eq!(add_business_days(mlk, 1, Forward, policy, &cal), Ok(date(2024, 1, 16)));
            assert_eq!(add_business_days(mlk, 1, Backward, policy, &cal), Ok(date(2024, 1, 12)));
        }
    }

    #[test]
    fn backward_across_holiday_weekend_cluster() {
        let cal = index();
        // Tue 2024-01-16 back over MLK Monday and the weekend
        assert_eq!(
            add_business_days(date(2024, 1, 16), 1, Backward, ExcludeStart, &cal),
            Ok(date(2024, 1, 12))
        );
    }

    #[test]
    fn christmas_week() {
        let cal = index();
        assert_eq!(
            add_business_days(date(2024, 12, 24), 1, Forward, ExcludeStart, &cal),
            Ok(date(2024, 12, 26))
        );
        // Fri 2024-12-20 + 5: 23, 24, 26, 27, 30
        assert_eq!(
            add_business_days(date(2024, 12, 20), 5, Forward, ExcludeStart, &cal),
            Ok(date(2024, 12, 30))
        );
    }

    #[test]
    fn crossing_an_observed_new_year_outside_the_span() {
        let cal = index();
        // 2021-12-31 is New Year's Day 2022 observed, then a weekend
        assert_eq!(
            add_business_days(date(2021, 12, 30), 1, Forward, ExcludeStart, &cal),
            Ok(date(2022, 1, 3))
        );
        assert_eq!(cal.start_year(), Some(2021));
    }

    #[test]
    fn works_with_any_calendar() {
        // Fri 2024-01-12 + 1 skips only the weekend
        assert_eq!(
            add_business_days(date(2024, 1, 12), 1, Forward, ExcludeStart, &WeekendsOnly),
            Ok(date(2024, 1, 15))
        );
    }

    #[test]
    fn walking_off_the_calendar_is_an_error() {
        assert_eq!(
            add_business_days(NaiveDate::MAX, 1, Forward, ExcludeStart, &WeekendsOnly),
            Err(TraversalError::OutOfRange(NaiveDate::MAX))
        );
    }

    #[test]
    fn offset_reports_classification() {
        let cal = index();
        let offset = business_day_offset(date(2024, 1, 12), 1, Forward, ExcludeStart, &cal).unwrap();
        assert_eq!(offset.date(), date(2024, 1, 16));
        assert_eq!(offset.classification().to_string(), "weekday/non-holiday");

        let unchanged = business_day_offset(date(2024, 1, 15), 0, Forward, ExcludeStart, &cal).unwrap();
        assert_eq!(unchanged.classification().to_string(), "holiday: MLK Day");
    }

    #[test]
    fn day_count_parsing() {
        assert_eq!(parse_day_count("3"), Ok(3));
        assert_eq!(parse_day_count(" 10 "), Ok(10));
        assert_eq!(parse_day_count("0"), Ok(0));
        assert_eq!(parse_day_count("-2"), Err(TraversalError::InvalidCount("-2".to_owned())));
        assert!(parse_day_count("2.5").is_err());
        assert!(parse_day_count("three").is_err());
        assert!(parse_day_count("").is_err());
    }
}
