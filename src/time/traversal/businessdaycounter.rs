use chrono::NaiveDate;
use tracing::trace;

use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::rangeofdates::RangeOfDates;

/// Business days between `a` and `b`, scanning day by day through the later
/// date inclusive.
///
/// Endpoints may come in either order. With `include_start == false` the
/// earlier endpoint is skipped, so a single-day range then counts 0.
pub fn count_business_days<C>(a: NaiveDate, b: NaiveDate, include_start: bool, calendar: &C) -> usize
where
    C: HolidayCalendar + ?Sized
{
    let range = RangeOfDates::new(a, b);
    let scanned = if include_start {
        Some(range)
    } else {
        range.without_start()
    };

    let count = scanned.map_or(0, |r| {
        r.iter().filter(|d| calendar.is_business_day(*d)).count()
    });
    trace!(start = %range.start_date(), end = %range.end_date(), include_start, count, "counted business days");
    count
}
