use std::collections::HashMap;
use std::fmt;
use std::ops::RangeInclusive;
use std::sync::{
    Arc,
    PoisonError,
    RwLock,
    RwLockReadGuard,
    RwLockWriteGuard
};

use chrono::{
    Datelike,
    Local,
    NaiveDate
};
use tracing::debug;

use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::datekey::DateKey;
use crate::time::recurringholiday::federalholiday::{
    FederalHoliday,
    federal_holiday_rules,
    observe_with_rules
};
use crate::time::recurringholiday::fixeddateholiday::observed_fixed_holiday;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;

pub const DEFAULT_YEARS_BEFORE: i32 = 10;
pub const DEFAULT_YEARS_AFTER: i32 = 20;

/// Years chrono can represent. The index never reaches past them.
pub fn representable_years() -> RangeInclusive<i32> {
    NaiveDate::MIN.year()..=NaiveDate::MAX.year()
}

/// Observed federal holidays keyed by `YYYY-MM-DD`, precomputed for a
/// contiguous span of years.
///
/// A covered year always has all of its holidays present. The span only
/// grows: [`ensure_coverage`](HolidayIndex::ensure_coverage) extends it to
/// reach any year a query touches, and nothing is ever removed. Extension
/// goes through an internal lock, so one index can be shared by reference
/// across threads and re-entrant calls.
pub struct HolidayIndex {
    rules: Vec<(FederalHoliday, Arc<dyn RecurringHoliday>)>,
    state: RwLock<IndexState>
}

#[derive(Default)]
struct IndexState {
    holidays: HashMap<DateKey, FederalHoliday>,
    span: Option<(i32, i32)>
}

impl IndexState {
    fn insert_year(&mut self, rules: &[(FederalHoliday, Arc<dyn RecurringHoliday>)], year: i32) {
        // Two rules landing on one date: the later entry in the table wins.
        for observed in observe_with_rules(rules, year) {
            self.holidays.insert(DateKey::from(observed.date()), observed.holiday());
        }
    }

    fn covers(&self, year: i32) -> bool {
        match NaiveDate::from_ymd_opt(year, 1, 1) {
            Some(new_year) => self.holidays.contains_key(&DateKey::from(observed_fixed_holiday(new_year))),
            None => true
        }
    }
}

impl HolidayIndex {
    /// Precomputes `[start_year, end_year]` inclusive, clipped to
    /// [`representable_years`]. A reversed range gives an empty index that
    /// fills in on first use.
    pub fn build_range(start_year: i32, end_year: i32) -> HolidayIndex {
        let years = representable_years();
        let start_year = start_year.max(*years.start());
        let end_year = end_year.min(*years.end());
        let rules = federal_holiday_rules();
        let mut state = IndexState::default();

        if start_year <= end_year {
            for year in start_year..=end_year {
                state.insert_year(&rules, year);
            }
            state.span = Some((start_year, end_year));
        }

        let index = HolidayIndex {
            rules,
            state: RwLock::new(state)
        };
        debug!(stats = %index.stats(), "built holiday index");
        index
    }

    pub fn around_year(anchor_year: i32, years_before: i32, years_after: i32) -> HolidayIndex {
        let years = representable_years();
        let start_year = anchor_year.checked_sub(years_before).unwrap_or(*years.start());
        let end_year = anchor_year.checked_add(years_after).unwrap_or(*years.end());
        HolidayIndex::build_range(start_year, end_year)
    }

    /// Span of ten years back and twenty forward from the current local year.
    pub fn new() -> HolidayIndex {
        HolidayIndex::around_year(Local::now().year(), DEFAULT_YEARS_BEFORE, DEFAULT_YEARS_AFTER)
    }

    fn read(&self) -> RwLockReadGuard<'_, IndexState> {
        // Writers only append whole years, so a poisoned state is still usable.
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, IndexState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Whether `year` has been computed, judged by the presence of that
    /// year's observed New Year's Day.
    pub fn covers(&self, year: i32) -> bool {
        self.read().covers(year)
    }

    /// Extends the span until it includes `year`. Every year between the
    /// current span and `year` is computed too, so coverage stays contiguous.
    /// Calling it for an already covered year does nothing.
    pub fn ensure_coverage(&self, year: i32) {
        if self.covers(year) {
            return;
        }

        let mut state = self.write();
        // Another caller may have extended the span while we waited.
        if state.covers(year) {
            return;
        }

        let (years, span) = match state.span {
            None => (year..=year, (year, year)),
            Some((start, end)) if year < start => (year..=start - 1, (year, end)),
            Some((start, end)) => (end + 1..=year, (start, year))
        };
        for y in years.clone() {
            state.insert_year(&self.rules, y);
        }
        state.span = Some(span);

        debug!(
            from = years.start(),
            to = years.end(),
            start_year = span.0,
            end_year = span.1,
            "extended holiday index"
        );
    }

    pub fn start_year(&self) -> Option<i32> {
        self.read().span.map(|(start, _)| start)
    }

    pub fn end_year(&self) -> Option<i32> {
        self.read().span.map(|(_, end)| end)
    }

    /// Number of covered years.
    pub fn len(&self) -> usize {
        self.read()
            .span
            .map_or(0, |(start, end)| (end - start + 1) as usize)
    }

    pub fn is_empty(&self) -> bool {
        self.read().span.is_none()
    }

    pub fn holiday_name(&self, d: NaiveDate) -> Option<&'static str> {
        self.holiday(d).map(|h| h.name())
    }

    /// Holidays whose observed date falls inside calendar year `year`,
    /// sorted by date. A New Year's Day moved back to December 31 shows up
    /// in the earlier year.
    pub fn holidays_in_year(&self, year: i32) -> Vec<(NaiveDate, FederalHoliday)> {
        self.ensure_coverage(year);
        if let Some(next_year) = year.checked_add(1) {
            self.ensure_coverage(next_year);
        }

        let mut holidays: Vec<(NaiveDate, FederalHoliday)> = self
            .read()
            .holidays
            .iter()
            .map(|(key, holiday)| (key.date(), *holiday))
            .filter(|(d, _)| d.year() == year)
            .collect();
        holidays.sort_by_key(|(d, _)| *d);
        holidays
    }

    pub fn stats(&self) -> IndexStats {
        let state = self.read();
        IndexStats {
            span: state.span,
            total_holidays: state.holidays.len()
        }
    }
}

impl Default for HolidayIndex {
    fn default() -> HolidayIndex {
        HolidayIndex::new()
    }
}

impl fmt::Debug for HolidayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HolidayIndex")
            .field("stats", &self.stats())
            .finish()
    }
}

impl HolidayCalendar for HolidayIndex {
    /// Looks `d` up after making sure its year is covered. On December 31
    /// the following year is covered as well, since its New Year's Day may
    /// be observed that day.
    fn holiday(&self, d: NaiveDate) -> Option<FederalHoliday> {
        self.ensure_coverage(d.year());
        if d.month() == 12 && d.day() == 31 {
            self.ensure_coverage(d.year() + 1);
        }
        self.read().holidays.get(&DateKey::from(d)).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexStats {
    span: Option<(i32, i32)>,
    total_holidays: usize
}

impl IndexStats {
    pub fn num_years(&self) -> usize {
        self.span.map_or(0, |(start, end)| (end - start + 1) as usize)
    }

    pub fn total_holidays(&self) -> usize {
        self.total_holidays
    }
}

impl fmt::Display for IndexStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.span {
            Some((start, end)) => write!(
                f,
                "years {}-{} ({} years), {} holidays",
                start,
                end,
                self.num_years(),
                self.total_holidays
            ),
            None => f.write_str("empty")
        }
    }
}
