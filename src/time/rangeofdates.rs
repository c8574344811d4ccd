use chrono::{
    Days,
    NaiveDate
};

const ONE_DAY: Days = Days::new(1);

/// Inclusive span of calendar days. Endpoints given in reverse order are
/// swapped, so `start_date() <= end_date()` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeOfDates {
    start_date: NaiveDate,
    end_date: NaiveDate
}

impl RangeOfDates {
    pub fn new(d1: NaiveDate, d2: NaiveDate) -> RangeOfDates {
        if d1 > d2 {
            RangeOfDates { start_date: d2, end_date: d1 }
        } else {
            RangeOfDates { start_date: d1, end_date: d2 }
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn len(&self) -> usize {
        ((self.end_date - self.start_date).num_days() + 1) as usize
    }

    pub fn contains(&self, d: NaiveDate) -> bool {
        (d >= self.start_date) && (d <= self.end_date)
    }

    /// The same span with its first day dropped, or `None` when nothing is left.
    pub fn without_start(&self) -> Option<RangeOfDates> {
        self.start_date
            .checked_add_days(ONE_DAY)
            .filter(|d| *d <= self.end_date)
            .map(|d| RangeOfDates { start_date: d, end_date: self.end_date })
    }

    pub fn iter(&self) -> RangeOfDatesIterator {
        RangeOfDatesIterator {
            next: Some(self.start_date),
            end_date: self.end_date
        }
    }
}

impl IntoIterator for &RangeOfDates {
    type Item = NaiveDate;
    type IntoIter = RangeOfDatesIterator;

    fn into_iter(self) -> RangeOfDatesIterator {
        self.iter()
    }
}

pub struct RangeOfDatesIterator {
    next: Option<NaiveDate>,
    end_date: NaiveDate
}

impl Iterator for RangeOfDatesIterator {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next.filter(|d| *d <= self.end_date)?;
        self.next = current.checked_add_days(ONE_DAY);
        Some(current)
    }
}
