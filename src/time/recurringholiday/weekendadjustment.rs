use chrono::{
    Datelike,
    Duration,
    NaiveDate,
    Weekday
};

/// Observance shift, in days, for each weekday.
///
/// Indexed by `Weekday::num_days_from_monday()`; a zero entry leaves the
/// date where it is.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct WeekendAdjustmentRule {
    shift_days: [i8; 7]
}

/// Saturday moves back to Friday, Sunday forward to Monday.
pub const FEDERAL_WEEKEND_ADJUSTMENT: WeekendAdjustmentRule = WeekendAdjustmentRule {
    shift_days: [0, 0, 0, 0, 0, -1, 1]
};

impl WeekendAdjustmentRule {
    pub fn shift_days(&self, weekday: Weekday) -> i64 {
        self.shift_days[weekday.num_days_from_monday() as usize] as i64
    }

    /// Moves `d` by its weekday's shift. A shift that would leave chrono's
    /// calendar leaves `d` unchanged.
    #[inline]
    pub fn adjust(&self, d: NaiveDate) -> NaiveDate {
        match self.shift_days(d.weekday()) {
            0 => d,
            n => d.checked_add_signed(Duration::days(n)).unwrap_or(d)
        }
    }
}
