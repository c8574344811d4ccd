use std::fmt;
use std::sync::Arc;

use chrono::{
    NaiveDate,
    Weekday
};
use serde::{
    Serialize,
    Deserialize
};

use super::fixeddateholiday::FixedDateHoliday;
use super::lastweekdayholiday::LastWeekdayHoliday;
use super::nthweekdayholiday::NthWeekdayHoliday;
use super::recurringholiday::{
    HolidayRuleKind,
    RecurringHoliday
};

/// The eleven US federal holidays. The table is fixed policy.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum FederalHoliday {
    NewYearsDay,
    MartinLutherKingDay,
    WashingtonsBirthday,
    MemorialDay,
    Juneteenth,
    IndependenceDay,
    LaborDay,
    ColumbusDay,
    VeteransDay,
    Thanksgiving,
    ChristmasDay
}

impl FederalHoliday {
    pub const ALL: [FederalHoliday; 11] = [
        FederalHoliday::NewYearsDay,
        FederalHoliday::MartinLutherKingDay,
        FederalHoliday::WashingtonsBirthday,
        FederalHoliday::MemorialDay,
        FederalHoliday::Juneteenth,
        FederalHoliday::IndependenceDay,
        FederalHoliday::LaborDay,
        FederalHoliday::ColumbusDay,
        FederalHoliday::VeteransDay,
        FederalHoliday::Thanksgiving,
        FederalHoliday::ChristmasDay
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FederalHoliday::NewYearsDay => "New Year's Day",
            FederalHoliday::MartinLutherKingDay => "MLK Day",
            FederalHoliday::WashingtonsBirthday => "Washington's Birthday",
            FederalHoliday::MemorialDay => "Memorial Day",
            FederalHoliday::Juneteenth => "Juneteenth",
            FederalHoliday::IndependenceDay => "Independence Day",
            FederalHoliday::LaborDay => "Labor Day",
            FederalHoliday::ColumbusDay => "Columbus Day",
            FederalHoliday::VeteransDay => "Veterans Day",
            FederalHoliday::Thanksgiving => "Thanksgiving",
            FederalHoliday::ChristmasDay => "Christmas Day"
        }
    }

    pub fn rule(&self) -> Arc<dyn RecurringHoliday> {
        match self {
            FederalHoliday::NewYearsDay => fixed(1, 1),
            FederalHoliday::MartinLutherKingDay => nth(1, 3, Weekday::Mon),
            FederalHoliday::WashingtonsBirthday => nth(2, 3, Weekday::Mon),
            FederalHoliday::MemorialDay => last(5, Weekday::Mon),
            FederalHoliday::Juneteenth => fixed(6, 19),
            FederalHoliday::IndependenceDay => fixed(7, 4),
            FederalHoliday::LaborDay => nth(9, 1, Weekday::Mon),
            FederalHoliday::ColumbusDay => nth(10, 2, Weekday::Mon),
            FederalHoliday::VeteransDay => fixed(11, 11),
            FederalHoliday::Thanksgiving => nth(11, 4, Weekday::Thu),
            FederalHoliday::ChristmasDay => fixed(12, 25)
        }
    }
}

impl fmt::Display for FederalHoliday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const VALID_CONSTANT: &str = "federal holiday table entries are valid constants";

fn fixed(month: u32, day: u32) -> Arc<dyn RecurringHoliday> {
    Arc::new(FixedDateHoliday::federal(month, day).expect(VALID_CONSTANT))
}

fn nth(month: u32, n: u8, weekday: Weekday) -> Arc<dyn RecurringHoliday> {
    Arc::new(NthWeekdayHoliday::new(month, n, weekday).expect(VALID_CONSTANT))
}

fn last(month: u32, weekday: Weekday) -> Arc<dyn RecurringHoliday> {
    Arc::new(LastWeekdayHoliday::new(month, weekday).expect(VALID_CONSTANT))
}

/// One federal holiday as observed in a given year.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ObservedHoliday {
    holiday: FederalHoliday,
    kind: HolidayRuleKind,
    date: NaiveDate
}

impl ObservedHoliday {
    pub fn holiday(&self) -> FederalHoliday {
        self.holiday
    }

    pub fn name(&self) -> &'static str {
        self.holiday.name()
    }

    pub fn kind(&self) -> HolidayRuleKind {
        self.kind
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

/// The federal rule table in calendar order.
pub fn federal_holiday_rules() -> Vec<(FederalHoliday, Arc<dyn RecurringHoliday>)> {
    FederalHoliday::ALL
        .iter()
        .map(|h| (*h, h.rule()))
        .collect()
}

pub fn observe_with_rules(
    rules: &[(FederalHoliday, Arc<dyn RecurringHoliday>)],
    year: i32
) -> Vec<ObservedHoliday> {
    rules
        .iter()
        .filter_map(|(holiday, rule)| {
            rule.observed_date(year).map(|date| ObservedHoliday {
                holiday: *holiday,
                kind: rule.kind(),
                date
            })
        })
        .collect()
}

/// The eleven federal holidays of `year`, in calendar order of the table,
/// with weekend-falling fixed dates already moved to their observed weekday.
///
/// New Year's Day observed on a Friday December 31 is listed under the year
/// whose January 1 it stands for.
pub fn federal_holidays_observed(year: i32) -> Vec<ObservedHoliday> {
    observe_with_rules(&federal_holiday_rules(), year)
}

#[cfg(test)]
mod tests {
    use chrono::Datelike;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn observed(year: i32, holiday: FederalHoliday) -> NaiveDate {
        federal_holidays_observed(year)
            .into_iter()
            .find(|h| h.holiday() == holiday)
            .unwrap()
            .date()
    }

    #[test]
    fn holidays_2024() {
        let expected = [
            (FederalHoliday::NewYearsDay, date(2024, 1, 1)),
            (FederalHoliday::MartinLutherKingDay, date(2024, 1, 15)),
            (FederalHoliday::WashingtonsBirthday, date(2024, 2, 19)),
            (FederalHoliday::MemorialDay, date(2024, 5, 27)),
            (FederalHoliday::Juneteenth, date(2024, 6, 19)),
            (FederalHoliday::IndependenceDay, date(2024, 7, 4)),
            (FederalHoliday::LaborDay, date(2024, 9, 2)),
            (FederalHoliday::ColumbusDay, date(2024, 10, 14)),
            (FederalHoliday::VeteransDay, date(2024, 11, 11)),
            (FederalHoliday::Thanksgiving, date(2024, 11, 28)),
            (FederalHoliday::ChristmasDay, date(2024, 12, 25))
        ];
        let holidays = federal_holidays_observed(2024);
        assert_eq!(holidays.len(), 11);
        for (h, (holiday, d)) in holidays.iter().zip(expected.iter()) {
            assert_eq!(h.holiday(), *holiday);
            assert_eq!(h.date(), *d, "{}", h.name());
        }
    }

    #[test]
    fn weekend_shifts_2021_and_2022() {
        // 2021-07-04 Sunday, 2021-12-25 Saturday, 2022-01-01 Saturday
        assert_eq!(observed(2021, FederalHoliday::IndependenceDay), date(2021, 7, 5));
        assert_eq!(observed(2021, FederalHoliday::ChristmasDay), date(2021, 12, 24));
        assert_eq!(observed(2022, FederalHoliday::NewYearsDay), date(2021, 12, 31));
        // 2022-06-19 Sunday
        assert_eq!(observed(2022, FederalHoliday::Juneteenth), date(2022, 6, 20));
        // 2023-11-11 Saturday
        assert_eq!(observed(2023, FederalHoliday::VeteransDay), date(2023, 11, 10));
    }

    #[test]
    fn rule_kinds_follow_the_table() {
        let kinds: Vec<HolidayRuleKind> = federal_holidays_observed(2030).iter().map(|h| h.kind()).collect();
        use HolidayRuleKind::*;
        assert_eq!(
            kinds,
            vec![
                FixedDate, NthWeekday, NthWeekday, LastWeekday, FixedDate, FixedDate,
                NthWeekday, NthWeekday, FixedDate, NthWeekday, FixedDate
            ]
        );
    }

    #[test]
    fn every_year_has_eleven_weekday_holidays() {
        for year in 1900..=2100 {
            let holidays = federal_holidays_observed(year);
            assert_eq!(holidays.len(), 11, "{year}");
            for h in holidays {
                let w = h.date().weekday();
                assert!(w != Weekday::Sat && w != Weekday::Sun, "{} {year} on {w}", h.name());
            }
        }
    }

    #[test]
    fn names_are_the_fixed_english_set() {
        let names: Vec<&str> = FederalHoliday::ALL.iter().map(|h| h.name()).collect();
        assert_eq!(names[0], "New Year's Day");
        assert_eq!(names[9], "Thanksgiving");
        assert_eq!(FederalHoliday::ChristmasDay.to_string(), "Christmas Day");
    }
}
