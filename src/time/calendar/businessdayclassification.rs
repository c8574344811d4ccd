use std::fmt;

use crate::time::recurringholiday::federalholiday::FederalHoliday;

/// Why a date is, or is not, a business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassificationReason {
    Weekend,
    Holiday(FederalHoliday),
    Weekday
}

impl fmt::Display for ClassificationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassificationReason::Weekend => f.write_str("weekend"),
            ClassificationReason::Holiday(holiday) => write!(f, "holiday: {}", holiday.name()),
            ClassificationReason::Weekday => f.write_str("weekday/non-holiday")
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BusinessDayClassification {
    reason: ClassificationReason
}

impl BusinessDayClassification {
    pub fn weekend() -> BusinessDayClassification {
        BusinessDayClassification { reason: ClassificationReason::Weekend }
    }

    pub fn holiday(holiday: FederalHoliday) -> BusinessDayClassification {
        BusinessDayClassification { reason: ClassificationReason::Holiday(holiday) }
    }

    pub fn weekday() -> BusinessDayClassification {
        BusinessDayClassification { reason: ClassificationReason::Weekday }
    }

    /// Only a plain weekday is a business day.
    pub fn is_business_day(&self) -> bool {
        self.reason == ClassificationReason::Weekday
    }

    pub fn reason(&self) -> ClassificationReason {
        self.reason
    }

    pub fn holiday_observed(&self) -> Option<FederalHoliday> {
        match self.reason {
            ClassificationReason::Holiday(holiday) => Some(holiday),
            _ => None
        }
    }
}

impl fmt::Display for BusinessDayClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reason.fmt(f)
    }
}
