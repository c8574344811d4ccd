use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TraversalError {
    /// The business-day count was negative or not an integer.
    #[error("invalid business day count '{0}': expected a non-negative integer")]
    InvalidCount(String),

    /// Stepping beyond the contained date would leave chrono's representable calendar.
    #[error("traversal ran past the representable calendar at {0}")]
    OutOfRange(NaiveDate)
}
