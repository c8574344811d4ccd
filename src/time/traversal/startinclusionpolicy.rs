use serde::{
    Serialize,
    Deserialize
};

/// Whether the start date of an offset traversal can count toward `n`.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum StartInclusionPolicy {
    /// Move off the start date before counting anything.
    #[default]
    ExcludeStart,
    /// A start date that is itself a business day is the first of the `n`.
    /// Otherwise behaves like `ExcludeStart`.
    IncludeStartIfBusinessDay
}

impl StartInclusionPolicy {
    pub fn from_include_start(include_start: bool) -> StartInclusionPolicy {
        if include_start {
            StartInclusionPolicy::IncludeStartIfBusinessDay
        } else {
            StartInclusionPolicy::ExcludeStart
        }
    }

    pub fn includes_start(&self) -> bool {
        *self == StartInclusionPolicy::IncludeStartIfBusinessDay
    }
}
