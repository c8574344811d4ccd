use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::{
    Datelike,
    Local
};
use serde::{
    Serialize,
    Deserialize
};
use thiserror::Error;
use tracing::debug;

use crate::time::calendar::holidayindex::{
    DEFAULT_YEARS_AFTER,
    DEFAULT_YEARS_BEFORE,
    HolidayIndex,
    representable_years
};
use crate::time::traversal::startinclusionpolicy::StartInclusionPolicy;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("cannot read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid index span: {years_before} years before and {years_after} years after {anchor_year}")]
    InvalidSpan {
        anchor_year: i32,
        years_before: i32,
        years_after: i32
    }
}

/// Index span and default traversal policy. Every field may be left out of
/// the JSON; missing ones take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Year the index is centred on. `None` means the current local year.
    anchor_year: Option<i32>,
    years_before: i32,
    years_after: i32,
    start_inclusion_policy: StartInclusionPolicy
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            anchor_year: None,
            years_before: DEFAULT_YEARS_BEFORE,
            years_after: DEFAULT_YEARS_AFTER,
            start_inclusion_policy: StartInclusionPolicy::default()
        }
    }

    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<Configuration, ConfigurationError> {
        let file = File::open(file_path.as_ref())?;
        let reader = BufReader::new(file);
        let configuration: Configuration = serde_json::from_reader(reader)?;
        configuration.validate()?;
        debug!(path = %file_path.as_ref().display(), ?configuration, "loaded configuration");
        Ok(configuration)
    }

    pub fn from_json_str(json: &str) -> Result<Configuration, ConfigurationError> {
        let configuration: Configuration = serde_json::from_str(json)?;
        configuration.validate()?;
        Ok(configuration)
    }

    /// Both span lengths must be non-negative and the whole span must stay
    /// inside the years chrono can represent.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let anchor_year = self.anchor_year();
        let years = representable_years();
        let start_year = anchor_year.checked_sub(self.years_before);
        let end_year = anchor_year.checked_add(self.years_after);

        match (start_year, end_year) {
            (Some(start), Some(end))
                if self.years_before >= 0
                    && self.years_after >= 0
                    && years.contains(&start)
                    && years.contains(&end) => Ok(()),
            _ => Err(ConfigurationError::InvalidSpan {
                anchor_year,
                years_before: self.years_before,
                years_after: self.years_after
            })
        }
    }

    pub fn anchor_year(&self) -> i32 {
        self.anchor_year.unwrap_or_else(|| Local::now().year())
    }

    pub fn with_anchor_year(mut self, anchor_year: i32) -> Configuration {
        self.anchor_year = Some(anchor_year);
        self
    }

    pub fn with_years(mut self, years_before: i32, years_after: i32) -> Configuration {
        self.years_before = years_before;
        self.years_after = years_after;
        self
    }

    pub fn years_before(&self) -> i32 {
        self.years_before
    }

    pub fn years_after(&self) -> i32 {
        self.years_after
    }

    pub fn start_inclusion_policy(&self) -> StartInclusionPolicy {
        self.start_inclusion_policy
    }

    /// An explicit include/exclude choice wins over the configured policy.
    pub fn resolve_start_inclusion_policy(&self, include_start: Option<bool>) -> StartInclusionPolicy {
        include_start.map_or(self.start_inclusion_policy, StartInclusionPolicy::from_include_start)
    }

    pub fn with_start_inclusion_policy(mut self, policy: StartInclusionPolicy) -> Configuration {
        self.start_inclusion_policy = policy;
        self
    }

    pub fn build_holiday_index(&self) -> HolidayIndex {
        HolidayIndex::around_year(self.anchor_year(), self.years_before, self.years_after)
    }
}

impl Default for Configuration {
    fn default() -> Configuration {
        Configuration::new()
    }
}
