#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::core::resolver::ResolutionConfig;
use crate::domain::model::CountryCode;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use chrono::NaiveDate;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT_FILE: &str = "Holidays.csv";

/// Fully merged settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobConfig {
    pub start: NaiveDate,
    /// Exclusive.
    pub end: NaiveDate,
    pub countries: Vec<CountryCode>,
    pub resolution: ResolutionConfig,
    pub output_path: PathBuf,
}

impl Default for JobConfig {
    /// 100 years of holidays: 1970-01-01 through 2069-12-31 for US and AU.
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(1970, 1, 1).expect("valid default start date"),
            end: NaiveDate::from_ymd_opt(2070, 1, 1).expect("valid default end date"),
            countries: vec![CountryCode::new("US"), CountryCode::new("AU")],
            resolution: ResolutionConfig::default(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

impl JobConfig {
    /// Overlays every value present in the TOML file.
    pub fn merge_toml(mut self, toml: &TomlConfig) -> Self {
        if let Some(range) = &toml.range {
            if let Some(start) = range.start {
                self.start = start;
            }
            if let Some(end) = range.end {
                self.end = end;
            }
        }

        if let Some(calendar) = &toml.calendar {
            if let Some(countries) = &calendar.countries {
                self.countries = countries.iter().map(|c| CountryCode::new(c.as_str())).collect();
            }
            if let Some(enabled) = calendar.easter_override {
                self.resolution.easter_override = enabled;
            }
            if let Some(country) = &calendar.override_country {
                self.resolution.override_country = CountryCode::new(country.as_str());
            }
        }

        if let Some(path) = toml.output.as_ref().and_then(|o| o.path.as_ref()) {
            self.output_path = PathBuf::from(path);
        }

        self
    }

    pub fn has_empty_range(&self) -> bool {
        self.end <= self.start
    }
}

impl Validate for JobConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_list("countries", &self.countries)?;
        for country in &self.countries {
            validation::validate_non_empty_string("countries", country.as_str())?;
        }
        let codes: Vec<&str> = self.countries.iter().map(CountryCode::as_str).collect();
        validation::validate_unique_ignore_case("countries", &codes)?;

        validation::validate_non_empty_string(
            "calendar.override_country",
            self.resolution.override_country.as_str(),
        )?;
        validation::validate_path("output.path", &self.output_path.to_string_lossy())?;

        Ok(())
    }
}
