use crate::config::{JobConfig, TomlConfig};
use crate::domain::model::CountryCode;
use crate::utils::error::Result;
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "public-holidays")]
#[command(about = "Writes a sparse CSV of public holidays per country for a date range")]
pub struct CliConfig {
    /// First date of the range (YYYY-MM-DD, inclusive) [default: 1970-01-01]
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// End of the range (YYYY-MM-DD, exclusive) [default: 2070-01-01]
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// Country codes in column order [default: US,AU]
    #[arg(long, value_delimiter = ',')]
    pub countries: Vec<String>,

    /// Add Good Friday and Easter Sunday to the US column [default: true]
    #[arg(long, action = clap::ArgAction::Set)]
    pub easter_override: Option<bool>,

    /// Output CSV file [default: Holidays.csv]
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// TOML job file; command line flags take precedence
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    #[arg(long, short, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Defaults, then the TOML file (if any), then command line flags.
    pub fn resolve(&self) -> Result<JobConfig> {
        let mut config = JobConfig::default();

        if let Some(path) = &self.config {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            config = config.merge_toml(&TomlConfig::from_file(path)?);
        }

        Ok(self.apply_overrides(config))
    }

    fn apply_overrides(&self, mut config: JobConfig) -> JobConfig {
        if let Some(start) = self.start {
            config.start = start;
        }
        if let Some(end) = self.end {
            config.end = end;
        }
        if !self.countries.is_empty() {
            config.countries = self.countries.iter().map(|c| CountryCode::new(c.as_str())).collect();
        }
        if let Some(enabled) = self.easter_override {
            config.resolution.easter_override = enabled;
        }
        if let Some(output) = &self.output {
            config.output_path = output.clone();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::HolidayError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_without_flags() {
        let cli = CliConfig::parse_from(["public-holidays"]);
        assert_eq!(cli.resolve().unwrap(), JobConfig::default());
    }

    #[test]
    fn test_flags_are_parsed() {
        let cli = CliConfig::parse_from([
            "public-holidays",
            "--start",
            "2021-04-02",
            "--end",
            "2021-04-05",
            "--countries",
            "US,GB",
            "--easter-override",
            "false",
            "-o",
            "easter.csv",
        ]);
        let config = cli.resolve().unwrap();

        assert_eq!(config.start, NaiveDate::from_ymd_opt(2021, 4, 2).unwrap());
        assert_eq!(config.end, NaiveDate::from_ymd_opt(2021, 4, 5).unwrap());
        assert_eq!(config.countries, vec![CountryCode::new("US"), CountryCode::new("GB")]);
        assert!(!config.resolution.easter_override);
        assert_eq!(config.output_path, PathBuf::from("easter.csv"));
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        assert!(CliConfig::try_parse_from(["public-holidays", "--start", "2021-13-01"]).is_err());
    }

    #[test]
    fn test_flags_override_toml_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[calendar]\ncountries = [\"CA\"]\neaster_override = false\n[output]\npath = \"from-file.csv\"\n")
            .unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from(["public-holidays", "--config", path.as_str(), "--output", "cli.csv"]);
        let config = cli.resolve().unwrap();

        assert_eq!(config.countries, vec![CountryCode::new("CA")]);
        assert!(!config.resolution.easter_override);
        assert_eq!(config.output_path, PathBuf::from("cli.csv"));
    }

    #[test]
    fn test_missing_config_file_is_a_config_error() {
        let cli = CliConfig::parse_from(["public-holidays", "--config", "/definitely/not/here.toml"]);
        let err = cli.resolve().err().unwrap();

        assert!(matches!(err, HolidayError::ConfigError { .. }));
        assert_eq!(err.exit_code(), 1);
        assert!(err.user_friendly_message().contains("/definitely/not/here.toml"));
        assert_eq!(
            err.recovery_suggestion(),
            "Make sure the config file exists and is valid TOML"
        );
    }
}
