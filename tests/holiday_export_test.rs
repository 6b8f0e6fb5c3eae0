use chrono::NaiveDate;
use public_holidays::{CountryCode, HolidayEngine, HolidayError, JobConfig, ResolutionConfig};
use std::path::Path;
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn job(output: &Path, start: NaiveDate, end: NaiveDate, countries: &[&str]) -> JobConfig {
    JobConfig {
        start,
        end,
        countries: countries.iter().map(|c| CountryCode::new(*c)).collect(),
        resolution: ResolutionConfig::default(),
        output_path: output.to_path_buf(),
    }
}

#[test]
fn test_end_to_end_writes_file() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("Holidays.csv");

    let summary = HolidayEngine::new(job(&output, date(2021, 1, 1), date(2021, 1, 2), &["US"]))
        .run()
        .unwrap();

    assert_eq!(summary.output_path, output);
    assert_eq!(summary.days_scanned, 1);
    assert_eq!(summary.rows_written, 1);
    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "date,US_holidays\n2021-01-01,New Year's Day\n"
    );
}

#[test]
fn test_easter_weekend_with_and_without_override() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("easter.csv");

    HolidayEngine::new(job(&output, date(2021, 4, 2), date(2021, 4, 5), &["US"]))
        .run()
        .unwrap();
    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "date,US_holidays\n2021-04-02,Good Friday\n2021-04-04,Easter Sunday\n"
    );

    let mut config = job(&output, date(2021, 4, 2), date(2021, 4, 5), &["US"]);
    config.resolution.easter_override = false;
    let summary = HolidayEngine::new(config).run().unwrap();
    assert_eq!(summary.rows_written, 0);
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "date,US_holidays\n");
}

#[test]
fn test_two_countries_share_rows() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("Holidays.csv");

    HolidayEngine::new(job(&output, date(2021, 3, 31), date(2021, 4, 6), &["US", "AU"]))
        .run()
        .unwrap();

    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "date,US_holidays,AU_holidays\n\
         2021-04-02,Good Friday,Good Friday\n\
         2021-04-04,Easter Sunday,\n\
         2021-04-05,,Easter Monday\n"
    );
}

#[test]
fn test_joined_names_are_pipe_separated() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("anzac.csv");

    HolidayEngine::new(job(&output, date(2011, 4, 25), date(2011, 4, 26), &["AU"]))
        .run()
        .unwrap();

    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "date,AU_holidays\n2011-04-25,Easter Monday| Anzac Day\n"
    );
}

#[test]
fn test_unsupported_country_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("Holidays.csv");

    let err = HolidayEngine::new(job(&output, date(2021, 1, 1), date(2022, 1, 1), &["US", "Atlantis"]))
        .run()
        .unwrap_err();

    assert!(matches!(err, HolidayError::UnsupportedCountry { ref code } if code == "Atlantis"));
    assert_eq!(err.exit_code(), 2);
    assert!(!output.exists());
}

#[test]
fn test_missing_output_directory_is_an_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("missing").join("Holidays.csv");

    let err = HolidayEngine::new(job(&output, date(2021, 1, 1), date(2021, 1, 2), &["US"]))
        .run()
        .unwrap_err();

    assert!(matches!(err, HolidayError::IoError(_)));
}

#[test]
fn test_default_hundred_year_export() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("Holidays.csv");
    let config = JobConfig {
        output_path: output.clone(),
        ..JobConfig::default()
    };

    let summary = HolidayEngine::new(config).run().unwrap();
    assert_eq!(summary.days_scanned, 36525);

    let content = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "date,US_holidays,AU_holidays");
    assert_eq!(lines.len(), summary.rows_written + 1);
    assert!(content.ends_with('\n'));

    let dates: Vec<&str> = lines[1..].iter().map(|l| &l[..10]).collect();
    assert_eq!(dates.first(), Some(&"1970-01-01"));
    assert!(dates.windows(2).all(|w| w[0] < w[1]));
    assert!(dates.iter().all(|d| d.starts_with("19") || d.starts_with("20")));
    assert!(dates.iter().all(|d| *d < "2070-01-01"));

    // 2069-12-25 is a Wednesday: the last day of the span is still covered.
    assert!(lines.contains(&"2069-12-25,Christmas Day,Christmas Day"));
    assert!(lines.contains(&"2021-04-04,Easter Sunday,"));

    for line in &lines[1..] {
        let fields: Vec<&str> = line.split(',').collect();
        assert_eq!(fields.len(), 3, "unexpected field count in {line}");
        assert!(fields[1..].iter().any(|f| !f.is_empty()), "empty row {line}");
    }
}
