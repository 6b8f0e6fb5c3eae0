use chrono::NaiveDate;
use std::fmt;

/// Date format used in every output row.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A country identifier exactly as the user configured it.
///
/// The spelling as typed is kept for the header column; comparisons
/// against other codes ignore ASCII case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CountryCode(String);

impl CountryCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, other: &CountryCode) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }

    pub fn header_column(&self) -> String {
        format!("{}_holidays", self.0)
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CountryCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// Every configured country's resolved name for a single date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDay {
    pub date: NaiveDate,
    pub holidays: Vec<(CountryCode, Option<String>)>,
}

impl ResolvedDay {
    pub fn has_holiday(&self) -> bool {
        self.holidays.iter().any(|(_, name)| name.is_some())
    }

    /// Name for `country`, matching the code ignoring ASCII case.
    pub fn holiday_for(&self, country: &CountryCode) -> Option<&str> {
        self.holidays
            .iter()
            .find(|(code, _)| code.matches(country))
            .and_then(|(_, name)| name.as_deref())
    }

    /// `None` when no country observes a holiday on this date.
    pub fn into_row(self) -> Option<OutputRow> {
        if !self.has_holiday() {
            return None;
        }

        Some(OutputRow {
            date: self.date.format(DATE_FORMAT).to_string(),
            fields: self
                .holidays
                .into_iter()
                .map(|(_, name)| name.unwrap_or_default())
                .collect(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    pub date: String,
    pub fields: Vec<String>,
}

impl OutputRow {
    pub fn to_record(&self) -> Vec<&str> {
        std::iter::once(self.date.as_str())
            .chain(self.fields.iter().map(String::as_str))
            .collect()
    }
}
