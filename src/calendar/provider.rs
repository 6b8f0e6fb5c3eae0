use crate::calendar::countries::Country;
use crate::calendar::rules::HolidayRule;
use crate::domain::model::CountryCode;
use crate::domain::ports::HolidayCalendar;
use crate::utils::error::{HolidayError, Result};
use chrono::{Datelike, NaiveDate};
use std::borrow::Cow;
use std::collections::HashMap;
use std::ops::RangeInclusive;

/// Holiday table for one country, compiled from its rules for a span of years.
#[derive(Debug, Clone)]
pub struct CountryCalendar {
    rules: Vec<HolidayRule>,
    years: RangeInclusive<i32>,
    entries: HashMap<NaiveDate, String>,
}

impl CountryCalendar {
    pub fn load(country: Country, years: RangeInclusive<i32>) -> Self {
        let rules = country.rules();
        // Neighbouring years contribute observed days across the year boundary.
        let entries = compile(&rules, (*years.start() - 1)..=(*years.end() + 1));

        tracing::debug!(
            "Compiled {} calendar for {}..={}: {} holiday dates",
            country.iso_code(),
            years.start(),
            years.end(),
            entries.len()
        );

        Self {
            rules,
            years,
            entries,
        }
    }
}

impl HolidayCalendar for CountryCalendar {
    fn holiday_name(&self, date: NaiveDate) -> Option<Cow<'_, str>> {
        if self.years.contains(&date.year()) {
            return self.entries.get(&date).map(|name| Cow::Borrowed(name.as_str()));
        }

        let year = date.year();
        compile(&self.rules, (year - 1)..=(year + 1))
            .remove(&date)
            .map(Cow::Owned)
    }
}

fn compile(rules: &[HolidayRule], years: RangeInclusive<i32>) -> HashMap<NaiveDate, String> {
    let mut entries: HashMap<NaiveDate, String> = HashMap::new();

    for year in years {
        for rule in rules {
            for (date, name) in rule.occurrences(year) {
                entries
                    .entry(date)
                    .and_modify(|existing| {
                        existing.push_str(", ");
                        existing.push_str(&name);
                    })
                    .or_insert(name);
            }
        }
    }

    entries
}

/// The configured countries' calendars, in column order.
pub struct CalendarSet {
    calendars: Vec<(CountryCode, Box<dyn HolidayCalendar>)>,
}

impl CalendarSet {
    /// Builds one calendar per code. Fails on the first unsupported code.
    pub fn load(codes: &[CountryCode], years: RangeInclusive<i32>) -> Result<Self> {
        let mut calendars: Vec<(CountryCode, Box<dyn HolidayCalendar>)> =
            Vec::with_capacity(codes.len());

        for code in codes {
            let country =
                Country::from_code(code.as_str()).ok_or_else(|| HolidayError::UnsupportedCountry {
                    code: code.to_string(),
                })?;
            calendars.push((
                code.clone(),
                Box::new(CountryCalendar::load(country, years.clone())),
            ));
        }

        Ok(Self { calendars })
    }

    /// Wraps externally supplied lookups.
    pub fn from_calendars(calendars: Vec<(CountryCode, Box<dyn HolidayCalendar>)>) -> Self {
        Self { calendars }
    }

    pub fn codes(&self) -> impl Iterator<Item = &CountryCode> {
        self.calendars.iter().map(|(code, _)| code)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CountryCode, &dyn HolidayCalendar)> {
        self.calendars
            .iter()
            .map(|(code, calendar)| (code, calendar.as_ref()))
    }

    /// Holiday name for a configured country, matching the code ignoring
    /// ASCII case. Codes that were never configured are an error.
    pub fn lookup(&self, code: &CountryCode, date: NaiveDate) -> Result<Option<Cow<'_, str>>> {
        let (_, calendar) = self
            .calendars
            .iter()
            .find(|(configured, _)| configured.matches(code))
            .ok_or_else(|| HolidayError::UnsupportedCountry {
                code: code.to_string(),
            })?;
        Ok(calendar.holiday_name(date))
    }

    pub fn len(&self) -> usize {
        self.calendars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calendars.is_empty()
    }
}
