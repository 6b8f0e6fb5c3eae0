use crate::calendar::provider::CalendarSet;
use crate::core::resolver::{HolidayResolver, ResolutionConfig};
use crate::domain::model::{CountryCode, OutputRow, ResolvedDay};
use crate::utils::error::Result;
use chrono::{Datelike, NaiveDate};
use std::ops::RangeInclusive;

/// Dates in `[start, end)`. Empty when `end <= start`.
pub fn date_range(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |date| *date < end)
}

/// Calendar years touched by `[start, end)`, used to size the compiled tables.
pub fn years_spanned(start: NaiveDate, end: NaiveDate) -> RangeInclusive<i32> {
    let last = end.pred_opt().unwrap_or(end).max(start);
    start.year()..=last.year()
}

#[derive(Clone, Copy)]
pub struct RangeAggregator<'a> {
    calendars: &'a CalendarSet,
    resolver: &'a HolidayResolver,
}

impl<'a> RangeAggregator<'a> {
    pub fn new(calendars: &'a CalendarSet, resolver: &'a HolidayResolver) -> Self {
        Self {
            calendars,
            resolver,
        }
    }

    pub fn header(&self) -> Vec<String> {
        std::iter::once("date".to_string())
            .chain(self.calendars.codes().map(CountryCode::header_column))
            .collect()
    }

    pub fn resolve_day(&self, date: NaiveDate) -> ResolvedDay {
        let holidays = self
            .calendars
            .iter()
            .map(|(code, calendar)| {
                let base = calendar.holiday_name(date);
                let name = self.resolver.resolve(code, date, base.as_deref());
                (code.clone(), name)
            })
            .collect();

        ResolvedDay { date, holidays }
    }

    /// Sparse rows for `[start, end)`, produced lazily in date order.
    pub fn rows(&self, start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = OutputRow> + 'a {
        let aggregator = *self;
        date_range(start, end).filter_map(move |date| aggregator.resolve_day(date).into_row())
    }
}

/// Builds the calendars for `countries` and collects the sparse rows.
pub fn aggregate(
    start: NaiveDate,
    end: NaiveDate,
    countries: &[CountryCode],
    easter_override: bool,
) -> Result<Vec<OutputRow>> {
    let calendars = CalendarSet::load(countries, years_spanned(start, end))?;
    let resolver = HolidayResolver::new(ResolutionConfig {
        easter_override,
        ..ResolutionConfig::default()
    });

    let rows = RangeAggregator::new(&calendars, &resolver)
        .rows(start, end)
        .collect();
    Ok(rows)
}
