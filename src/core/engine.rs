use crate::calendar::provider::CalendarSet;
use crate::config::JobConfig;
use crate::core::aggregator::{date_range, years_spanned, RangeAggregator};
use crate::core::resolver::HolidayResolver;
use crate::core::writer::HolidayCsvWriter;
use crate::utils::error::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output_path: PathBuf,
    pub days_scanned: usize,
    pub rows_written: usize,
}

/// Runs one holiday export: load calendars, resolve every day, stream rows.
pub struct HolidayEngine {
    config: JobConfig,
}

impl HolidayEngine {
    pub fn new(config: JobConfig) -> Self {
        Self { config }
    }

    /// Writes the export to the configured output file.
    pub fn run(&self) -> Result<RunSummary> {
        // Calendars are loaded before the file is created, so an unsupported
        // country leaves no output behind.
        let calendars = self.load_calendars()?;

        tracing::info!("Writing {}", self.config.output_path.display());
        let file = File::create(&self.config.output_path)?;
        let (mut out, days_scanned, rows_written) = self.export(&calendars, BufWriter::new(file))?;
        out.flush()?;

        Ok(RunSummary {
            output_path: self.config.output_path.clone(),
            days_scanned,
            rows_written,
        })
    }

    /// Writes the export to `writer` and returns it with the row count.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<(W, usize)> {
        let calendars = self.load_calendars()?;
        let (writer, _, rows_written) = self.export(&calendars, writer)?;
        Ok((writer, rows_written))
    }

    fn load_calendars(&self) -> Result<CalendarSet> {
        let years = years_spanned(self.config.start, self.config.end);
        tracing::info!(
            "Loading calendars for {} ({}..={})",
            self.config
                .countries
                .iter()
                .map(|c| c.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            years.start(),
            years.end()
        );
        let calendars = CalendarSet::load(&self.config.countries, years)?;
        tracing::debug!("Loaded {} country calendars", calendars.len());
        Ok(calendars)
    }

    fn export<W: Write>(&self, calendars: &CalendarSet, writer: W) -> Result<(W, usize, usize)> {
        let (start, end) = (self.config.start, self.config.end);
        if self.config.has_empty_range() {
            tracing::warn!(
                "End date {} is not after start date {}; only the header will be written",
                end,
                start
            );
        }

        let resolver = HolidayResolver::new(self.config.resolution.clone());
        let aggregator = RangeAggregator::new(calendars, &resolver);
        let mut csv = HolidayCsvWriter::new(writer);

        csv.write_header(&aggregator.header())?;

        let mut days_scanned = 0;
        for day in date_range(start, end) {
            days_scanned += 1;
            if let Some(row) = aggregator.resolve_day(day).into_row() {
                csv.write_row(&row)?;
            }
        }

        let rows_written = csv.rows_written();
        tracing::debug!(
            "Resolved {} days, {} with at least one holiday",
            days_scanned,
            rows_written
        );

        Ok((csv.finish()?, days_scanned, rows_written))
    }
}
