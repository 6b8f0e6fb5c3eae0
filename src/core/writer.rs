use crate::domain::model::OutputRow;
use crate::utils::error::{HolidayError, Result};
use std::io::Write;

/// Streams the header and sparse rows as comma separated lines.
///
/// Fields are written verbatim: names reach the writer already stripped of
/// commas, so no quoting is applied.
pub struct HolidayCsvWriter<W: Write> {
    inner: csv::Writer<W>,
    rows_written: usize,
}

impl<W: Write> HolidayCsvWriter<W> {
    pub fn new(writer: W) -> Self {
        let inner = csv::WriterBuilder::new()
            .delimiter(b',')
            .terminator(csv::Terminator::Any(b'\n'))
            .quote_style(csv::QuoteStyle::Never)
            .flexible(false)
            .from_writer(writer);

        Self {
            inner,
            rows_written: 0,
        }
    }

    pub fn write_header(&mut self, header: &[String]) -> Result<()> {
        self.inner.write_record(header)?;
        Ok(())
    }

    pub fn write_row(&mut self, row: &OutputRow) -> Result<()> {
        self.inner.write_record(row.to_record())?;
        self.rows_written += 1;
        Ok(())
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flushes and hands back the underlying writer.
    pub fn finish(self) -> Result<W> {
        self.inner
            .into_inner()
            .map_err(|e| HolidayError::IoError(e.into_error()))
    }
}
