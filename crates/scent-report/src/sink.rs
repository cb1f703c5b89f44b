//! Report sinks.

use std::io::Write;

use csv::WriterBuilder;
use serde::Serialize;

use crate::error::Result;
use crate::report::Report;

/// Destination for finished reports.
pub trait ReportSink {
    fn write_report(&mut self, report: &Report) -> Result<()>;

    /// Flushes anything buffered. Called once after the last report.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Writes each report as a title line, a header line and its rows.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvSink<W> {
    pub fn new(writer: W) -> Self {
        let writer = WriterBuilder::new().flexible(true).from_writer(writer);
        Self { writer }
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|err| csv::Error::from(err.into_error()).into())
    }
}

impl<W: Write> ReportSink for CsvSink<W> {
    fn write_report(&mut self, report: &Report) -> Result<()> {
        self.writer.write_record([report.title.as_str()])?;
        self.writer.write_record(&report.columns)?;
        for row in &report.rows {
            self.writer.write_record(row.iter().map(|cell| cell.display()))?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    reports: &'a [Report],
}

/// Collects reports and writes them as one JSON document on finish.
pub struct JsonSink<W: Write> {
    writer: W,
    reports: Vec<Report>,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            reports: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for JsonSink<W> {
    fn write_report(&mut self, report: &Report) -> Result<()> {
        self.reports.push(report.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let document = JsonDocument {
            reports: &self.reports,
        };
        serde_json::to_writer_pretty(&mut self.writer, &document)?;
        writeln!(self.writer).map_err(serde_json::Error::io)?;
        self.writer.flush().map_err(serde_json::Error::io)?;
        Ok(())
    }
}
