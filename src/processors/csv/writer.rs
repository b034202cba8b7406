use crate::processors::csv::CsvProcessorResult;
use serde::Serialize;
use std::io;

/// Writes serializable records, e.g. [`AccountSummary`](crate::bank::AccountSummary), as CSV
/// with a header line.
pub struct CsvWriter<W>
where
    W: io::Write,
{
    writer: csv::Writer<W>,
}

impl<W> CsvWriter<W>
where
    W: io::Write,
{
    pub fn new(writer: W) -> Self {
        Self { writer: csv::Writer::from_writer(writer) }
    }

    /// Writes all `records` and flushes the underlying writer.
    pub fn serialize<S, I>(&mut self, records: I) -> CsvProcessorResult<()>
    where
        S: Serialize,
        I: Iterator<Item=S>,
    {
        for record in records {
            self.writer.serialize(record)?;
        }
        Ok(self.writer.flush()?)
    }
}
