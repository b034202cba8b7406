use crate::processors::csv::CsvProcessorError::InvalidFormat;
use crate::processors::csv::{CsvProcessorError, CsvProcessorResult};
use csv::{Reader, StringRecord, Trim};
use serde::de::DeserializeOwned;
use std::io;
use std::marker::PhantomData;

/// Iterator over the records of a [`CsvReader`], each deserialized into a `D`.
///
/// Records may be shorter than the header line. Such records are deserialized against the
/// leading header fields only, so trailing columns a command does not use can be left out.
pub struct RecordIter<'r, R: 'r, D> {
    reader: &'r mut Reader<R>,
    record: StringRecord,
    headers: StringRecord,
    phantom_data: PhantomData<D>,
}

impl<'r, R: io::Read, D: DeserializeOwned> RecordIter<'r, R, D> {
    fn new(reader: &'r mut CsvReader<R>) -> RecordIter<'r, R, D> {
        Self {
            reader: &mut reader.reader,
            record: StringRecord::new(),
            headers: reader.headers.clone(),
            phantom_data: PhantomData,
        }
    }
}

impl<'r, R: io::Read, D: DeserializeOwned> Iterator for RecordIter<'r, R, D>
{
    type Item = CsvProcessorResult<D>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.record) {
            Err(err) => Some(Err(err.into())),
            Ok(false) => None,
            Ok(true) => {
                let parsed = if self.record.len() < self.headers.len() {
                    let leading: StringRecord = self.headers.iter().take(self.record.len()).collect();
                    self.record.deserialize(Some(&leading))
                } else {
                    self.record.deserialize(Some(&self.headers))
                };
                Some(parsed.map_err(CsvProcessorError::Csv))
            }
        }
    }
}

/// A CSV reader for command scripts: headers are required, fields are trimmed and records may
/// vary in length.
pub struct CsvReader<R> {
    pub reader: Reader<R>,
    pub headers: StringRecord,
}

impl<R> CsvReader<R>
where
    R: io::Read,
{
    pub fn try_new(reader: R) -> CsvProcessorResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);
        let headers = csv_reader
            .headers()
            .map_err(|_| InvalidFormat("invalid format: missing header line".into()))?
            .clone();
        Ok(Self { reader: csv_reader, headers })
    }

    /// Returns an iterator that deserializes the remaining records into `T`.
    pub fn iter<T>(&mut self) -> RecordIter<R, T>
    where
        T: DeserializeOwned,
    {
        RecordIter::new(self)
    }
}
