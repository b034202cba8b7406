use crate::bank::Bank;
use crate::clock::Clock;
use crate::processor::Processor;
use crate::processors::csv::reader::CsvReader;
use crate::processors::csv::CsvProcessorError;
use std::io::{Read, Write};

/// Runs a CSV command script and writes the text of every report to `output`.
pub struct CsvProcessor<R, W>
where
    R: Read,
    W: Write,
{
    reader: CsvReader<R>,
    output: W,
}

impl<R, W> CsvProcessor<R, W>
where
    R: Read,
    W: Write,
{
    pub fn try_new(input: R, output: W) -> Result<Self, anyhow::Error> {
        let reader = CsvReader::try_new(input)?;
        Ok(Self {
            reader,
            output,
        })
    }
}

impl<R, W> Processor for CsvProcessor<R, W>
where
    R: Read,
    W: Write,
{
    type Error = CsvProcessorError;

    fn process<C: Clock>(&mut self, bank: &mut Bank<C>) -> Result<(), Self::Error> {
        let reports = Self::execute_commands(bank, self.reader.iter());
        for report in reports {
            writeln!(self.output, "{}", report)?;
        }
        Ok(self.output.flush()?)
    }
}
