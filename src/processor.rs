use crate::bank::Bank;
use crate::clock::Clock;
use crate::command::{Command, Report};
use std::error::Error;
use tracing::{error, warn};

pub trait Processor {
    type Error: Error;

    /// Reads all commands from the processor's input, runs them against `bank` and writes the
    /// resulting reports to the processor's output.
    fn process<C: Clock>(&mut self, bank: &mut Bank<C>) -> Result<(), Self::Error>;

    /// Runs `commands` against `bank` in order and returns the reports of all query commands,
    /// together with a [`Report::Refused`] for every command the bank refused.
    ///
    /// Neither unreadable records nor refused commands stop the processing; both are logged.
    fn execute_commands<C, I>(bank: &mut Bank<C>, commands: I) -> Vec<Report>
    where
        Self: Sized,
        C: Clock,
        I: Iterator<Item=Result<Command, Self::Error>>,
    {
        let mut reports = Vec::new();
        for command in commands {
            match command {
                Err(err) => {
                    error!(error = ?err, "error parsing command record")
                }
                Ok(command) => match command.execute(bank) {
                    Ok(Some(report)) => reports.push(report),
                    Ok(None) => {}
                    Err(error) => {
                        warn!(
                            command = %command,
                            client.tax_id = ?command.tax_id(),
                            error = %error,
                            "error executing command",
                        );
                        reports.push(Report::Refused { command, error });
                    }
                },
            }
        }
        reports
    }
}
