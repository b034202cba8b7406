use anyhow::Context;
use bank_simulator::account::WithdrawalPolicy;
use bank_simulator::bank::{Bank, BankConfig};
use bank_simulator::client::DAILY_TRANSACTION_LIMIT;
use bank_simulator::processor::Processor;
use bank_simulator::processors::csv::writer::CsvWriter;
use bank_simulator::processors::csv::CsvProcessor;
use clap::{Parser, ValueHint};
use rust_decimal::Decimal;
use std::{fs::File, io, path::PathBuf};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a file that holds bank commands. Commands are read from stdin if omitted.
    ///
    /// Supported file formats: CSV
    #[arg(value_hint = ValueHint::FilePath)]
    path: Option<PathBuf>,

    /// Write a summary of all accounts to this file once all commands were processed.
    #[arg(long, value_hint = ValueHint::FilePath)]
    export: Option<PathBuf>,

    /// The maximum amount of a single withdrawal from a checking account.
    #[arg(long, default_value = "500", value_parser = parse_positive_decimal)]
    withdrawal_limit: Decimal,

    /// The maximum number of withdrawals from a checking account.
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..))]
    max_withdrawals: u32,

    /// The maximum number of transactions per account and day.
    #[arg(long, default_value_t = DAILY_TRANSACTION_LIMIT as u32, value_parser = clap::value_parser!(u32).range(1..))]
    daily_limit: u32,
}

fn parse_positive_decimal(value: &str) -> Result<Decimal, String> {
    let amount = value.parse::<Decimal>().map_err(|err| err.to_string())?;
    if amount <= Decimal::ZERO {
        return Err(format!("`{}` is not a positive amount", value));
    }
    Ok(amount)
}

impl Cli {
    fn bank_config(&self) -> Result<BankConfig, anyhow::Error> {
        let policy = WithdrawalPolicy::new(self.withdrawal_limit, self.max_withdrawals)?;
        let daily_limit = usize::try_from(self.daily_limit)?;
        Ok(BankConfig::new(policy, daily_limit)?)
    }
}

fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut bank = Bank::new(cli.bank_config().context("invalid bank configuration")?);

    let result = match &cli.path {
        Some(path) => {
            let file = File::open(path).context("unable to open command file")?;
            CsvProcessor::try_new(file, io::stdout())?.process(&mut bank)
        }
        None => CsvProcessor::try_new(io::stdin(), io::stdout())?.process(&mut bank),
    };
    result.context("processing commands failed")?;

    if let Some(path) = &cli.export {
        let file = File::create(path).context("unable to create export file")?;
        CsvWriter::new(file)
            .serialize(bank.list_accounts())
            .context("exporting accounts failed")?;
    }
    Ok(())
}
