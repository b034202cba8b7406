use crate::{command_script, ParseResult, SCENARIOS};
use bank_simulator::bank::{Bank, BankConfig};
use bank_simulator::command::Command;
use bank_simulator::processor::Processor;
use bank_simulator::processors::csv::reader::CsvReader;
use bank_simulator::processors::csv::CsvProcessor;
use criterion::{black_box, criterion_group, BatchSize, BenchmarkId, Criterion};
use std::io;

fn bench_execute_commands(c: &mut Criterion) {
    let mut group = c.benchmark_group("Processor::execute_commands");
    for num_clients in SCENARIOS {
        let buffer = command_script(num_clients).into_bytes();
        let mut reader = CsvReader::try_new(buffer.as_slice())
            .expect("Benchmark setup: unable to create csv reader");
        let commands = reader.iter().filter_map(Result::ok).collect::<Vec<Command>>();

        group.bench_with_input(
            BenchmarkId::from_parameter(num_clients), &commands,
            |b, commands| b.iter_batched(
                || (Bank::new(BankConfig::default()), commands.iter().cloned().map(Ok).collect::<ParseResult>()),
                |(mut bank, commands)| {
                    CsvProcessor::<&[u8], io::Sink>::execute_commands(&mut bank, black_box(commands.into_iter()))
                },
                BatchSize::SmallInput,
            ),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_execute_commands);
