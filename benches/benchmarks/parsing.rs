use crate::{command_script, ParseResult, SCENARIOS};
use bank_simulator::processors::csv::reader::CsvReader;
use criterion::{black_box, criterion_group, BenchmarkId, Criterion};

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("CsvReader::iter");
    for num_clients in SCENARIOS {
        let buffer = command_script(num_clients).into_bytes();
        group.throughput(criterion::Throughput::Bytes(buffer.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_clients), &buffer,
            |b, buffer| b.iter(|| {
                let mut reader = CsvReader::try_new(black_box(buffer.as_slice()))
                    .expect("Benchmark: unable to create csv reader");
                reader.iter().collect::<ParseResult>()
            }),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_parsing);
