//! Benchmarks for exporters: JSON, CSV, SQL and XML serialization.
//!
//! Records are synthesized once up front and written to a black-hole writer,
//! so only formatter cost is measured.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::io::Write;

use recgen_core::generate::{synthesize, BatchOptions, Record};
use recgen_core::output::{export, ExportFormat, ExportOptions};
use recgen_testutil::sensor_site_schema;

/// A writer that discards all output.
struct NullWriter;

impl Write for NullWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        Ok(buf.len())
    }
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn records(count: usize) -> Vec<Record> {
    let options = BatchOptions {
        count,
        seed: Some(42),
        ..Default::default()
    };
    synthesize(&sensor_site_schema(), &options, None).unwrap()
}

fn bench_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("output/export");
    let options = ExportOptions::default();

    for count in [100, 1000] {
        let batch = records(count);
        group.throughput(Throughput::Elements(count as u64));

        for format in ExportFormat::ALL {
            group.bench_with_input(
                BenchmarkId::new(format.tag(), count),
                &batch,
                |b, batch| {
                    b.iter(|| {
                        export(batch, *format, &options, &mut NullWriter).unwrap();
                    });
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_export);
criterion_main!(benches);
