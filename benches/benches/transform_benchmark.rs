//! Benchmarks for the business-day walk, the transforms and Parquet output.
//!
//! Run with: `cargo bench --package macroetl-bench`

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use macroetl_bench::{dense_holidays, mixed_records, sgs_payload, sidra_payload};
use macroetl_lib::{Formatter, HolidaySet, ParquetFormatter, Source, resolve};
use macroetl_transform::{ibge, passthrough};
use std::hint::black_box;

fn nov_14() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 14).unwrap()
}

fn resolve_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    let empty = HolidaySet::new();
    let dense = dense_holidays(nov_14(), 60);

    for offset in [1_u32, 20, 250] {
        group.bench_with_input(BenchmarkId::new("no_holidays", offset), &offset, |b, &offset| {
            b.iter(|| resolve(black_box(nov_14()), &empty, offset));
        });
        group.bench_with_input(BenchmarkId::new("dense_holidays", offset), &offset, |b, &offset| {
            b.iter(|| resolve(black_box(nov_14()), &dense, offset));
        });
    }
    group.finish();
}

fn transform_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");

    for rows in [100_usize, 10_000] {
        group.throughput(Throughput::Elements(rows as u64));

        let sidra = sidra_payload(rows);
        group.bench_with_input(BenchmarkId::new("ibge", rows), &sidra, |b, payload| {
            b.iter(|| ibge::normalize(payload.clone(), nov_14()).unwrap());
        });

        let sgs = sgs_payload(rows);
        group.bench_with_input(BenchmarkId::new("passthrough", rows), &sgs, |b, payload| {
            b.iter(|| passthrough::normalize(Source::Selic, payload.clone(), nov_14()).unwrap());
        });
    }
    group.finish();
}

fn parquet_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("parquet");
    let formatter = ParquetFormatter::new();

    for rows in [100_usize, 10_000] {
        let records = mixed_records(rows);
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &records, |b, records| {
            b.iter(|| formatter.to_bytes(black_box(records)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, resolve_benchmark, transform_benchmark, parquet_benchmark);
criterion_main!(benches);
