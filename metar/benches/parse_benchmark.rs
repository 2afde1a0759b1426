use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use metar::{Metar, ParseOptions};

const KJFK: &str = "METAR KJFK 011251Z 31015G25KT 280V350 10SM FEW250 08/M03 A3012 RMK AO2 SLP198";
const KORD: &str = "SPECI KORD 221553Z AUTO 09008KT 1/2SM R10L/1200V3000FT FG VV004 06/05 A2988";
const KDEN: &str = "KDEN 051953Z 02012G20KT 2 1/2SM -SN BLSN BKN008 OVC015 M04/M07 A2993";

/// Benchmark individual report parsing
fn bench_reports(c: &mut Criterion) {
    c.bench_function("routine report", |b| {
        b.iter(|| Metar::parse(black_box(KJFK)))
    });

    c.bench_function("special report", |b| {
        b.iter(|| Metar::parse(black_box(KORD)))
    });

    c.bench_function("winter report", |b| {
        b.iter(|| Metar::parse(black_box(KDEN)))
    });
}

/// Benchmark lenient parsing of a sparse report
fn bench_lenient(c: &mut Criterion) {
    c.bench_function("sparse report", |b| {
        b.iter(|| {
            Metar::parse_with_options(black_box("KJFK 011251Z 31015KT"), ParseOptions::lenient())
        })
    });
}

criterion_group!(benches, bench_reports, bench_lenient);
criterion_main!(benches);
