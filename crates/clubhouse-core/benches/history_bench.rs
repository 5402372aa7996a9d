use chrono::{Days, NaiveDate};
use clubhouse_core::handicap::HandicapEngine;
use clubhouse_core::records::{DifferentialEntry, RoundEntry};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn setup_differentials(count: usize) -> Vec<DifferentialEntry> {
    let start = NaiveDate::from_ymd_opt(2015, 4, 1).expect("valid start date");
    (0..count)
        .map(|i| DifferentialEntry {
            id: format!("r{}", i),
            date: start + Days::new(i as u64 * 7),
            differential: 8.0 + ((i * 53) % 190) as f64 / 10.0,
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let engine = HandicapEngine::default();
    let window = setup_differentials(20);
    let rounds: Vec<RoundEntry> = setup_differentials(200)
        .into_iter()
        .map(RoundEntry::from)
        .collect();

    c.bench_function("compute (20 rounds)", |b| {
        b.iter(|| engine.compute(black_box(&window), black_box(Some(10.0))))
    });

    c.bench_function("reconstruct (200 rounds)", |b| {
        b.iter(|| engine.reconstruct(black_box(&rounds), black_box(Some(10.0))))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
