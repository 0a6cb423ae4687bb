// ABOUTME: Criterion benchmarks for FIT and TCX workout conversion
// ABOUTME: Measures block flattening, regrouping and full document round trips by workout size
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KRD Converter Contributors

//! Criterion benchmarks for workout conversion.
//!
//! Workouts are generated as a warmup, `n` repetition blocks of three steps
//! and a cooldown, so message count grows linearly with `n`.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use chrono::{DateTime, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use krd_convert::config::{ConversionConfig, FixedClock};
use krd_convert::formats::fit::{decode_steps, encode_steps, FitConverter};
use krd_convert::formats::tcx::TcxConverter;
use krd_convert::models::{
    Duration, HeartRateValue, Krd, KrdMetadata, PowerValue, RepetitionBlock, Sport, Target,
    Workout, WorkoutElement, WorkoutStep,
};

const BLOCK_COUNTS: [u32; 3] = [10, 100, 1_000];

fn created() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 6, 0, 0).unwrap()
}

fn next_step(index: &mut u32, duration: Duration, target: Target) -> WorkoutStep {
    let step = WorkoutStep::new(*index, duration, target);
    *index += 1;
    step
}

fn generate_workout(blocks: u32) -> Workout {
    let mut index = 0_u32;
    let mut elements: Vec<WorkoutElement> = Vec::with_capacity(blocks as usize + 2);

    elements.push(next_step(&mut index, Duration::Time { seconds: 600.0 }, Target::Open).into());
    for block in 0..blocks {
        let steps = vec![
            next_step(
                &mut index,
                Duration::Time {
                    seconds: f64::from(block % 5).mul_add(30.0, 120.0),
                },
                Target::Power {
                    value: PowerValue::PercentFtp {
                        value: 95.0 + f64::from(block % 10),
                    },
                },
            ),
            next_step(
                &mut index,
                Duration::Distance { meters: 400.0 },
                Target::HeartRate {
                    value: HeartRateValue::Range { min: 150, max: 165 },
                },
            ),
            next_step(&mut index, Duration::Time { seconds: 60.0 }, Target::Open),
        ];
        // terminator slot
        index += 1;
        elements.push(RepetitionBlock::new(2 + block % 4, steps).into());
    }
    elements.push(next_step(&mut index, Duration::Time { seconds: 300.0 }, Target::Open).into());

    Workout::new(Sport::Cycling, elements)
}

fn krd_for(workout: Workout) -> Krd {
    Krd::workout(KrdMetadata::new(created(), workout.sport), workout)
}

fn bench_fit_steps(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit_steps");
    let config = ConversionConfig::default();

    for blocks in BLOCK_COUNTS {
        let workout = generate_workout(blocks);
        let messages = encode_steps(&workout.steps, &config);
        group.throughput(Throughput::Elements(messages.len() as u64));

        group.bench_with_input(BenchmarkId::new("flatten", blocks), &workout, |b, w| {
            b.iter(|| encode_steps(black_box(&w.steps), &config));
        });
        group.bench_with_input(BenchmarkId::new("regroup", blocks), &messages, |b, m| {
            b.iter(|| decode_steps(black_box(m)));
        });
    }

    group.finish();
}

fn bench_document_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("document_round_trip");
    let clock = FixedClock(created());
    let fit = FitConverter::new(ConversionConfig::default(), clock);
    let tcx = TcxConverter::new(ConversionConfig::default(), clock);

    for blocks in BLOCK_COUNTS {
        let krd = krd_for(generate_workout(blocks));

        group.bench_with_input(BenchmarkId::new("fit", blocks), &krd, |b, krd| {
            b.iter(|| {
                let messages = fit.from_krd(black_box(krd)).unwrap();
                fit.to_krd(&messages).unwrap()
            });
        });
        group.bench_with_input(BenchmarkId::new("tcx", blocks), &krd, |b, krd| {
            b.iter(|| {
                let document = tcx.from_krd(black_box(krd)).unwrap();
                tcx.to_krd(&document).unwrap()
            });
        });

        let messages = fit.from_krd(&krd).unwrap();
        group.bench_with_input(BenchmarkId::new("fit_json", blocks), &messages, |b, m| {
            b.iter(|| serde_json::to_vec(black_box(m)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fit_steps, bench_document_round_trip);
criterion_main!(benches);
