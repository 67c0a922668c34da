// ABOUTME: Criterion benchmarks for reminder scheduling, metric alerts, and weekly planning
// ABOUTME: Measures slot expansion, schedule descriptions, alert evaluation, and plan generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

//! Criterion benchmarks for the pure computations behind the dashboard.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use healthlive_core::config::ThresholdConfig;
use healthlive_core::models::{
    default_reminder_preferences, BloodPressure, BloodPressureRecord, MetricSeries, UserHabits,
};
use healthlive_intelligence::planner::{build_weekly_plan, compose_share_message};
use healthlive_intelligence::{build_alerts, calculate_daily_slots, calculate_slots, describe_schedule};

#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
fn generate_blood_pressure(count: usize) -> Vec<BloodPressureRecord> {
    let base = Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).single().unwrap_or_default();
    (0..count)
        .map(|index| BloodPressureRecord {
            id: format!("bench-{index}"),
            recorded_at: base + Duration::hours(index as i64),
            note: None,
            reading: BloodPressure {
                systolic: 110.0 + (index % 50) as f64,
                diastolic: 70.0 + (index % 30) as f64,
                pulse: None,
            },
        })
        .collect()
}

fn bench_slot_calculation(c: &mut Criterion) {
    let mut group = c.benchmark_group("slot_calculation");

    for frequency in [15_u32, 60, 720] {
        group.bench_with_input(
            BenchmarkId::new("full_day", frequency),
            &frequency,
            |b, &frequency| {
                b.iter(|| calculate_slots(black_box(0), black_box(1439), black_box(frequency)));
            },
        );
    }

    group.bench_function("wrapping_window", |b| {
        b.iter(|| calculate_slots(black_box(1320), black_box(120), black_box(30)));
    });

    let preferences = default_reminder_preferences();
    group.bench_function("default_preferences", |b| {
        b.iter(|| {
            preferences
                .iter()
                .map(|preference| calculate_daily_slots(black_box(preference)).len())
                .sum::<usize>()
        });
    });
    group.bench_function("describe_defaults", |b| {
        b.iter(|| {
            preferences
                .iter()
                .map(|preference| describe_schedule(black_box(preference)))
                .collect::<Vec<_>>()
        });
    });

    group.finish();
}

fn bench_alert_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("alert_evaluation");

    for count in [10_usize, 100, 1000] {
        let records = generate_blood_pressure(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("blood_pressure", count), &records, |b, records| {
            b.iter(|| {
                build_alerts(
                    black_box(&MetricSeries::BloodPressure(records)),
                    &ThresholdConfig::DEFAULT,
                )
            });
        });
    }

    group.finish();
}

fn bench_weekly_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("weekly_plan");
    let habits = UserHabits::default();

    group.bench_function("build", |b| {
        b.iter(|| build_weekly_plan(black_box(&habits)));
    });

    let plan = build_weekly_plan(&habits);
    let completed = plan
        .days
        .iter()
        .step_by(2)
        .flat_map(|day| day.activities.iter().map(|activity| (activity.id.clone(), true)))
        .collect();
    group.bench_function("share_message", |b| {
        b.iter(|| compose_share_message(black_box(&plan), black_box(&completed), &habits));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_slot_calculation,
    bench_alert_evaluation,
    bench_weekly_plan
);
criterion_main!(benches);
