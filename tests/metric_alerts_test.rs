// ABOUTME: Metric alert evaluation tests against the default clinical thresholds
// ABOUTME: Covers per-metric boundaries, record attribution, idempotence, and threshold validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use healthlive_core::config::ThresholdConfig;
use healthlive_core::models::{
    BloodPressure, BodyComposition, Glucose, GlucoseContext, Lipids, MetricReading, MetricRecord,
};
use healthlive_intelligence::{build_alerts, ConfigError, MetricAlertEvaluator};

fn record<R>(id: &str, reading: R) -> MetricRecord<R> {
    MetricRecord {
        id: id.to_owned(),
        recorded_at: common::fixed_now(),
        note: None,
        reading,
    }
}

fn pressure(systolic: f64, diastolic: f64) -> MetricRecord<BloodPressure> {
    record(
        "bp",
        BloodPressure {
            systolic,
            diastolic,
            pulse: None,
        },
    )
}

fn bmi(value: f64) -> MetricRecord<BodyComposition> {
    record(
        "bc",
        BodyComposition {
            weight_kg: 80.0,
            height_cm: 170.0,
            bmi: value,
        },
    )
}

fn messages<R: MetricReading>(records: &[MetricRecord<R>]) -> Vec<String> {
    MetricAlertEvaluator::default()
        .evaluate(&R::series(records))
        .into_iter()
        .map(|alert| alert.message)
        .collect()
}

#[test]
fn test_blood_pressure_alerts() {
    assert!(messages(&[pressure(120.0, 80.0)]).is_empty());
    assert_eq!(
        messages(&[pressure(150.0, 80.0)]),
        vec!["Systolic pressure is above the recommended target."]
    );
    assert_eq!(messages(&[pressure(150.0, 95.0)]).len(), 2);
    assert_eq!(
        messages(&[pressure(139.0, 90.0)]),
        vec!["Diastolic pressure is above the recommended target."]
    );
}

#[test]
fn test_glucose_alert_includes_value() {
    let records = [record(
        "g",
        Glucose {
            value: 150.0,
            context: GlucoseContext::Postprandial,
        },
    )];
    assert_eq!(
        messages(&records),
        vec!["Glucose level (150 mg/dL) needs follow-up."]
    );

    let normal = [record(
        "g",
        Glucose {
            value: 139.9,
            context: GlucoseContext::Fasting,
        },
    )];
    assert!(messages(&normal).is_empty());
}

#[test]
fn test_lipid_alerts_are_independent() {
    let records = [record(
        "l",
        Lipids {
            total_cholesterol: 210.0,
            hdl: 45.0,
            ldl: 120.0,
            triglycerides: 150.0,
        },
    )];
    assert_eq!(
        messages(&records),
        vec![
            "Total cholesterol is above the threshold.",
            "Triglycerides are elevated."
        ]
    );
}

#[test]
fn test_bmi_boundaries() {
    assert!(messages(&[bmi(29.9)]).is_empty());
    assert_eq!(
        messages(&[bmi(30.0)]),
        vec!["BMI indicates obesity, consider consulting your specialist."]
    );
    assert_eq!(
        messages(&[bmi(18.4)]),
        vec!["BMI indicates underweight, review your nutrition plan."]
    );
    assert!(messages(&[bmi(18.5)]).is_empty());
}

#[test]
fn test_alerts_keep_record_order_and_ids() {
    let records = [
        MetricRecord {
            id: "first".to_owned(),
            ..pressure(150.0, 95.0)
        },
        MetricRecord {
            id: "second".to_owned(),
            ..pressure(110.0, 70.0)
        },
        MetricRecord {
            id: "third".to_owned(),
            ..pressure(145.0, 70.0)
        },
    ];
    let ids: Vec<String> = MetricAlertEvaluator::default()
        .evaluate(&BloodPressure::series(&records))
        .into_iter()
        .map(|alert| alert.record_id)
        .collect();
    assert_eq!(ids, vec!["first", "first", "third"]);
}

#[test]
fn test_evaluation_is_idempotent() {
    let records = [pressure(150.0, 95.0), pressure(160.0, 100.0)];
    let series = BloodPressure::series(&records);
    let evaluator = MetricAlertEvaluator::default();
    assert_eq!(evaluator.evaluate(&series), evaluator.evaluate(&series));
    assert_eq!(
        evaluator.evaluate(&series),
        build_alerts(&series, &ThresholdConfig::DEFAULT)
    );
}

#[test]
fn test_empty_series_has_no_alerts() {
    let records: Vec<MetricRecord<Lipids>> = Vec::new();
    assert!(messages(&records).is_empty());
}

#[test]
fn test_custom_thresholds_are_validated() {
    let mut thresholds = ThresholdConfig::DEFAULT;
    thresholds.glucose.value = 0.0;
    assert_eq!(
        MetricAlertEvaluator::new(thresholds),
        Err(ConfigError::ValueOutOfRange("glucose.value"))
    );

    let mut inverted = ThresholdConfig::DEFAULT;
    inverted.body_composition.bmi_low = 35.0;
    assert!(matches!(
        MetricAlertEvaluator::new(inverted),
        Err(ConfigError::InvalidRange(_))
    ));

    let mut stricter = ThresholdConfig::DEFAULT;
    stricter.blood_pressure.systolic = 130.0;
    let evaluator = MetricAlertEvaluator::new(stricter).unwrap();
    let records = [pressure(135.0, 80.0)];
    assert_eq!(evaluator.evaluate(&BloodPressure::series(&records)).len(), 1);
}
