// ABOUTME: Metric form validation tests for field messages and derived values
// ABOUTME: Covers required numbers, optional pulse, date rules, and BMI derivation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{TimeZone, Utc};
use healthlive::errors::{AppError, ErrorCode};
use healthlive::forms::{
    parse_positive, parse_recorded_at, BloodPressureInput, BodyCompositionInput, GlucoseInput,
    LipidInput, MetricForm,
};
use healthlive_core::models::{BodyComposition, GlucoseContext};

fn blood_pressure(systolic: &str, diastolic: &str, pulse: &str) -> BloodPressureInput {
    BloodPressureInput {
        systolic: systolic.to_owned(),
        diastolic: diastolic.to_owned(),
        pulse: pulse.to_owned(),
        recorded_at: "2025-03-11".to_owned(),
        note: String::new(),
    }
}

#[test]
fn test_valid_blood_pressure_builds_draft() {
    let draft = blood_pressure("128", "84", "")
        .validate(common::fixed_now())
        .unwrap();
    assert!((draft.reading.systolic - 128.0).abs() < f64::EPSILON);
    assert!((draft.reading.diastolic - 84.0).abs() < f64::EPSILON);
    assert_eq!(draft.reading.pulse, None);
    assert_eq!(
        draft.recorded_at,
        Utc.with_ymd_and_hms(2025, 3, 11, 0, 0, 0).unwrap()
    );
    assert_eq!(draft.note, None);
}

#[test]
fn test_blood_pressure_reports_every_invalid_field() {
    let mut input = blood_pressure("0", "abc", "-3");
    input.recorded_at = "11/03/2025".to_owned();
    let errors = input.validate(common::fixed_now()).unwrap_err();
    assert_eq!(errors.len(), 4);
    assert_eq!(errors.get("systolic"), Some("Enter a valid systolic pressure."));
    assert_eq!(errors.get("diastolic"), Some("Enter a valid diastolic pressure."));
    assert!(errors.get("pulse").is_some());
    assert_eq!(
        errors.get("recordedAt"),
        Some("Date must use the YYYY-MM-DD format and not be in the future.")
    );
}

#[test]
fn test_future_date_is_rejected() {
    let mut input = blood_pressure("120", "80", "60");
    input.recorded_at = "2025-03-13".to_owned();
    let errors = input.validate(common::fixed_now()).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(errors.get("recordedAt").is_some());
}

#[test]
fn test_glucose_context_defaults_and_validation() {
    let mut input = GlucoseInput {
        value: "95.5".to_owned(),
        context: String::new(),
        recorded_at: "2025-03-12T07:15:00+01:00".to_owned(),
        note: "  before breakfast ".to_owned(),
    };
    let draft = input.validate(common::fixed_now()).unwrap();
    assert_eq!(draft.reading.context, GlucoseContext::Fasting);
    assert_eq!(draft.note.as_deref(), Some("before breakfast"));
    assert_eq!(
        draft.recorded_at,
        Utc.with_ymd_and_hms(2025, 3, 12, 6, 15, 0).unwrap()
    );

    input.context = "Postprandial".to_owned();
    assert_eq!(
        input.validate(common::fixed_now()).unwrap().reading.context,
        GlucoseContext::Postprandial
    );

    input.context = "after lunch".to_owned();
    let errors = input.validate(common::fixed_now()).unwrap_err();
    assert!(errors.get("context").is_some());
}

#[test]
fn test_lipid_fields_use_camel_case_keys() {
    let input = LipidInput {
        total_cholesterol: String::new(),
        hdl: "50".to_owned(),
        ldl: "nan".to_owned(),
        triglycerides: "inf".to_owned(),
        recorded_at: "2025-03-01".to_owned(),
        note: String::new(),
    };
    let errors = input.validate(common::fixed_now()).unwrap_err();
    let fields: Vec<&str> = errors.fields().keys().map(String::as_str).collect();
    assert_eq!(fields, vec!["ldl", "totalCholesterol", "triglycerides"]);
}

#[test]
fn test_body_composition_derives_bmi() {
    let input = BodyCompositionInput {
        weight_kg: "70".to_owned(),
        height_cm: "175".to_owned(),
        recorded_at: "2025-03-12".to_owned(),
        note: String::new(),
    };
    let draft = input.validate(common::fixed_now()).unwrap();
    assert!((draft.reading.bmi - 22.86).abs() < 1e-9);

    let missing_height = BodyCompositionInput {
        height_cm: String::new(),
        ..input
    };
    let errors = missing_height.validate(common::fixed_now()).unwrap_err();
    assert_eq!(errors.get("heightCm"), Some("Enter a valid height in centimeters."));
}

#[test]
fn test_body_composition_rejects_non_finite_bmi() {
    for (weight_kg, height_cm) in [("70", "1e-200"), ("1e307", "175")] {
        let input = BodyCompositionInput {
            weight_kg: weight_kg.to_owned(),
            height_cm: height_cm.to_owned(),
            recorded_at: "2025-03-12".to_owned(),
            note: String::new(),
        };
        let errors = input.validate(common::fixed_now()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("bmi"), Some("Weight and height must give a valid BMI."));
    }

    assert!(BodyComposition::from_measurements(70.0, 1e-200).is_none());
    assert!(BodyComposition::from_measurements(1e307, 175.0).is_none());
    assert!(BodyComposition::from_measurements(70.0, 175.0).is_some());
}

#[test]
fn test_validation_errors_convert_to_invalid_input() {
    let errors = blood_pressure("", "", "")
        .validate(common::fixed_now())
        .unwrap_err();
    let error: AppError = errors.into();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[test]
fn test_parse_helpers() {
    assert_eq!(parse_positive(" 12.5 "), Some(12.5));
    assert_eq!(parse_positive("0"), None);
    assert_eq!(parse_positive("-1"), None);
    assert_eq!(parse_positive("NaN"), None);
    assert_eq!(parse_positive(""), None);
    assert!(parse_recorded_at("2025-02-30").is_none());
    assert!(parse_recorded_at("2025-03-12T10:00:00Z").is_some());
}
