// ABOUTME: Form boundary validation turning raw text input into typed metric drafts
// ABOUTME: Collects field-level messages and refuses to build a record while any remain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

//! Metric entry forms
//!
//! Every numeric field must parse as a finite number greater than zero. The
//! date accepts `YYYY-MM-DD` (midnight UTC) or RFC 3339 and may not be later
//! than the validation instant.

use chrono::{DateTime, NaiveDate, Utc};
use healthlive_core::errors::ValidationErrors;
use healthlive_core::models::{
    BloodPressure, BodyComposition, Glucose, GlucoseContext, Lipids, MetricDraft, MetricReading,
};
use serde::{Deserialize, Serialize};

const DATE_MESSAGE: &str = "Date must use the YYYY-MM-DD format and not be in the future.";
const BMI_MESSAGE: &str = "Weight and height must give a valid BMI.";

/// Raw form input for one metric kind
pub trait MetricForm {
    /// Reading produced on success
    type Reading: MetricReading;

    /// Validate against `now`
    ///
    /// # Errors
    ///
    /// Returns every field that failed validation
    fn validate(&self, now: DateTime<Utc>) -> Result<MetricDraft<Self::Reading>, ValidationErrors>;
}

/// Blood pressure form fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BloodPressureInput {
    /// Systolic mmHg
    pub systolic: String,
    /// Diastolic mmHg
    pub diastolic: String,
    /// Optional pulse
    pub pulse: String,
    /// Measurement date
    pub recorded_at: String,
    /// Optional note
    pub note: String,
}

impl MetricForm for BloodPressureInput {
    type Reading = BloodPressure;

    fn validate(&self, now: DateTime<Utc>) -> Result<MetricDraft<BloodPressure>, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let systolic = require_positive(
            &mut errors,
            "systolic",
            &self.systolic,
            "Enter a valid systolic pressure.",
        );
        let diastolic = require_positive(
            &mut errors,
            "diastolic",
            &self.diastolic,
            "Enter a valid diastolic pressure.",
        );
        let pulse = if self.pulse.trim().is_empty() {
            None
        } else {
            require_positive(
                &mut errors,
                "pulse",
                &self.pulse,
                "Enter a valid pulse or leave it empty.",
            )
        };
        let recorded_at = require_past_date(&mut errors, &self.recorded_at, now);

        match (systolic, diastolic, recorded_at) {
            (Some(systolic), Some(diastolic), Some(recorded_at)) if errors.is_empty() => {
                Ok(draft(
                    recorded_at,
                    &self.note,
                    BloodPressure {
                        systolic,
                        diastolic,
                        pulse,
                    },
                ))
            }
            _ => Err(errors),
        }
    }
}

/// Glucose form fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlucoseInput {
    /// mg/dL
    pub value: String,
    /// `fasting`, `postprandial`, or `random`; empty means fasting
    pub context: String,
    /// Measurement date
    pub recorded_at: String,
    /// Optional note
    pub note: String,
}

impl MetricForm for GlucoseInput {
    type Reading = Glucose;

    fn validate(&self, now: DateTime<Utc>) -> Result<MetricDraft<Glucose>, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let value = require_positive(
            &mut errors,
            "value",
            &self.value,
            "Enter a valid glucose value.",
        );
        let context = if self.context.trim().is_empty() {
            Some(GlucoseContext::default())
        } else {
            let parsed = GlucoseContext::from_str_lossy(&self.context);
            if parsed.is_none() {
                errors.add("context", "Choose fasting, postprandial, or random.");
            }
            parsed
        };
        let recorded_at = require_past_date(&mut errors, &self.recorded_at, now);

        match (value, context, recorded_at) {
            (Some(value), Some(context), Some(recorded_at)) if errors.is_empty() => Ok(draft(
                recorded_at,
                &self.note,
                Glucose { value, context },
            )),
            _ => Err(errors),
        }
    }
}

/// Lipid panel form fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LipidInput {
    /// Total cholesterol mg/dL
    pub total_cholesterol: String,
    /// HDL mg/dL
    pub hdl: String,
    /// LDL mg/dL
    pub ldl: String,
    /// Triglycerides mg/dL
    pub triglycerides: String,
    /// Measurement date
    pub recorded_at: String,
    /// Optional note
    pub note: String,
}

impl MetricForm for LipidInput {
    type Reading = Lipids;

    fn validate(&self, now: DateTime<Utc>) -> Result<MetricDraft<Lipids>, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let total_cholesterol = require_positive(
            &mut errors,
            "totalCholesterol",
            &self.total_cholesterol,
            "Enter a valid total cholesterol value.",
        );
        let hdl = require_positive(&mut errors, "hdl", &self.hdl, "Enter a valid HDL value.");
        let ldl = require_positive(&mut errors, "ldl", &self.ldl, "Enter a valid LDL value.");
        let triglycerides = require_positive(
            &mut errors,
            "triglycerides",
            &self.triglycerides,
            "Enter a valid triglycerides value.",
        );
        let recorded_at = require_past_date(&mut errors, &self.recorded_at, now);

        match (total_cholesterol, hdl, ldl, triglycerides, recorded_at) {
            (Some(total_cholesterol), Some(hdl), Some(ldl), Some(triglycerides), Some(recorded_at))
                if errors.is_empty() =>
            {
                Ok(draft(
                    recorded_at,
                    &self.note,
                    Lipids {
                        total_cholesterol,
                        hdl,
                        ldl,
                        triglycerides,
                    },
                ))
            }
            _ => Err(errors),
        }
    }
}

/// Body composition form fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BodyCompositionInput {
    /// Kilograms
    pub weight_kg: String,
    /// Centimeters
    pub height_cm: String,
    /// Measurement date
    pub recorded_at: String,
    /// Optional note
    pub note: String,
}

impl MetricForm for BodyCompositionInput {
    type Reading = BodyComposition;

    fn validate(&self, now: DateTime<Utc>) -> Result<MetricDraft<BodyComposition>, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let weight_kg = require_positive(
            &mut errors,
            "weightKg",
            &self.weight_kg,
            "Enter a valid weight in kilograms.",
        );
        let height_cm = require_positive(
            &mut errors,
            "heightCm",
            &self.height_cm,
            "Enter a valid height in centimeters.",
        );
        // Derived values can still leave f64 range, which JSON cannot store
        let reading = match (weight_kg, height_cm) {
            (Some(weight_kg), Some(height_cm)) => {
                let reading = BodyComposition::from_measurements(weight_kg, height_cm);
                if reading.is_none() {
                    errors.add("bmi", BMI_MESSAGE);
                }
                reading
            }
            _ => None,
        };
        let recorded_at = require_past_date(&mut errors, &self.recorded_at, now);

        match (reading, recorded_at) {
            (Some(reading), Some(recorded_at)) if errors.is_empty() => {
                Ok(draft(recorded_at, &self.note, reading))
            }
            _ => Err(errors),
        }
    }
}

/// Parse a strictly positive finite number
#[must_use]
pub fn parse_positive(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
}

/// Parse `YYYY-MM-DD` (midnight UTC) or an RFC 3339 timestamp
#[must_use]
pub fn parse_recorded_at(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|parsed| parsed.with_timezone(&Utc))
}

fn require_positive(
    errors: &mut ValidationErrors,
    field: &str,
    raw: &str,
    message: &str,
) -> Option<f64> {
    let parsed = parse_positive(raw);
    if parsed.is_none() {
        errors.add(field, message);
    }
    parsed
}

fn require_past_date(
    errors: &mut ValidationErrors,
    raw: &str,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    let parsed = parse_recorded_at(raw).filter(|recorded_at| *recorded_at <= now);
    if parsed.is_none() {
        errors.add("recordedAt", DATE_MESSAGE);
    }
    parsed
}

fn draft<R>(recorded_at: DateTime<Utc>, note: &str, reading: R) -> MetricDraft<R> {
    let note = note.trim();
    MetricDraft {
        recorded_at,
        note: (!note.is_empty()).then(|| note.to_owned()),
        reading,
    }
}
