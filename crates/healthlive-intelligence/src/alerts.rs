// ABOUTME: Metric Alert Evaluator producing follow-up messages for out-of-range health readings
// ABOUTME: Dispatches over MetricSeries with an exhaustive match so new kinds must add a rule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

//! Threshold alerts
//!
//! Every record is checked independently. A record that violates several
//! cutoffs yields one alert per violation, and alerts keep record order.

use crate::error::ConfigError;
use healthlive_core::config::{
    BloodPressureThresholds, BodyCompositionThresholds, GlucoseThresholds, LipidThresholds,
    ThresholdConfig,
};
use healthlive_core::models::{
    BloodPressure, BodyComposition, Glucose, Lipids, MetricRecord, MetricSeries,
};
use serde::{Deserialize, Serialize};

/// A single threshold violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricAlert {
    /// Record that triggered the alert
    pub record_id: String,
    /// Human-readable explanation
    pub message: String,
}

/// Evaluator bound to a validated threshold configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricAlertEvaluator {
    thresholds: ThresholdConfig,
}

impl Default for MetricAlertEvaluator {
    fn default() -> Self {
        Self {
            thresholds: ThresholdConfig::DEFAULT,
        }
    }
}

impl MetricAlertEvaluator {
    /// Create an evaluator after checking the cutoffs are usable
    ///
    /// # Errors
    ///
    /// Returns an error when a cutoff is not a positive finite number or the
    /// BMI lower bound is not below the upper bound.
    pub fn new(thresholds: ThresholdConfig) -> Result<Self, ConfigError> {
        validate_thresholds(&thresholds)?;
        Ok(Self { thresholds })
    }

    /// Thresholds in effect
    #[must_use]
    pub const fn thresholds(&self) -> &ThresholdConfig {
        &self.thresholds
    }

    /// Alerts for every record in the series
    #[must_use]
    pub fn evaluate(&self, series: &MetricSeries<'_>) -> Vec<MetricAlert> {
        build_alerts(series, &self.thresholds)
    }
}

/// Alerts for every record in the series against `thresholds`
#[must_use]
pub fn build_alerts(series: &MetricSeries<'_>, thresholds: &ThresholdConfig) -> Vec<MetricAlert> {
    match series {
        MetricSeries::BloodPressure(records) => collect_alerts(records, |reading| {
            blood_pressure_messages(reading, &thresholds.blood_pressure)
        }),
        MetricSeries::Glucose(records) => {
            collect_alerts(records, |reading| glucose_messages(reading, &thresholds.glucose))
        }
        MetricSeries::Lipids(records) => {
            collect_alerts(records, |reading| lipid_messages(reading, &thresholds.lipids))
        }
        MetricSeries::BodyComposition(records) => collect_alerts(records, |reading| {
            body_composition_messages(reading, &thresholds.body_composition)
        }),
    }
}

fn collect_alerts<R>(
    records: &[MetricRecord<R>],
    messages_for: impl Fn(&R) -> Vec<String>,
) -> Vec<MetricAlert> {
    records
        .iter()
        .flat_map(|record| {
            messages_for(&record.reading)
                .into_iter()
                .map(|message| MetricAlert {
                    record_id: record.id.clone(),
                    message,
                })
        })
        .collect()
}

fn blood_pressure_messages(
    reading: &BloodPressure,
    thresholds: &BloodPressureThresholds,
) -> Vec<String> {
    let mut messages = Vec::new();
    if reading.systolic >= thresholds.systolic {
        messages.push("Systolic pressure is above the recommended target.".to_owned());
    }
    if reading.diastolic >= thresholds.diastolic {
        messages.push("Diastolic pressure is above the recommended target.".to_owned());
    }
    messages
}

fn glucose_messages(reading: &Glucose, thresholds: &GlucoseThresholds) -> Vec<String> {
    if reading.value >= thresholds.value {
        vec![format!(
            "Glucose level ({} mg/dL) needs follow-up.",
            reading.value
        )]
    } else {
        Vec::new()
    }
}

fn lipid_messages(reading: &Lipids, thresholds: &LipidThresholds) -> Vec<String> {
    let mut messages = Vec::new();
    if reading.total_cholesterol >= thresholds.total_cholesterol {
        messages.push("Total cholesterol is above the threshold.".to_owned());
    }
    if reading.ldl >= thresholds.ldl {
        messages.push("LDL is above the target value.".to_owned());
    }
    if reading.triglycerides >= thresholds.triglycerides {
        messages.push("Triglycerides are elevated.".to_owned());
    }
    messages
}

fn body_composition_messages(
    reading: &BodyComposition,
    thresholds: &BodyCompositionThresholds,
) -> Vec<String> {
    if reading.bmi >= thresholds.bmi_high {
        vec!["BMI indicates obesity, consider consulting your specialist.".to_owned()]
    } else if reading.bmi < thresholds.bmi_low {
        vec!["BMI indicates underweight, review your nutrition plan.".to_owned()]
    } else {
        Vec::new()
    }
}

fn validate_thresholds(thresholds: &ThresholdConfig) -> Result<(), ConfigError> {
    let cutoffs = [
        (thresholds.blood_pressure.systolic, "blood_pressure.systolic"),
        (thresholds.blood_pressure.diastolic, "blood_pressure.diastolic"),
        (thresholds.glucose.value, "glucose.value"),
        (thresholds.lipids.total_cholesterol, "lipids.total_cholesterol"),
        (thresholds.lipids.ldl, "lipids.ldl"),
        (thresholds.lipids.triglycerides, "lipids.triglycerides"),
        (thresholds.body_composition.bmi_high, "body_composition.bmi_high"),
        (thresholds.body_composition.bmi_low, "body_composition.bmi_low"),
    ];
    if let Some((_, name)) = cutoffs
        .iter()
        .find(|(value, _)| !value.is_finite() || *value <= 0.0)
    {
        return Err(ConfigError::ValueOutOfRange(*name));
    }
    if thresholds.body_composition.bmi_low >= thresholds.body_composition.bmi_high {
        return Err(ConfigError::InvalidRange(
            "body_composition.bmi_low must be below bmi_high",
        ));
    }
    Ok(())
}
