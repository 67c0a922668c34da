// ABOUTME: Health metric record models for blood pressure, glucose, lipids, and body composition
// ABOUTME: MetricKind sum type, per-kind readings, timestamped records, drafts, and sync payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

use crate::constants::storage_keys;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Metric kinds tracked by the monitoring dashboard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum MetricKind {
    /// Systolic/diastolic blood pressure
    BloodPressure,
    /// Blood glucose
    Glucose,
    /// Lipid panel
    Lipids,
    /// Weight, height, and BMI
    BodyComposition,
}

impl MetricKind {
    /// Every metric kind in dashboard order
    pub const ALL: [Self; 4] = [
        Self::BloodPressure,
        Self::Glucose,
        Self::Lipids,
        Self::BodyComposition,
    ];

    /// Storage slot holding this kind's record list
    #[must_use]
    pub const fn storage_key(&self) -> &'static str {
        match self {
            Self::BloodPressure => storage_keys::BLOOD_PRESSURE,
            Self::Glucose => storage_keys::GLUCOSE,
            Self::Lipids => storage_keys::LIPIDS,
            Self::BodyComposition => storage_keys::BODY_COMPOSITION,
        }
    }

    /// Storage slot holding this kind's unsaved draft
    #[must_use]
    pub fn draft_key(&self) -> String {
        format!("{}{}", self.storage_key(), storage_keys::DRAFT_SUFFIX)
    }

    /// Identifier used in serialized payloads
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BloodPressure => "bloodPressure",
            Self::Glucose => "glucose",
            Self::Lipids => "lipids",
            Self::BodyComposition => "bodyComposition",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::BloodPressure => "Blood pressure",
            Self::Glucose => "Glucose",
            Self::Lipids => "Lipid panel",
            Self::BodyComposition => "Body composition",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Moment a glucose sample was taken relative to meals
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum GlucoseContext {
    /// Fasting sample
    #[default]
    Fasting,
    /// After a meal
    Postprandial,
    /// Random sample
    Random,
}

impl GlucoseContext {
    /// Parse a context name
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "fasting" => Some(Self::Fasting),
            "postprandial" => Some(Self::Postprandial),
            "random" => Some(Self::Random),
            _ => None,
        }
    }

    /// Stored name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fasting => "fasting",
            Self::Postprandial => "postprandial",
            Self::Random => "random",
        }
    }
}

impl fmt::Display for GlucoseContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Blood pressure reading in mmHg
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BloodPressure {
    /// Systolic pressure
    pub systolic: f64,
    /// Diastolic pressure
    pub diastolic: f64,
    /// Pulse in beats per minute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pulse: Option<f64>,
}

/// Glucose reading in mg/dL
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Glucose {
    /// Glucose concentration
    pub value: f64,
    /// Sampling context
    pub context: GlucoseContext,
}

/// Lipid panel in mg/dL
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lipids {
    /// Total cholesterol
    pub total_cholesterol: f64,
    /// HDL cholesterol
    pub hdl: f64,
    /// LDL cholesterol
    pub ldl: f64,
    /// Triglycerides
    pub triglycerides: f64,
}

/// Body composition measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyComposition {
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Body mass index rounded to two decimals
    pub bmi: f64,
}

impl BodyComposition {
    /// Build from weight and height, deriving BMI
    ///
    /// Returns `None` when the BMI is not finite, e.g. a height so small its
    /// square underflows to zero or a weight large enough to overflow.
    #[must_use]
    pub fn from_measurements(weight_kg: f64, height_cm: f64) -> Option<Self> {
        let height_m = height_cm / 100.0;
        let bmi = round_to_hundredths(weight_kg / (height_m * height_m));
        bmi.is_finite().then_some(Self {
            weight_kg,
            height_cm,
            bmi,
        })
    }
}

/// Round to two decimal places
#[must_use]
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A stored, timestamped reading of one metric kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricRecord<R> {
    /// Unique identifier, `"{unix_millis}-{random}"`
    pub id: String,
    /// When the reading was taken
    pub recorded_at: DateTime<Utc>,
    /// Optional free-text note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Kind-specific values
    #[serde(flatten)]
    pub reading: R,
}

/// A record that has not been assigned an identifier yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricDraft<R> {
    /// When the reading was taken
    pub recorded_at: DateTime<Utc>,
    /// Optional free-text note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Kind-specific values
    #[serde(flatten)]
    pub reading: R,
}

impl<R> MetricDraft<R> {
    /// Create a draft without a note
    pub const fn new(recorded_at: DateTime<Utc>, reading: R) -> Self {
        Self {
            recorded_at,
            note: None,
            reading,
        }
    }

    /// Promote the draft into a record with the given identifier
    pub fn into_record(self, id: impl Into<String>) -> MetricRecord<R> {
        MetricRecord {
            id: id.into(),
            recorded_at: self.recorded_at,
            note: self.note,
            reading: self.reading,
        }
    }
}

/// Blood pressure record
pub type BloodPressureRecord = MetricRecord<BloodPressure>;
/// Glucose record
pub type GlucoseRecord = MetricRecord<Glucose>;
/// Lipid panel record
pub type LipidRecord = MetricRecord<Lipids>;
/// Body composition record
pub type BodyCompositionRecord = MetricRecord<BodyComposition>;

/// Borrowed list of records tagged with their metric kind
///
/// The tag guarantees the records match the kind, so consumers dispatch with
/// an exhaustive `match` instead of a runtime lookup.
#[derive(Debug, Clone, Copy)]
pub enum MetricSeries<'a> {
    /// Blood pressure records
    BloodPressure(&'a [BloodPressureRecord]),
    /// Glucose records
    Glucose(&'a [GlucoseRecord]),
    /// Lipid records
    Lipids(&'a [LipidRecord]),
    /// Body composition records
    BodyComposition(&'a [BodyCompositionRecord]),
}

impl MetricSeries<'_> {
    /// Kind carried by the tag
    #[must_use]
    pub const fn kind(&self) -> MetricKind {
        match self {
            Self::BloodPressure(_) => MetricKind::BloodPressure,
            Self::Glucose(_) => MetricKind::Glucose,
            Self::Lipids(_) => MetricKind::Lipids,
            Self::BodyComposition(_) => MetricKind::BodyComposition,
        }
    }

    /// Number of records
    #[must_use]
    pub const fn len(&self) -> usize {
        match self {
            Self::BloodPressure(records) => records.len(),
            Self::Glucose(records) => records.len(),
            Self::Lipids(records) => records.len(),
            Self::BodyComposition(records) => records.len(),
        }
    }

    /// True when the series holds no records
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Kind-specific payload of a metric record
pub trait MetricReading:
    Clone + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Metric kind this reading belongs to
    const KIND: MetricKind;

    /// Tag a record slice with this reading's kind
    fn series(records: &[MetricRecord<Self>]) -> MetricSeries<'_>;
}

impl MetricReading for BloodPressure {
    const KIND: MetricKind = MetricKind::BloodPressure;

    fn series(records: &[MetricRecord<Self>]) -> MetricSeries<'_> {
        MetricSeries::BloodPressure(records)
    }
}

impl MetricReading for Glucose {
    const KIND: MetricKind = MetricKind::Glucose;

    fn series(records: &[MetricRecord<Self>]) -> MetricSeries<'_> {
        MetricSeries::Glucose(records)
    }
}

impl MetricReading for Lipids {
    const KIND: MetricKind = MetricKind::Lipids;

    fn series(records: &[MetricRecord<Self>]) -> MetricSeries<'_> {
        MetricSeries::Lipids(records)
    }
}

impl MetricReading for BodyComposition {
    const KIND: MetricKind = MetricKind::BodyComposition;

    fn series(records: &[MetricRecord<Self>]) -> MetricSeries<'_> {
        MetricSeries::BodyComposition(records)
    }
}

/// Entry in the outbound sync queue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncPayload {
    /// Metric kind of the queued record
    pub metric: MetricKind,
    /// Serialized record
    pub record: serde_json::Value,
    /// When the record was queued
    pub queued_at: DateTime<Utc>,
}
