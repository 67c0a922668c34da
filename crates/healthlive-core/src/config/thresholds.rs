// ABOUTME: Clinical threshold configuration for health metric alerting
// ABOUTME: Process-wide constant cutoffs for blood pressure, glucose, lipids, and BMI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

//! Threshold configuration
//!
//! Upper bounds are inclusive (a reading equal to the cutoff alerts). The
//! underweight BMI bound is exclusive.

use serde::{Deserialize, Serialize};

/// Blood pressure cutoffs in mmHg
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BloodPressureThresholds {
    /// Systolic alert cutoff
    pub systolic: f64,
    /// Diastolic alert cutoff
    pub diastolic: f64,
}

/// Glucose cutoff in mg/dL
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlucoseThresholds {
    /// Glucose alert cutoff
    pub value: f64,
}

/// Lipid panel cutoffs in mg/dL
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LipidThresholds {
    /// Total cholesterol alert cutoff
    pub total_cholesterol: f64,
    /// LDL alert cutoff
    pub ldl: f64,
    /// Triglycerides alert cutoff
    pub triglycerides: f64,
}

/// Body mass index bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyCompositionThresholds {
    /// Obesity cutoff (inclusive)
    pub bmi_high: f64,
    /// Underweight cutoff (exclusive)
    pub bmi_low: f64,
}

/// Mapping from metric kind to its cutoffs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdConfig {
    /// Blood pressure cutoffs
    pub blood_pressure: BloodPressureThresholds,
    /// Glucose cutoff
    pub glucose: GlucoseThresholds,
    /// Lipid cutoffs
    pub lipids: LipidThresholds,
    /// BMI bounds
    pub body_composition: BodyCompositionThresholds,
}

impl ThresholdConfig {
    /// Default clinical thresholds
    pub const DEFAULT: Self = Self {
        blood_pressure: BloodPressureThresholds {
            systolic: 140.0,
            diastolic: 90.0,
        },
        glucose: GlucoseThresholds { value: 140.0 },
        lipids: LipidThresholds {
            total_cholesterol: 200.0,
            ldl: 130.0,
            triglycerides: 150.0,
        },
        body_composition: BodyCompositionThresholds {
            bmi_high: 30.0,
            bmi_low: 18.5,
        },
    };
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
