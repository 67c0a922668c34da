// ABOUTME: Configuration types shared across the workspace
// ABOUTME: Contains the clinical ThresholdConfig used by the alert evaluator

/// Clinical thresholds for metric alerts
pub mod thresholds;

pub use thresholds::{
    BloodPressureThresholds, BodyCompositionThresholds, GlucoseThresholds, LipidThresholds,
    ThresholdConfig,
};
