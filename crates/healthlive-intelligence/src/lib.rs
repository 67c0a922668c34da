// ABOUTME: Pure wellness computations for the HealthLive tracker
// ABOUTME: Slot scheduling, metric alert evaluation, compliance math, and weekly planning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

#![deny(unsafe_code)]

//! # HealthLive Intelligence
//!
//! Deterministic computations with no I/O. Every function here is safe to call
//! from any thread and returns the same output for the same input.
//!
//! ## Modules
//!
//! - **scheduling**: `"HH:MM"` parsing and the reminder Slot Scheduler
//! - **alerts**: Metric Alert Evaluator over typed record series
//! - **compliance**: Day and ISO week keys, checklist completion percentages
//! - **planner**: Weekly plan generator and shareable progress summary
//! - **error**: Threshold configuration validation errors

/// Reminder time parsing and slot calculation
pub mod scheduling;

/// Threshold-based alerting over metric records
pub mod alerts;

/// Compliance checklist keys and completion math
pub mod compliance;

/// Weekly plan generation and share summaries
pub mod planner;

/// Configuration validation errors
pub mod error;

pub use alerts::{build_alerts, MetricAlert, MetricAlertEvaluator};
pub use error::ConfigError;
pub use scheduling::{calculate_daily_slots, calculate_slots, describe_schedule};
