// ABOUTME: Core data models and types for the HealthLive wellness tracker
// ABOUTME: Re-exports reminder, metric, compliance, and planner data structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

//! # Data Models
//!
//! This module contains the core data structures used throughout HealthLive.
//!
//! ## Design Principles
//!
//! - **Storage compatible**: persisted shapes serialize with camelCase field names
//! - **Closed enumerations**: reminder types, tones, and metric kinds are enums
//!   so every match over them is checked for exhaustiveness
//! - **Immutable defaults**: default tables are produced by functions, never
//!   kept as mutable module state
//!
//! ## Core Models
//!
//! - `ReminderPreference`: one recurring habit reminder and its time window
//! - `MetricRecord<R>`: a timestamped reading of one metric kind
//! - `ComplianceStatus`: daily and weekly checklist completion
//! - `UserHabits` / `WeeklyPlan`: planner inputs and generated plan

mod compliance;
mod metric;
mod planner;
mod reminder;

// Reminder domain
pub use reminder::{
    default_reminder_preferences, NotificationTone, ReminderPreference,
    ReminderPreferenceUpdate, ReminderType,
};

// Metric domain
pub use metric::{
    round_to_hundredths, BloodPressure, BloodPressureRecord, BodyComposition,
    BodyCompositionRecord, Glucose, GlucoseContext, GlucoseRecord, LipidRecord, Lipids,
    MetricDraft, MetricKind, MetricReading, MetricRecord, MetricSeries, SyncPayload,
};

// Compliance domain
pub use compliance::{
    daily_compliance_tasks, weekly_compliance_tasks, ComplianceStatus, ComplianceTask,
    StoredCompliance, TaskCadence, TaskStatus,
};

// Planner domain
pub use planner::{
    ActivityCategory, CompletedMap, DailyPlan, ExerciseBestTime, ExerciseIntensity, PlanActivity,
    StressLevel, UserHabits, WeeklyPlan,
};
