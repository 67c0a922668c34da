// ABOUTME: Compliance checklist models for daily and weekly habit tasks
// ABOUTME: Task definitions, per-period status maps, and the persisted history shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

use super::ReminderType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Task id to completion flag for one period
pub type TaskStatus = BTreeMap<String, bool>;

/// How often a checklist task resets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TaskCadence {
    /// Resets every calendar day
    Daily,
    /// Resets every ISO week
    Weekly,
}

/// A checklist item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceTask {
    /// Stable task identifier
    pub id: String,
    /// Short label
    pub label: String,
    /// What completing the task means
    pub description: String,
    /// Reset cadence
    pub cadence: TaskCadence,
    /// Reminder the task follows up on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_reminder: Option<ReminderType>,
}

impl ComplianceTask {
    fn daily(id: &str, label: &str, description: &str, reminder: ReminderType) -> Self {
        Self {
            id: id.to_owned(),
            label: label.to_owned(),
            description: description.to_owned(),
            cadence: TaskCadence::Daily,
            related_reminder: Some(reminder),
        }
    }

    fn weekly(id: &str, label: &str, description: &str) -> Self {
        Self {
            id: id.to_owned(),
            label: label.to_owned(),
            description: description.to_owned(),
            cadence: TaskCadence::Weekly,
            related_reminder: None,
        }
    }
}

/// Daily checklist, one task per reminder type
#[must_use]
pub fn daily_compliance_tasks() -> Vec<ComplianceTask> {
    vec![
        ComplianceTask::daily(
            "movement-check",
            "Active movement",
            "Check when you have stood up and moved at least once every hour.",
            ReminderType::Movement,
        ),
        ComplianceTask::daily(
            "hydration-check",
            "Hydration done",
            "Confirm you drank water at every scheduled reminder.",
            ReminderType::Hydration,
        ),
        ComplianceTask::daily(
            "measurements-check",
            "Measurements logged",
            "Mark whether you updated today's vital signs.",
            ReminderType::Measurements,
        ),
        ComplianceTask::daily(
            "exercise-check",
            "Routine completed",
            "Mark when you finished the planned exercises.",
            ReminderType::Exercise,
        ),
    ]
}

/// Weekly checklist
#[must_use]
pub fn weekly_compliance_tasks() -> Vec<ComplianceTask> {
    vec![
        ComplianceTask::weekly(
            "planning-review",
            "Week review",
            "Evaluate your progress and adjust the exercise plan.",
        ),
        ComplianceTask::weekly(
            "measurements-review",
            "Compare measurements",
            "Look at vital sign trends and discuss them with your specialist.",
        ),
        ComplianceTask::weekly(
            "selfcare-session",
            "Self-care session",
            "Treat yourself to a breathing, yoga, or guided relaxation session.",
        ),
    ]
}

/// Checklist state for the current day and week
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceStatus {
    /// Daily task flags for today
    pub daily: TaskStatus,
    /// Weekly task flags for this ISO week
    pub weekly: TaskStatus,
}

/// Persisted compliance history, keyed by day and ISO week
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCompliance {
    /// `"YYYY-MM-DD"` to daily flags
    #[serde(default)]
    pub daily: BTreeMap<String, TaskStatus>,
    /// `"YYYY-Www"` to weekly flags
    #[serde(default)]
    pub weekly: BTreeMap<String, TaskStatus>,
}
