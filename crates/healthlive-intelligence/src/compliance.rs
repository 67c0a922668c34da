// ABOUTME: Compliance checklist computations for daily and weekly habit tasks
// ABOUTME: Calendar day and ISO week keys, empty status maps, toggling, and completion percentages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

use chrono::{Datelike, NaiveDate};
use healthlive_core::models::{
    daily_compliance_tasks, weekly_compliance_tasks, ComplianceStatus, StoredCompliance,
    TaskStatus,
};
use std::iter;

/// Calendar day key, `"YYYY-MM-DD"`
#[must_use]
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// ISO-8601 week key, `"YYYY-Www"`
///
/// The year is the ISO week-year, so 2021-01-03 belongs to `"2020-W53"`.
#[must_use]
pub fn iso_week_key(date: NaiveDate) -> String {
    let week = date.iso_week();
    format!("{}-W{:02}", week.year(), week.week())
}

/// Status map with every task marked not completed
#[must_use]
pub fn empty_status<'a>(task_ids: impl IntoIterator<Item = &'a str>) -> TaskStatus {
    task_ids
        .into_iter()
        .map(|id| (id.to_owned(), false))
        .collect()
}

/// Empty daily and weekly status for the built-in task lists
#[must_use]
pub fn empty_compliance_status() -> ComplianceStatus {
    let daily = daily_compliance_tasks();
    let weekly = weekly_compliance_tasks();
    ComplianceStatus {
        daily: empty_status(daily.iter().map(|task| task.id.as_str())),
        weekly: empty_status(weekly.iter().map(|task| task.id.as_str())),
    }
}

/// Status for the given day and week from stored history
///
/// A missing period falls back to the empty status for that cadence.
#[must_use]
pub fn resolve_status(stored: &StoredCompliance, day: &str, week: &str) -> ComplianceStatus {
    let empty = empty_compliance_status();
    ComplianceStatus {
        daily: stored.daily.get(day).cloned().unwrap_or(empty.daily),
        weekly: stored.weekly.get(week).cloned().unwrap_or(empty.weekly),
    }
}

/// History holding only the given day and week
#[must_use]
pub fn current_period_snapshot(status: &ComplianceStatus, day: &str, week: &str) -> StoredCompliance {
    StoredCompliance {
        daily: iter::once((day.to_owned(), status.daily.clone())).collect(),
        weekly: iter::once((week.to_owned(), status.weekly.clone())).collect(),
    }
}

/// Flip a task flag, treating a missing task as not completed
///
/// Returns the new value.
pub fn toggle_task(status: &mut TaskStatus, task_id: &str) -> bool {
    let flag = status.entry(task_id.to_owned()).or_insert(false);
    *flag = !*flag;
    *flag
}

/// Percentage of completed tasks, rounded to the nearest integer
///
/// A `total_tasks` of zero is treated as one.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn completion_percentage(status: &TaskStatus, total_tasks: usize) -> u32 {
    let achieved = status.values().filter(|done| **done).count();
    let total = total_tasks.max(1);
    (achieved as f64 / total as f64 * 100.0).round() as u32
}
