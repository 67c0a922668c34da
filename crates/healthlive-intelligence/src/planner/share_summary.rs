// ABOUTME: Shareable plain-text summary of weekly plan progress
// ABOUTME: Counts completed activities and lists what is still pending per day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

use healthlive_core::models::{CompletedMap, DailyPlan, UserHabits, WeeklyPlan};

fn is_completed(completed: &CompletedMap, activity_id: &str) -> bool {
    completed.get(activity_id).copied().unwrap_or(false)
}

/// Number of plan activities marked completed
#[must_use]
pub fn completed_count(days: &[DailyPlan], completed: &CompletedMap) -> usize {
    days.iter()
        .flat_map(|day| &day.activities)
        .filter(|activity| is_completed(completed, &activity.id))
        .count()
}

/// `"{day}: {titles}"` for every day with unfinished activities
#[must_use]
pub fn pending_by_day(days: &[DailyPlan], completed: &CompletedMap) -> Vec<String> {
    days.iter()
        .filter_map(|day| {
            let pending: Vec<&str> = day
                .activities
                .iter()
                .filter(|activity| !is_completed(completed, &activity.id))
                .map(|activity| activity.title.as_str())
                .collect();
            if pending.is_empty() {
                None
            } else {
                Some(format!("{}: {}", day.day, pending.join(", ")))
            }
        })
        .collect()
}

/// Message suitable for sharing with a care team
#[must_use]
pub fn compose_share_message(
    plan: &WeeklyPlan,
    completed: &CompletedMap,
    habits: &UserHabits,
) -> String {
    let total_activities = plan.total_activities();
    let done = completed_count(&plan.days, completed);
    let pending = pending_by_day(&plan.days, completed);

    let header = format!("Weekly summary for {}", habits.patient_name);
    let progress_line = format!("Progress: {done}/{total_activities} activities completed.");
    let recommendations = plan
        .recommendations
        .iter()
        .map(|recommendation| format!("• {recommendation}"))
        .collect::<Vec<_>>()
        .join("\n");
    let pending_section = if pending.is_empty() {
        "All activities were completed.".to_owned()
    } else {
        format!("Pending to watch:\n{}", pending.join("\n"))
    };

    format!(
        "{header}\n{}\n{progress_line}\n\nKey recommendations:\n{recommendations}\n\n{pending_section}",
        plan.cardiologist_summary
    )
}
