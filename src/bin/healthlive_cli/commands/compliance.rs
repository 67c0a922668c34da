// ABOUTME: Compliance checklist commands for healthlive-cli
// ABOUTME: Shows today's and this week's tasks and toggles them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

use healthlive::errors::AppResult;
use healthlive::repositories::ComplianceRepository;
use healthlive::services::ComplianceChecklist;
use healthlive::storage::KeyValueStore;
use healthlive_core::models::{daily_compliance_tasks, weekly_compliance_tasks};
use std::sync::Arc;

use crate::helpers::display::display_checklist;

/// Print both checklists with completion
pub async fn show(store: Arc<dyn KeyValueStore>) {
    let checklist = ComplianceChecklist::load(ComplianceRepository::new(store)).await;
    print_checklist(&checklist).await;
}

/// Flip `task_id` in the daily or weekly checklist
pub async fn toggle(store: Arc<dyn KeyValueStore>, task_id: &str, weekly: bool) -> AppResult<()> {
    let checklist = ComplianceChecklist::load(ComplianceRepository::new(store)).await;
    let completed = if weekly {
        checklist.toggle_weekly(task_id).await?
    } else {
        checklist.toggle_daily(task_id).await?
    };
    println!(
        "{task_id}: {}",
        if completed { "completed" } else { "pending" }
    );
    print_checklist(&checklist).await;
    Ok(())
}

async fn print_checklist(checklist: &ComplianceChecklist) {
    let (day, week) = checklist.period().await;
    let status = checklist.status().await;
    display_checklist(
        &format!("Today ({day})"),
        &daily_compliance_tasks(),
        &status.daily,
        checklist.daily_completion().await,
    );
    display_checklist(
        &format!("This week ({week})"),
        &weekly_compliance_tasks(),
        &status.weekly,
        checklist.weekly_completion().await,
    );
}
