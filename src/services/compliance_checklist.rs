// ABOUTME: Compliance checklist state for the current day and ISO week
// ABOUTME: Toggles tasks optimistically and persists the current period, logging write failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

use crate::logging::AppLogger;
use crate::repositories::ComplianceRepository;
use chrono::{Local, NaiveDate};
use healthlive_core::errors::{AppError, AppResult};
use healthlive_core::models::{
    daily_compliance_tasks, weekly_compliance_tasks, ComplianceStatus, ComplianceTask, TaskCadence,
};
use healthlive_intelligence::compliance::{
    completion_percentage, day_key, iso_week_key, toggle_task,
};
use tokio::sync::RwLock;
use tracing::debug;

struct ChecklistState {
    day_key: String,
    week_key: String,
    status: ComplianceStatus,
}

/// Checklist bound to the day and week it was loaded for
pub struct ComplianceChecklist {
    repository: ComplianceRepository,
    state: RwLock<ChecklistState>,
}

impl ComplianceChecklist {
    /// Load the checklist for today in the local time zone
    pub async fn load(repository: ComplianceRepository) -> Self {
        Self::load_for(repository, Local::now().date_naive()).await
    }

    /// Load the checklist for the day and ISO week containing `date`
    pub async fn load_for(repository: ComplianceRepository, date: NaiveDate) -> Self {
        let day_key = day_key(date);
        let week_key = iso_week_key(date);
        let status = repository.load(&day_key, &week_key).await;
        Self {
            repository,
            state: RwLock::new(ChecklistState {
                day_key,
                week_key,
                status,
            }),
        }
    }

    /// `("YYYY-MM-DD", "YYYY-Www")` of the loaded period
    pub async fn period(&self) -> (String, String) {
        let state = self.state.read().await;
        (state.day_key.clone(), state.week_key.clone())
    }

    /// Snapshot of both checklists
    pub async fn status(&self) -> ComplianceStatus {
        self.state.read().await.status.clone()
    }

    /// Percentage of daily tasks completed
    pub async fn daily_completion(&self) -> u32 {
        let total = daily_compliance_tasks().len();
        completion_percentage(&self.state.read().await.status.daily, total)
    }

    /// Percentage of weekly tasks completed
    pub async fn weekly_completion(&self) -> u32 {
        let total = weekly_compliance_tasks().len();
        completion_percentage(&self.state.read().await.status.weekly, total)
    }

    /// Flip a daily task; returns its new value
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if `task_id` is not a daily task
    pub async fn toggle_daily(&self, task_id: &str) -> AppResult<bool> {
        self.toggle(TaskCadence::Daily, task_id).await
    }

    /// Flip a weekly task; returns its new value
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if `task_id` is not a weekly task
    pub async fn toggle_weekly(&self, task_id: &str) -> AppResult<bool> {
        self.toggle(TaskCadence::Weekly, task_id).await
    }

    async fn toggle(&self, cadence: TaskCadence, task_id: &str) -> AppResult<bool> {
        let tasks = match cadence {
            TaskCadence::Daily => daily_compliance_tasks(),
            TaskCadence::Weekly => weekly_compliance_tasks(),
        };
        if !is_known_task(&tasks, task_id) {
            return Err(AppError::not_found(format!("compliance task '{task_id}'")));
        }

        let mut state = self.state.write().await;
        let target = match cadence {
            TaskCadence::Daily => &mut state.status.daily,
            TaskCadence::Weekly => &mut state.status.weekly,
        };
        let completed = toggle_task(target, task_id);
        let snapshot = state.status.clone();
        let day_key = state.day_key.clone();
        let week_key = state.week_key.clone();
        drop(state);

        debug!(task = task_id, completed, "Toggled compliance task");

        if let Err(error) = self.repository.save(&snapshot, &day_key, &week_key).await {
            AppLogger::log_persist_failure("compliance", &error);
        }
        Ok(completed)
    }
}

fn is_known_task(tasks: &[ComplianceTask], task_id: &str) -> bool {
    tasks.iter().any(|task| task.id == task_id)
}
