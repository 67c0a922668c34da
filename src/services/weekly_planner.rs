// ABOUTME: Weekly plan session tracking which activities the user has completed
// ABOUTME: Completion is session state only and feeds the shareable progress summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

use healthlive_core::errors::{AppError, AppResult};
use healthlive_core::models::{CompletedMap, UserHabits, WeeklyPlan};
use healthlive_intelligence::planner::{build_weekly_plan, completed_count, compose_share_message};

/// Plan generated from a set of habits plus per-activity completion flags
#[derive(Debug, Clone)]
pub struct WeeklyPlanner {
    habits: UserHabits,
    plan: WeeklyPlan,
    completed: CompletedMap,
}

impl WeeklyPlanner {
    /// Build the plan for `habits` with nothing completed
    #[must_use]
    pub fn new(habits: UserHabits) -> Self {
        let plan = build_weekly_plan(&habits);
        Self {
            habits,
            plan,
            completed: CompletedMap::new(),
        }
    }

    /// Habits the plan was generated from
    #[must_use]
    pub const fn habits(&self) -> &UserHabits {
        &self.habits
    }

    /// Generated plan
    #[must_use]
    pub const fn plan(&self) -> &WeeklyPlan {
        &self.plan
    }

    /// Whether activity `id` is marked completed
    #[must_use]
    pub fn is_completed(&self, activity_id: &str) -> bool {
        self.completed.get(activity_id).copied().unwrap_or(false)
    }

    /// Flip activity `id`; returns its new value
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the plan has no such activity
    pub fn toggle_activity(&mut self, activity_id: &str) -> AppResult<bool> {
        let exists = self
            .plan
            .days
            .iter()
            .flat_map(|day| &day.activities)
            .any(|activity| activity.id == activity_id);
        if !exists {
            return Err(AppError::not_found(format!("plan activity '{activity_id}'")));
        }
        let flag = self.completed.entry(activity_id.to_owned()).or_insert(false);
        *flag = !*flag;
        Ok(*flag)
    }

    /// `(completed, total)` activity counts
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        (
            completed_count(&self.plan.days, &self.completed),
            self.plan.total_activities(),
        )
    }

    /// Plain-text progress summary for sharing
    #[must_use]
    pub fn share_message(&self) -> String {
        compose_share_message(&self.plan, &self.completed, &self.habits)
    }
}
