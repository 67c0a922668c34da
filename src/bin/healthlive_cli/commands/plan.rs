// ABOUTME: Weekly plan commands for healthlive-cli
// ABOUTME: Prints the plan built from default habits and its shareable summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

use healthlive::errors::AppResult;
use healthlive::services::WeeklyPlanner;
use healthlive_core::models::UserHabits;

use crate::helpers::display::display_plan;

/// Print the weekly plan
pub fn show() {
    let planner = WeeklyPlanner::new(UserHabits::default());
    display_plan(&planner);
}

/// Print the share message with `completed` activities ticked
pub fn share(completed: &[String]) -> AppResult<()> {
    let mut planner = WeeklyPlanner::new(UserHabits::default());
    for activity_id in completed {
        planner.toggle_activity(activity_id)?;
    }
    println!("{}", planner.share_message());
    Ok(())
}
