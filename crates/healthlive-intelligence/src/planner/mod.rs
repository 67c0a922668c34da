// ABOUTME: Weekly planner module combining the plan generator and the share summary
// ABOUTME: Re-exports build_weekly_plan and compose_share_message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

mod share_summary;
mod weekly_plan;

pub use share_summary::{compose_share_message, completed_count, pending_by_day};
pub use weekly_plan::{build_weekly_plan, DAYS_OF_WEEK};
