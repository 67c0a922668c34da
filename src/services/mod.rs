// ABOUTME: Stateful services composing repositories, notifications, and pure computations
// ABOUTME: Apply changes in memory first, then persist and log failures without surfacing them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

//! Application service layer
//!
//! Services own the in-memory view a front end renders. Updates follow a
//! two-phase pattern: the change is applied to memory, then persisted, and a
//! failed write is logged while the in-memory state keeps the update.

/// Daily and weekly compliance checklist with completion percentages
pub mod compliance_checklist;

/// Metric entry, history, drafts, and alerts
pub mod metric_records;

/// Reminder preferences kept in step with scheduled notifications
pub mod reminder_center;

/// Weekly plan with activity completion and share summary
pub mod weekly_planner;

pub use compliance_checklist::ComplianceChecklist;
pub use metric_records::MetricRecordsService;
pub use reminder_center::ReminderCenter;
pub use weekly_planner::WeeklyPlanner;
