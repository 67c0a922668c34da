// ABOUTME: Reminder scheduling module exposing time helpers and the Slot Scheduler
// ABOUTME: All functions are pure and total over their inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

//! Reminder scheduling
//!
//! Slots are minutes after local midnight (`0..1440`). Notification planning
//! turns them into concrete instants.

mod slots;
mod time;

pub use slots::{
    calculate_daily_slots, calculate_slots, daily_slot_times, default_preference,
    describe_schedule,
};
pub use time::{
    format_minutes_as_time, normalize_frequency_minutes, normalize_time_string, parse_time_string,
};
