// ABOUTME: Slot Scheduler computing the minutes of the day a recurring reminder fires
// ABOUTME: Handles windows that wrap midnight, frequency clamping, and human-readable summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

use super::time::{format_minutes_as_time, normalize_frequency_minutes, parse_time_string};
use healthlive_core::constants::scheduling::{
    FALLBACK_START_MINUTES, MAX_REMINDERS_PER_DAY, MINUTES_PER_DAY,
};
use healthlive_core::models::{ReminderPreference, ReminderType};

/// Compiled-in default preference for a reminder type
#[must_use]
pub fn default_preference(id: ReminderType) -> ReminderPreference {
    ReminderPreference::default_for(id)
}

/// Minutes of the day at which a reminder fires
///
/// The first slot is always `start`. Subsequent slots step by
/// `frequency_minutes` while the elapsed time stays within the window, which
/// wraps past midnight when `end < start`. The result holds between 1 and
/// `MAX_REMINDERS_PER_DAY` entries. A frequency of zero, a frequency of a
/// whole day or more, and an empty window all yield the single start slot.
///
/// ```
/// use healthlive_intelligence::scheduling::calculate_slots;
///
/// // 22:00 to 02:00 every hour
/// assert_eq!(calculate_slots(1320, 120, 60), vec![1320, 1380, 0, 60, 120]);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn calculate_slots(start: u16, end: u16, frequency_minutes: u32) -> Vec<u16> {
    let start = u32::from(start) % MINUTES_PER_DAY;
    let end = u32::from(end) % MINUTES_PER_DAY;
    let mut slots = vec![start as u16];

    let window_range = if start <= end {
        end - start
    } else {
        MINUTES_PER_DAY - (start - end)
    };

    if frequency_minutes == 0 || frequency_minutes >= MINUTES_PER_DAY || window_range == 0 {
        return slots;
    }

    let max_iterations = MINUTES_PER_DAY.div_ceil(frequency_minutes);
    let mut elapsed = frequency_minutes;
    let mut iterations = 0;
    while elapsed <= window_range && iterations < max_iterations {
        slots.push(((start + elapsed) % MINUTES_PER_DAY) as u16);
        elapsed += frequency_minutes;
        iterations += 1;
    }

    slots.truncate(MAX_REMINDERS_PER_DAY);
    slots
}

/// Slot schedule for a stored preference
///
/// Times that do not parse fall back to the reminder type's defaults, then to
/// 08:00 for the start and to the start for the end. The frequency is
/// normalized against the type's default frequency.
#[must_use]
pub fn calculate_daily_slots(preference: &ReminderPreference) -> Vec<u16> {
    let defaults = default_preference(preference.id);
    let start = parse_time_string(&preference.start_time)
        .or_else(|| parse_time_string(&defaults.start_time))
        .unwrap_or(FALLBACK_START_MINUTES);
    let end = parse_time_string(&preference.end_time)
        .or_else(|| parse_time_string(&defaults.end_time))
        .unwrap_or(start);
    let frequency = effective_frequency(preference);

    calculate_slots(start, end, frequency)
}

/// Slot schedule rendered as `"HH:MM"` strings
#[must_use]
pub fn daily_slot_times(preference: &ReminderPreference) -> Vec<String> {
    calculate_daily_slots(preference)
        .into_iter()
        .map(|slot| format_minutes_as_time(i64::from(slot)))
        .collect()
}

/// One-line summary of when a reminder fires
#[must_use]
pub fn describe_schedule(preference: &ReminderPreference) -> String {
    if !preference.enabled {
        return "Reminder temporarily disabled".to_owned();
    }

    let slots = calculate_daily_slots(preference);
    let repeat_every = effective_frequency(preference);
    let (Some(first), Some(last)) = (slots.first(), slots.last()) else {
        return "Reminder temporarily disabled".to_owned();
    };
    let first = format_minutes_as_time(i64::from(*first));

    if slots.len() == 1 {
        if repeat_every >= MINUTES_PER_DAY {
            return format!("Every day at {first}");
        }
        return format!("From {first} every {repeat_every} minutes");
    }

    let last = format_minutes_as_time(i64::from(*last));
    format!("From {first} to {last} every {repeat_every} minutes")
}

fn effective_frequency(preference: &ReminderPreference) -> u32 {
    normalize_frequency_minutes(
        f64::from(preference.frequency_minutes),
        default_preference(preference.id).frequency_minutes,
    )
}
