// ABOUTME: Wall-clock time helpers for reminder windows expressed as "HH:MM" strings
// ABOUTME: Parses, formats, and normalizes minute-of-day values and repeat frequencies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

use healthlive_core::constants::scheduling::{MIN_FREQUENCY_MINUTES, MINUTES_PER_DAY};
use regex::Regex;
use std::sync::LazyLock;

/// Accepts `H:MM` or `HH:MM` with hours 0-23 and minutes 00-59
static TIME_FORMAT: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^([01]?\d|2[0-3]):([0-5]\d)$").ok());

/// Parse a trimmed `"HH:MM"` string into minutes after midnight
///
/// Returns `None` for empty input or anything outside the 24 hour clock.
///
/// ```
/// use healthlive_intelligence::scheduling::parse_time_string;
///
/// assert_eq!(parse_time_string(" 7:05 "), Some(425));
/// assert_eq!(parse_time_string("24:00"), None);
/// ```
#[must_use]
pub fn parse_time_string(value: &str) -> Option<u16> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let captures = TIME_FORMAT.as_ref()?.captures(trimmed)?;
    let hours: u16 = captures.get(1)?.as_str().parse().ok()?;
    let minutes: u16 = captures.get(2)?.as_str().parse().ok()?;
    Some(hours * 60 + minutes)
}

/// Format minutes after midnight as zero-padded `"HH:MM"`
///
/// Values outside a single day wrap, so negative offsets and overflow past
/// midnight both land on the expected clock time.
#[must_use]
pub fn format_minutes_as_time(total_minutes: i64) -> String {
    let normalized = total_minutes.rem_euclid(i64::from(MINUTES_PER_DAY));
    format!("{:02}:{:02}", normalized / 60, normalized % 60)
}

/// Canonical `"HH:MM"` form of `raw`, or `fallback` when it does not parse
#[must_use]
pub fn normalize_time_string(raw: &str, fallback: &str) -> String {
    parse_time_string(raw).map_or_else(
        || fallback.to_owned(),
        |minutes| format_minutes_as_time(i64::from(minutes)),
    )
}

/// Clamp a repeat frequency into `[15, 1440]` minutes
///
/// Non-finite and non-positive values are replaced by `fallback`; everything
/// else in range is rounded to the nearest minute.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn normalize_frequency_minutes(value: f64, fallback: u32) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return fallback;
    }
    if value < f64::from(MIN_FREQUENCY_MINUTES) {
        return MIN_FREQUENCY_MINUTES;
    }
    if value > f64::from(MINUTES_PER_DAY) {
        return MINUTES_PER_DAY;
    }
    value.round() as u32
}
