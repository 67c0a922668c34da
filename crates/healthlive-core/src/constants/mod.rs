// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Storage keys, scheduling limits, and notification identifiers for HealthLive
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat namespace.

/// Key-value storage slots
pub mod storage_keys {
    /// Flat list of reminder preferences
    pub const REMINDER_PREFERENCES: &str = "@healthlive:reminder-preferences";
    /// Daily/weekly compliance checklist state
    pub const REMINDER_COMPLIANCE: &str = "@healthlive:reminder-compliance";
    /// Blood pressure records
    pub const BLOOD_PRESSURE: &str = "@healthlive/metrics/blood-pressure";
    /// Glucose records
    pub const GLUCOSE: &str = "@healthlive/metrics/glucose";
    /// Lipid panel records
    pub const LIPIDS: &str = "@healthlive/metrics/lipids";
    /// Body composition records
    pub const BODY_COMPOSITION: &str = "@healthlive/metrics/body-composition";
    /// Records waiting for a sync that never runs
    pub const SYNC_QUEUE: &str = "@healthlive/metrics/sync-queue";
    /// Suffix appended to a metric key to address its draft
    pub const DRAFT_SUFFIX: &str = ":draft";
}

/// Reminder scheduling limits
pub mod scheduling {
    /// Minutes in one calendar day
    pub const MINUTES_PER_DAY: u32 = 24 * 60;
    /// Smallest accepted repeat frequency
    pub const MIN_FREQUENCY_MINUTES: u32 = 15;
    /// Upper bound on notifications generated for one reminder per day
    pub const MAX_REMINDERS_PER_DAY: usize = 24;
    /// Start of the window when neither the stored nor default start parses (08:00)
    pub const FALLBACK_START_MINUTES: u16 = 8 * 60;
}

/// Local notification platform identifiers
pub mod notifications {
    /// Channel all reminder notifications are posted to
    pub const CHANNEL_ID: &str = "healthlive-reminders";
    /// Human-readable channel name
    pub const CHANNEL_NAME: &str = "Healthy habit reminders";
    /// Channel description shown in system settings
    pub const CHANNEL_DESCRIPTION: &str =
        "Notifications for hydration, movement, and planned routines.";
    /// Title used for every reminder notification
    pub const NOTIFICATION_TITLE: &str = "Health Live";
}

/// Service identification for structured logging
pub mod service_names {
    /// Main application service name
    pub const HEALTHLIVE: &str = "healthlive";
    /// CLI service name
    pub const HEALTHLIVE_CLI: &str = "healthlive-cli";
}
