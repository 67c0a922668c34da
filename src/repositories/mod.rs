// ABOUTME: Repositories mapping domain state onto key-value storage slots
// ABOUTME: Reminder preferences, metric records and drafts, the sync queue, and compliance history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

//! # Repositories
//!
//! Each repository owns one or more storage keys and the JSON shape stored
//! under them. Corrupt stored data is logged and replaced by defaults on read;
//! it is never surfaced to callers as an error.

mod compliance;
mod monitoring;
mod reminder_preferences;
mod sync_queue;

pub use compliance::ComplianceRepository;
pub use monitoring::{create_metric_id, MonitoringRepository};
pub use reminder_preferences::{sanitize_preference, ReminderPreferencesRepository};
pub use sync_queue::SyncQueue;
