// ABOUTME: Reminder notification planning tests with an in-memory platform scheduler
// ABOUTME: Covers next-occurrence rollover, request shape, and channel setup across syncs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{FixedOffset, TimeZone, Utc};
use healthlive::notifications::{
    build_notifications, next_occurrence, Importance, InMemoryNotificationScheduler,
    ReminderNotificationService, RepeatInterval,
};
use healthlive_core::constants::notifications::CHANNEL_ID;
use healthlive_core::models::{default_reminder_preferences, ReminderType};
use std::sync::Arc;

#[test]
fn test_next_occurrence_today_when_still_ahead() {
    let now = Utc.with_ymd_and_hms(2025, 3, 12, 10, 0, 0).unwrap();
    assert_eq!(
        next_occurrence(11 * 60, &now),
        Utc.with_ymd_and_hms(2025, 3, 12, 11, 0, 0).unwrap()
    );
}

#[test]
fn test_next_occurrence_rolls_to_tomorrow() {
    let now = Utc.with_ymd_and_hms(2025, 3, 12, 10, 0, 0).unwrap();
    assert_eq!(
        next_occurrence(9 * 60, &now),
        Utc.with_ymd_and_hms(2025, 3, 13, 9, 0, 0).unwrap()
    );
    // An instant equal to now has already passed
    assert_eq!(
        next_occurrence(10 * 60, &now),
        Utc.with_ymd_and_hms(2025, 3, 13, 10, 0, 0).unwrap()
    );
}

#[test]
fn test_next_occurrence_uses_wall_clock_of_zone() {
    let zone = FixedOffset::west_opt(5 * 3600).unwrap();
    let now = zone.with_ymd_and_hms(2025, 3, 12, 22, 30, 0).unwrap();
    let next = next_occurrence(8 * 60, &now);
    assert_eq!(next, zone.with_ymd_and_hms(2025, 3, 13, 8, 0, 0).unwrap());
    assert_eq!(next.with_timezone(&Utc), Utc.with_ymd_and_hms(2025, 3, 13, 13, 0, 0).unwrap());
}

#[test]
fn test_build_notifications_for_enabled_preferences() {
    let mut preferences = default_reminder_preferences();
    preferences[0].enabled = false;
    let now = common::fixed_now();

    let notifications = build_notifications(&preferences, &now);
    // hydration 7 + measurements 2 + exercise 1
    assert_eq!(notifications.len(), 10);
    assert!(notifications
        .iter()
        .all(|notification| notification.payload.reminder_id != ReminderType::Movement));

    let first = &notifications[0];
    assert_eq!(first.id, "hydration-0");
    assert_eq!(first.channel_id, CHANNEL_ID);
    assert_eq!(first.message, preferences[1].title);
    assert_eq!(first.subtitle, preferences[1].description);
    assert_eq!(first.payload.scheduled_time, "08:00");
    assert_eq!(first.sound_name, "calm.mp3");
    assert_eq!(first.repeat, RepeatInterval::Day);
    assert_eq!(first.importance, Importance::High);
    assert!(first.allow_while_idle);
    // 08:00 already passed at 10:00 UTC
    assert_eq!(first.fire_at, Utc.with_ymd_and_hms(2025, 3, 13, 8, 0, 0).unwrap());

    let exercise = notifications.last().unwrap();
    assert_eq!(exercise.id, "exercise-0");
    assert_eq!(exercise.sound_name, "default");
    assert_eq!(exercise.fire_at, Utc.with_ymd_and_hms(2025, 3, 12, 18, 0, 0).unwrap());
}

#[tokio::test]
async fn test_sync_replaces_schedule_and_configures_channel_once() {
    common::init_test_logging();
    let scheduler = InMemoryNotificationScheduler::new();
    let service = ReminderNotificationService::new(Arc::new(scheduler.clone()));
    let now = common::fixed_now();
    let mut preferences = default_reminder_preferences();

    let scheduled = service
        .sync_reminder_schedules_at(&preferences, &now)
        .await
        .unwrap();
    assert_eq!(scheduled, 13 + 7 + 2 + 1);
    assert_eq!(scheduler.scheduled().await.len(), scheduled);

    preferences[1].enabled = false;
    let rescheduled = service
        .sync_reminder_schedules_at(&preferences, &now)
        .await
        .unwrap();
    assert_eq!(rescheduled, 13 + 2 + 1);
    assert_eq!(scheduler.scheduled().await.len(), rescheduled);
    assert_eq!(scheduler.cancel_calls().await, 2);

    let channels = scheduler.channels().await;
    assert_eq!(channels.len(), 1);
    assert_eq!(channels[0].id, CHANNEL_ID);

    service.cancel_all().await.unwrap();
    assert!(scheduler.scheduled().await.is_empty());
}
