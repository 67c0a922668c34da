// ABOUTME: Local notification platform abstraction for habit reminders
// ABOUTME: Channel and schedule request types, the scheduler trait, and an in-memory recorder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

/// Turns reminder preferences into scheduled platform notifications
pub mod reminders;

pub use reminders::{build_notifications, next_occurrence, ReminderNotificationService};

use chrono::{DateTime, Utc};
use healthlive_core::constants::notifications::{
    CHANNEL_DESCRIPTION, CHANNEL_ID, CHANNEL_NAME,
};
use healthlive_core::errors::AppResult;
use healthlive_core::models::ReminderType;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Delivery priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    /// Normal priority
    Default,
    /// Heads-up priority
    High,
}

/// How a scheduled notification repeats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatInterval {
    /// Fires once
    Never,
    /// Fires every day at the same wall-clock time
    Day,
}

/// Notification channel definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationChannel {
    /// Channel identifier
    pub id: String,
    /// Name shown in system settings
    pub name: String,
    /// Description shown in system settings
    pub description: String,
    /// Priority of notifications on this channel
    pub importance: Importance,
    /// Whether notifications play a sound
    pub play_sound: bool,
    /// Sound resource
    pub sound_name: String,
    /// Whether notifications vibrate
    pub vibrate: bool,
}

impl NotificationChannel {
    /// The single channel used for habit reminders
    #[must_use]
    pub fn reminders() -> Self {
        Self {
            id: CHANNEL_ID.to_owned(),
            name: CHANNEL_NAME.to_owned(),
            description: CHANNEL_DESCRIPTION.to_owned(),
            importance: Importance::High,
            play_sound: true,
            sound_name: "default".to_owned(),
            vibrate: true,
        }
    }
}

/// Data attached to a reminder notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPayload {
    /// Reminder the notification belongs to
    pub reminder_id: ReminderType,
    /// Slot time, `"HH:MM"`
    pub scheduled_time: String,
}

/// A request to show a notification at a future instant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledNotification {
    /// `"{reminder id}-{slot index}"`
    pub id: String,
    /// Target channel
    pub channel_id: String,
    /// Title line
    pub title: String,
    /// Body text
    pub message: String,
    /// Secondary text
    pub subtitle: String,
    /// First delivery instant
    pub fire_at: DateTime<Utc>,
    /// Repeat rule
    pub repeat: RepeatInterval,
    /// Deliver even in low-power idle modes
    pub allow_while_idle: bool,
    /// Play the sound
    pub play_sound: bool,
    /// `"default"` or `"{tone}.mp3"`
    pub sound_name: String,
    /// Priority
    pub importance: Importance,
    /// Attached data
    pub payload: NotificationPayload,
}

/// Binding to the device's local notification platform
#[async_trait::async_trait]
pub trait NotificationScheduler: Send + Sync {
    /// Register a channel; returns `false` when it already existed
    ///
    /// # Errors
    ///
    /// Returns an error if the platform rejects the channel
    async fn create_channel(&self, channel: &NotificationChannel) -> AppResult<bool>;

    /// Cancel every pending notification created by the app
    ///
    /// # Errors
    ///
    /// Returns an error if the platform call fails
    async fn cancel_all(&self) -> AppResult<()>;

    /// Schedule one notification
    ///
    /// # Errors
    ///
    /// Returns an error if the platform rejects the request
    async fn schedule(&self, notification: ScheduledNotification) -> AppResult<()>;
}

#[derive(Debug, Default)]
struct RecorderState {
    channels: Vec<NotificationChannel>,
    scheduled: Vec<ScheduledNotification>,
    cancel_calls: usize,
}

/// Scheduler that records requests instead of showing notifications
///
/// Used by the CLI and tests. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNotificationScheduler {
    state: Arc<RwLock<RecorderState>>,
}

impl InMemoryNotificationScheduler {
    /// Create an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifications currently pending
    pub async fn scheduled(&self) -> Vec<ScheduledNotification> {
        self.state.read().await.scheduled.clone()
    }

    /// Channels registered so far
    pub async fn channels(&self) -> Vec<NotificationChannel> {
        self.state.read().await.channels.clone()
    }

    /// Number of `cancel_all` calls
    pub async fn cancel_calls(&self) -> usize {
        self.state.read().await.cancel_calls
    }
}

#[async_trait::async_trait]
impl NotificationScheduler for InMemoryNotificationScheduler {
    async fn create_channel(&self, channel: &NotificationChannel) -> AppResult<bool> {
        let mut state = self.state.write().await;
        if state.channels.iter().any(|existing| existing.id == channel.id) {
            return Ok(false);
        }
        state.channels.push(channel.clone());
        drop(state);
        Ok(true)
    }

    async fn cancel_all(&self) -> AppResult<()> {
        let mut state = self.state.write().await;
        state.scheduled.clear();
        state.cancel_calls += 1;
        drop(state);
        Ok(())
    }

    async fn schedule(&self, notification: ScheduledNotification) -> AppResult<()> {
        let mut state = self.state.write().await;
        state
            .scheduled
            .retain(|existing| existing.id != notification.id);
        state.scheduled.push(notification);
        drop(state);
        Ok(())
    }
}
