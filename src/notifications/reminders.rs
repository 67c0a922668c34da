// ABOUTME: Reminder notification service scheduling daily notifications for every reminder slot
// ABOUTME: Configures the reminder channel once, then cancels and reschedules on every sync
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

use super::{
    Importance, NotificationChannel, NotificationPayload, NotificationScheduler, RepeatInterval,
    ScheduledNotification,
};
use crate::logging::AppLogger;
use chrono::{DateTime, Days, Local, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};
use healthlive_core::constants::notifications::{CHANNEL_ID, NOTIFICATION_TITLE};
use healthlive_core::errors::{AppError, AppResult};
use healthlive_core::models::ReminderPreference;
use healthlive_intelligence::scheduling::{calculate_daily_slots, format_minutes_as_time};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, info};

/// Next wall-clock instant at `minutes` after midnight, strictly after `now`
///
/// Uses today's date in `now`'s time zone and rolls to tomorrow when that
/// instant has already passed. A local time skipped by a DST gap moves
/// forward one hour.
#[must_use]
pub fn next_occurrence<Tz: TimeZone>(minutes: u16, now: &DateTime<Tz>) -> DateTime<Tz> {
    let today = now.date_naive();
    let candidate = at_local_time(&now.timezone(), today, minutes);
    if candidate > *now {
        return candidate;
    }
    let tomorrow = today.checked_add_days(Days::new(1)).unwrap_or(today);
    at_local_time(&now.timezone(), tomorrow, minutes)
}

fn at_local_time<Tz: TimeZone>(tz: &Tz, date: NaiveDate, minutes: u16) -> DateTime<Tz> {
    let minutes = u32::from(minutes) % (24 * 60);
    let time = NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0).unwrap_or_default();
    let naive = date.and_time(time);
    tz.from_local_datetime(&naive)
        .earliest()
        .or_else(|| tz.from_local_datetime(&(naive + TimeDelta::hours(1))).earliest())
        .unwrap_or_else(|| tz.from_utc_datetime(&naive))
}

/// Notification requests for every slot of every enabled preference
#[must_use]
pub fn build_notifications<Tz: TimeZone>(
    preferences: &[ReminderPreference],
    now: &DateTime<Tz>,
) -> Vec<ScheduledNotification> {
    preferences
        .iter()
        .filter(|preference| preference.enabled)
        .flat_map(|preference| {
            calculate_daily_slots(preference)
                .into_iter()
                .enumerate()
                .map(move |(index, minutes)| ScheduledNotification {
                    id: format!("{}-{index}", preference.id),
                    channel_id: CHANNEL_ID.to_owned(),
                    title: NOTIFICATION_TITLE.to_owned(),
                    message: preference.title.clone(),
                    subtitle: preference.description.clone(),
                    fire_at: next_occurrence(minutes, now).with_timezone(&Utc),
                    repeat: RepeatInterval::Day,
                    allow_while_idle: true,
                    play_sound: true,
                    sound_name: preference.sound.sound_name(),
                    importance: Importance::High,
                    payload: NotificationPayload {
                        reminder_id: preference.id,
                        scheduled_time: format_minutes_as_time(i64::from(minutes)),
                    },
                })
        })
        .collect()
}

/// Keeps platform notifications in step with reminder preferences
pub struct ReminderNotificationService {
    scheduler: Arc<dyn NotificationScheduler>,
    channel_ready: OnceCell<()>,
}

impl ReminderNotificationService {
    /// Create a service driving `scheduler`
    #[must_use]
    pub fn new(scheduler: Arc<dyn NotificationScheduler>) -> Self {
        Self {
            scheduler,
            channel_ready: OnceCell::new(),
        }
    }

    /// Register the reminder channel once per service instance
    ///
    /// # Errors
    ///
    /// Returns an error if the platform rejects the channel; a later call retries
    pub async fn configure(&self) -> AppResult<()> {
        self.channel_ready
            .get_or_try_init(|| async {
                let created = self
                    .scheduler
                    .create_channel(&NotificationChannel::reminders())
                    .await?;
                if !created {
                    debug!(channel = CHANNEL_ID, "Reusing existing notification channel");
                }
                Ok::<(), AppError>(())
            })
            .await?;
        Ok(())
    }

    /// Replace every pending notification with the schedule for `preferences`
    ///
    /// Returns the number of notifications scheduled.
    ///
    /// # Errors
    ///
    /// Returns an error if any platform call fails
    pub async fn sync_reminder_schedules_at<Tz: TimeZone>(
        &self,
        preferences: &[ReminderPreference],
        now: &DateTime<Tz>,
    ) -> AppResult<usize> {
        self.configure().await?;
        self.scheduler.cancel_all().await?;

        let notifications = build_notifications(preferences, now);
        let scheduled = notifications.len();
        for notification in notifications {
            self.scheduler.schedule(notification).await?;
        }

        let enabled = preferences.iter().filter(|preference| preference.enabled).count();
        AppLogger::log_notification_sync(enabled, scheduled);
        Ok(scheduled)
    }

    /// Resynchronize relative to the device's local clock
    ///
    /// # Errors
    ///
    /// Returns an error if any platform call fails
    pub async fn sync_reminder_schedules(
        &self,
        preferences: &[ReminderPreference],
    ) -> AppResult<usize> {
        self.sync_reminder_schedules_at(preferences, &Local::now()).await
    }

    /// Cancel every pending reminder notification
    ///
    /// # Errors
    ///
    /// Returns an error if the platform call fails
    pub async fn cancel_all(&self) -> AppResult<()> {
        info!("Cancelling all reminder notifications");
        self.scheduler.cancel_all().await
    }
}
