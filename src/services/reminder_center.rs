// ABOUTME: Reminder preference state with optimistic updates and notification resync
// ABOUTME: Keeps the list in display order and reschedules notifications after every change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

use crate::logging::AppLogger;
use crate::notifications::ReminderNotificationService;
use crate::repositories::{sanitize_preference, ReminderPreferencesRepository};
use healthlive_core::errors::{AppError, AppResult};
use healthlive_core::models::{ReminderPreference, ReminderPreferenceUpdate, ReminderType};
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// In-memory reminder preferences backed by storage and the notification platform
pub struct ReminderCenter {
    repository: ReminderPreferencesRepository,
    notifications: ReminderNotificationService,
    preferences: RwLock<Vec<ReminderPreference>>,
}

impl ReminderCenter {
    /// Load preferences from storage and schedule their notifications
    ///
    /// A failed notification sync is logged; the center is usable regardless.
    pub async fn load(
        repository: ReminderPreferencesRepository,
        notifications: ReminderNotificationService,
    ) -> Self {
        let mut preferences = repository.load().await;
        sort_for_display(&mut preferences);
        let center = Self {
            repository,
            notifications,
            preferences: RwLock::new(preferences),
        };
        center.resync().await;
        center
    }

    /// Snapshot of the current preferences in display order
    pub async fn preferences(&self) -> Vec<ReminderPreference> {
        self.preferences.read().await.clone()
    }

    /// Current preference for `id`
    pub async fn preference(&self, id: ReminderType) -> Option<ReminderPreference> {
        self.preferences
            .read()
            .await
            .iter()
            .find(|preference| preference.id == id)
            .cloned()
    }

    /// Re-read preferences from storage, discarding unsaved state
    pub async fn reload(&self) {
        let mut loaded = self.repository.load().await;
        sort_for_display(&mut loaded);
        *self.preferences.write().await = loaded;
        self.resync().await;
    }

    /// Apply `update` to the preference `id`
    ///
    /// The sanitized result is kept in memory before it is written. A storage
    /// or notification failure is logged and the in-memory update stands.
    ///
    /// # Errors
    ///
    /// Returns an error only if no preference with `id` is loaded
    pub async fn update_preference(
        &self,
        id: ReminderType,
        update: &ReminderPreferenceUpdate,
    ) -> AppResult<ReminderPreference> {
        let mut guard = self.preferences.write().await;
        let Some(position) = guard.iter().position(|preference| preference.id == id) else {
            return Err(AppError::not_found(format!("reminder preference '{id}'")));
        };
        let mut edited = guard[position].clone();
        update.apply_to(&mut edited);
        let edited = sanitize_preference(edited);
        guard[position] = edited.clone();
        sort_for_display(&mut guard);
        let snapshot = guard.clone();
        drop(guard);

        debug!(reminder = %id, enabled = edited.enabled, "Updated reminder preference");

        if let Err(error) = self.repository.save(&snapshot).await {
            AppLogger::log_persist_failure("reminder_preferences", &error);
        }
        self.sync_with(&snapshot).await;
        Ok(edited)
    }

    /// Reschedule notifications for the current preferences
    ///
    /// # Errors
    ///
    /// Returns an error if the notification platform rejects a request
    pub async fn sync_notifications(&self) -> AppResult<usize> {
        let snapshot = self.preferences().await;
        self.notifications.sync_reminder_schedules(&snapshot).await
    }

    async fn resync(&self) {
        let snapshot = self.preferences().await;
        self.sync_with(&snapshot).await;
    }

    async fn sync_with(&self, preferences: &[ReminderPreference]) {
        if let Err(error) = self.notifications.sync_reminder_schedules(preferences).await {
            warn!(error = %error, "Error synchronizing reminder notifications");
        }
    }
}

fn sort_for_display(preferences: &mut [ReminderPreference]) {
    preferences.sort_by_key(|preference| preference.id.display_order());
}
