// ABOUTME: Reminder commands for healthlive-cli
// ABOUTME: Lists schedules, applies edits, and shows the notifications a sync would schedule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

use healthlive::errors::AppResult;
use healthlive::notifications::{InMemoryNotificationScheduler, ReminderNotificationService};
use healthlive::repositories::ReminderPreferencesRepository;
use healthlive::services::ReminderCenter;
use healthlive::storage::KeyValueStore;
use healthlive_core::models::{ReminderPreferenceUpdate, ReminderType};
use std::sync::Arc;
use tracing::info;

use crate::helpers::display::{display_notifications, display_reminder};

async fn open_center(
    store: Arc<dyn KeyValueStore>,
) -> (ReminderCenter, InMemoryNotificationScheduler) {
    let scheduler = InMemoryNotificationScheduler::new();
    let notifications = ReminderNotificationService::new(Arc::new(scheduler.clone()));
    let center =
        ReminderCenter::load(ReminderPreferencesRepository::new(store), notifications).await;
    (center, scheduler)
}

/// Print every reminder with its schedule
pub async fn list(store: Arc<dyn KeyValueStore>) -> AppResult<()> {
    let (center, _) = open_center(store).await;
    for preference in center.preferences().await {
        display_reminder(&preference);
    }
    Ok(())
}

/// Apply `update` to reminder `id`
pub async fn update(
    store: Arc<dyn KeyValueStore>,
    id: ReminderType,
    update: ReminderPreferenceUpdate,
) -> AppResult<()> {
    if update.is_empty() {
        println!("Nothing to change for {id}.");
        return Ok(());
    }
    let (center, _) = open_center(store).await;
    let updated = center.update_preference(id, &update).await?;
    info!(reminder = %id, "Reminder updated");
    display_reminder(&updated);
    Ok(())
}

/// Resynchronize and print the resulting notifications
pub async fn sync(store: Arc<dyn KeyValueStore>) -> AppResult<()> {
    let (center, scheduler) = open_center(store).await;
    let scheduled = center.sync_notifications().await?;
    println!("{scheduled} notifications scheduled");
    display_notifications(&scheduler.scheduled().await);
    Ok(())
}
