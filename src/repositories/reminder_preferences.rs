// ABOUTME: Reminder preference persistence with per-field repair of stored data
// ABOUTME: Merges saved entries over the compiled-in defaults and sanitizes before writing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

use crate::storage::KeyValueStore;
use healthlive_core::constants::storage_keys;
use healthlive_core::errors::AppResult;
use healthlive_core::models::{default_reminder_preferences, NotificationTone, ReminderPreference};
use healthlive_intelligence::scheduling::{
    default_preference, normalize_frequency_minutes, normalize_time_string,
};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, warn};

/// Reminder preference list stored under a single key
#[derive(Clone)]
pub struct ReminderPreferencesRepository {
    store: Arc<dyn KeyValueStore>,
}

impl ReminderPreferencesRepository {
    /// Create a repository over `store`
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Current preferences in display order
    ///
    /// Saved entries are matched to defaults by id and merged field by field;
    /// fields that are missing or have the wrong shape keep the default. Types
    /// without a saved entry use the default. Absent, unreadable, or corrupt
    /// storage yields the defaults.
    pub async fn load(&self) -> Vec<ReminderPreference> {
        let stored = match self.store.get_item(storage_keys::REMINDER_PREFERENCES).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return default_reminder_preferences(),
            Err(error) => {
                warn!(error = %error, "Error loading reminder preferences");
                return default_reminder_preferences();
            }
        };

        let saved = match serde_json::from_str::<Value>(&stored) {
            Ok(Value::Array(items)) => items,
            Ok(_) => {
                warn!("Stored reminder preferences are not a list, using defaults");
                return default_reminder_preferences();
            }
            Err(error) => {
                warn!(error = %error, "Error parsing reminder preferences");
                return default_reminder_preferences();
            }
        };

        default_reminder_preferences()
            .into_iter()
            .map(|default| {
                saved
                    .iter()
                    .filter_map(Value::as_object)
                    .find(|item| {
                        item.get("id").and_then(Value::as_str) == Some(default.id.as_str())
                    })
                    .map_or_else(|| default.clone(), |item| merge_saved(&default, item))
            })
            .collect()
    }

    /// Sanitize and persist the full list
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the storage write fails
    pub async fn save(&self, preferences: &[ReminderPreference]) -> AppResult<()> {
        let sanitized: Vec<ReminderPreference> =
            preferences.iter().cloned().map(sanitize_preference).collect();
        let encoded = serde_json::to_string(&sanitized)?;
        self.store
            .set_item(storage_keys::REMINDER_PREFERENCES, &encoded)
            .await?;
        debug!(count = sanitized.len(), "Saved reminder preferences");
        Ok(())
    }
}

/// Repair times and frequency against the defaults for the preference's type
#[must_use]
pub fn sanitize_preference(preference: ReminderPreference) -> ReminderPreference {
    let fallback = default_preference(preference.id);
    ReminderPreference {
        start_time: normalize_time_string(&preference.start_time, &fallback.start_time),
        end_time: normalize_time_string(&preference.end_time, &fallback.end_time),
        frequency_minutes: normalize_frequency_minutes(
            f64::from(preference.frequency_minutes),
            fallback.frequency_minutes,
        ),
        ..preference
    }
}

fn merge_saved(default: &ReminderPreference, saved: &Map<String, Value>) -> ReminderPreference {
    let text = |field: &str| saved.get(field).and_then(Value::as_str);

    let start_time = text("startTime").map_or_else(
        || default.start_time.clone(),
        |raw| normalize_time_string(raw, &default.start_time),
    );
    let end_time = text("endTime").map_or_else(
        || default.end_time.clone(),
        |raw| normalize_time_string(raw, &default.end_time),
    );
    let frequency_minutes = saved
        .get("frequencyMinutes")
        .and_then(Value::as_f64)
        .map_or(default.frequency_minutes, |raw| {
            normalize_frequency_minutes(raw, default.frequency_minutes)
        });
    let sound = text("sound")
        .and_then(NotificationTone::from_id)
        .unwrap_or(default.sound);

    ReminderPreference {
        id: default.id,
        title: text("title").map_or_else(|| default.title.clone(), str::to_owned),
        description: text("description")
            .map_or_else(|| default.description.clone(), str::to_owned),
        start_time,
        end_time,
        frequency_minutes,
        sound,
        enabled: saved
            .get("enabled")
            .and_then(Value::as_bool)
            .unwrap_or(default.enabled),
    }
}
