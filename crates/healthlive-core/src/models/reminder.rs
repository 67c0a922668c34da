// ABOUTME: Reminder preference models for recurring habit notifications
// ABOUTME: ReminderType, NotificationTone, ReminderPreference, and the default preference table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed set of habit reminders the app offers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ReminderType {
    /// Stand up and move regularly
    Movement,
    /// Drink water through the day
    Hydration,
    /// Take vital sign measurements
    Measurements,
    /// Planned exercise routine
    Exercise,
}

impl ReminderType {
    /// Every reminder type in display order
    pub const ALL: [Self; 4] = [
        Self::Movement,
        Self::Hydration,
        Self::Measurements,
        Self::Exercise,
    ];

    /// Storage identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Movement => "movement",
            Self::Hydration => "hydration",
            Self::Measurements => "measurements",
            Self::Exercise => "exercise",
        }
    }

    /// Parse a storage identifier
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == id)
    }

    /// Position of this type in the fixed display order
    #[must_use]
    pub const fn display_order(&self) -> usize {
        match self {
            Self::Movement => 0,
            Self::Hydration => 1,
            Self::Measurements => 2,
            Self::Exercise => 3,
        }
    }
}

impl fmt::Display for ReminderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sound played when a reminder fires
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum NotificationTone {
    /// Platform default sound
    #[default]
    Default,
    /// Soft bell
    Focus,
    /// Morning energy chime
    Energetic,
    /// Calm waves
    Calm,
}

impl NotificationTone {
    /// Every tone offered in settings
    pub const ALL: [Self; 4] = [Self::Default, Self::Focus, Self::Energetic, Self::Calm];

    /// Storage identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Focus => "focus",
            Self::Energetic => "energetic",
            Self::Calm => "calm",
        }
    }

    /// Parse a storage identifier, `None` for tones that are not offered
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tone| tone.as_str() == id)
    }

    /// Label shown in the settings picker
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Focus => "Soft bell",
            Self::Energetic => "Morning energy",
            Self::Calm => "Calm waves",
        }
    }

    /// Sound resource handed to the notification platform
    #[must_use]
    pub fn sound_name(&self) -> String {
        match self {
            Self::Default => "default".to_owned(),
            other => format!("{}.mp3", other.as_str()),
        }
    }
}

/// One recurring habit reminder
///
/// `start_time` and `end_time` are `"HH:MM"` strings so the persisted shape
/// stays readable; they are normalized before they are stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReminderPreference {
    /// Reminder type, unique within the preference list
    pub id: ReminderType,
    /// Short title used as the notification message
    pub title: String,
    /// Longer description used as the notification subtitle
    pub description: String,
    /// Window start, `"HH:MM"`
    pub start_time: String,
    /// Window end, `"HH:MM"`; earlier than start means the window wraps midnight
    pub end_time: String,
    /// Minutes between notifications
    pub frequency_minutes: u32,
    /// Notification sound
    pub sound: NotificationTone,
    /// Whether notifications are scheduled for this reminder
    pub enabled: bool,
}

/// Partial edit of a reminder preference; `None` leaves the field untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderPreferenceUpdate {
    /// New title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New window start (raw user text)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// New window end (raw user text)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// New repeat frequency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_minutes: Option<u32>,
    /// New sound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound: Option<NotificationTone>,
    /// Enable or disable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl ReminderPreferenceUpdate {
    /// True when the update changes nothing
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.start_time.is_none()
            && self.end_time.is_none()
            && self.frequency_minutes.is_none()
            && self.sound.is_none()
            && self.enabled.is_none()
    }

    /// Apply the present fields to `preference`
    pub fn apply_to(&self, preference: &mut ReminderPreference) {
        if let Some(title) = &self.title {
            preference.title.clone_from(title);
        }
        if let Some(description) = &self.description {
            preference.description.clone_from(description);
        }
        if let Some(start_time) = &self.start_time {
            preference.start_time.clone_from(start_time);
        }
        if let Some(end_time) = &self.end_time {
            preference.end_time.clone_from(end_time);
        }
        if let Some(frequency) = self.frequency_minutes {
            preference.frequency_minutes = frequency;
        }
        if let Some(sound) = self.sound {
            preference.sound = sound;
        }
        if let Some(enabled) = self.enabled {
            preference.enabled = enabled;
        }
    }
}

impl ReminderPreference {
    /// Compiled-in default for one reminder type
    #[must_use]
    pub fn default_for(id: ReminderType) -> Self {
        let (title, description, start_time, end_time, frequency_minutes, sound) = match id {
            ReminderType::Movement => (
                "Move every hour",
                "Gentle nudges to stand up, stretch, and get your circulation going.",
                "09:00",
                "21:00",
                60,
                NotificationTone::Energetic,
            ),
            ReminderType::Hydration => (
                "Drink water",
                "Regular hydration throughout the day with motivating reminders.",
                "08:00",
                "20:00",
                120,
                NotificationTone::Calm,
            ),
            ReminderType::Measurements => (
                "Take measurements",
                "Log your key vital signs and keep your history up to date.",
                "07:30",
                "21:00",
                720,
                NotificationTone::Focus,
            ),
            ReminderType::Exercise => (
                "Planned exercises",
                "Get ready for the suggested routines and keep your plan on track.",
                "18:00",
                "19:00",
                1440,
                NotificationTone::Default,
            ),
        };
        Self {
            id,
            title: title.to_owned(),
            description: description.to_owned(),
            start_time: start_time.to_owned(),
            end_time: end_time.to_owned(),
            frequency_minutes,
            sound,
            enabled: true,
        }
    }
}

/// Compiled-in default preferences, one per reminder type in display order
#[must_use]
pub fn default_reminder_preferences() -> Vec<ReminderPreference> {
    ReminderType::ALL
        .into_iter()
        .map(ReminderPreference::default_for)
        .collect()
}
