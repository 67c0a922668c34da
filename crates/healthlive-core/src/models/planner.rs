// ABOUTME: Weekly planner models for user habits and generated activity plans
// ABOUTME: UserHabits inputs, plan activities, daily plans, and activity completion tracking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Kind of planned activity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityCategory {
    /// Nutrition
    Meal,
    /// Physical activity
    Exercise,
    /// Recovery break
    Rest,
    /// Emotional regulation
    Relaxation,
}

impl ActivityCategory {
    /// Label shown in the planner
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Meal => "Nutrition",
            Self::Exercise => "Exercise",
            Self::Rest => "Rest",
            Self::Relaxation => "Relaxation",
        }
    }

    /// Suffix used in activity identifiers
    #[must_use]
    pub const fn id_suffix(&self) -> &'static str {
        match self {
            Self::Meal => "meal",
            Self::Exercise => "exercise",
            Self::Rest => "rest",
            Self::Relaxation => "relax",
        }
    }
}

/// Self-reported stress level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StressLevel {
    /// Low stress
    Low,
    /// Moderate stress
    Moderate,
    /// High stress
    High,
}

impl fmt::Display for StressLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        })
    }
}

/// Preferred exercise intensity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseIntensity {
    /// Gentle
    Gentle,
    /// Moderate
    Moderate,
    /// High
    High,
}

impl fmt::Display for ExerciseIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Gentle => "gentle",
            Self::Moderate => "moderate",
            Self::High => "high",
        })
    }
}

/// Part of the day the user prefers to exercise
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseBestTime {
    /// Morning
    Morning,
    /// Afternoon
    Afternoon,
}

impl fmt::Display for ExerciseBestTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
        })
    }
}

/// Lifestyle inputs for the weekly plan generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserHabits {
    /// Name shown in shared summaries
    pub patient_name: String,
    /// Diet followed, e.g. DASH
    pub dietary_pattern: String,
    /// Dietary restrictions
    pub dietary_restrictions: Vec<String>,
    /// `"HH:MM"`
    pub breakfast_time: String,
    /// `"HH:MM"`
    pub lunch_time: String,
    /// `"HH:MM"`
    pub dinner_time: String,
    /// Daily water target in liters
    pub hydration_goal_liters: f64,
    /// Favourite exercise
    pub preferred_exercise: String,
    /// Preferred intensity
    pub exercise_intensity: ExerciseIntensity,
    /// Preferred part of the day for exercise
    pub exercise_best_time: ExerciseBestTime,
    /// Usual rest routine
    pub rest_routine: String,
    /// Usual relaxation technique
    pub relaxation_preference: String,
    /// Self-reported stress
    pub stress_level: StressLevel,
    /// Sleep target in hours
    pub sleep_goal_hours: f64,
    /// Support resources available to the user
    pub support_notes: String,
    /// Medication times, `"HH:MM"`
    pub medication_schedule: Vec<String>,
}

impl Default for UserHabits {
    fn default() -> Self {
        Self {
            patient_name: "Maria Rivera".to_owned(),
            dietary_pattern: "DASH with a Mediterranean focus".to_owned(),
            dietary_restrictions: vec!["low sodium".to_owned(), "high fiber".to_owned()],
            breakfast_time: "07:30".to_owned(),
            lunch_time: "13:30".to_owned(),
            dinner_time: "20:00".to_owned(),
            hydration_goal_liters: 2.2,
            preferred_exercise: "brisk outdoor walking".to_owned(),
            exercise_intensity: ExerciseIntensity::Moderate,
            exercise_best_time: ExerciseBestTime::Morning,
            rest_routine: "a short 15 minute nap after lunch".to_owned(),
            relaxation_preference: "diaphragmatic breathing with soft music".to_owned(),
            stress_level: StressLevel::Moderate,
            sleep_goal_hours: 7.5,
            support_notes: "Cardiovascular coaching sessions and care team reminders"
                .to_owned(),
            medication_schedule: vec!["08:00".to_owned(), "20:00".to_owned()],
        }
    }
}

/// One scheduled activity in the plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanActivity {
    /// `"{day}-{meal|exercise|rest|relax}"`
    pub id: String,
    /// Activity kind
    pub category: ActivityCategory,
    /// Title
    pub title: String,
    /// Personalized description
    pub description: String,
    /// `"HH:MM"`
    pub time: String,
    /// Clinical context label
    pub context: String,
}

/// Plan for a single weekday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPlan {
    /// Weekday name
    pub day: String,
    /// Theme of the day
    pub focus: String,
    /// Personalized recommendation
    pub recommendation: String,
    /// Meal, exercise, rest, and relaxation in that order
    pub activities: Vec<PlanActivity>,
}

/// Seven-day plan with general recommendations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPlan {
    /// Monday through Sunday
    pub days: Vec<DailyPlan>,
    /// Habit recommendations
    pub recommendations: Vec<String>,
    /// Summary addressed to the cardiologist
    pub cardiologist_summary: String,
}

impl WeeklyPlan {
    /// Activity count across all days
    #[must_use]
    pub fn total_activities(&self) -> usize {
        self.days.iter().map(|day| day.activities.len()).sum()
    }
}

/// Activity id to completion flag
pub type CompletedMap = BTreeMap<String, bool>;
