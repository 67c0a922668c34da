// ABOUTME: Output formatting helpers for healthlive-cli
// ABOUTME: Consistent display of reminders, notifications, readings, alerts, checklists, and plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

use healthlive::errors::ValidationErrors;
use healthlive::notifications::ScheduledNotification;
use healthlive::services::WeeklyPlanner;
use healthlive_core::models::{
    BloodPressure, BodyComposition, ComplianceTask, Glucose, Lipids, MetricRecord,
    ReminderPreference, TaskStatus,
};
use healthlive_intelligence::scheduling::daily_slot_times;
use healthlive_intelligence::{describe_schedule, MetricAlert};

/// One-line rendering of a reading's values
pub trait ReadingSummary {
    /// Values with units
    fn summary(&self) -> String;
}

impl ReadingSummary for BloodPressure {
    fn summary(&self) -> String {
        self.pulse.map_or_else(
            || format!("{}/{} mmHg", self.systolic, self.diastolic),
            |pulse| format!("{}/{} mmHg, pulse {pulse}", self.systolic, self.diastolic),
        )
    }
}

impl ReadingSummary for Glucose {
    fn summary(&self) -> String {
        format!("{} mg/dL ({})", self.value, self.context)
    }
}

impl ReadingSummary for Lipids {
    fn summary(&self) -> String {
        format!(
            "total {} / HDL {} / LDL {} / TG {} mg/dL",
            self.total_cholesterol, self.hdl, self.ldl, self.triglycerides
        )
    }
}

impl ReadingSummary for BodyComposition {
    fn summary(&self) -> String {
        format!(
            "{} kg, {} cm, BMI {:.2}",
            self.weight_kg, self.height_cm, self.bmi
        )
    }
}

/// Display a reminder and its daily slots
pub fn display_reminder(preference: &ReminderPreference) {
    let state = if preference.enabled { "on" } else { "off" };
    println!("\n{} [{}] ({state})", preference.title, preference.id);
    println!("   {}", preference.description);
    println!("   {}", describe_schedule(preference));
    println!("   Sound: {}", preference.sound.label());
    if preference.enabled {
        println!("   Slots: {}", daily_slot_times(preference).join(", "));
    }
}

/// Display scheduled notification requests
pub fn display_notifications(notifications: &[ScheduledNotification]) {
    for notification in notifications {
        println!(
            "   {:<16} {}  {}  sound={}",
            notification.id,
            notification.fire_at.format("%Y-%m-%d %H:%M UTC"),
            notification.message,
            notification.sound_name
        );
    }
}

/// Display stored readings, oldest first
pub fn display_records<R: ReadingSummary>(records: &[MetricRecord<R>]) {
    if records.is_empty() {
        println!("No readings stored.");
        return;
    }
    for record in records {
        let note = record
            .note
            .as_deref()
            .map_or_else(String::new, |note| format!("  \"{note}\""));
        println!(
            "{}  {}{note}  [{}]",
            record.recorded_at.format("%Y-%m-%d"),
            record.reading.summary(),
            record.id
        );
    }
}

/// Display alerts or a reassurance line
pub fn display_alerts(alerts: &[MetricAlert]) {
    if alerts.is_empty() {
        println!("No alerts.");
        return;
    }
    println!("Alerts:");
    for alert in alerts {
        println!("• {}  [{}]", alert.message, alert.record_id);
    }
}

/// Display field-level validation messages
pub fn display_validation(errors: &ValidationErrors) {
    println!("The entry was not saved:");
    for (field, message) in errors.fields() {
        println!("   {field}: {message}");
    }
}

/// Display one checklist with its completion percentage
pub fn display_checklist(heading: &str, tasks: &[ComplianceTask], status: &TaskStatus, completion: u32) {
    println!("\n{heading}: {completion}% completed");
    for task in tasks {
        let done = status.get(&task.id).copied().unwrap_or(false);
        let mark = if done { "x" } else { " " };
        println!("   [{mark}] {:<22} {}", task.id, task.label);
    }
}

/// Display the weekly plan with completion marks
pub fn display_plan(planner: &WeeklyPlanner) {
    let plan = planner.plan();
    println!("Weekly plan for {}", planner.habits().patient_name);
    println!("{}", "=".repeat(60));
    for day in &plan.days {
        println!("\n{}: {}", day.day, day.focus);
        for activity in &day.activities {
            let mark = if planner.is_completed(&activity.id) { "x" } else { " " };
            println!(
                "   [{mark}] {}  {:<10} {}  ({})",
                activity.time,
                activity.category.label(),
                activity.title,
                activity.id
            );
        }
        println!("   {}", day.recommendation);
    }
    let (done, total) = planner.progress();
    println!("\nProgress: {done}/{total} activities completed");
    println!("\n{}", plan.cardiologist_summary);
}
