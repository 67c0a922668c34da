// ABOUTME: Weekly plan generation and share summary tests
// ABOUTME: Covers day layout, habit-driven times, activity ids, and progress text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use healthlive::services::WeeklyPlanner;
use healthlive_core::errors::ErrorCode;
use healthlive_core::models::{
    ActivityCategory, CompletedMap, ExerciseBestTime, StressLevel, UserHabits,
};
use healthlive_intelligence::planner::{
    build_weekly_plan, compose_share_message, pending_by_day, DAYS_OF_WEEK,
};

#[test]
fn test_plan_has_seven_days_of_four_activities() {
    let plan = build_weekly_plan(&UserHabits::default());
    let days: Vec<&str> = plan.days.iter().map(|day| day.day.as_str()).collect();
    assert_eq!(days, DAYS_OF_WEEK.to_vec());
    assert_eq!(plan.total_activities(), 28);

    for day in &plan.days {
        let categories: Vec<ActivityCategory> =
            day.activities.iter().map(|activity| activity.category).collect();
        assert_eq!(
            categories,
            vec![
                ActivityCategory::Meal,
                ActivityCategory::Exercise,
                ActivityCategory::Rest,
                ActivityCategory::Relaxation
            ]
        );
    }

    let monday_ids: Vec<&str> = plan.days[0]
        .activities
        .iter()
        .map(|activity| activity.id.as_str())
        .collect();
    assert_eq!(
        monday_ids,
        vec!["monday-meal", "monday-exercise", "monday-rest", "monday-relax"]
    );
}

#[test]
fn test_meal_times_alternate_breakfast_and_lunch() {
    let habits = UserHabits::default();
    let plan = build_weekly_plan(&habits);
    assert_eq!(plan.days[0].activities[0].time, habits.breakfast_time);
    assert_eq!(plan.days[1].activities[0].time, habits.lunch_time);
    assert_eq!(plan.days[6].activities[0].time, habits.breakfast_time);
}

#[test]
fn test_exercise_time_follows_preferred_part_of_day() {
    let morning = build_weekly_plan(&UserHabits::default());
    assert_eq!(morning.days[0].activities[1].time, "07:00");
    assert_eq!(morning.days[0].activities[2].time, "13:30");

    let afternoon = build_weekly_plan(&UserHabits {
        exercise_best_time: ExerciseBestTime::Afternoon,
        ..UserHabits::default()
    });
    assert_eq!(afternoon.days[0].activities[1].time, "18:30");
    assert_eq!(afternoon.days[0].activities[2].time, "15:30");
    assert_eq!(afternoon.days[0].activities[3].time, "21:30");
}

#[test]
fn test_recommendations_reflect_habits() {
    let habits = UserHabits {
        stress_level: StressLevel::High,
        ..UserHabits::default()
    };
    let plan = build_weekly_plan(&habits);
    assert_eq!(plan.recommendations.len(), 5);
    assert_eq!(
        plan.recommendations[0],
        "Daily hydration goal: 2.2 L spread across morning and afternoon blocks."
    );
    assert!(plan.recommendations[4].contains("08:00 and 20:00"));
    assert!(plan.days[0]
        .recommendation
        .contains("Prioritize slow breathing techniques"));
    assert!(plan
        .cardiologist_summary
        .contains("7 moderate exercise sessions and 28 total interventions"));
}

#[test]
fn test_share_message_lists_pending_by_day() {
    let habits = UserHabits::default();
    let plan = build_weekly_plan(&habits);
    let mut completed = CompletedMap::new();
    for day in &plan.days[1..] {
        for activity in &day.activities {
            completed.insert(activity.id.clone(), true);
        }
    }
    completed.insert("monday-meal".to_owned(), true);

    let pending = pending_by_day(&plan.days, &completed);
    assert_eq!(pending.len(), 1);
    assert!(pending[0].starts_with("Monday: "));

    let message = compose_share_message(&plan, &completed, &habits);
    assert!(message.starts_with("Weekly summary for Maria Rivera\n"));
    assert!(message.contains("Progress: 25/28 activities completed."));
    assert!(message.contains("\n\nKey recommendations:\n• Daily hydration goal"));
    assert!(message.contains("Pending to watch:\nMonday: "));
}

#[test]
fn test_share_message_when_everything_is_done() {
    let mut planner = WeeklyPlanner::new(UserHabits::default());
    let ids: Vec<String> = planner
        .plan()
        .days
        .iter()
        .flat_map(|day| day.activities.iter().map(|activity| activity.id.clone()))
        .collect();
    for id in &ids {
        assert!(planner.toggle_activity(id).unwrap());
    }
    assert_eq!(planner.progress(), (28, 28));
    assert!(planner
        .share_message()
        .ends_with("All activities were completed."));
}

#[test]
fn test_planner_toggle_round_trip_and_unknown_activity() {
    let mut planner = WeeklyPlanner::new(UserHabits::default());
    assert!(planner.toggle_activity("friday-rest").unwrap());
    assert!(planner.is_completed("friday-rest"));
    assert!(!planner.toggle_activity("friday-rest").unwrap());
    assert_eq!(planner.progress(), (0, 28));

    let error = planner.toggle_activity("someday-nap").unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}
