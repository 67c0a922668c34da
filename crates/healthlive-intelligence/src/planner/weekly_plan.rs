// ABOUTME: Weekly plan generator turning user habits into seven days of personalized activities
// ABOUTME: Fixed daily blueprints are combined with meal times, exercise timing, and stress level
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

use healthlive_core::models::{
    ActivityCategory, DailyPlan, ExerciseBestTime, PlanActivity, StressLevel, UserHabits,
    WeeklyPlan,
};

/// Weekday names, Monday first
pub const DAYS_OF_WEEK: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const RELAXATION_TIME: &str = "21:30";

struct Template {
    title: &'static str,
    description: &'static str,
}

struct DayBlueprint {
    focus: &'static str,
    meal: Template,
    exercise: Template,
    rest: Template,
    relaxation: Template,
}

const WEEKLY_BLUEPRINTS: [DayBlueprint; 7] = [
    DayBlueprint {
        focus: "Balanced start",
        meal: Template {
            title: "Potassium-rich breakfast",
            description: "Oatmeal with berries, seeds, and walnuts to keep energy steady.",
        },
        exercise: Template {
            title: "Mindful walk",
            description: "20 minutes paying attention to breathing and posture.",
        },
        rest: Template {
            title: "Breathing break",
            description: "A 10 minute micro break to relax shoulders and neck.",
        },
        relaxation: Template {
            title: "Guided body scan",
            description: "Progressive check of tension before sleep.",
        },
    },
    DayBlueprint {
        focus: "Progressive strengthening",
        meal: Template {
            title: "Low-sodium lunch",
            description:
                "Chickpea and spinach salad with lemon dressing to support blood pressure.",
        },
        exercise: Template {
            title: "Gentle intervals",
            description: "Alternate 3 minutes of brisk walking with 2 easy minutes.",
        },
        rest: Template {
            title: "Short supervised nap",
            description: "15 minutes semi-reclined with legs raised.",
        },
        relaxation: Template {
            title: "4-7-8 breathing",
            description: "A sequence of deep breaths to reduce stress.",
        },
    },
    DayBlueprint {
        focus: "Mobility and flexibility",
        meal: Template {
            title: "Antioxidant mid-morning snack",
            description: "Yogurt with blueberries and chia seeds to care for blood vessels.",
        },
        exercise: Template {
            title: "Joint mobility routine",
            description: "A series of gentle movements for shoulders, hips, and spine.",
        },
        rest: Template {
            title: "Digital disconnect",
            description: "Block 30 minutes without screens before going to bed.",
        },
        relaxation: Template {
            title: "Warm foot bath",
            description: "Add magnesium salts to support venous return.",
        },
    },
    DayBlueprint {
        focus: "Moderate endurance",
        meal: Template {
            title: "Light heart-healthy dinner",
            description: "Baked fish with leafy greens and olive oil.",
        },
        exercise: Template {
            title: "Elliptical or stationary bike session",
            description: "25 minutes keeping heart rate in the safe zone.",
        },
        rest: Template {
            title: "Evening stretching routine",
            description: "Focus on the posterior chain to avoid stiffness.",
        },
        relaxation: Template {
            title: "Gratitude journal",
            description: "Write down three wins or gratitudes before sleep.",
        },
    },
    DayBlueprint {
        focus: "Stress management",
        meal: Template {
            title: "Magnesium-rich snack",
            description: "A handful of almonds and a kiwi to support muscle relaxation.",
        },
        exercise: Template {
            title: "Functional strength session",
            description: "Resistance band circuit for upper and lower body.",
        },
        rest: Template {
            title: "Guided diaphragmatic breathing",
            description: "5 minutes lying down with legs raised.",
        },
        relaxation: Template {
            title: "Guided meditation",
            description: "Use your favourite app for 12 minutes.",
        },
    },
    DayBlueprint {
        focus: "Active social connection",
        meal: Template {
            title: "Balanced brunch",
            description: "Whole-grain toast with avocado, tomato, and lean protein.",
        },
        exercise: Template {
            title: "Recreational outing",
            description: "A walk in nature or a park with company.",
        },
        rest: Template {
            title: "Optional nap",
            description: "20 minutes of rest after the main meal.",
        },
        relaxation: Template {
            title: "Enjoyable activity",
            description: "Light reading or relaxing music at the end of the day.",
        },
    },
    DayBlueprint {
        focus: "Getting ready for the week",
        meal: Template {
            title: "Batch cooking plan",
            description: "Organize low-sodium menus for the coming week.",
        },
        exercise: Template {
            title: "Active full-body stretch",
            description: "A 20 minute sequence centered on breathing and posture.",
        },
        rest: Template {
            title: "Sleep hygiene",
            description: "A relaxing routine with warm lights and brief reading.",
        },
        relaxation: Template {
            title: "Guided visualization",
            description: "Picture the week's goals while breathing deeply.",
        },
    },
];

/// Seven-day plan personalized to `habits`
///
/// Meals alternate between breakfast (even days) and lunch (odd days).
/// Exercise and rest times follow the preferred part of the day.
#[must_use]
pub fn build_weekly_plan(habits: &UserHabits) -> WeeklyPlan {
    let days: Vec<DailyPlan> = DAYS_OF_WEEK
        .iter()
        .zip(WEEKLY_BLUEPRINTS.iter())
        .enumerate()
        .map(|(index, (day, blueprint))| DailyPlan {
            day: (*day).to_owned(),
            focus: blueprint.focus.to_owned(),
            recommendation: daily_recommendation(blueprint, habits),
            activities: activities_for_day(blueprint, day, index, habits),
        })
        .collect();

    let cardiologist_summary = cardiologist_summary(habits, &days);
    WeeklyPlan {
        days,
        recommendations: habit_recommendations(habits),
        cardiologist_summary,
    }
}

fn activities_for_day(
    blueprint: &DayBlueprint,
    day: &str,
    index: usize,
    habits: &UserHabits,
) -> Vec<PlanActivity> {
    let (exercise_time, rest_time) = match habits.exercise_best_time {
        ExerciseBestTime::Morning => ("07:00", "13:30"),
        ExerciseBestTime::Afternoon => ("18:30", "15:30"),
    };
    let meal_time = if index % 2 == 0 {
        &habits.breakfast_time
    } else {
        &habits.lunch_time
    };
    let day_id = day.to_lowercase();
    let activity_id =
        |category: ActivityCategory| format!("{day_id}-{}", category.id_suffix());

    vec![
        PlanActivity {
            id: activity_id(ActivityCategory::Meal),
            category: ActivityCategory::Meal,
            title: blueprint.meal.title.to_owned(),
            description: format!(
                "{} Adapted to the {} pattern and your restrictions: {}.",
                blueprint.meal.description,
                habits.dietary_pattern,
                habits.dietary_restrictions.join(", ")
            ),
            time: meal_time.clone(),
            context: "Heart-healthy nutrition".to_owned(),
        },
        PlanActivity {
            id: activity_id(ActivityCategory::Exercise),
            category: ActivityCategory::Exercise,
            title: format!("{} ({})", blueprint.exercise.title, habits.preferred_exercise),
            description: format!(
                "{} Adjust the intensity to a {} level and monitor your breathing.",
                blueprint.exercise.description, habits.exercise_intensity
            ),
            time: exercise_time.to_owned(),
            context: "Safe physical conditioning".to_owned(),
        },
        PlanActivity {
            id: activity_id(ActivityCategory::Rest),
            category: ActivityCategory::Rest,
            title: blueprint.rest.title.to_owned(),
            description: format!(
                "{} Include your usual routine: {}.",
                blueprint.rest.description, habits.rest_routine
            ),
            time: rest_time.to_owned(),
            context: "Recovery and circadian rhythm".to_owned(),
        },
        PlanActivity {
            id: activity_id(ActivityCategory::Relaxation),
            category: ActivityCategory::Relaxation,
            title: blueprint.relaxation.title.to_owned(),
            description: format!(
                "{} Blend in your preference: {}.",
                blueprint.relaxation.description, habits.relaxation_preference
            ),
            time: RELAXATION_TIME.to_owned(),
            context: "Emotional regulation".to_owned(),
        },
    ]
}

const fn stress_message(level: StressLevel) -> &'static str {
    match level {
        StressLevel::High => {
            "Prioritize slow breathing techniques and check your stress level before bed."
        }
        StressLevel::Moderate => {
            "Add reminders to check your breathing and posture during the day."
        }
        StressLevel::Low => "Keep a brief log to make sure stress stays under control.",
    }
}

fn daily_recommendation(blueprint: &DayBlueprint, habits: &UserHabits) -> String {
    format!(
        "{}: {} Lean on {} to reinforce adherence.",
        blueprint.focus,
        stress_message(habits.stress_level),
        habits.support_notes.to_lowercase()
    )
}

fn habit_recommendations(habits: &UserHabits) -> Vec<String> {
    vec![
        format!(
            "Daily hydration goal: {:.1} L spread across morning and afternoon blocks.",
            habits.hydration_goal_liters
        ),
        format!(
            "Schedule physical activity in the {}, building on your preference for {}.",
            habits.exercise_best_time, habits.preferred_exercise
        ),
        format!(
            "Keep an average of {} h of sleep with a consistent evening routine.",
            habits.sleep_goal_hours
        ),
        format!(
            "Menu based on the {} pattern, accounting for {}.",
            habits.dietary_pattern,
            habits.dietary_restrictions.join(", ")
        ),
        format!(
            "Medication at {} for hemodynamic stability.",
            habits.medication_schedule.join(" and ")
        ),
    ]
}

fn cardiologist_summary(habits: &UserHabits, days: &[DailyPlan]) -> String {
    let total_activities: usize = days.iter().map(|day| day.activities.len()).sum();
    let exercise_sessions = days.len();
    format!(
        "Weekly plan centered on {} with {exercise_sessions} moderate exercise sessions and \
         {total_activities} total interventions. Prioritizes the {} pattern and {} stress control.",
        habits.preferred_exercise, habits.dietary_pattern, habits.stress_level
    )
}
