// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Peloton workout → Garmin activity translation.
//!
//! Pure and total: missing metrics become 0, a missing title becomes "Workout".

use crate::models::{GarminActivity, WorkoutDetail};

const SOURCE_PLATFORM: &str = "Peloton";
const DEFAULT_TITLE: &str = "Workout";
const METERS_PER_KILOMETER: f64 = 1000.0;

/// Translate a workout detail into the Garmin upload schema.
pub fn translate(detail: &WorkoutDetail) -> GarminActivity {
    let activity_type = classify(detail.fitness_discipline.as_deref());
    let title = match detail.title.as_deref() {
        Some(title) if !title.is_empty() => title,
        _ => DEFAULT_TITLE,
    };

    GarminActivity {
        activity_type: activity_type.to_string(),
        start_time_in_seconds: detail.start_time.map(|t| t.timestamp()).unwrap_or(0),
        duration_in_seconds: detail.duration.unwrap_or(0.0),
        average_heart_rate_in_beats_per_minute: detail.average_heartrate.unwrap_or(0.0),
        maximum_heart_rate_in_beats_per_minute: detail.max_heartrate.unwrap_or(0.0),
        average_power_in_watts: detail.average_watts.unwrap_or(0.0),
        maximum_power_in_watts: detail.max_watts.unwrap_or(0.0),
        total_distance_in_meters: detail.distance.unwrap_or(0.0) * METERS_PER_KILOMETER,
        average_speed_in_meters_per_second: detail.average_speed.unwrap_or(0.0),
        maximum_speed_in_meters_per_second: detail.max_speed.unwrap_or(0.0),
        total_calories: detail.total_calories.unwrap_or(0.0),
        name: format!(
            "{} {} - {}",
            SOURCE_PLATFORM,
            capitalize(activity_type),
            title
        ),
    }
}

/// Two-way classification: only "cycling" survives, everything else is "general".
fn classify(discipline: Option<&str>) -> &'static str {
    match discipline {
        Some("cycling") => "cycling",
        _ => "general",
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_empty_detail_translates_to_zeros() {
        let activity = translate(&WorkoutDetail::default());

        assert_eq!(activity.activity_type, "general");
        assert_eq!(activity.start_time_in_seconds, 0);
        assert_eq!(activity.duration_in_seconds, 0.0);
        assert_eq!(activity.average_heart_rate_in_beats_per_minute, 0.0);
        assert_eq!(activity.maximum_heart_rate_in_beats_per_minute, 0.0);
        assert_eq!(activity.average_power_in_watts, 0.0);
        assert_eq!(activity.maximum_power_in_watts, 0.0);
        assert_eq!(activity.total_distance_in_meters, 0.0);
        assert_eq!(activity.average_speed_in_meters_per_second, 0.0);
        assert_eq!(activity.maximum_speed_in_meters_per_second, 0.0);
        assert_eq!(activity.total_calories, 0.0);
        assert_eq!(activity.name, "Peloton General - Workout");
    }

    #[test]
    fn test_distance_kilometers_to_meters() {
        let detail = WorkoutDetail {
            distance: Some(5.0),
            ..Default::default()
        };
        assert_eq!(translate(&detail).total_distance_in_meters, 5000.0);
    }

    #[test]
    fn test_cycling_is_kept() {
        let detail = WorkoutDetail {
            fitness_discipline: Some("cycling".to_string()),
            title: Some("30 min Climb Ride".to_string()),
            ..Default::default()
        };
        let activity = translate(&detail);
        assert_eq!(activity.activity_type, "cycling");
        assert_eq!(activity.name, "Peloton Cycling - 30 min Climb Ride");
    }

    #[test]
    fn test_other_disciplines_are_general() {
        for discipline in ["running", "strength", "Cycling", "yoga", ""] {
            let detail = WorkoutDetail {
                fitness_discipline: Some(discipline.to_string()),
                ..Default::default()
            };
            assert_eq!(translate(&detail).activity_type, "general", "{discipline}");
        }
    }

    #[test]
    fn test_empty_title_uses_default() {
        let detail = WorkoutDetail {
            title: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(translate(&detail).name, "Peloton General - Workout");
    }

    #[test]
    fn test_metrics_pass_through_unconverted() {
        let detail = WorkoutDetail {
            start_time: Some(Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap()),
            duration: Some(1800.0),
            average_heartrate: Some(142.5),
            max_heartrate: Some(171.0),
            average_watts: Some(180.0),
            max_watts: Some(412.0),
            distance: Some(12.34),
            average_speed: Some(6.9),
            max_speed: Some(11.2),
            total_calories: Some(420.0),
            fitness_discipline: Some("cycling".to_string()),
            ..Default::default()
        };

        let activity = translate(&detail);
        assert_eq!(activity.start_time_in_seconds, 1_709_287_200);
        assert_eq!(activity.duration_in_seconds, 1800.0);
        assert_eq!(activity.average_heart_rate_in_beats_per_minute, 142.5);
        assert_eq!(activity.maximum_heart_rate_in_beats_per_minute, 171.0);
        assert_eq!(activity.average_power_in_watts, 180.0);
        assert_eq!(activity.maximum_power_in_watts, 412.0);
        assert!((activity.total_distance_in_meters - 12340.0).abs() < 1e-6);
        assert_eq!(activity.average_speed_in_meters_per_second, 6.9);
        assert_eq!(activity.maximum_speed_in_meters_per_second, 11.2);
        assert_eq!(activity.total_calories, 420.0);
    }

    #[test]
    fn test_translation_is_deterministic() {
        let detail = WorkoutDetail {
            title: Some("Run".to_string()),
            distance: Some(3.2),
            ..Default::default()
        };
        assert_eq!(translate(&detail), translate(&detail));
    }
}
