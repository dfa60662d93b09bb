// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Garmin Connect activity model sent to the upload endpoint.

use serde::{Deserialize, Serialize};

/// Translated activity. Every numeric field is populated; missing source
/// values have already been replaced with zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GarminActivity {
    /// "cycling" or "general"
    pub activity_type: String,
    pub start_time_in_seconds: i64,
    pub duration_in_seconds: f64,
    pub average_heart_rate_in_beats_per_minute: f64,
    pub maximum_heart_rate_in_beats_per_minute: f64,
    pub average_power_in_watts: f64,
    pub maximum_power_in_watts: f64,
    pub total_distance_in_meters: f64,
    pub average_speed_in_meters_per_second: f64,
    pub maximum_speed_in_meters_per_second: f64,
    pub total_calories: f64,
    /// Display name, e.g. "Peloton Cycling - 30 min Climb Ride"
    pub name: String,
}

/// Acknowledgment returned by Garmin for an upload. Contents are not interpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadReceipt(pub serde_json::Value);
