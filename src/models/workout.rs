// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Peloton workout models as returned by the API.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Envelope of the workout list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkoutPage {
    #[serde(default)]
    pub data: Vec<WorkoutSummary>,
}

/// Entry of the workout list, used to drive iteration.
///
/// An unreadable `start_time` leaves the entry undated instead of failing the
/// whole page; undated entries never pass the recency filter.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkoutSummary {
    pub id: String,
    #[serde(default, deserialize_with = "timestamp::deserialize_lenient")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, alias = "name")]
    pub title: Option<String>,
    #[serde(default)]
    pub fitness_discipline: Option<String>,
}

impl WorkoutSummary {
    /// Label shown in the outcome log when no translated activity exists.
    pub fn label(&self) -> String {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => format!("Workout {}", self.id),
        }
    }
}

/// Full workout record. Every metric may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkoutDetail {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub start_time: Option<DateTime<Utc>>,
    /// Seconds
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub average_heartrate: Option<f64>,
    #[serde(default)]
    pub max_heartrate: Option<f64>,
    #[serde(default)]
    pub average_watts: Option<f64>,
    #[serde(default)]
    pub max_watts: Option<f64>,
    /// Kilometers
    #[serde(default)]
    pub distance: Option<f64>,
    /// Meters per second
    #[serde(default)]
    pub average_speed: Option<f64>,
    #[serde(default)]
    pub max_speed: Option<f64>,
    #[serde(default)]
    pub total_calories: Option<f64>,
    #[serde(default)]
    pub fitness_discipline: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

/// Peloton timestamps arrive either as epoch seconds or as RFC 3339 text.
pub(crate) mod timestamp {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Seconds(i64),
        Fractional(f64),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Raw>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) => to_datetime(raw).map(Some).map_err(de::Error::custom),
        }
    }

    /// Like `deserialize`, but any unreadable value becomes `None`.
    pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(value) = Option::<serde_json::Value>::deserialize(deserializer)? else {
            return Ok(None);
        };

        let parsed = Raw::deserialize(&value)
            .map_err(|e| e.to_string())
            .and_then(to_datetime);
        match parsed {
            Ok(dt) => Ok(Some(dt)),
            Err(e) => {
                tracing::debug!(%value, error = %e, "Ignoring unreadable start time");
                Ok(None)
            }
        }
    }

    fn to_datetime(raw: Raw) -> Result<DateTime<Utc>, String> {
        let secs = match raw {
            Raw::Seconds(secs) => secs,
            Raw::Fractional(secs) => secs.floor() as i64,
            Raw::Text(text) => {
                return DateTime::parse_from_rfc3339(&text)
                    .map(|dt| dt.with_timezone(&Utc))
                    .map_err(|e| format!("invalid timestamp {text:?}: {e}"));
            }
        };

        DateTime::from_timestamp(secs, 0).ok_or_else(|| format!("timestamp out of range: {secs}"))
    }
}
