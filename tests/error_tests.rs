// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use peloton_garmin_sync::config::ConfigError;
use peloton_garmin_sync::error::{Platform, SyncError};

#[test]
fn test_stage_labels() {
    let err = SyncError::FetchWorkouts("timeout".to_string());
    assert_eq!(err.to_string(), "Failed to fetch workouts: timeout");

    let err = SyncError::FetchWorkoutDetail("HTTP 404 Not Found: ".to_string());
    assert_eq!(
        err.to_string(),
        "Failed to fetch workout details: HTTP 404 Not Found: "
    );

    let err = SyncError::Upload("connection reset".to_string());
    assert_eq!(err.to_string(), "Failed to upload to Garmin: connection reset");

    let err = SyncError::Auth {
        platform: Platform::Peloton,
        reason: "HTTP 401 Unauthorized: nope".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Peloton authentication failed: HTTP 401 Unauthorized: nope"
    );

    let err = SyncError::from(ConfigError::Missing("GARMIN_EMAIL"));
    assert_eq!(
        err.to_string(),
        "Configuration error: Missing required environment variable: GARMIN_EMAIL"
    );
}

#[test]
fn test_error_classification() {
    assert!(SyncError::FetchWorkouts("x".to_string()).is_fetch_error());
    assert!(SyncError::FetchWorkoutDetail("x".to_string()).is_fetch_error());
    assert!(!SyncError::Upload("x".to_string()).is_fetch_error());
    assert!(SyncError::Upload("x".to_string()).is_upload_error());
}

#[test]
fn test_is_session_error_matches() {
    let reason = format!("HTTP 401 Unauthorized:  ({})", SyncError::SESSION_REJECTED);
    assert!(SyncError::FetchWorkouts(reason.clone()).is_session_error());
    assert!(SyncError::Upload(reason).is_session_error());

    let err = SyncError::Auth {
        platform: Platform::Garmin,
        reason: "connection refused".to_string(),
    };
    assert!(err.is_session_error());
}

#[test]
fn test_is_session_error_no_match() {
    assert!(!SyncError::FetchWorkouts("HTTP 500 Internal Server Error: ".to_string())
        .is_session_error());
    assert!(!SyncError::from(ConfigError::Missing("PELOTON_EMAIL")).is_session_error());
}
