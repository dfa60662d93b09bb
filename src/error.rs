// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Sync error types with stage-labelled messages.

use crate::config::ConfigError;
use std::fmt;

/// Which platform a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Peloton,
    Garmin,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Peloton => f.write_str("Peloton"),
            Platform::Garmin => f.write_str("Garmin"),
        }
    }
}

/// Error type for authentication, retrieval and upload failures.
///
/// The `Display` output always starts with the stage label, followed by the
/// upstream description verbatim.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("{platform} authentication failed: {reason}")]
    Auth { platform: Platform, reason: String },

    #[error("Failed to fetch workouts: {0}")]
    FetchWorkouts(String),

    #[error("Failed to fetch workout details: {0}")]
    FetchWorkoutDetail(String),

    #[error("Failed to upload to Garmin: {0}")]
    Upload(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl SyncError {
    /// Marker embedded in the reason when a platform rejects the session.
    pub const SESSION_REJECTED: &'static str = "session rejected";

    /// True for list or detail retrieval failures.
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            SyncError::FetchWorkouts(_) | SyncError::FetchWorkoutDetail(_)
        )
    }

    pub fn is_upload_error(&self) -> bool {
        matches!(self, SyncError::Upload(_))
    }

    /// True when the upstream platform refused the session credential.
    ///
    /// Credentials are never refreshed; the caller has to sign in again.
    pub fn is_session_error(&self) -> bool {
        match self {
            SyncError::Auth { .. } => true,
            SyncError::FetchWorkouts(reason)
            | SyncError::FetchWorkoutDetail(reason)
            | SyncError::Upload(reason) => reason.contains(Self::SESSION_REJECTED),
            _ => false,
        }
    }
}

/// Result type alias for sync operations
pub type Result<T> = std::result::Result<T, SyncError>;
