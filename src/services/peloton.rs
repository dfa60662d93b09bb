// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Peloton API client for fetching workouts.
//!
//! Handles:
//! - Session login
//! - Recent workout listing with a look-back window
//! - Per-workout detail retrieval

use crate::config::Login;
use crate::error::{Platform, Result, SyncError};
use crate::models::{SessionCredential, WorkoutDetail, WorkoutPage, WorkoutSummary};
use crate::services::http::{read_json, SESSION_HEADER};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Number of workouts requested from the list endpoint.
pub const PAGE_SIZE: u32 = 100;

/// Peloton API client.
#[derive(Clone)]
pub struct PelotonClient {
    http: reqwest::Client,
    base_url: String,
}

impl PelotonClient {
    /// Create a new client against the given API root.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(reqwest::Client::new(), base_url)
    }

    /// Create a client sharing an existing connection pool.
    pub fn with_http(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Sign in and obtain a session credential.
    pub async fn login(&self, login: &Login) -> Result<SessionCredential> {
        let url = format!("{}/auth/login", self.base_url);
        let auth_error = |reason: String| SyncError::Auth {
            platform: Platform::Peloton,
            reason,
        };

        let response = self
            .http
            .post(&url)
            .json(&LoginRequest {
                username_or_email: &login.email,
                password: &login.password,
            })
            .send()
            .await
            .map_err(|e| auth_error(e.to_string()))?;

        let body: LoginResponse = read_json(response).await.map_err(auth_error)?;
        tracing::info!("Peloton session established");
        Ok(SessionCredential::new(body.session_id))
    }

    /// Fetch workouts that started strictly after `now - days_back` days.
    ///
    /// Only the first page (`PAGE_SIZE` entries) in Peloton's native order is
    /// considered.
    pub async fn fetch_recent_workouts(
        &self,
        session: &SessionCredential,
        days_back: u32,
    ) -> Result<Vec<WorkoutSummary>> {
        let workouts = self.list_workouts(session).await?;
        let total = workouts.len();

        let cutoff = cutoff_for(Utc::now(), days_back);
        let recent = filter_recent(workouts, cutoff);

        tracing::debug!(
            total,
            recent = recent.len(),
            days_back,
            cutoff = %cutoff,
            "Filtered Peloton workouts by start time"
        );
        Ok(recent)
    }

    /// Fetch one page of the user's workouts, unfiltered.
    pub async fn list_workouts(&self, session: &SessionCredential) -> Result<Vec<WorkoutSummary>> {
        let url = format!("{}/api/me/workouts", self.base_url);

        let response = self
            .http
            .get(&url)
            .header(SESSION_HEADER, session.expose())
            .query(&[("limit", PAGE_SIZE)])
            .send()
            .await
            .map_err(|e| SyncError::FetchWorkouts(e.to_string()))?;

        let page: WorkoutPage = read_json(response)
            .await
            .map_err(SyncError::FetchWorkouts)?;
        Ok(page.data)
    }

    /// Get the full record for one workout.
    pub async fn fetch_workout_detail(
        &self,
        session: &SessionCredential,
        workout_id: &str,
    ) -> Result<WorkoutDetail> {
        let url = format!(
            "{}/api/workout/{}",
            self.base_url,
            urlencoding::encode(workout_id)
        );

        let response = self
            .http
            .get(&url)
            .header(SESSION_HEADER, session.expose())
            .send()
            .await
            .map_err(|e| SyncError::FetchWorkoutDetail(e.to_string()))?;

        read_json(response)
            .await
            .map_err(SyncError::FetchWorkoutDetail)
    }
}

/// Start of the look-back window (exclusive).
pub fn cutoff_for(now: DateTime<Utc>, days_back: u32) -> DateTime<Utc> {
    now - Duration::days(i64::from(days_back))
}

/// Keep workouts that started strictly after `cutoff`, in their original order.
///
/// Workouts without a start time are dropped.
pub fn filter_recent(workouts: Vec<WorkoutSummary>, cutoff: DateTime<Utc>) -> Vec<WorkoutSummary> {
    workouts
        .into_iter()
        .filter(|w| w.start_time.is_some_and(|start| start > cutoff))
        .collect()
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username_or_email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    session_id: String,
}
