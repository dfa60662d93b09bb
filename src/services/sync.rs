// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Sync orchestrator.
//!
//! Handles the core workflow:
//! 1. Fetch recent workouts from Peloton (a failure here aborts the run)
//! 2. For each workout, one at a time: fetch detail, translate, upload to Garmin
//! 3. Record a per-workout outcome; item failures never abort the run
//! 4. Pause between consecutive workouts to bound the request rate

use crate::config::DEFAULT_PACING_MS;
use crate::error::Result;
use crate::models::{
    OutcomeRecord, OutcomeStatus, SessionCredential, SyncLog, SyncOutcome, WorkoutSummary,
};
use crate::progress::{Severity, SyncReporter};
use crate::services::translate::translate;
use crate::services::{GarminClient, PelotonClient};
use std::sync::Arc;
use std::time::Duration;

/// Orchestrator states. `Aborted` is only reachable from `FetchingList`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SyncState {
    #[default]
    Idle,
    FetchingList,
    FetchingDetail,
    Translating,
    Uploading,
    Recording,
    Completed,
    Aborted,
}

/// Result of a run that got past the workout list.
#[derive(Debug, Clone)]
pub struct SyncReport {
    pub days_back: u32,
    pub log: SyncLog,
}

impl SyncReport {
    pub fn outcomes(&self) -> &[SyncOutcome] {
        self.log.entries()
    }

    pub fn synced_count(&self) -> usize {
        self.log.synced_count()
    }

    pub fn failed_count(&self) -> usize {
        self.log.failed_count()
    }
}

/// Drives one Peloton → Garmin sync run.
///
/// Holds no per-run state, so the same orchestrator may serve runs with
/// different credentials.
pub struct SyncOrchestrator {
    peloton: PelotonClient,
    garmin: GarminClient,
    reporter: Arc<dyn SyncReporter>,
    pacing: Duration,
}

impl SyncOrchestrator {
    pub fn new(
        peloton: PelotonClient,
        garmin: GarminClient,
        reporter: Arc<dyn SyncReporter>,
    ) -> Self {
        Self {
            peloton,
            garmin,
            reporter,
            pacing: Duration::from_millis(DEFAULT_PACING_MS),
        }
    }

    /// Override the pause between consecutive workouts.
    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn pacing(&self) -> Duration {
        self.pacing
    }

    /// Run one sync.
    ///
    /// Returns `Err` only when the workout list cannot be fetched; in that
    /// case no workout is processed. Every other failure is recorded in the
    /// report's log and the run continues with the next workout.
    pub async fn run(
        &self,
        peloton_session: &SessionCredential,
        garmin_session: &SessionCredential,
        days_back: u32,
    ) -> Result<SyncReport> {
        let mut log = SyncLog::new();

        self.transition(SyncState::FetchingList);
        let workouts = match self
            .peloton
            .fetch_recent_workouts(peloton_session, days_back)
            .await
        {
            Ok(workouts) => workouts,
            Err(e) => {
                self.transition(SyncState::Aborted);
                tracing::error!(error = %e, days_back, "Sync aborted");
                self.reporter
                    .status(&format!("Sync failed: {}", e), Severity::Error);
                return Err(e);
            }
        };

        tracing::info!(count = workouts.len(), days_back, "Found workouts to sync");
        self.reporter.status(
            &format!("Found {} workouts to sync", workouts.len()),
            Severity::Info,
        );

        for (index, workout) in workouts.iter().enumerate() {
            if index > 0 {
                tokio::time::sleep(self.pacing).await;
            }

            let outcome = self
                .sync_workout(workout, peloton_session, garmin_session)
                .await;

            self.transition(SyncState::Recording);
            self.reporter
                .record(&outcome.record.label(), &outcome.status_text());
            log.push(outcome);
        }

        self.transition(SyncState::Completed);
        tracing::info!(
            synced = log.synced_count(),
            failed = log.failed_count(),
            "Sync completed"
        );
        self.reporter.status("Sync completed", Severity::Success);

        Ok(SyncReport { days_back, log })
    }

    /// Fetch, translate and upload a single workout. Never fails; errors
    /// become a `Failed` outcome.
    async fn sync_workout(
        &self,
        workout: &WorkoutSummary,
        peloton_session: &SessionCredential,
        garmin_session: &SessionCredential,
    ) -> SyncOutcome {
        let workout_id = workout.id.clone();

        self.transition(SyncState::FetchingDetail);
        let detail = match self
            .peloton
            .fetch_workout_detail(peloton_session, &workout.id)
            .await
        {
            Ok(detail) => detail,
            Err(e) => {
                tracing::warn!(workout_id = %workout.id, error = %e, "Skipping workout");
                return SyncOutcome {
                    workout_id,
                    record: OutcomeRecord::Summary(workout.clone()),
                    status: OutcomeStatus::Failed(e.to_string()),
                };
            }
        };

        self.transition(SyncState::Translating);
        let activity = translate(&detail);

        self.transition(SyncState::Uploading);
        let status = match self.garmin.upload_activity(garmin_session, &activity).await {
            Ok(receipt) => {
                tracing::info!(
                    workout_id = %workout.id,
                    name = %activity.name,
                    receipt = %receipt.0,
                    "Workout uploaded"
                );
                OutcomeStatus::Synced
            }
            Err(e) => {
                tracing::warn!(workout_id = %workout.id, error = %e, "Upload failed");
                OutcomeStatus::Failed(e.to_string())
            }
        };

        SyncOutcome {
            workout_id,
            record: OutcomeRecord::Activity(activity),
            status,
        }
    }

    fn transition(&self, state: SyncState) {
        self.reporter.state(state);
    }
}
