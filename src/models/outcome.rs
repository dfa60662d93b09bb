// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-workout sync outcomes and the run-scoped outcome log.

use crate::models::{GarminActivity, WorkoutSummary};

/// What an outcome refers to: the summary when no detail could be fetched,
/// the translated activity otherwise.
#[derive(Debug, Clone)]
pub enum OutcomeRecord {
    Summary(WorkoutSummary),
    Activity(GarminActivity),
}

impl OutcomeRecord {
    pub fn label(&self) -> String {
        match self {
            OutcomeRecord::Summary(summary) => summary.label(),
            OutcomeRecord::Activity(activity) => activity.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeStatus {
    Synced,
    Failed(String),
}

/// Result for one workout of a run. Never mutated once recorded.
#[derive(Debug, Clone)]
pub struct SyncOutcome {
    /// Peloton workout id from the list endpoint
    pub workout_id: String,
    pub record: OutcomeRecord,
    pub status: OutcomeStatus,
}

impl SyncOutcome {
    pub fn is_synced(&self) -> bool {
        self.status == OutcomeStatus::Synced
    }

    /// Text shown next to the record in the visible log.
    pub fn status_text(&self) -> String {
        match &self.status {
            OutcomeStatus::Synced => "Synced successfully".to_string(),
            OutcomeStatus::Failed(reason) => format!("Failed: {}", reason),
        }
    }
}

/// Ordered, append-only log of the outcomes of one run.
#[derive(Debug, Clone, Default)]
pub struct SyncLog {
    entries: Vec<SyncOutcome>,
}

impl SyncLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, outcome: SyncOutcome) {
        self.entries.push(outcome);
    }

    pub fn entries(&self) -> &[SyncOutcome] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SyncOutcome> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn synced_count(&self) -> usize {
        self.entries.iter().filter(|o| o.is_synced()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.len() - self.synced_count()
    }
}

impl<'a> IntoIterator for &'a SyncLog {
    type Item = &'a SyncOutcome;
    type IntoIter = std::slice::Iter<'a, SyncOutcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
