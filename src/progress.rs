// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Progress and status reporting for sync runs.
//!
//! The orchestrator only talks to the `SyncReporter` trait; presentation is
//! up to the implementation (log lines, a terminal UI, a web page, ...).

use crate::services::sync::SyncState;
use std::sync::Mutex;

/// Severity of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// Receiver of status messages and per-workout log lines.
pub trait SyncReporter: Send + Sync {
    /// Report a status message.
    fn status(&self, message: &str, severity: Severity);

    /// Append one finished workout to the visible log.
    fn record(&self, label: &str, status_text: &str);

    /// Observe a state transition of the orchestrator.
    fn state(&self, _state: SyncState) {}
}

/// Reporter that writes everything through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl SyncReporter for TracingReporter {
    fn status(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Error => tracing::error!("{}", message),
            Severity::Info | Severity::Success => tracing::info!(?severity, "{}", message),
        }
    }

    fn record(&self, label: &str, status_text: &str) {
        tracing::info!(workout = %label, status = %status_text, "Workout processed");
    }

    fn state(&self, state: SyncState) {
        tracing::debug!(?state, "Sync state changed");
    }
}

/// Event captured by `MemoryReporter`.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportEvent {
    Status { message: String, severity: Severity },
    Record { label: String, status_text: String },
    State(SyncState),
}

/// Reporter that keeps every event in memory, in order.
///
/// Useful for embedding a UI that renders after the fact, and for tests.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    events: Mutex<Vec<ReportEvent>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events so far.
    pub fn events(&self) -> Vec<ReportEvent> {
        self.lock().clone()
    }

    /// Status messages only, in order.
    pub fn statuses(&self) -> Vec<(String, Severity)> {
        self.lock()
            .iter()
            .filter_map(|e| match e {
                ReportEvent::Status { message, severity } => Some((message.clone(), *severity)),
                _ => None,
            })
            .collect()
    }

    /// Log lines only, in order.
    pub fn records(&self) -> Vec<(String, String)> {
        self.lock()
            .iter()
            .filter_map(|e| match e {
                ReportEvent::Record { label, status_text } => {
                    Some((label.clone(), status_text.clone()))
                }
                _ => None,
            })
            .collect()
    }

    /// State transitions only, in order.
    pub fn states(&self) -> Vec<SyncState> {
        self.lock()
            .iter()
            .filter_map(|e| match e {
                ReportEvent::State(state) => Some(*state),
                _ => None,
            })
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<ReportEvent>> {
        // A poisoned lock only means a reporter call panicked; the data is still usable.
        self.events.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn push(&self, event: ReportEvent) {
        self.lock().push(event);
    }
}

impl SyncReporter for MemoryReporter {
    fn status(&self, message: &str, severity: Severity) {
        self.push(ReportEvent::Status {
            message: message.to_string(),
            severity,
        });
    }

    fn record(&self, label: &str, status_text: &str) {
        self.push(ReportEvent::Record {
            label: label.to_string(),
            status_text: status_text.to_string(),
        });
    }

    fn state(&self, state: SyncState) {
        self.push(ReportEvent::State(state));
    }
}
