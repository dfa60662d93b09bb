// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for both platforms and for sync results.

pub mod activity;
pub mod outcome;
pub mod session;
pub mod workout;

pub use activity::{GarminActivity, UploadReceipt};
pub use outcome::{OutcomeRecord, OutcomeStatus, SyncLog, SyncOutcome};
pub use session::SessionCredential;
pub use workout::{WorkoutDetail, WorkoutPage, WorkoutSummary};
