// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Peloton → Garmin Connect workout sync.
//!
//! This crate fetches recent Peloton workouts, translates them into Garmin
//! activities and uploads them one at a time, reporting a per-workout
//! outcome without letting single failures stop the run.

pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod progress;
pub mod services;

pub use error::{Platform, Result, SyncError};
