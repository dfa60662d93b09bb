// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - platform clients and the sync pipeline.

pub mod auth;
pub mod garmin;
pub mod http;
pub mod peloton;
pub mod sync;
pub mod translate;

pub use auth::{AuthState, Authenticator};
pub use garmin::GarminClient;
pub use peloton::PelotonClient;
pub use sync::{SyncOrchestrator, SyncReport, SyncState};
pub use translate::translate;
