// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Sign in to both platforms and run one sync.

use crate::config::Config;
use crate::error::{Platform, Result};
use crate::progress::SyncReporter;
use crate::services::{
    AuthState, Authenticator, GarminClient, PelotonClient, SyncOrchestrator, SyncReport,
};
use std::sync::Arc;

/// Sign in to Peloton and Garmin, then sync the last `days_back` days.
///
/// Both sign-ins are attempted and reported. The sync starts only if both
/// succeed; otherwise the first sign-in error is returned and no workout is
/// touched. All requests share one HTTP connection pool.
pub async fn run(
    config: &Config,
    days_back: u32,
    reporter: Arc<dyn SyncReporter>,
) -> Result<SyncReport> {
    let http = reqwest::Client::new();
    let peloton = PelotonClient::with_http(http.clone(), &config.peloton_base_url);
    let garmin = GarminClient::with_http(http, &config.garmin_base_url, &config.garmin_sso_url);

    let authenticator = Authenticator::new(peloton.clone(), garmin.clone(), reporter.clone());
    let mut auth = AuthState::new();
    let peloton_session = authenticator
        .authenticate(Platform::Peloton, &config.peloton_login, &mut auth)
        .await;
    let garmin_session = authenticator
        .authenticate(Platform::Garmin, &config.garmin_login, &mut auth)
        .await;

    let (peloton_session, garmin_session) = match (peloton_session, garmin_session) {
        (Ok(p), Ok(g)) => (p, g),
        (Err(e), _) | (_, Err(e)) => {
            tracing::error!(error = %e, "Sign-in to both Peloton and Garmin is required");
            return Err(e);
        }
    };

    SyncOrchestrator::new(peloton, garmin, reporter)
        .with_pacing(config.pacing)
        .run(&peloton_session, &garmin_session, days_back)
        .await
}
