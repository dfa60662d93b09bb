// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Sign-in to both platforms.
//!
//! Credentials are obtained once and held for a run. Nothing is refreshed or
//! persisted; an expired session shows up as a request failure later on.

use crate::config::Login;
use crate::error::{Platform, Result};
use crate::models::SessionCredential;
use crate::progress::{Severity, SyncReporter};
use crate::services::{GarminClient, PelotonClient};
use std::sync::Arc;

/// Session credentials collected so far.
#[derive(Debug, Default, Clone)]
pub struct AuthState {
    peloton: Option<SessionCredential>,
    garmin: Option<SessionCredential>,
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, platform: Platform, credential: SessionCredential) {
        *self.slot(platform) = Some(credential);
    }

    pub fn clear(&mut self, platform: Platform) {
        *self.slot(platform) = None;
    }

    pub fn get(&self, platform: Platform) -> Option<&SessionCredential> {
        match platform {
            Platform::Peloton => self.peloton.as_ref(),
            Platform::Garmin => self.garmin.as_ref(),
        }
    }

    /// A sync may start only once both platforms are signed in.
    pub fn is_ready(&self) -> bool {
        self.peloton.is_some() && self.garmin.is_some()
    }

    /// `(peloton, garmin)` credentials, if both are present.
    pub fn credentials(&self) -> Option<(&SessionCredential, &SessionCredential)> {
        Some((self.peloton.as_ref()?, self.garmin.as_ref()?))
    }

    fn slot(&mut self, platform: Platform) -> &mut Option<SessionCredential> {
        match platform {
            Platform::Peloton => &mut self.peloton,
            Platform::Garmin => &mut self.garmin,
        }
    }
}

/// Performs the sign-in handshakes and reports their outcome.
pub struct Authenticator {
    peloton: PelotonClient,
    garmin: GarminClient,
    reporter: Arc<dyn SyncReporter>,
}

impl Authenticator {
    pub fn new(
        peloton: PelotonClient,
        garmin: GarminClient,
        reporter: Arc<dyn SyncReporter>,
    ) -> Self {
        Self {
            peloton,
            garmin,
            reporter,
        }
    }

    /// Sign in to one platform and store the credential in `state`.
    ///
    /// On failure the platform's previous credential is discarded.
    pub async fn authenticate(
        &self,
        platform: Platform,
        login: &Login,
        state: &mut AuthState,
    ) -> Result<SessionCredential> {
        let result = match platform {
            Platform::Peloton => self.peloton.login(login).await,
            Platform::Garmin => self.garmin.login(login).await,
        };

        match result {
            Ok(credential) => {
                state.set(platform, credential.clone());
                self.reporter.status(
                    &format!("{} authentication successful", platform),
                    Severity::Success,
                );
                Ok(credential)
            }
            Err(e) => {
                state.clear(platform);
                tracing::warn!(%platform, error = %e, "Authentication failed");
                self.reporter.status(&e.to_string(), Severity::Error);
                Err(e)
            }
        }
    }
}
