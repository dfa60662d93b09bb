// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Garmin Connect client for creating activities.
//!
//! One POST per activity. There is no idempotency key, so re-syncing an
//! overlapping window creates duplicate activities on Garmin.

use crate::config::Login;
use crate::error::{Platform, Result, SyncError};
use crate::models::{GarminActivity, SessionCredential, UploadReceipt};
use crate::services::http::{read_body, read_json, SESSION_HEADER};
use serde::{Deserialize, Serialize};

/// Garmin Connect client.
#[derive(Clone)]
pub struct GarminClient {
    http: reqwest::Client,
    base_url: String,
    sso_url: String,
}

impl GarminClient {
    /// Create a new client with the API root and the sign-in endpoint.
    pub fn new(base_url: impl Into<String>, sso_url: impl Into<String>) -> Self {
        Self::with_http(reqwest::Client::new(), base_url, sso_url)
    }

    /// Create a client sharing an existing connection pool.
    pub fn with_http(
        http: reqwest::Client,
        base_url: impl Into<String>,
        sso_url: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            sso_url: sso_url.into(),
        }
    }

    /// Sign in with account credentials.
    ///
    /// NOTE: Garmin's real sign-in is an SSO ticket exchange. This posts the
    /// credentials directly and expects a `session_id` back.
    pub async fn login(&self, login: &Login) -> Result<SessionCredential> {
        let auth_error = |reason: String| SyncError::Auth {
            platform: Platform::Garmin,
            reason,
        };

        let response = self
            .http
            .post(&self.sso_url)
            .json(&LoginRequest {
                username: &login.email,
                password: &login.password,
            })
            .send()
            .await
            .map_err(|e| auth_error(e.to_string()))?;

        let body: LoginResponse = read_json(response).await.map_err(auth_error)?;
        tracing::info!("Garmin session established");
        Ok(SessionCredential::new(body.session_id))
    }

    /// Upload one translated activity.
    ///
    /// Any 2xx reply counts as created. The body is kept as an opaque
    /// receipt: JSON when it parses, raw text otherwise.
    pub async fn upload_activity(
        &self,
        session: &SessionCredential,
        activity: &GarminActivity,
    ) -> Result<UploadReceipt> {
        let url = format!("{}/proxy/activity-service/activity", self.base_url);

        let response = self
            .http
            .post(&url)
            .header(SESSION_HEADER, session.expose())
            .json(activity)
            .send()
            .await
            .map_err(|e| SyncError::Upload(e.to_string()))?;

        let body = read_body(response).await.map_err(SyncError::Upload)?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(UploadReceipt(serde_json::Value::Null));
        }

        match serde_json::from_slice(&body) {
            Ok(value) => Ok(UploadReceipt(value)),
            Err(e) => {
                tracing::debug!(error = %e, "Upload receipt is not JSON, keeping text");
                let text = String::from_utf8_lossy(&body).into_owned();
                Ok(UploadReceipt(serde_json::Value::String(text)))
            }
        }
    }
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    session_id: String,
}
