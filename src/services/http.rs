// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Response handling shared by the Peloton and Garmin clients.
//!
//! Failures are reduced to a plain description; each client wraps it in the
//! error variant for its stage.

use crate::error::SyncError;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

/// Header carrying the session credential on both platforms.
pub const SESSION_HEADER: &str = "Session-Id";

/// Check response status and return the body if successful.
pub async fn read_body(response: reqwest::Response) -> Result<Vec<u8>, String> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(describe_status(status, &body));
    }

    response
        .bytes()
        .await
        .map(|b| b.to_vec())
        .map_err(|e| e.to_string())
}

/// Check response and parse JSON body.
pub async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, String> {
    let body = read_body(response).await?;
    parse_json(&body)
}

fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, String> {
    serde_json::from_slice(body).map_err(|e| format!("JSON parse error: {}", e))
}

fn describe_status(status: StatusCode, body: &str) -> String {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        tracing::warn!(status = %status, "Session credential rejected");
        return format!("HTTP {}: {} ({})", status, body, SyncError::SESSION_REJECTED);
    }

    format!("HTTP {}: {}", status, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_status_includes_body() {
        let reason = describe_status(StatusCode::INTERNAL_SERVER_ERROR, "upstream down");
        assert_eq!(reason, "HTTP 500 Internal Server Error: upstream down");
    }

    #[test]
    fn test_describe_status_marks_rejected_session() {
        let reason = describe_status(StatusCode::UNAUTHORIZED, "");
        assert!(reason.starts_with("HTTP 401 Unauthorized"));
        assert!(reason.contains(SyncError::SESSION_REJECTED));
    }

    #[test]
    fn test_parse_json_error_is_described() {
        let result: Result<serde_json::Value, _> = parse_json(b"not json");
        assert!(result.unwrap_err().starts_with("JSON parse error:"));
    }
}
