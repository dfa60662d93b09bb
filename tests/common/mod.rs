// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::Utc;
use peloton_garmin_sync::models::SessionCredential;
use peloton_garmin_sync::progress::MemoryReporter;
use peloton_garmin_sync::services::{GarminClient, PelotonClient, SyncOrchestrator};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const PELOTON_SESSION: &str = "peloton-session";
pub const GARMIN_SESSION: &str = "garmin-session";
pub const UPLOAD_PATH: &str = "/proxy/activity-service/activity";

/// Pacing used by tests; short but measurable.
#[allow(dead_code)]
pub const TEST_PACING: Duration = Duration::from_millis(50);

#[allow(dead_code)]
pub fn sessions() -> (SessionCredential, SessionCredential) {
    (
        SessionCredential::new(PELOTON_SESSION),
        SessionCredential::new(GARMIN_SESSION),
    )
}

/// Clients for both platforms pointed at the same mock server.
#[allow(dead_code)]
pub fn clients(server: &MockServer) -> (PelotonClient, GarminClient) {
    (
        PelotonClient::new(server.uri()),
        GarminClient::new(server.uri(), format!("{}/sso/signin", server.uri())),
    )
}

/// Orchestrator against the mock server, recording every report in memory.
#[allow(dead_code)]
pub fn orchestrator(server: &MockServer) -> (SyncOrchestrator, Arc<MemoryReporter>) {
    let reporter = Arc::new(MemoryReporter::new());
    let (peloton, garmin) = clients(server);
    let orchestrator =
        SyncOrchestrator::new(peloton, garmin, reporter.clone()).with_pacing(TEST_PACING);
    (orchestrator, reporter)
}

/// Summary JSON for a workout that started `hours_ago` hours before now.
#[allow(dead_code)]
pub fn summary_json(id: &str, hours_ago: i64) -> Value {
    json!({
        "id": id,
        "start_time": Utc::now().timestamp() - hours_ago * 3600,
        "name": format!("Workout {}", id),
        "fitness_discipline": "cycling",
    })
}

#[allow(dead_code)]
pub fn detail_json(id: &str, title: &str) -> Value {
    json!({
        "id": id,
        "start_time": 1_709_287_200,
        "duration": 1800,
        "average_heartrate": 140.0,
        "max_heartrate": 170.0,
        "average_watts": 180.0,
        "max_watts": 400.0,
        "distance": 15.5,
        "average_speed": 8.6,
        "max_speed": 12.0,
        "total_calories": 450,
        "fitness_discipline": "cycling",
        "title": title,
    })
}

/// Mount the workout list endpoint with the given summaries.
#[allow(dead_code)]
pub async fn mount_workout_list(server: &MockServer, summaries: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path("/api/me/workouts"))
        .and(query_param("limit", "100"))
        .and(header("Session-Id", PELOTON_SESSION))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": summaries })))
        .mount(server)
        .await;
}

/// Mount a successful detail response for one workout.
#[allow(dead_code)]
pub async fn mount_detail(server: &MockServer, id: &str, title: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/api/workout/{}", id)))
        .and(header("Session-Id", PELOTON_SESSION))
        .respond_with(ResponseTemplate::new(200).set_body_json(detail_json(id, title)))
        .mount(server)
        .await;
}

/// Mount a Garmin upload endpoint that accepts everything.
#[allow(dead_code)]
pub async fn mount_upload_ok(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(UPLOAD_PATH))
        .and(header("Session-Id", GARMIN_SESSION))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "activityId": 42 })))
        .mount(server)
        .await;
}

/// Number of requests the server received on `request_path`.
#[allow(dead_code)]
pub async fn request_count(server: &MockServer, request_path: &str) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|r| r.url.path() == request_path)
        .count()
}
