// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Peloton → Garmin Connect sync command.
//!
//! Signs in to both platforms, copies recent Peloton workouts to Garmin one at
//! a time and prints the per-workout outcome.

use clap::Parser;
use peloton_garmin_sync::{app, config::Config, progress::TracingReporter, SyncError};
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(version, about = "Copy recent Peloton workouts to Garmin Connect")]
struct Cli {
    /// Only sync workouts that started within this many days
    #[arg(short, long)]
    days_back: Option<u32>,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    init_logging();
    let cli = Cli::parse();

    let config = Config::from_env().map_err(SyncError::Config)?;
    let days_back = cli.days_back.unwrap_or(config.days_back);
    tracing::info!(days_back, pacing = ?config.pacing, "Starting sync");

    let report = match app::run(&config, days_back, Arc::new(TracingReporter)).await {
        Ok(report) => report,
        Err(e) => {
            if e.is_session_error() {
                eprintln!("A session was rejected; sign in again and retry.");
            }
            eprintln!("Sync failed: {e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    println!("Sync summary (last {} days):", report.days_back);
    for outcome in report.outcomes() {
        println!("  {} - {}", outcome.record.label(), outcome.status_text());
    }
    println!(
        "  Synced: {}  Failed: {}",
        report.synced_count(),
        report.failed_count()
    );

    Ok(ExitCode::SUCCESS)
}

/// Initialize structured logging. `LOG_FORMAT=json` switches to JSON lines.
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("peloton_garmin_sync=debug,info"));

    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .with_current_span(true)
                    .flatten_event(true),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().compact().with_target(false))
            .init();
    }
}
