// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honoured for local use.

use std::env;
use std::time::Duration;

pub const DEFAULT_PELOTON_BASE_URL: &str = "https://api.onepeloton.com";
pub const DEFAULT_GARMIN_BASE_URL: &str = "https://connect.garmin.com/modern";
pub const DEFAULT_GARMIN_SSO_URL: &str = "https://sso.garmin.com/sso/signin";

/// Days to look back when neither the environment nor the caller says otherwise.
pub const DEFAULT_DAYS_BACK: u32 = 7;

/// Pause between consecutive workouts.
pub const DEFAULT_PACING_MS: u64 = 1000;

/// Account login for one platform.
#[derive(Clone)]
pub struct Login {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Login {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Login")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Peloton API root
    pub peloton_base_url: String,
    /// Garmin Connect API root
    pub garmin_base_url: String,
    /// Garmin sign-in endpoint
    pub garmin_sso_url: String,

    pub peloton_login: Login,
    pub garmin_login: Login,

    /// Default look-back window for a run
    pub days_back: u32,
    /// Pause between consecutive workouts
    pub pacing: Duration,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            peloton_base_url: "http://localhost:8081".to_string(),
            garmin_base_url: "http://localhost:8082".to_string(),
            garmin_sso_url: "http://localhost:8082/sso/signin".to_string(),
            peloton_login: Login {
                email: "rider@example.com".to_string(),
                password: "test_password".to_string(),
            },
            garmin_login: Login {
                email: "rider@example.com".to_string(),
                password: "test_password".to_string(),
            },
            days_back: DEFAULT_DAYS_BACK,
            pacing: Duration::from_millis(DEFAULT_PACING_MS),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            peloton_base_url: env::var("PELOTON_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_PELOTON_BASE_URL.to_string()),
            garmin_base_url: env::var("GARMIN_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GARMIN_BASE_URL.to_string()),
            garmin_sso_url: env::var("GARMIN_SSO_URL")
                .unwrap_or_else(|_| DEFAULT_GARMIN_SSO_URL.to_string()),

            peloton_login: Login {
                email: required("PELOTON_EMAIL")?,
                password: required("PELOTON_PASSWORD")?,
            },
            garmin_login: Login {
                email: required("GARMIN_EMAIL")?,
                password: required("GARMIN_PASSWORD")?,
            },

            days_back: parse_or("SYNC_DAYS_BACK", DEFAULT_DAYS_BACK)?,
            pacing: Duration::from_millis(parse_or("SYNC_PACING_MS", DEFAULT_PACING_MS)?),
        })
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name)
        .map(|v| v.trim().to_string())
        .map_err(|_| ConfigError::Missing(name))
}

fn parse_or<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
            name,
            value: raw.clone(),
        }),
        Err(_) => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}
