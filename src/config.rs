use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// The application's configuration.
#[derive(Clone)]
pub struct Config {
    /// Where the logged-in user's projection is cached between runs.
    pub session_cache_path: PathBuf,
    /// Simulated round-trip latency for session operations, in ms.
    pub auth_latency_ms: u64,
    /// Simulated round-trip latency for notice operations, in ms.
    pub notice_latency_ms: u64,
    /// The seeded administrator's full name.
    pub admin_name: String,
    /// The seeded administrator's email address.
    pub admin_email: String,
    /// The seeded administrator's password.
    pub admin_secret: String,
}

impl Config {
    /// Creates a new `Config` from environment variables.
    ///
    /// Every variable has a demo-friendly default; the latency values
    /// default to the mock backend's 800 ms auth / 500 ms notice round
    /// trips.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `Config`.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            session_cache_path: env::var("SESSION_CACHE_PATH")
                .unwrap_or_else(|_| ".notice-board-session.json".to_string())
                .into(),
            auth_latency_ms: env::var("AUTH_LATENCY_MS")
                .unwrap_or_else(|_| "800".to_string())
                .parse()
                .context("Invalid AUTH_LATENCY_MS")?,
            notice_latency_ms: env::var("NOTICE_LATENCY_MS")
                .unwrap_or_else(|_| "500".to_string())
                .parse()
                .context("Invalid NOTICE_LATENCY_MS")?,
            admin_name: env::var("SEED_ADMIN_NAME")
                .unwrap_or_else(|_| "Admin User".to_string()),
            admin_email: env::var("SEED_ADMIN_EMAIL")
                .unwrap_or_else(|_| "admin@example.com".to_string()),
            admin_secret: env::var("SEED_ADMIN_PASSWORD")
                .unwrap_or_else(|_| "admin123".to_string()),
        })
    }
}
