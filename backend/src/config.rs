// src/config.rs

use std::{env, net::SocketAddr};

use dotenvy::dotenv;

use crate::models::result::ScoringMode;

pub const DEFAULT_SESSION_TTL_SECS: u64 = 3600;
/// Upper bound for `SESSION_TTL_SECS` (30 days).
pub const MAX_SESSION_TTL_SECS: u64 = 30 * 24 * 3600;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
/// How often idle sessions are swept from the store.
pub const SESSION_PURGE_INTERVAL_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct Config {
    pub session_secret: String,
    /// Session token lifetime, also the idle threshold for purging.
    pub session_ttl: u64,
    pub bind_addr: SocketAddr,
    pub scoring_mode: ScoringMode,
    pub static_dir: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let session_secret = env::var("SESSION_SECRET")
            .expect("SESSION_SECRET must be set");

        let session_ttl = parse_session_ttl(env::var("SESSION_TTL_SECS").ok().as_deref());

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .expect("BIND_ADDR must be a socket address, e.g. 0.0.0.0:3000");

        let scoring_mode = match env::var("SCORING_MODE") {
            Ok(value) => value.parse().unwrap_or_else(|e| panic!("SCORING_MODE: {}", e)),
            Err(_) => ScoringMode::default(),
        };

        let static_dir = env::var("STATIC_DIR")
            .unwrap_or_else(|_| "static".to_string());

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        Self {
            session_secret,
            session_ttl,
            bind_addr,
            scoring_mode,
            static_dir,
            rust_log,
        }
    }
}

/// Parses `SESSION_TTL_SECS`, falling back to the default when unset or not a number.
/// The result is clamped to `1..=MAX_SESSION_TTL_SECS`.
pub fn parse_session_ttl(raw: Option<&str>) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_SESSION_TTL_SECS)
        .clamp(1, MAX_SESSION_TTL_SECS)
}
