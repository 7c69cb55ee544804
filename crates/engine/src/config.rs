//! Runtime configuration read from the environment.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

/// Seed for the initial random grid (`u32`)
pub const SEED_ENV: &str = "LIFE_SEED";

/// File to write logs to; logging is off when unset
pub const LOG_PATH_ENV: &str = "LIFE_LOG_PATH";

/// Where the seed came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
    /// Taken from `LIFE_SEED`
    Env,
    /// Derived from the system clock
    Clock,
    /// `LIFE_SEED` was set but not a valid `u32`; the clock was used instead
    Rejected(String),
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifeConfig {
    pub seed: u32,
    pub seed_source: SeedSource,
    pub log_path: Option<String>,
}

impl LifeConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_vars(env::var(SEED_ENV).ok(), env::var(LOG_PATH_ENV).ok())
    }

    /// Create from raw variable values (`None` = unset)
    pub fn from_vars(seed: Option<String>, log_path: Option<String>) -> Self {
        let (seed, seed_source) = match seed.map(|s| s.trim().to_string()) {
            None => (clock_seed(), SeedSource::Clock),
            Some(s) if s.is_empty() => (clock_seed(), SeedSource::Clock),
            Some(s) => match s.parse::<u32>() {
                Ok(v) => (v, SeedSource::Env),
                Err(_) => (clock_seed(), SeedSource::Rejected(s)),
            },
        };

        let log_path = log_path
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            seed,
            seed_source,
            log_path,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
