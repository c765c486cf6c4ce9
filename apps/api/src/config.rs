use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::matching::composer::MatchWeights;

/// Application configuration loaded from environment variables.
/// Fails at startup on malformed values; every variable has a default.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Replaces the built-in skill catalog when set.
    pub skill_lexicon_path: Option<PathBuf>,
    pub weights: MatchWeights,
    pub max_batch_jobs: usize,
    /// Request bodies above this size are rejected with 413.
    pub max_body_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = MatchWeights::default();
        let weights = MatchWeights {
            coverage: parse_env("MATCH_WEIGHT_COVERAGE", defaults.coverage)?,
            skills: parse_env("MATCH_WEIGHT_SKILLS", defaults.skills)?,
            experience: parse_env("MATCH_WEIGHT_EXPERIENCE", defaults.experience)?,
            override_threshold: parse_env("MATCH_OVERRIDE_THRESHOLD", defaults.override_threshold)?,
            override_cap: parse_env("MATCH_OVERRIDE_CAP", defaults.override_cap)?,
        };
        weights.validate().context("Invalid MATCH_* configuration")?;

        Ok(Config {
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            skill_lexicon_path: std::env::var_os("SKILL_LEXICON_PATH")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            weights,
            max_batch_jobs: parse_env("MAX_BATCH_JOBS", 500)?,
            max_body_bytes: parse_env("MAX_BODY_BYTES", 1024 * 1024)?,
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        _ => Ok(default),
    }
}
