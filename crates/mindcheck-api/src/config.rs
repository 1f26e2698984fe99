use std::env;
use std::path::PathBuf;
use std::time::Duration;

use eyre::eyre;

pub const DEFAULT_MODEL_ID: &str = "us.anthropic.claude-sonnet-4-20250514-v1:0";
pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_SUGGEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_SESSION_TTL_SECS: u64 = 60 * 60;

/// Process configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Catalog file to load instead of the built-in catalog.
    pub catalog_path: Option<PathBuf>,
    pub ai_enabled: bool,
    pub model_id: String,
    pub suggest_timeout: Duration,
    /// Idle time after which a session is dropped.
    pub session_ttl: Duration,
    pub region: String,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let ai_enabled = match get("MINDCHECK_AI_ENABLED") {
            Some(raw) => parse_bool("MINDCHECK_AI_ENABLED", &raw)?,
            None => true,
        };

        let timeout_secs = match get("MINDCHECK_SUGGEST_TIMEOUT_SECS") {
            Some(raw) => parse_secs("MINDCHECK_SUGGEST_TIMEOUT_SECS", &raw)?,
            None => DEFAULT_SUGGEST_TIMEOUT_SECS,
        };

        let ttl_secs = match get("MINDCHECK_SESSION_TTL_SECS") {
            Some(raw) => parse_secs("MINDCHECK_SESSION_TTL_SECS", &raw)?,
            None => DEFAULT_SESSION_TTL_SECS,
        };

        Ok(Self {
            catalog_path: get("MINDCHECK_CATALOG_PATH").map(PathBuf::from),
            ai_enabled,
            model_id: get("MINDCHECK_MODEL_ID").unwrap_or_else(|| DEFAULT_MODEL_ID.to_string()),
            suggest_timeout: Duration::from_secs(timeout_secs),
            session_ttl: Duration::from_secs(ttl_secs),
            region: get("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
        })
    }
}

fn parse_bool(key: &str, raw: &str) -> eyre::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(eyre!("{key} must be true or false, got '{raw}'")),
    }
}

fn parse_secs(key: &str, raw: &str) -> eyre::Result<u64> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .ok_or_else(|| eyre!("{key} must be a positive integer, got '{raw}'"))
}
