//! Environment-driven configuration for the assistant.
//!
//! `from_env` applies the project `.env` first (existing environment always
//! wins) and then reads the assistant's knobs, falling back to defaults with
//! a warning when a value is present but malformed.

use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

/// Default chat model when `OPENAI_MODEL` / `MODEL` are unset.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Assistant configuration.
///
/// The OpenAI API key itself is not held here; `ChatOpenAI` reads
/// `OPENAI_API_KEY` through its own client config.
#[derive(Debug, Clone)]
pub struct AssistConfig {
    /// Chat model name.
    pub model: String,
    /// Base URL of the document store's listings endpoint; `None` means the
    /// deployment wires a store in programmatically.
    pub listings_base_url: Option<String>,
    /// Overall window for one answer call.
    pub timeout: Duration,
    /// Bound on tool round-trips within one question.
    pub max_tool_rounds: u32,
}

impl Default for AssistConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            listings_base_url: None,
            timeout: crate::flow::DEFAULT_TIMEOUT,
            max_tool_rounds: crate::flow::DEFAULT_MAX_TOOL_ROUNDS,
        }
    }
}

impl AssistConfig {
    /// Reads configuration from the environment.
    ///
    /// - `OPENAI_MODEL` (or `MODEL`): chat model name.
    /// - `LISTINGS_BASE_URL`: document-store endpoint base.
    /// - `ASSIST_TIMEOUT_SECS`: overall answer window, seconds.
    /// - `ASSIST_MAX_TOOL_ROUNDS`: tool round-trip bound.
    pub fn from_env() -> Self {
        let _ = dotenv::dotenv();
        let defaults = Self::default();
        Self {
            model: std::env::var("OPENAI_MODEL")
                .or_else(|_| std::env::var("MODEL"))
                .unwrap_or(defaults.model),
            listings_base_url: std::env::var("LISTINGS_BASE_URL").ok(),
            timeout: Duration::from_secs(parse_env(
                "ASSIST_TIMEOUT_SECS",
                defaults.timeout.as_secs(),
            )),
            max_tool_rounds: parse_env("ASSIST_MAX_TOOL_ROUNDS", defaults.max_tool_rounds),
        }
    }
}

/// Parses an env var, keeping `default` when unset; warns and keeps `default`
/// when set but unparsable.
fn parse_env<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display + Copy,
{
    match std::env::var(key) {
        Err(_) => default,
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(key = key, value = %raw, default = %default, "invalid value, using default");
            default
        }),
    }
}
