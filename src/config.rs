//! Runtime configuration from environment variables.

use std::env;
use std::time::Duration;

use tracing::warn;

/// Model used when nothing else is configured.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Chat-completions endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

const MODEL_ENV_VAR: &str = "COMMITGEN_MODEL";
const ENDPOINT_ENV_VAR: &str = "COMMITGEN_API_URL";

/// Environment variable bounding one whole run, in seconds.
pub const TIMEOUT_ENV_VAR: &str = "COMMITGEN_TIMEOUT";

/// Where and what to ask for a completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionConfig {
    pub model: String,
    pub endpoint: String,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl CompletionConfig {
    /// Defaults overlaid with `COMMITGEN_MODEL` and `COMMITGEN_API_URL`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            model: non_empty_var(MODEL_ENV_VAR).unwrap_or(defaults.model),
            endpoint: non_empty_var(ENDPOINT_ENV_VAR).unwrap_or(defaults.endpoint),
        }
    }

    /// Apply command-line overrides.
    pub fn with_overrides(mut self, model: Option<String>, endpoint: Option<String>) -> Self {
        if let Some(model) = model.filter(|m| !m.trim().is_empty()) {
            self.model = model;
        }
        if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
            self.endpoint = endpoint;
        }
        self
    }
}

/// Get the configured run timeout.
///
/// Reads `COMMITGEN_TIMEOUT` (seconds). Unset means no timeout. Logs a
/// warning and falls back to no timeout if the value is invalid.
pub fn run_timeout() -> Option<Duration> {
    match env::var(TIMEOUT_ENV_VAR) {
        Ok(v) if !v.trim().is_empty() => match v.trim().parse::<u64>() {
            Ok(0) => None,
            Ok(secs) => Some(Duration::from_secs(secs)),
            Err(_) => {
                warn!("Invalid {} value '{}', running without a timeout", TIMEOUT_ENV_VAR, v);
                None
            }
        },
        _ => None,
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
