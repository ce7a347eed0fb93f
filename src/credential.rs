//! API key handling.
//!
//! The key lives only in memory for the current process and is redacted from
//! every formatted representation.

use std::env;
use std::fmt;
use std::io::{self, IsTerminal};

use dialoguer::Password;
use tracing::debug;

/// Environment variables checked for an API key, in order.
pub const API_KEY_ENV_VARS: [&str; 2] = ["COMMITGEN_API_KEY", "OPENAI_API_KEY"];

/// A completion API key.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a key, returning `None` for blank input.
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into().trim().to_string();
        if key.is_empty() { None } else { Some(Self(key)) }
    }

    /// The raw key, for building the authorization header only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Read the key from the environment.
pub fn credential_from_env() -> Option<Credential> {
    API_KEY_ENV_VARS.iter().find_map(|name| {
        let credential = env::var(name).ok().and_then(Credential::new)?;
        debug!(source = name, "Using API key from environment");
        Some(credential)
    })
}

/// Ask for the key once with a hidden prompt.
///
/// Returns `None` when stdin is not a terminal or the prompt is left blank.
pub fn prompt_for_credential() -> Option<Credential> {
    if !io::stdin().is_terminal() {
        return None;
    }

    Password::new()
        .with_prompt("Enter OpenAI API key")
        .allow_empty_password(true)
        .interact()
        .ok()
        .and_then(Credential::new)
}

/// Environment first, then the interactive prompt.
pub fn acquire_credential() -> Option<Credential> {
    credential_from_env().or_else(prompt_for_credential)
}
