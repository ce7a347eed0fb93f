//! Validated commit message text.

use std::fmt;

use crate::error::MessageError;

/// A commit message ready to hand to git.
///
/// Always non-empty and free of NUL bytes, since those cannot be passed as a
/// process argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage(String);

impl CommitMessage {
    /// Validate raw completion text, trimming surrounding whitespace.
    pub fn parse(raw: &str) -> Result<Self, MessageError> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(MessageError::Empty);
        }
        if text.contains('\0') {
            return Err(MessageError::ContainsNul);
        }
        Ok(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First line of the message.
    pub fn subject(&self) -> &str {
        self.0.lines().next().unwrap_or_default()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CommitMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
