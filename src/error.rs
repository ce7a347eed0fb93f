//! Error types for commitgen modules using thiserror.

use thiserror::Error;

/// Errors from running an external command.
///
/// Exactly one of these is produced per failed call, whether the process
/// could not start, exited non-zero, or wrote diagnostics to stderr.
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Failed to launch `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {}: {stderr}",
            code.map_or("unknown status".to_string(), |c| format!("code {c}")))]
    NonZeroExit {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("`{command}` reported: {stderr}")]
    Diagnostic { command: String, stderr: String },
}

impl ProcessError {
    /// The command line that failed, as displayed to the user.
    pub fn command(&self) -> &str {
        match self {
            ProcessError::Spawn { command, .. }
            | ProcessError::NonZeroExit { command, .. }
            | ProcessError::Diagnostic { command, .. } => command,
        }
    }

    /// Captured diagnostic text (stderr, or the OS error for launch failures).
    pub fn diagnostic(&self) -> String {
        match self {
            ProcessError::Spawn { source, .. } => source.to_string(),
            ProcessError::NonZeroExit { stderr, .. } | ProcessError::Diagnostic { stderr, .. } => {
                stderr.clone()
            }
        }
    }
}

/// Errors from the completion endpoint.
#[derive(Error, Debug)]
pub enum CompletionError {
    /// The provider rejected the request (bad key, quota, rate limit, ...).
    /// Displays as the provider's own message.
    #[error("{message}")]
    Provider { status: u16, message: String },

    #[error("Request to completion endpoint failed: {0}")]
    Transport(String),

    #[error("Completion endpoint returned an unexpected response: {0}")]
    InvalidResponse(String),
}

impl CompletionError {
    /// HTTP status for provider rejections.
    pub fn status(&self) -> Option<u16> {
        match self {
            CompletionError::Provider { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Reasons a generated message cannot be used for a commit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MessageError {
    #[error("Language model returned an empty commit message")]
    Empty,

    #[error("Generated commit message contains a NUL byte")]
    ContainsNul,
}

/// A failed commit workflow step.
#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("Failed to collect staged changes: {0}")]
    Collect(#[source] ProcessError),

    #[error(transparent)]
    Completion(#[from] CompletionError),

    #[error(transparent)]
    Message(#[from] MessageError),

    #[error("Failed to create commit: {0}")]
    Commit(#[source] ProcessError),
}
