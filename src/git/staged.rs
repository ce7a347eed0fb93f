//! Staged change collection.

use std::path::Path;

use tracing::debug;

use crate::error::ProcessError;
use crate::process::{ProcessCommand, ProcessRunner};

/// Textual summary of staged modifications, one `STATUS\tPATH` line per file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet(String);

impl ChangeSet {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when nothing is staged.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Number of staged entries.
    pub fn file_count(&self) -> usize {
        self.0.lines().filter(|line| !line.trim().is_empty()).count()
    }
}

/// `git diff --cached --name-status`: index against HEAD, never the working tree.
pub fn staged_diff_command() -> ProcessCommand {
    ProcessCommand::new("git").args(["diff", "--cached", "--name-status"])
}

/// Collect the staged change summary for the repository at `cwd`.
///
/// Returns an empty [`ChangeSet`] when nothing is staged.
pub async fn collect_staged_changes<R>(runner: &R, cwd: &Path) -> Result<ChangeSet, ProcessError>
where
    R: ProcessRunner + ?Sized,
{
    let output = runner.run(&staged_diff_command(), cwd).await?;
    let changes = ChangeSet::new(output);

    debug!(files = changes.file_count(), "Collected staged changes");

    Ok(changes)
}
