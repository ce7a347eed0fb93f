//! Commit creation.

use std::path::Path;

use tracing::debug;

use crate::commit::CommitMessage;
use crate::error::ProcessError;
use crate::process::{ProcessCommand, ProcessRunner};

/// Build `git commit --cleanup=verbatim -m <message>`.
///
/// The message travels as a single argument, never through a shell. Verbatim
/// cleanup keeps `#` lines and whitespace exactly as generated.
pub fn commit_command(message: &CommitMessage) -> ProcessCommand {
    ProcessCommand::new("git")
        .args(["commit", "--cleanup=verbatim", "-m"])
        .arg(message.as_str())
}

/// Create one commit from the current index.
pub async fn apply_commit<R>(
    runner: &R,
    cwd: &Path,
    message: &CommitMessage,
) -> Result<(), ProcessError>
where
    R: ProcessRunner + ?Sized,
{
    let output = runner.run(&commit_command(message), cwd).await?;
    debug!(output = %output, "Created commit");
    Ok(())
}
