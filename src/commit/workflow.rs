//! Commit workflow: staged changes in, generated commit out.
//!
//! Sequences change collection, prompt construction, completion and commit
//! for one invocation. Every external failure ends the run as
//! [`CommitOutcome::Failed`]; nothing is retried. The commit is the only
//! durable side effect and happens only after every earlier step succeeded.

use std::fmt;
use std::path::PathBuf;

use tracing::{debug, error};

use crate::commit::message::CommitMessage;
use crate::commit::prompt::{PromptOptions, build_prompt};
use crate::credential::Credential;
use crate::error::WorkflowError;
use crate::git::{apply_commit, collect_staged_changes};
use crate::llm::CompletionClient;
use crate::process::ProcessRunner;
use crate::workspace::WorkingDirectory;

/// Progress of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    CredentialAcquired,
    WorkspaceValidated,
    ChangesCollected,
    PromptBuilt,
    MessageGenerated,
    Committed,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Idle => "idle",
            Stage::CredentialAcquired => "credential acquired",
            Stage::WorkspaceValidated => "workspace validated",
            Stage::ChangesCollected => "changes collected",
            Stage::PromptBuilt => "prompt built",
            Stage::MessageGenerated => "message generated",
            Stage::Committed => "committed",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether to commit the generated message or only return it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommitMode {
    #[default]
    Apply,
    Preview,
}

/// Inputs for one run, supplied by the caller.
#[derive(Debug, Clone, Default)]
pub struct CommitRequest {
    pub credential: Option<Credential>,
    pub workspace: Option<PathBuf>,
    pub options: PromptOptions,
    pub mode: CommitMode,
}

/// Terminal state of one run.
#[derive(Debug)]
pub enum CommitOutcome {
    Committed(CommitMessage),
    /// Message generated in [`CommitMode::Preview`]; nothing was committed.
    Previewed(CommitMessage),
    NoCredential,
    NoWorkspace,
    NoStagedChanges,
    /// `stage` is the last stage reached before the failing step.
    Failed {
        stage: Stage,
        error: WorkflowError,
    },
}

impl CommitOutcome {
    fn failed(stage: Stage, error: impl Into<WorkflowError>) -> Self {
        CommitOutcome::Failed {
            stage,
            error: error.into(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, CommitOutcome::Failed { .. })
    }

    /// The generated message, if the run got that far.
    pub fn message(&self) -> Option<&CommitMessage> {
        match self {
            CommitOutcome::Committed(m) | CommitOutcome::Previewed(m) => Some(m),
            _ => None,
        }
    }

    /// Human-readable failure reason.
    pub fn reason(&self) -> Option<String> {
        match self {
            CommitOutcome::Failed { error, .. } => Some(error.to_string()),
            _ => None,
        }
    }

    /// Text to show the user for this outcome.
    pub fn summary(&self) -> String {
        match self {
            CommitOutcome::Committed(m) => format!("Committed: {}", m.subject()),
            CommitOutcome::Previewed(m) => m.to_string(),
            CommitOutcome::NoCredential => {
                "An API key is required to generate commit messages.".to_string()
            }
            CommitOutcome::NoWorkspace => {
                "You need to open a workspace before generating commit messages.".to_string()
            }
            CommitOutcome::NoStagedChanges => "No staged files found for committing.".to_string(),
            CommitOutcome::Failed { error, .. } => {
                format!("Error generating commit message: {error}")
            }
        }
    }
}

/// Runs the commit workflow against injected collaborators.
///
/// Holds only shared references, so independent runs may share one instance.
pub struct CommitWorkflow<'a, R: ?Sized, C: ?Sized> {
    runner: &'a R,
    client: &'a C,
}

impl<'a, R, C> CommitWorkflow<'a, R, C>
where
    R: ProcessRunner + ?Sized,
    C: CompletionClient + ?Sized,
{
    pub fn new(runner: &'a R, client: &'a C) -> Self {
        Self { runner, client }
    }

    /// Run once and report how it ended.
    pub async fn run(&self, request: CommitRequest) -> CommitOutcome {
        let outcome = self.execute(request).await;

        match &outcome {
            CommitOutcome::Failed { stage, error } => {
                error!(stage = %stage, error = %error, "Commit workflow failed");
            }
            other => debug!(outcome = ?other, "Commit workflow finished"),
        }

        outcome
    }

    async fn execute(&self, request: CommitRequest) -> CommitOutcome {
        let CommitRequest {
            credential,
            workspace,
            options,
            mode,
        } = request;

        let Some(credential) = credential else {
            return CommitOutcome::NoCredential;
        };
        enter(Stage::CredentialAcquired);

        let Some(workspace) = workspace.as_deref().and_then(WorkingDirectory::resolve) else {
            return CommitOutcome::NoWorkspace;
        };
        enter(Stage::WorkspaceValidated);

        let changes = match collect_staged_changes(self.runner, workspace.path()).await {
            Ok(changes) => changes,
            Err(e) => return CommitOutcome::failed(Stage::WorkspaceValidated, WorkflowError::Collect(e)),
        };
        if changes.is_empty() {
            return CommitOutcome::NoStagedChanges;
        }
        enter(Stage::ChangesCollected);

        let prompt = build_prompt(&changes, &options);
        enter(Stage::PromptBuilt);

        let raw = match self.client.complete(&prompt, &credential).await {
            Ok(text) => text,
            Err(e) => return CommitOutcome::failed(Stage::PromptBuilt, e),
        };
        let message = match CommitMessage::parse(&raw) {
            Ok(message) => message,
            Err(e) => return CommitOutcome::failed(Stage::PromptBuilt, e),
        };
        enter(Stage::MessageGenerated);

        if mode == CommitMode::Preview {
            return CommitOutcome::Previewed(message);
        }

        if let Err(e) = apply_commit(self.runner, workspace.path(), &message).await {
            return CommitOutcome::failed(Stage::MessageGenerated, WorkflowError::Commit(e));
        }
        enter(Stage::Committed);

        CommitOutcome::Committed(message)
    }
}

fn enter(stage: Stage) {
    debug!(stage = %stage, "Commit workflow transition");
}
