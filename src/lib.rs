//! commitgen - A CLI tool that writes commit messages for staged changes.
//!
//! # Overview
//!
//! commitgen reads the staged change summary from git, asks a hosted
//! chat-completion model for a commit message, and commits with it. The
//! language model client and the process runner are injected, so the whole
//! flow can run against fakes.

pub mod commit;
pub mod config;
pub mod credential;
pub mod error;
pub mod git;
pub mod llm;
pub mod process;
pub mod workspace;

// Re-export commonly used types
pub use commit::{CommitMessage, CommitMode, CommitOutcome, CommitRequest, CommitWorkflow, PromptOptions};
pub use credential::Credential;
pub use error::{CompletionError, MessageError, ProcessError, WorkflowError};
pub use git::ChangeSet;
pub use llm::{CompletionClient, OpenAiClient};
pub use process::{ProcessCommand, ProcessRunner, SystemRunner};
pub use workspace::WorkingDirectory;
