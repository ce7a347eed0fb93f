//! AI-generated commit messages for staged changes.

pub mod message;
pub mod prompt;
pub mod workflow;

pub use message::CommitMessage;
pub use prompt::{INSTRUCTION, PromptOptions, build_prompt};
pub use workflow::{CommitMode, CommitOutcome, CommitRequest, CommitWorkflow, Stage};
