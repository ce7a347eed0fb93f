//! Git operations through the system `git` binary.

pub mod apply;
pub mod staged;

pub use apply::{apply_commit, commit_command};
pub use staged::{ChangeSet, collect_staged_changes, staged_diff_command};
