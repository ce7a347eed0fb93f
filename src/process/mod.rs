//! External command execution.

pub mod runner;

pub use runner::{ProcessCommand, ProcessRunner, SystemRunner};

#[cfg(test)]
pub use runner::MockProcessRunner;
