//! Completion client for the hosted language model.

pub mod client;
pub mod openai;

pub use client::CompletionClient;
pub use openai::OpenAiClient;

#[cfg(test)]
pub use client::MockCompletionClient;
