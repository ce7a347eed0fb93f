//! Prompt construction for AI-generated commit messages.

use crate::git::ChangeSet;

/// Fixed instruction placed ahead of the staged change summary.
pub const INSTRUCTION: &str =
    "Generate a simple and clear commit message for the following changes:";

/// Optional hints supplied by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptOptions {
    pub keywords: Vec<String>,
    pub subject: Option<String>,
}

/// Build the LLM prompt for generating a commit message.
///
/// Keywords and subject become labeled single-line fields ahead of the
/// instruction and are left out entirely when blank. The change summary is
/// appended as-is: the request body is JSON, so multi-line text is fine there.
pub fn build_prompt(changes: &ChangeSet, options: &PromptOptions) -> String {
    let mut prompt = String::new();

    let keywords: Vec<String> = options
        .keywords
        .iter()
        .map(|k| single_line(k))
        .filter(|k| !k.is_empty())
        .collect();
    if !keywords.is_empty() {
        prompt.push_str("Keywords: ");
        prompt.push_str(&keywords.join(", "));
        prompt.push('\n');
    }

    if let Some(subject) = options
        .subject
        .as_deref()
        .map(single_line)
        .filter(|s| !s.is_empty())
    {
        prompt.push_str("Subject: ");
        prompt.push_str(&subject);
        prompt.push('\n');
    }

    prompt.push_str(INSTRUCTION);
    prompt.push('\n');
    prompt.push_str(changes.as_str());

    prompt
}

/// Collapse line breaks so a labeled field cannot spill onto new lines.
fn single_line(text: &str) -> String {
    text.split(['\r', '\n'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
